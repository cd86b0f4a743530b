//! Proc macros for tabby.
//!
//! This crate generates the compile-time field tables that tabby walks when
//! it turns records into header, body and footer rows.
//!
//! # Derive Macros
//!
//! - [`Record`] - Generate the schema and value accessors of a struct
//! - [`Tabulate`] - Make a single-field wrapper usable as a table input
//!
//! Both macros read the `tab` attribute. For working examples, see
//! `tabby/tests/derive.rs` and `tabby/tests/table.rs`.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `Record`, `Describe` and `Tabulate` for a struct with named fields.
///
/// Columns follow field declaration order.
///
/// # Field Attributes
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `#[tab("label")]` / `#[tab = "label"]` | Column is titled `label` instead of the field name |
/// | `#[tab("-")]` | Field is excluded from header and body |
///
/// # Container Attributes
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `#[tab(header)]` | The type implements `TabHeader`, which replaces the derived header |
/// | `#[tab(body)]` | The type implements `TabBody`, which replaces the derived body |
/// | `#[tab(footer)]` | The type implements `TabFooter`, which supplies the footer |
///
/// # Field Types
///
/// Field types must be `'static`. Each field is classified at compile time:
/// records can be inlined, `TextMarshal` types format themselves, signed
/// integers, floats and strings use scalar formatting, and anything else
/// renders as an empty cell unless a specialization is registered for it.
///
/// # Example
///
/// ```ignore
/// use tabby::Record;
///
/// #[derive(Record)]
/// struct Task {
///     #[tab("ID")]
///     id: i64,
///     title: String,
///     #[tab("-")]
///     internal: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(tab))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives `Describe` and `Tabulate` for a single-field wrapper.
///
/// The wrapper forwards its shape and rows to the wrapped field, so a
/// newtype over `Vec<T>` tabulates exactly like the vector. Use the
/// container attribute to attach capabilities to the wrapper itself.
///
/// # Container Attributes
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `#[tab(header)]` | The wrapper implements `TabHeader` |
/// | `#[tab(body)]` | The wrapper implements `TabBody` |
/// | `#[tab(footer)]` | The wrapper implements `TabFooter` |
///
/// # Example
///
/// ```ignore
/// use tabby::{Record, TabFooter, Tabulate};
///
/// #[derive(Record)]
/// struct Entry { amount: i64 }
///
/// #[derive(Tabulate)]
/// #[tab(footer)]
/// struct Ledger(Vec<Entry>);
///
/// impl TabFooter for Ledger {
///     fn footer(&self) -> Result<Vec<String>, tabby::BoxError> {
///         let total: i64 = self.0.iter().map(|e| e.amount).sum();
///         Ok(vec![total.to_string()])
///     }
/// }
/// ```
#[proc_macro_derive(Tabulate, attributes(tab))]
pub fn tabulate_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::tabulate_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
