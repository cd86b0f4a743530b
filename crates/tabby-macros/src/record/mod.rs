//! Derive macros that describe records as table columns.
//!
//! - [`Record`] - Generate the field schema and value accessors of a struct
//! - [`Tabulate`] - Turn a single-field wrapper into a table input
//!
//! # Example
//!
//! ```ignore
//! use tabby::{Record, Tabulate, TabFooter};
//!
//! #[derive(Record)]
//! struct Entry {
//!     #[tab("amount")]
//!     cents: i64,
//!     #[tab("-")]
//!     memo: String,
//! }
//!
//! #[derive(Tabulate)]
//! #[tab(footer)]
//! struct Ledger(Vec<Entry>);
//! ```
//!
//! [`Record`]: crate::Record
//! [`Tabulate`]: crate::Tabulate

mod attrs;
mod derive_record;
mod derive_tabulate;

pub use derive_record::record_derive_impl;
pub use derive_tabulate::tabulate_derive_impl;
