//! Implementation of the `#[derive(Tabulate)]` macro.
//!
//! This macro turns a single-field wrapper (usually a collection newtype such
//! as `struct Ledger(Vec<Entry>)`) into a table input. Shape, rows and
//! absence are delegated to the wrapped field; capability hooks come from the
//! container attribute first and fall back to the wrapped field's own.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Index, Member, Result};

use super::attrs::parse_container_attrs;

/// Main implementation of the Tabulate derive macro.
pub fn tabulate_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let container_attrs = parse_container_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(Error::new(
                input.span(),
                "Tabulate can only be derived for structs",
            ))
        }
    };

    if fields.len() != 1 {
        return Err(Error::new(
            input.span(),
            "Tabulate can only be derived for structs with exactly one field",
        ));
    }

    let field = fields
        .iter()
        .next()
        .ok_or_else(|| Error::new(input.span(), "expected one field"))?;
    let inner_ty = &field.ty;
    let member = match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(0)),
    };

    let header = if container_attrs.header {
        quote! { ::core::option::Option::Some(self) }
    } else {
        quote! { ::tabby::Tabulate::header_capability(&self.#member) }
    };
    let body = if container_attrs.body {
        quote! { ::core::option::Option::Some(self) }
    } else {
        quote! { ::tabby::Tabulate::body_capability(&self.#member) }
    };
    let footer = if container_attrs.footer {
        quote! { ::core::option::Option::Some(self) }
    } else {
        quote! { ::tabby::Tabulate::footer_capability(&self.#member) }
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::tabby::Describe for #struct_name #ty_generics #where_clause {
            fn describe() -> ::tabby::Shape {
                <#inner_ty as ::tabby::Describe>::describe()
            }
        }

        impl #impl_generics ::tabby::Tabulate for #struct_name #ty_generics #where_clause {
            fn rows(&self) -> ::std::vec::Vec<&dyn ::tabby::Record> {
                ::tabby::Tabulate::rows(&self.#member)
            }

            fn is_absent(&self) -> bool {
                ::tabby::Tabulate::is_absent(&self.#member)
            }

            fn header_capability(&self) -> ::core::option::Option<&dyn ::tabby::TabHeader> {
                #header
            }

            fn body_capability(&self) -> ::core::option::Option<&dyn ::tabby::TabBody> {
                #body
            }

            fn footer_capability(&self) -> ::core::option::Option<&dyn ::tabby::TabFooter> {
                #footer
            }
        }
    };

    Ok(expanded)
}
