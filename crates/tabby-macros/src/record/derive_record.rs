//! Implementation of the `#[derive(Record)]` macro.
//!
//! The macro emits three impls for a struct with named fields:
//!
//! - `Record`: the field schema (declaration order, names, `tab` annotations,
//!   type identities, nested schemas) and per-field value accessors;
//! - `Describe`: the type-level shape, always `Shape::Record`;
//! - `Tabulate`: the struct as a one-row table input, with the capability
//!   hooks requested by the container attribute.
//!
//! Whether a field type is itself a record, marshals itself to text, or is a
//! scalar is settled at compile time through the detectors in
//! `tabby::__private`, so the macro never needs to know about field types.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, GenericParam, Result};

use super::attrs::{parse_container_attrs, parse_field_tag, ContainerAttr};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(mut input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let container_attrs = parse_container_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut field_defs: Vec<TokenStream> = Vec::new();
    let mut field_values: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        let field_name_str = field_name.to_string();
        let field_name_str = field_name_str.trim_start_matches("r#");
        let field_ty = &field.ty;

        let tag_tokens = match parse_field_tag(&field.attrs)? {
            Some(tag) => quote! { ::core::option::Option::Some(#tag) },
            None => quote! { ::core::option::Option::<&'static str>::None },
        };

        field_defs.push(quote! {
            ::tabby::FieldDef::of::<#field_ty>(#field_name_str)
                .with_tag(#tag_tokens)
                .with_nested((&&::tabby::__private::DetectType::<#field_ty>::new()).nested_schema())
        });

        field_values.push(quote! {
            {
                let value = &self.#field_name;
                ::tabby::FieldValue::from_parts(
                    value,
                    (&&::tabby::__private::Detect(value)).text_capability(),
                    (&&::tabby::__private::Detect(value)).scalar_capability(),
                    (&&::tabby::__private::Detect(value)).record_capability(),
                )
            }
        });
    }

    // Record requires Any, so every type parameter must be 'static.
    let type_params: Vec<_> = input
        .generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            _ => None,
        })
        .collect();
    {
        let where_clause = input.generics.make_where_clause();
        for ident in &type_params {
            where_clause
                .predicates
                .push(syn::parse_quote! { #ident: 'static });
        }
    }
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let hooks = capability_hooks(&container_attrs);

    let expanded = quote! {
        impl #impl_generics ::tabby::Record for #struct_name #ty_generics #where_clause {
            fn schema() -> ::tabby::Schema {
                #[allow(unused_imports)]
                use ::tabby::__private::detectors::*;
                ::tabby::Schema::of::<Self>(::std::vec![
                    #(#field_defs),*
                ])
            }

            fn values(&self) -> ::std::vec::Vec<::tabby::FieldValue<'_>> {
                #[allow(unused_imports)]
                use ::tabby::__private::detectors::*;
                ::std::vec![
                    #(#field_values),*
                ]
            }
        }

        impl #impl_generics ::tabby::Describe for #struct_name #ty_generics #where_clause {
            fn describe() -> ::tabby::Shape {
                ::tabby::Shape::Record(<Self as ::tabby::Record>::schema())
            }
        }

        impl #impl_generics ::tabby::Tabulate for #struct_name #ty_generics #where_clause {
            fn rows(&self) -> ::std::vec::Vec<&dyn ::tabby::Record> {
                ::std::vec![self as &dyn ::tabby::Record]
            }

            #hooks
        }
    };

    Ok(expanded)
}

/// Generate the `Tabulate` capability hooks a container opted into.
///
/// Each flagged capability answers `Some(self)`, which only compiles when the
/// type really implements the matching trait.
pub fn capability_hooks(attrs: &ContainerAttr) -> TokenStream {
    let header = attrs.header.then(|| {
        quote! {
            fn header_capability(&self) -> ::core::option::Option<&dyn ::tabby::TabHeader> {
                ::core::option::Option::Some(self)
            }
        }
    });
    let body = attrs.body.then(|| {
        quote! {
            fn body_capability(&self) -> ::core::option::Option<&dyn ::tabby::TabBody> {
                ::core::option::Option::Some(self)
            }
        }
    });
    let footer = attrs.footer.then(|| {
        quote! {
            fn footer_capability(&self) -> ::core::option::Option<&dyn ::tabby::TabFooter> {
                ::core::option::Option::Some(self)
            }
        }
    });

    quote! {
        #header
        #body
        #footer
    }
}
