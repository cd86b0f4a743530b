//! Attribute parsing for the record derive macros.
//!
//! Two shapes share the `tab` key:
//!
//! - on a field, `#[tab("label")]` or `#[tab = "label"]` carries the raw
//!   annotation string (`"-"` excludes the field, anything else renames it);
//! - on the container, `#[tab(header, body, footer)]` lists the override
//!   capabilities the type implements.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, Lit, LitStr, Meta, Result, Token,
};

/// Container-level attributes from `#[tab(...)]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContainerAttr {
    /// The type implements `TabHeader`: `header`
    pub header: bool,
    /// The type implements `TabBody`: `body`
    pub body: bool,
    /// The type implements `TabFooter`: `footer`
    pub footer: bool,
}

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContainerAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("header") => attr.header = true,
                Meta::Path(p) if p.is_ident("body") => attr.body = true,
                Meta::Path(p) if p.is_ident("footer") => attr.footer = true,
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown tab container attribute: expected one of: header, body, footer",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Parse a string from an expression.
fn parse_string_expr(expr: &Expr) -> Result<String> {
    if let Expr::Lit(expr_lit) = expr {
        if let Lit::Str(lit_str) = &expr_lit.lit {
            return Ok(lit_str.value());
        }
    }
    Err(Error::new(expr.span(), "expected string literal"))
}

/// Extract the `#[tab(...)]` annotation string from a field's attributes.
///
/// Returns `None` when the field carries no `tab` attribute.
pub fn parse_field_tag(attrs: &[Attribute]) -> Result<Option<String>> {
    for attr in attrs {
        if !attr.path().is_ident("tab") {
            continue;
        }
        return match &attr.meta {
            Meta::NameValue(nv) => parse_string_expr(&nv.value).map(Some),
            Meta::List(list) => attr
                .parse_args::<LitStr>()
                .map(|lit| Some(lit.value()))
                .map_err(|_| {
                    Error::new(
                        list.tokens.span(),
                        "field tab attribute takes a single string: #[tab(\"label\")] or #[tab(\"-\")]",
                    )
                }),
            Meta::Path(p) => Err(Error::new(
                p.span(),
                "field tab attribute needs a value: #[tab(\"label\")] or #[tab(\"-\")]",
            )),
        };
    }
    Ok(None)
}

/// Extract `#[tab(...)]` capability flags from a struct's attributes.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttr> {
    for attr in attrs {
        if attr.path().is_ident("tab") {
            return attr.parse_args::<ContainerAttr>();
        }
    }
    Ok(ContainerAttr::default())
}
