//! Override capabilities for header, body and footer.
//!
//! A type that wants to control part of its table implements one of these
//! traits and exposes it through the matching `Tabulate::*_capability` hook
//! (the derives do that for `#[tab(header)]`, `#[tab(body)]` and
//! `#[tab(footer)]`). Their output is used verbatim.

use std::fmt;

use crate::error::{BoxError, Result, TableError};

/// Supplies the header row instead of the derived one.
pub trait TabHeader {
    fn header(&self) -> std::result::Result<Vec<String>, BoxError>;
}

/// Supplies the body rows instead of the derived ones.
pub trait TabBody {
    fn body(&self) -> std::result::Result<Vec<Vec<String>>, BoxError>;
}

/// Supplies the footer row. Without it the footer is empty.
pub trait TabFooter {
    fn footer(&self) -> std::result::Result<Vec<String>, BoxError>;
}

/// Which capability produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    Header,
    Body,
    Footer,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CapabilityKind::Header => "header",
            CapabilityKind::Body => "body",
            CapabilityKind::Footer => "footer",
        };
        f.write_str(name)
    }
}

fn capability_error(capability: CapabilityKind) -> impl FnOnce(BoxError) -> TableError {
    move |source| TableError::Capability { capability, source }
}

pub(crate) fn header_override(cap: &dyn TabHeader) -> Result<Vec<String>> {
    cap.header().map_err(capability_error(CapabilityKind::Header))
}

pub(crate) fn body_override(cap: &dyn TabBody) -> Result<Vec<Vec<String>>> {
    cap.body().map_err(capability_error(CapabilityKind::Body))
}

pub(crate) fn footer_override(cap: Option<&dyn TabFooter>) -> Result<Vec<String>> {
    match cap {
        Some(cap) => cap.footer().map_err(capability_error(CapabilityKind::Footer)),
        None => Ok(Vec::new()),
    }
}
