//! Tabby - turn records into table grids.
//!
//! Tabby takes any record value, or a sequence of them, and produces a
//! [`TableGrid`]: a header row, body rows and an optional footer, all plain
//! strings. Drawing the grid is left to a [`Render`] implementation.
//!
//! # Quick Start
//!
//! ```rust
//! use tabby::{Record, TableConfig};
//!
//! #[derive(Record)]
//! struct Task {
//!     #[tab("ID")]
//!     id: i64,
//!     title: String,
//!     #[tab("-")]
//!     notes: String,
//! }
//!
//! let tasks = vec![
//!     Task { id: 1, title: "Write docs".into(), notes: String::new() },
//!     Task { id: 2, title: "Fix bug".into(), notes: String::new() },
//! ];
//!
//! let grid = tabby::build(&tasks, &TableConfig::default()).unwrap();
//! assert_eq!(grid.header, vec!["ID", "title"]);
//! assert_eq!(grid.body[1], vec!["2", "Fix bug"]);
//! ```
//!
//! # How cells are produced
//!
//! Each field of a record is either skipped (`#[tab("-")]`), expanded into
//! the columns of its own fields (its type is in the [`InlineSet`]), or
//! stringified. Stringification tries, in order:
//!
//! | Step | Source |
//! |------|--------|
//! | 1 | A function registered in [`Specializations`] for the exact type |
//! | 2 | The type's [`TextMarshal`] implementation |
//! | 3 | Scalar formatting: signed integers, floats with two decimals, strings |
//! | 4 | An empty string |
//!
//! Failures in steps 1 and 2 fall through to the next step.
//!
//! # Overrides
//!
//! A type can replace the derived header or body, or supply a footer, by
//! implementing [`TabHeader`], [`TabBody`] or [`TabFooter`] and listing the
//! capability in its container attribute: `#[tab(footer)]`.

extern crate self as tabby;

mod capability;
mod config;
mod detect;
mod error;
mod header;
mod input;
mod record;
mod row;
mod schema;
mod stringify;
mod table;

pub mod render;

pub use capability::{CapabilityKind, TabBody, TabFooter, TabHeader};
pub use config::{InlineSet, Specializations, TableConfig};
pub use error::{BoxError, Result, TableError};
pub use header::{build_header, header_of};
pub use input::Tabulate;
pub use record::{AsScalar, FieldValue, Record, Scalar, TextMarshal};
pub use render::{BorderStyle, CsvRenderer, GridRenderer, JsonRenderer, OutputFormat, Render};
pub use row::{extract_row, extract_rows};
pub use schema::{Column, Describe, FieldDef, Schema, Shape};
pub use stringify::stringify;
pub use table::{build, Table, TableGrid};

#[cfg(feature = "macros")]
pub use tabby_macros::{Record, Tabulate};

/// Support items for the derive macros. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::detect::{Detect, DetectType};

    /// Capability detectors, brought into scope by generated code.
    pub mod detectors {
        pub use crate::detect::{
            NestedFallback, NestedViaRecord, RecordFallback, RecordViaDerive, ScalarFallback,
            ScalarViaKind, TextFallback, TextViaMarshal,
        };
    }
}
