//! Rendering collaborators.
//!
//! The core hands a finished [`TableGrid`] to a [`Render`] implementation and
//! takes no part in layout. Three renderers ship with the crate:
//!
//! | Renderer | Output |
//! |----------|--------|
//! | [`GridRenderer`] | Aligned text table with optional box-drawing borders |
//! | [`CsvRenderer`] | RFC 4180 CSV, header, body and footer as records |
//! | [`JsonRenderer`] | The grid serialized as a JSON object |

mod csv;
mod grid;
mod json;

use std::fmt;
use std::io;
use std::str::FromStr;

use thiserror::Error;

use crate::table::TableGrid;

pub use self::csv::CsvRenderer;
pub use self::grid::{BorderStyle, GridRenderer};
pub use self::json::JsonRenderer;

/// Writes a grid to an output stream.
pub trait Render {
    fn render(&self, grid: &TableGrid, out: &mut dyn io::Write) -> io::Result<()>;
}

/// A name that does not match any known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{name}`: expected one of {expected}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
    pub expected: &'static str,
}

/// Output formats selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Grid,
    Csv,
    Json,
}

impl OutputFormat {
    /// The default renderer for this format.
    pub fn renderer(self) -> Box<dyn Render> {
        match self {
            OutputFormat::Grid => Box::new(GridRenderer::default()),
            OutputFormat::Csv => Box::new(CsvRenderer),
            OutputFormat::Json => Box::new(JsonRenderer::default()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" | "table" => Ok(OutputFormat::Grid),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownName {
                kind: "output format",
                name: s.to_string(),
                expected: "grid, csv, json",
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Grid => "grid",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}
