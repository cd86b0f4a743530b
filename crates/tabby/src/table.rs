//! Table assembly: input plus configuration in, [`TableGrid`] out.

use std::any::Any;
use std::io;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::capability::{body_override, footer_override, header_override};
use crate::config::TableConfig;
use crate::error::{BoxError, Result, TableError};
use crate::header::build_header;
use crate::input::Tabulate;
use crate::render::{GridRenderer, Render};
use crate::row::extract_rows;

/// A header, body rows and a footer, all as display strings.
///
/// The footer is empty when the input has no footer capability. Override
/// capabilities are trusted, so rows of an overridden table may differ in
/// length from the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGrid {
    pub header: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub footer: Vec<String>,
}

impl TableGrid {
    /// Widest row among header, body and footer.
    pub fn column_count(&self) -> usize {
        self.body
            .iter()
            .map(Vec::len)
            .chain([self.header.len(), self.footer.len()])
            .max()
            .unwrap_or(0)
    }

    /// Whether every body row has exactly as many cells as the header.
    pub fn is_consistent(&self) -> bool {
        self.body.iter().all(|row| row.len() == self.header.len())
    }
}

/// Build the grid for `data`.
///
/// Fails with [`TableError::EmptyInput`] for absent input and
/// [`TableError::NotARecord`] when the input is not a record or a sequence of
/// records. Header, body and footer capabilities replace the derived parts;
/// their failures are returned as [`TableError::Capability`].
pub fn build<T: Tabulate + ?Sized>(data: &T, config: &TableConfig) -> Result<TableGrid> {
    if data.is_absent() {
        return Err(TableError::EmptyInput);
    }
    let shape = T::describe();

    let header = match data.header_capability() {
        Some(cap) => header_override(cap)?,
        None => build_header(&shape, &config.inline)?,
    };

    let body = match data.body_capability() {
        Some(cap) => body_override(cap)?,
        None => extract_rows(shape.record_schema()?, data.rows(), config),
    };

    let footer = footer_override(data.footer_capability())?;

    trace!(
        input = %shape.type_name(),
        columns = header.len(),
        rows = body.len(),
        footer = !footer.is_empty(),
        "assembled table"
    );

    Ok(TableGrid {
        header,
        body,
        footer,
    })
}

/// Fluent front end over [`build`] and the renderers.
///
/// ```rust
/// use tabby::{Record, Table};
///
/// #[derive(Record)]
/// struct Host {
///     name: String,
///     port: i64,
/// }
///
/// let hosts = [Host { name: "db".into(), port: 5432 }];
/// let mut out = Vec::new();
/// Table::new(&hosts).print_to(&mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("| db   | 5432 |"));
/// ```
pub struct Table<'a, T: ?Sized> {
    data: &'a T,
    config: TableConfig,
}

impl<'a, T: Tabulate + ?Sized> Table<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Table {
            data,
            config: TableConfig::default(),
        }
    }

    /// Inline fields of record type `U`.
    pub fn inline<U: ?Sized + 'static>(mut self) -> Self {
        self.config = self.config.inline::<U>();
        self
    }

    /// Format values of type `U` with `format`.
    pub fn specialize<U, F, E>(mut self, format: F) -> Self
    where
        U: Any,
        F: Fn(&U) -> std::result::Result<String, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.config = self.config.specialize::<U, F, E>(format);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(&self) -> Result<TableGrid> {
        build(self.data, &self.config)
    }

    /// Render with an ASCII-bordered grid.
    pub fn print_to(&self, out: &mut dyn io::Write) -> Result<()> {
        self.render_to(out, &GridRenderer::default())
    }

    pub fn render_to(&self, out: &mut dyn io::Write, renderer: &dyn Render) -> Result<()> {
        let grid = self.build()?;
        renderer.render(&grid, out)?;
        Ok(())
    }
}
