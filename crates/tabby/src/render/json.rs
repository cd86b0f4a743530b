//! JSON output.

use std::io;

use super::Render;
use crate::table::TableGrid;

/// Writes the grid as a JSON object with `header`, `body` and `footer`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Render for JsonRenderer {
    fn render(&self, grid: &TableGrid, out: &mut dyn io::Write) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, grid)?;
        } else {
            serde_json::to_writer(&mut *out, grid)?;
        }
        writeln!(out)
    }
}
