//! CSV output.

use std::io;

use super::Render;
use crate::table::TableGrid;

/// Writes header, body rows and footer as CSV records.
///
/// Empty header and footer rows are left out. Rows may differ in length.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvRenderer;

impl Render for CsvRenderer {
    fn render(&self, grid: &TableGrid, out: &mut dyn io::Write) -> io::Result<()> {
        let mut writer = ::csv::WriterBuilder::new().flexible(true).from_writer(out);
        if !grid.header.is_empty() {
            writer.write_record(&grid.header)?;
        }
        for row in &grid.body {
            writer.write_record(row)?;
        }
        if !grid.footer.is_empty() {
            writer.write_record(&grid.footer)?;
        }
        writer.flush()
    }
}
