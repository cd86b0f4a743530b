//! Body row extraction, mirroring the header field for field.

use crate::config::TableConfig;
use crate::header::header_of;
use crate::record::Record;
use crate::schema::Schema;
use crate::stringify::stringify;

/// Produce the cells of one record.
///
/// Walks `schema` exactly as [`header_of`] does, so cell `i` always belongs
/// to header column `i`.
pub fn extract_row(schema: &Schema, record: &dyn Record, config: &TableConfig) -> Vec<String> {
    let mut row = Vec::with_capacity(schema.len());
    push_cells(schema, record, config, &mut row);
    row
}

/// Produce one row per record, in order.
pub fn extract_rows(
    schema: &Schema,
    records: Vec<&dyn Record>,
    config: &TableConfig,
) -> Vec<Vec<String>> {
    records
        .into_iter()
        .map(|record| extract_row(schema, record, config))
        .collect()
}

fn push_cells(schema: &Schema, record: &dyn Record, config: &TableConfig, row: &mut Vec<String>) {
    let values = record.values();
    debug_assert_eq!(
        values.len(),
        schema.len(),
        "record values of {} do not match its schema",
        schema.type_name
    );

    for (field, value) in schema.fields.iter().zip(values.iter()) {
        if field.resolve().skip {
            continue;
        }
        if config.inline.contains(field.type_id) {
            let Some(nested) = field.nested_schema() else {
                continue;
            };
            match value.record() {
                Some(inner) => push_cells(&nested, inner, config, row),
                None => {
                    // Keep alignment with the header when the value cannot be walked.
                    let width = header_of(&nested, &config.inline).len();
                    row.resize(row.len() + width, String::new());
                }
            }
            continue;
        }
        row.push(stringify(value, &config.specializations));
    }
}
