//! Header derivation from a record schema.

use crate::config::InlineSet;
use crate::error::Result;
use crate::schema::{Schema, Shape};

/// Build the header for an input shape.
///
/// A sequence shape is looked through to its element. Anything that is not
/// a record, or a sequence of records, is rejected with `NotARecord`.
pub fn build_header(shape: &Shape, inline: &InlineSet) -> Result<Vec<String>> {
    let schema = shape.record_schema()?;
    Ok(header_of(schema, inline))
}

/// Column titles of a record schema, in field order.
///
/// Skipped fields contribute nothing. A field whose type is in `inline`
/// contributes the columns of its own schema instead of one column; an
/// inlined type that is not a record contributes nothing.
pub fn header_of(schema: &Schema, inline: &InlineSet) -> Vec<String> {
    let mut header = Vec::with_capacity(schema.len());
    push_columns(schema, inline, &mut header);
    header
}

fn push_columns(schema: &Schema, inline: &InlineSet, header: &mut Vec<String>) {
    for field in &schema.fields {
        let column = field.resolve();
        if column.skip {
            continue;
        }
        if inline.contains(field.type_id) {
            if let Some(nested) = field.nested_schema() {
                push_columns(&nested, inline, header);
            }
            continue;
        }
        header.push(column.display.to_string());
    }
}
