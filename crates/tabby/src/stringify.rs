//! Field value to cell text.

use tracing::debug;

use crate::config::Specializations;
use crate::record::{scalar_of, FieldValue};

/// Convert one field value to its cell text.
///
/// Never fails. The first applicable rule wins:
///
/// 1. a formatter registered for the value's exact type,
/// 2. the value's `TextMarshal` implementation,
/// 3. scalar formatting (`Scalar`'s `Display`), by static or runtime kind,
/// 4. the empty string.
///
/// A failing formatter or marshaler falls through to the next rule.
pub fn stringify(value: &FieldValue<'_>, registry: &Specializations) -> String {
    if let Some(result) = registry.apply(value.value()) {
        match result {
            Ok(text) => return text,
            Err(err) => debug!(
                type_name = value.type_name(),
                error = %err,
                "specialization failed, falling back"
            ),
        }
    }

    if let Some(marshal) = value.text() {
        match marshal.marshal_text() {
            Ok(text) => return text,
            Err(err) => debug!(
                type_name = value.type_name(),
                error = %err,
                "text marshaling failed, falling back"
            ),
        }
    }

    match value.scalar().or_else(|| scalar_of(value.value())) {
        Some(scalar) => scalar.to_string(),
        None => String::new(),
    }
}
