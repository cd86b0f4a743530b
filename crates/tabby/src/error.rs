//! Error types for table assembly.

use thiserror::Error;

use crate::capability::CapabilityKind;

/// Boxed error reported by capabilities, specializations and text marshaling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort building a table.
///
/// Only structural problems end up here. A single field that fails to
/// stringify degrades to an empty cell instead.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input value is absent (for example `None`).
    #[error("no data to tabulate")]
    EmptyInput,

    /// The input is neither a record nor a sequence of records.
    #[error("cannot tabulate `{type_name}`: expected a record or a sequence of records")]
    NotARecord { type_name: String },

    /// An override capability reported a failure.
    #[error("{capability} capability failed: {source}")]
    Capability {
        capability: CapabilityKind,
        #[source]
        source: BoxError,
    },

    /// Writing the rendered table failed.
    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
