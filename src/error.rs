use std::path::PathBuf;

use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

/// Failures surfaced to the user. None of them is fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A field value violates its type constraint during an edit.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// The CSV document could not be read or parsed; nothing was imported.
    #[error("CSV parsing error: {message}")]
    ImportParse { message: String },

    #[error("another import is still running")]
    ImportInProgress,

    #[error("import #{ticket} is no longer pending")]
    StaleImport { ticket: u64 },

    /// Encoding or writing the export failed; no file was produced.
    #[error("failed to export {}: {message}", .path.display())]
    Export { path: PathBuf, message: String },
}

impl GridError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GridError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn import_parse(err: &anyhow::Error) -> Self {
        GridError::ImportParse {
            message: format!("{err:#}"),
        }
    }
}
