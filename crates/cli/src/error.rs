//! Console error types.

use std::path::PathBuf;

use domain::DomainError;
use thiserror::Error;

/// Errors that end a console session.
///
/// Bad answers to prompts are not errors; they are re-asked.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The seed catalog could not be parsed.
    #[error("Invalid room catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The seed catalog file could not be read.
    #[error("Cannot read room catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Domain rule violation outside the prompt loops.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input ended while a prompt was waiting for an answer.
    #[error("Input closed before the booking was complete")]
    InputClosed,
}
