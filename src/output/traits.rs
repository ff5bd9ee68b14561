//! Output writer trait and errors

use crate::catalog::ProductRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for the finished catalog
///
/// Called exactly once per successful run, with the records in catalog order.
pub trait OutputWriter {
    /// Writes the complete catalog
    fn write(&self, records: &[ProductRecord]) -> OutputResult<()>;
}
