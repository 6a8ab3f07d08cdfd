//! Output handler traits and types

use crate::state::DomainResult;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers
///
/// An output handler receives the finished results of a run, in completion
/// order, and persists them.
pub trait OutputHandler {
    /// Writes all results, replacing any previous output
    ///
    /// # Arguments
    ///
    /// * `results` - Finished domain results
    fn write_results(&self, results: &[DomainResult]) -> OutputResult<()>;
}
