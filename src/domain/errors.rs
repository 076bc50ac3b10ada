//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Transcript file could not be created, appended or read.
    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("Console error: {0}")]
    Console(String),

    /// The input channel reached end-of-input or the user interrupted a prompt.
    #[error("Input closed")]
    InputClosed,
}
