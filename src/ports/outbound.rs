//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, JournalEntry};
use std::path::PathBuf;

/// How a console message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Info,
    Success,
    Warning,
    Error,
}

/// Terminal prompt/response channel. Line-oriented; blocks until a line is entered.
#[async_trait::async_trait]
pub trait ConsolePort: Send + Sync {
    /// Show `prompt` and return the raw line the user typed.
    ///
    /// Returns `DomainError::InputClosed` at end-of-input or on interrupt.
    async fn ask(&self, prompt: &str) -> Result<String, DomainError>;

    /// Print a message. Display failures are not reported.
    async fn say(&self, tone: Tone, text: &str);
}

/// Transcript port. Append-only per-user journal.
#[async_trait::async_trait]
pub trait TranscriptPort: Send + Sync {
    /// Append one entry to the user's transcript. Returns where it was written.
    async fn append_entry(&self, user: &str, entry: &JournalEntry) -> Result<PathBuf, DomainError>;

    /// Full transcript text, or `None` if nothing has been saved for this user yet.
    async fn read_entries(&self, user: &str) -> Result<Option<String>, DomainError>;
}
