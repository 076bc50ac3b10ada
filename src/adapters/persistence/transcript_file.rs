//! Implements TranscriptPort. One plain-text journal per user: {dir}/{name}_journal.txt.
//! Append-only writes; each entry is framed by fixed-width separator lines.

use crate::domain::{DomainError, JournalEntry};
use crate::ports::TranscriptPort;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Width of the `=` lines framing each entry header.
pub const SEPARATOR_WIDTH: usize = 64;

/// Suffix appended to the user's display name to form the file name.
pub const JOURNAL_SUFFIX: &str = "_journal.txt";

/// File name for a user. Path separators and control characters become `_`.
pub fn transcript_file_name(user: &str) -> String {
    let safe: String = user
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{safe}{JOURNAL_SUFFIX}")
}

/// Text appended for one entry, leading blank line included.
pub fn render_entry(entry: &JournalEntry) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n{separator}");
    let _ = writeln!(out, "Entry Type: {}", entry.kind.label());
    let _ = writeln!(out, "Date: {} | Time: {}", entry.date, entry.time);
    if let Some(initial) = &entry.initial_mood {
        let _ = writeln!(out, "Initial Mood: {}", initial.description);
    }
    if let Some(current) = &entry.current_mood {
        let _ = writeln!(out, "Current Mood: {}", current.description);
    }
    if let Some(cmp) = entry.mood_comparison() {
        let _ = writeln!(out, "Mood Change: {}", cmp.summary());
    }
    let _ = writeln!(out, "{separator}");
    for answer in &entry.answers {
        let _ = writeln!(out, "{}: {}", answer.label, answer.text);
    }
    out
}

/// File-system transcript store.
pub struct TranscriptFile {
    base_dir: PathBuf,
}

impl TranscriptFile {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn transcript_path(&self, user: &str) -> PathBuf {
        self.base_dir.join(transcript_file_name(user))
    }
}

#[async_trait::async_trait]
impl TranscriptPort for TranscriptFile {
    /// Opens in append mode, writes the entry, flushes, and closes the handle.
    async fn append_entry(&self, user: &str, entry: &JournalEntry) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| DomainError::Transcript(e.to_string()))?;
        let path = self.transcript_path(user);
        let text = render_entry(entry);
        {
            let mut f = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await
                .map_err(|e| DomainError::Transcript(format!("open {}: {}", path.display(), e)))?;
            f.write_all(text.as_bytes())
                .await
                .map_err(|e| DomainError::Transcript(format!("write {}: {}", path.display(), e)))?;
            f.flush()
                .await
                .map_err(|e| DomainError::Transcript(e.to_string()))?;
        }
        info!(
            path = %path.display(),
            kind = entry.kind.label(),
            answers = entry.answers.len(),
            "appended journal entry"
        );
        Ok(path)
    }

    async fn read_entries(&self, user: &str) -> Result<Option<String>, DomainError> {
        let path = self.transcript_path(user);
        match fs::read_to_string(&path).await {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Transcript(format!(
                "read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
