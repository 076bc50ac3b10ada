//! In-memory port implementations for use-case tests.

use crate::domain::{DomainError, JournalEntry};
use crate::ports::{ConsolePort, Tone, TranscriptPort};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

/// Replays scripted answers; reports `InputClosed` once the script runs out.
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    output: Mutex<Vec<(Tone, String)>>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: Mutex::new(inputs.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Everything printed, joined with newlines.
    pub fn transcript(&self) -> String {
        self.output
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn said_with(&self, tone: Tone, needle: &str) -> bool {
        self.output
            .lock()
            .unwrap()
            .iter()
            .any(|(t, text)| *t == tone && text.contains(needle))
    }
}

#[async_trait::async_trait]
impl ConsolePort for ScriptedConsole {
    async fn ask(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.inputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(DomainError::InputClosed)
    }

    async fn say(&self, tone: Tone, text: &str) {
        self.output.lock().unwrap().push((tone, text.to_string()));
    }
}

/// Keeps appended entries in memory, per user.
#[derive(Default)]
pub struct MemoryTranscript {
    entries: Mutex<Vec<(String, JournalEntry)>>,
}

impl MemoryTranscript {
    pub fn entries(&self) -> Vec<(String, JournalEntry)> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptPort for MemoryTranscript {
    async fn append_entry(&self, user: &str, entry: &JournalEntry) -> Result<PathBuf, DomainError> {
        self.entries
            .lock()
            .unwrap()
            .push((user.to_string(), entry.clone()));
        Ok(PathBuf::from(format!("memory://{user}")))
    }

    async fn read_entries(&self, user: &str) -> Result<Option<String>, DomainError> {
        let entries = self.entries.lock().unwrap();
        let text: Vec<String> = entries
            .iter()
            .filter(|(owner, _)| owner == user)
            .map(|(_, entry)| format!("{} {}", entry.kind.label(), entry.date))
            .collect();
        Ok((!text.is_empty()).then(|| text.join("\n")))
    }
}

/// Rejects every write, as an unwritable journal directory would.
#[derive(Default)]
pub struct FailingTranscript;

#[async_trait::async_trait]
impl TranscriptPort for FailingTranscript {
    async fn append_entry(
        &self,
        _user: &str,
        _entry: &JournalEntry,
    ) -> Result<PathBuf, DomainError> {
        Err(DomainError::Transcript("disk full".to_string()))
    }

    async fn read_entries(&self, _user: &str) -> Result<Option<String>, DomainError> {
        Ok(None)
    }
}
