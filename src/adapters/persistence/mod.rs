//! Persistence adapters. Plain-text transcript files.

pub mod transcript_file;

pub use transcript_file::TranscriptFile;
