//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the session use case drives the console and the transcript.

pub mod outbound;

pub use outbound::{ConsolePort, Tone, TranscriptPort};
