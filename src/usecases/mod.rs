//! Application use cases. Orchestrate domain logic via ports.

pub mod reflection;
pub mod self_check;
pub mod session_service;

#[cfg(test)]
pub(crate) mod testing;

pub use self_check::{SelfCheck, SelfCheckReport};
pub use session_service::{JournalSession, SessionOutcome, SessionState};
