//! Infrastructure adapters. Implement outbound ports.
//!
//! Terminal UI and transcript files. Map errors to DomainError.

pub mod persistence;
pub mod ui;
