//! Core domain layer. No I/O.
//!
//! Mood classification, the menu decision table and journal entries live here.

pub mod entities;
pub mod errors;
pub mod menu;
pub mod mood;

pub use entities::{Answer, EntryKind, JournalEntry, Question, SKIPPED};
pub use errors::DomainError;
pub use menu::{MenuAction, MenuRule, MenuRuleTable, RuleId};
pub use mood::{
    MoodChange, MoodClassifier, MoodComparison, MoodLevel, MoodRecord, MoodRejection,
    MoodStatistics, MoodTrend, RawMood, aggregate_statistics, compare_moods, render_mood_scale,
};
