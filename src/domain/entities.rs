//! Journal entry entities. Pure data; rendering to text lives in the transcript adapter.

use crate::domain::mood::{MoodComparison, MoodRecord, compare_moods};
use chrono::{DateTime, Local};

/// Placeholder recorded for questions left unanswered after a skip.
pub const SKIPPED: &str = "Skipped";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    DailyReflection,
    WeeklyCheckIn,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::DailyReflection => "Daily Reflection",
            EntryKind::WeeklyCheckIn => "Weekly Check-in",
        }
    }

    pub fn questions(self) -> &'static [Question] {
        match self {
            EntryKind::DailyReflection => DAILY_QUESTIONS,
            EntryKind::WeeklyCheckIn => WEEKLY_QUESTIONS,
        }
    }

    /// Prompt shown under each question.
    pub fn answer_prompt(self) -> &'static str {
        match self {
            EntryKind::DailyReflection => "Let me hear your thoughts:",
            EntryKind::WeeklyCheckIn => "Your response:",
        }
    }
}

/// A reflective question and the label its answer is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub label: &'static str,
}

pub const DAILY_QUESTIONS: &[Question] = &[
    Question {
        prompt: "What's a positive thing that happened today?",
        label: "Positive moment",
    },
    Question {
        prompt: "What made the day challenging, and how did you handle it?",
        label: "Challenge handled",
    },
    Question {
        prompt: "Did you connect with anyone today, how was that experience?",
        label: "Connections",
    },
    Question {
        prompt: "What did you learn about yourself today?",
        label: "Self-discovery",
    },
    Question {
        prompt: "Is there something that you are looking forward to tomorrow?",
        label: "Looking forward",
    },
    Question {
        prompt: "What would you do differently tomorrow?",
        label: "Do differently",
    },
    Question {
        prompt: "How are you feeling at this moment? (use 1-5 words)",
        label: "Current feelings",
    },
];

pub const WEEKLY_QUESTIONS: &[Question] = &[
    Question {
        prompt: "What do you feel was your biggest accomplishment this week?",
        label: "Biggest accomplishment",
    },
    Question {
        prompt: "What do you feel was the most challenging this week?",
        label: "Most challenging",
    },
    Question {
        prompt: "What support do you need right now?",
        label: "Support needed",
    },
    Question {
        prompt: "What is one goal you would like to set for next week?",
        label: "Goal for next week",
    },
    Question {
        prompt: "How have you grown or changed this week?",
        label: "Growth",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub label: &'static str,
    pub text: String,
}

impl Answer {
    pub fn new(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }

    pub fn skipped(label: &'static str) -> Self {
        Self::new(label, SKIPPED)
    }

    pub fn is_skipped(&self) -> bool {
        self.text == SKIPPED
    }
}

/// One finished journal entry, ready to be appended to the transcript.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub kind: EntryKind,
    /// `MM/DD/YYYY`
    pub date: String,
    /// `HH:MM AM/PM`
    pub time: String,
    pub initial_mood: Option<MoodRecord>,
    pub current_mood: Option<MoodRecord>,
    pub answers: Vec<Answer>,
}

impl JournalEntry {
    pub fn new(kind: EntryKind, at: DateTime<Local>) -> Self {
        Self {
            kind,
            date: at.format("%m/%d/%Y").to_string(),
            time: at.format("%I:%M %p").to_string(),
            initial_mood: None,
            current_mood: None,
            answers: Vec::new(),
        }
    }

    /// Present only when both moods were recorded.
    pub fn mood_comparison(&self) -> Option<MoodComparison> {
        match (&self.initial_mood, &self.current_mood) {
            (Some(initial), Some(current)) => Some(compare_moods(initial, current)),
            _ => None,
        }
    }
}
