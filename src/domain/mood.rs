//! Mood scale, classifier and the pure helpers built on top of it.
//!
//! The synonym table is built once at startup and shared. Classification never
//! panics: input that is not on the scale comes back as a [`MoodRejection`].

use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Canonical mood level, 1 (critical) to 5 (indifferent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoodLevel {
    Critical = 1,
    Low = 2,
    Mid = 3,
    High = 4,
    Indifferent = 5,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Critical,
        MoodLevel::Low,
        MoodLevel::Mid,
        MoodLevel::High,
        MoodLevel::Indifferent,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::Critical => "Critical",
            MoodLevel::Low => "Low",
            MoodLevel::Mid => "Mid",
            MoodLevel::High => "High",
            MoodLevel::Indifferent => "Indifferent",
        }
    }

    /// Description written to the transcript. Tied 1:1 to the level.
    pub fn description(self) -> &'static str {
        match self {
            MoodLevel::Critical => "Critical - Distress, overwhelm, crisis indicators",
            MoodLevel::Low => "Low - Struggling, stressed, emotionally heavy",
            MoodLevel::Mid => "Mid - Okay, some good/some strain",
            MoodLevel::High => "High - Thriving, motivated, doing well",
            MoodLevel::Indifferent => "Indifferent - Neutral",
        }
    }

    /// Normalized tokens (lower-case, trimmed) accepted for this level.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            MoodLevel::Critical => &["1", "critical", "distress", "crisis", "overwhelmed"],
            MoodLevel::Low => &["2", "low", "struggling", "stressed", "heavy", "sad"],
            MoodLevel::Mid => &["3", "mid", "okay", "medium", "mixed", "alright"],
            MoodLevel::High => &[
                "4",
                "high",
                "thriving",
                "motivated",
                "good",
                "great",
                "happy",
            ],
            MoodLevel::Indifferent => &["5", "indifferent", "neutral", "ok", "fine", "meh"],
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodLevel::Critical => "😫",
            MoodLevel::Low => "😔",
            MoodLevel::Mid => "😐",
            MoodLevel::High => "😊",
            MoodLevel::Indifferent => "😶",
        }
    }

    /// Reply shown right after the opening check-in.
    pub fn support_message(self) -> &'static str {
        match self {
            MoodLevel::Critical | MoodLevel::Low => {
                "Thank you for sharing that. Remember, this is a safe space.\nWe'll take this at your pace."
            }
            MoodLevel::Mid => "Thanks for checking in. Let's explore your day together.",
            MoodLevel::High | MoodLevel::Indifferent => "Great to hear! Let's capture this moment.",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value(), self.label())
    }
}

/// Raw mood input as it arrives from a prompt or the `--mood` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawMood<'a> {
    Absent,
    Text(&'a str),
    Integer(i64),
}

impl<'a> From<&'a str> for RawMood<'a> {
    fn from(s: &'a str) -> Self {
        RawMood::Text(s)
    }
}

impl<'a> From<&'a String> for RawMood<'a> {
    fn from(s: &'a String) -> Self {
        RawMood::Text(s.as_str())
    }
}

impl From<i64> for RawMood<'_> {
    fn from(n: i64) -> Self {
        RawMood::Integer(n)
    }
}

impl From<i32> for RawMood<'_> {
    fn from(n: i32) -> Self {
        RawMood::Integer(i64::from(n))
    }
}

impl<'a, T: Into<RawMood<'a>>> From<Option<T>> for RawMood<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawMood::Absent, Into::into)
    }
}

/// Why an input was not accepted as a mood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoodRejection {
    #[error("no mood was provided")]
    Absent,

    #[error("mood input is empty")]
    Empty,

    /// Holds the normalized input.
    #[error("'{0}' is not on the mood scale")]
    Unrecognized(String),
}

/// A classified mood. Equality ignores `created_at`.
#[derive(Debug, Clone)]
pub struct MoodRecord {
    pub level: MoodLevel,
    pub description: &'static str,
    pub created_at: DateTime<Local>,
}

impl MoodRecord {
    pub fn new(level: MoodLevel) -> Self {
        Self {
            level,
            description: level.description(),
            created_at: Local::now(),
        }
    }
}

impl PartialEq for MoodRecord {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level && self.description == other.description
    }
}

impl Eq for MoodRecord {}

/// Maps free-form input to a [`MoodRecord`]. Build once, share by reference or `Arc`.
#[derive(Debug, Clone)]
pub struct MoodClassifier {
    synonyms: HashMap<&'static str, MoodLevel>,
}

impl MoodClassifier {
    pub fn new() -> Self {
        let synonyms = MoodLevel::ALL
            .into_iter()
            .flat_map(|level| level.tokens().iter().map(move |&token| (token, level)))
            .collect();
        Self { synonyms }
    }

    /// Exact-match lookup after trimming and lower-casing. Integers are matched by
    /// their decimal form, so `0`, `6`, `"01"` and `"1.0"` are all rejected.
    pub fn classify<'a>(&self, raw: impl Into<RawMood<'a>>) -> Result<MoodRecord, MoodRejection> {
        let text: Cow<'a, str> = match raw.into() {
            RawMood::Absent => return Err(MoodRejection::Absent),
            RawMood::Text(s) => Cow::Borrowed(s),
            RawMood::Integer(n) => Cow::Owned(n.to_string()),
        };
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(MoodRejection::Empty);
        }
        match self.synonyms.get(normalized.as_str()) {
            Some(&level) => Ok(MoodRecord::new(level)),
            None => Err(MoodRejection::Unrecognized(normalized)),
        }
    }

    pub fn token_count(&self) -> usize {
        self.synonyms.len()
    }
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction of a mood change between two check-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodChange {
    Improved,
    Declined,
    Steady,
}

impl fmt::Display for MoodChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoodChange::Improved => "improved",
            MoodChange::Declined => "declined",
            MoodChange::Steady => "steady",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodComparison {
    pub change: MoodChange,
    /// Absolute level difference.
    pub magnitude: u8,
}

impl MoodComparison {
    /// Transcript wording, e.g. "Decreased by 2 level(s)".
    pub fn summary(&self) -> String {
        match self.change {
            MoodChange::Improved => format!("Improved by {} level(s)", self.magnitude),
            MoodChange::Declined => format!("Decreased by {} level(s)", self.magnitude),
            MoodChange::Steady => "Remained steady".to_string(),
        }
    }
}

/// Compares by raw level: a higher level counts as an improvement.
pub fn compare_moods(initial: &MoodRecord, current: &MoodRecord) -> MoodComparison {
    let delta = i16::from(current.level.value()) - i16::from(initial.level.value());
    let change = match delta {
        d if d > 0 => MoodChange::Improved,
        d if d < 0 => MoodChange::Declined,
        _ => MoodChange::Steady,
    };
    MoodComparison {
        change,
        magnitude: delta.unsigned_abs() as u8,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoodTrend::Improving => "improving",
            MoodTrend::Declining => "declining",
            MoodTrend::Stable => "stable",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodStatistics {
    pub average: f64,
    pub min: u8,
    pub max: u8,
    pub count: usize,
    pub levels: Vec<u8>,
    pub trend: MoodTrend,
}

/// Summary over a mood history. `None` when there is no data.
///
/// The trend compares only the first and last sample.
pub fn aggregate_statistics(history: &[MoodRecord]) -> Option<MoodStatistics> {
    let levels: Vec<u8> = history.iter().map(|m| m.level.value()).collect();
    let (&first, &last) = (levels.first()?, levels.last()?);
    let sum: u32 = levels.iter().map(|&l| u32::from(l)).sum();
    let trend = match last.cmp(&first) {
        std::cmp::Ordering::Greater => MoodTrend::Improving,
        std::cmp::Ordering::Less => MoodTrend::Declining,
        std::cmp::Ordering::Equal => MoodTrend::Stable,
    };
    Some(MoodStatistics {
        average: f64::from(sum) / levels.len() as f64,
        min: levels.iter().copied().min().unwrap_or(first),
        max: levels.iter().copied().max().unwrap_or(first),
        count: levels.len(),
        levels,
        trend,
    })
}

/// The scale shown before mood prompts and by `--show-scale`.
pub fn render_mood_scale() -> String {
    let mut out = String::from("MOOD ASSESSMENT SCALE:\n=====================\n");
    for level in MoodLevel::ALL {
        out.push_str(&format!("{}: {}\n", level.value(), level.description()));
    }
    out.push_str("\nYou can use numbers (1-5) or keywords like:\n");
    out.push_str("\"critical\", \"low\", \"mid/okay\", \"high/good\", \"indifferent/neutral\"");
    out
}
