//! Built-in self-check behind `--test`. Runs a fixed case table against the shared
//! classifier and menu table. Never touches the transcript.

use crate::domain::{MenuRuleTable, MoodClassifier, RuleId};
use std::fmt;
use std::sync::Arc;

/// (input, expected rule)
const MENU_CASES: &[(Option<&str>, RuleId)] = &[
    (Some("1"), RuleId::R1),
    (Some("one"), RuleId::R1),
    (Some("daily"), RuleId::R1),
    (Some("2"), RuleId::R2),
    (Some("two"), RuleId::R2),
    (Some("weekly"), RuleId::R2),
    (Some("3"), RuleId::R3),
    (Some("three"), RuleId::R3),
    (Some("view"), RuleId::R3),
    (Some("4"), RuleId::R4),
    (Some("four"), RuleId::R4),
    (Some("exit"), RuleId::R4),
    (Some("quit"), RuleId::R4),
    (Some(" Daily "), RuleId::R1),
    (Some("5"), RuleId::Default),
    (Some("99"), RuleId::Default),
    (Some("hello"), RuleId::Default),
    (Some(""), RuleId::Default),
    (Some("   "), RuleId::Default),
    (None, RuleId::Default),
];

/// (input, expected level; `None` = rejected)
const MOOD_CASES: &[(Option<&str>, Option<u8>)] = &[
    (Some("1"), Some(1)),
    (Some("critical"), Some(1)),
    (Some("sad"), Some(2)),
    (Some("okay"), Some(3)),
    (Some(" HIGH "), Some(4)),
    (Some("happy"), Some(4)),
    (Some("meh"), Some(5)),
    (Some("ok"), Some(5)),
    (Some("0"), None),
    (Some("6"), None),
    (Some("1.0"), None),
    (Some("01"), None),
    (Some(""), None),
    (None, None),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckSubject {
    Menu,
    Mood,
}

/// Result of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub subject: CheckSubject,
    pub input: Option<&'static str>,
    pub expected: String,
    pub actual: String,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = match self.subject {
            CheckSubject::Menu => "menu",
            CheckSubject::Mood => "mood",
        };
        let input = match self.input {
            Some(s) => format!("'{s}'"),
            None => "None".to_string(),
        };
        if self.passed() {
            write!(f, "✓ PASS [{subject}] {input} -> {}", self.actual)
        } else {
            write!(
                f,
                "✗ FAIL [{subject}] {input} -> expected {}, got {}",
                self.expected, self.actual
            )
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelfCheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SelfCheckReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

fn describe_level(level: Option<u8>) -> String {
    match level {
        Some(l) => format!("level {l}"),
        None => "rejected".to_string(),
    }
}

pub struct SelfCheck {
    classifier: Arc<MoodClassifier>,
    menu: Arc<MenuRuleTable>,
}

impl SelfCheck {
    pub fn new(classifier: Arc<MoodClassifier>, menu: Arc<MenuRuleTable>) -> Self {
        Self { classifier, menu }
    }

    pub fn run(&self) -> SelfCheckReport {
        let menu = MENU_CASES.iter().map(|&(input, expected)| CheckOutcome {
            subject: CheckSubject::Menu,
            input,
            expected: expected.to_string(),
            actual: self.menu.evaluate(input).id.to_string(),
        });
        let mood = MOOD_CASES.iter().map(|&(input, expected)| CheckOutcome {
            subject: CheckSubject::Mood,
            input,
            expected: describe_level(expected),
            actual: describe_level(self.classifier.classify(input).ok().map(|m| m.level.value())),
        });
        SelfCheckReport {
            outcomes: menu.chain(mood).collect(),
        }
    }

    /// The rendered decision table, printed after the case results.
    pub fn decision_table(&self) -> String {
        self.menu.render()
    }
}
