//! Main-menu decision table.
//!
//! ```text
//! | Rule    | Valid inputs        | Action               |
//! |---------|---------------------|----------------------|
//! | R1      | 1, one, daily       | StartDailyReflection |
//! | R2      | 2, two, weekly      | StartWeeklyCheckIn   |
//! | R3      | 3, three, view      | ViewEntries          |
//! | R4      | 4, four, exit, quit | ExitProgram          |
//! | Default | anything else       | ShowError            |
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    R1,
    R2,
    R3,
    R4,
    Default,
}

impl RuleId {
    /// Evaluation order; Default is the fallback and always last.
    pub const ORDER: [RuleId; 5] = [
        RuleId::R1,
        RuleId::R2,
        RuleId::R3,
        RuleId::R4,
        RuleId::Default,
    ];

    fn position(self) -> usize {
        match self {
            RuleId::R1 => 0,
            RuleId::R2 => 1,
            RuleId::R3 => 2,
            RuleId::R4 => 3,
            RuleId::Default => 4,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleId::R1 => "R1",
            RuleId::R2 => "R2",
            RuleId::R3 => "R3",
            RuleId::R4 => "R4",
            RuleId::Default => "Default",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    StartDailyReflection,
    StartWeeklyCheckIn,
    ViewEntries,
    ExitProgram,
    ShowError,
}

impl MenuAction {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuAction::StartDailyReflection => "daily_reflection",
            MenuAction::StartWeeklyCheckIn => "weekly_checkin",
            MenuAction::ViewEntries => "view_entries",
            MenuAction::ExitProgram => "exit_program",
            MenuAction::ShowError => "show_error",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRule {
    pub id: RuleId,
    /// Normalized inputs that select this rule. Empty for Default.
    pub valid_inputs: &'static [&'static str],
    pub action: MenuAction,
    pub is_valid: bool,
    pub message: &'static str,
    pub description: &'static str,
}

const RULES: [MenuRule; 5] = [
    MenuRule {
        id: RuleId::R1,
        valid_inputs: &["1", "one", "daily"],
        action: MenuAction::StartDailyReflection,
        is_valid: true,
        message: "Starting Daily Reflection with mood assessment...",
        description: "Start daily reflection process with mood assessment",
    },
    MenuRule {
        id: RuleId::R2,
        valid_inputs: &["2", "two", "weekly"],
        action: MenuAction::StartWeeklyCheckIn,
        is_valid: true,
        message: "Starting Weekly Check-in...",
        description: "Start weekly check-in process",
    },
    MenuRule {
        id: RuleId::R3,
        valid_inputs: &["3", "three", "view"],
        action: MenuAction::ViewEntries,
        is_valid: true,
        message: "Displaying previous entries...",
        description: "View previous journal entries",
    },
    MenuRule {
        id: RuleId::R4,
        valid_inputs: &["4", "four", "exit", "quit"],
        action: MenuAction::ExitProgram,
        is_valid: true,
        message: "Exiting program...",
        description: "Exit the program gracefully",
    },
    MenuRule {
        id: RuleId::Default,
        valid_inputs: &[],
        action: MenuAction::ShowError,
        is_valid: false,
        message: "Invalid selection! Please try again.",
        description: "Invalid input - show error message and increment error count",
    },
];

/// Fixed rule table, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct MenuRuleTable {
    rules: [MenuRule; 5],
}

impl MenuRuleTable {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Total over its input: absent, blank and unknown input all yield Default.
    pub fn evaluate<'a>(&self, raw: impl Into<Option<&'a str>>) -> &MenuRule {
        let Some(raw) = raw.into() else {
            return self.default_rule();
        };
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return self.default_rule();
        }
        self.valid_rules()
            .find(|rule| rule.valid_inputs.contains(&normalized.as_str()))
            .unwrap_or_else(|| self.default_rule())
    }

    pub fn rule(&self, id: RuleId) -> &MenuRule {
        &self.rules[id.position()]
    }

    pub fn default_rule(&self) -> &MenuRule {
        self.rule(RuleId::Default)
    }

    /// All five rules in evaluation order.
    pub fn rules(&self) -> &[MenuRule] {
        &self.rules
    }

    fn valid_rules(&self) -> impl Iterator<Item = &MenuRule> {
        self.rules.iter().filter(|rule| rule.is_valid)
    }

    /// Every accepted input of R1..R4, in table order.
    pub fn valid_choices(&self) -> Vec<&'static str> {
        self.valid_rules()
            .flat_map(|rule| rule.valid_inputs.iter().copied())
            .collect()
    }

    pub fn is_valid_choice<'a>(&self, raw: impl Into<Option<&'a str>>) -> bool {
        self.evaluate(raw).is_valid
    }

    pub fn action_for<'a>(&self, raw: impl Into<Option<&'a str>>) -> MenuAction {
        self.evaluate(raw).action
    }

    /// Maps any accepted spelling back to its menu number ("1".."4").
    pub fn canonical_choice<'a>(&self, raw: impl Into<Option<&'a str>>) -> Option<&'static str> {
        let rule = self.evaluate(raw);
        if !rule.is_valid {
            return None;
        }
        rule.valid_inputs.first().copied()
    }

    /// Aligned text rendering of the table.
    pub fn render(&self) -> String {
        let rule_line = "=".repeat(80);
        let mut out = format!(
            "{rule_line}\nDECISION TABLE - Journal Companion\n{rule_line}\n{:<8} | {:<15} | {:<30} | {:<20}\n{}-|-{}-|-{}-|-{}\n",
            "Rule",
            "Input",
            "Valid Values",
            "Action",
            "-".repeat(8),
            "-".repeat(15),
            "-".repeat(30),
            "-".repeat(20),
        );
        for rule in &self.rules {
            let (input, values) = if rule.valid_inputs.is_empty() {
                ("any other value", "N/A (any other)".to_string())
            } else {
                (rule.valid_inputs[0], rule.valid_inputs.join(", "))
            };
            out.push_str(&format!(
                "{:<8} | {:<15} | {:<30} | {:<20}\n",
                rule.id.to_string(),
                input,
                values,
                rule.action.as_str()
            ));
        }
        out.push_str(&rule_line);
        out
    }
}

impl Default for MenuRuleTable {
    fn default() -> Self {
        Self::new()
    }
}
