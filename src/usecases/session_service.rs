//! Interactive journaling session: opening mood check-in -> name -> menu loop.
//!
//! - Menu input is dispatched through `MenuRuleTable`; the session owns the state machine
//! - Three consecutive invalid selections end the session without running any action
//! - The opening mood is consumed by the first daily reflection only
//! - Finished entries go to `TranscriptPort`; nothing is written for invalid choices

use crate::domain::{
    DomainError, EntryKind, JournalEntry, MenuAction, MenuRule, MenuRuleTable, MoodChange,
    MoodClassifier, MoodRecord, aggregate_statistics, compare_moods, render_mood_scale,
};
use crate::ports::{ConsolePort, Tone, TranscriptPort};
use crate::shared::config::DEFAULT_MAX_INVALID_ATTEMPTS;
use crate::usecases::reflection::ask_questions;
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const MENU_RULE: &str = "================================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingChoice,
    InDailyReflection,
    InWeeklyCheckIn,
    ViewingEntries,
    Terminated,
}

impl SessionState {
    /// Transition for a menu dispatch. `consecutive_invalid` already counts this
    /// selection when the rule is Default.
    pub fn on_choice(self, rule: &MenuRule, consecutive_invalid: u32, limit: u32) -> Self {
        match (self, rule.action) {
            (SessionState::AwaitingChoice, MenuAction::StartDailyReflection) => {
                SessionState::InDailyReflection
            }
            (SessionState::AwaitingChoice, MenuAction::StartWeeklyCheckIn) => {
                SessionState::InWeeklyCheckIn
            }
            (SessionState::AwaitingChoice, MenuAction::ViewEntries) => SessionState::ViewingEntries,
            (SessionState::AwaitingChoice, MenuAction::ExitProgram) => SessionState::Terminated,
            (SessionState::AwaitingChoice, MenuAction::ShowError)
                if consecutive_invalid >= limit =>
            {
                SessionState::Terminated
            }
            (state, _) => state,
        }
    }

    /// Transition when the running activity finishes.
    pub fn on_complete(self) -> Self {
        match self {
            SessionState::InDailyReflection
            | SessionState::InWeeklyCheckIn
            | SessionState::ViewingEntries => SessionState::AwaitingChoice,
            other => other,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose to exit.
    Exited,
    /// Too many consecutive invalid menu selections.
    TooManyInvalidAttempts,
    /// End of input or interrupt at any prompt.
    InputClosed,
}

/// Session controller. Drives prompts through `ConsolePort` and saves entries via `TranscriptPort`.
pub struct JournalSession {
    console: Arc<dyn ConsolePort>,
    transcript: Arc<dyn TranscriptPort>,
    classifier: Arc<MoodClassifier>,
    menu: Arc<MenuRuleTable>,
    state: SessionState,
    user: String,
    /// Mood supplied on the command line, if any.
    preset_mood: Option<MoodRecord>,
    pending_initial_mood: Option<MoodRecord>,
    invalid_attempts: u32,
    max_invalid_attempts: u32,
    mood_history: Vec<MoodRecord>,
}

impl JournalSession {
    pub fn new(
        console: Arc<dyn ConsolePort>,
        transcript: Arc<dyn TranscriptPort>,
        classifier: Arc<MoodClassifier>,
        menu: Arc<MenuRuleTable>,
    ) -> Self {
        Self {
            console,
            transcript,
            classifier,
            menu,
            state: SessionState::AwaitingChoice,
            user: String::new(),
            preset_mood: None,
            pending_initial_mood: None,
            invalid_attempts: 0,
            max_invalid_attempts: DEFAULT_MAX_INVALID_ATTEMPTS,
            mood_history: Vec::new(),
        }
    }

    /// Skip the opening check-in and start from this mood (the `--mood` flag).
    pub fn with_initial_mood(mut self, mood: MoodRecord) -> Self {
        self.preset_mood = Some(mood);
        self
    }

    pub fn with_max_invalid_attempts(mut self, limit: u32) -> Self {
        self.max_invalid_attempts = limit.max(1);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Every mood accepted this session, in order.
    pub fn mood_history(&self) -> &[MoodRecord] {
        &self.mood_history
    }

    /// Runs the whole session. End of input is a normal way to finish.
    pub async fn run(&mut self) -> Result<SessionOutcome, DomainError> {
        match self.run_to_end().await {
            Err(DomainError::InputClosed) => {
                self.state = SessionState::Terminated;
                info!(user = %self.user, "input closed; ending session");
                Ok(SessionOutcome::InputClosed)
            }
            Err(e) => {
                self.state = SessionState::Terminated;
                error!(user = %self.user, error = %e, "session aborted");
                Err(e)
            }
            ok => ok,
        }
    }

    async fn run_to_end(&mut self) -> Result<SessionOutcome, DomainError> {
        self.check_in_opening_mood().await?;
        self.welcome().await;
        self.user = self.ask_name().await?;
        self.say(
            Tone::Plain,
            &format!(
                "\nWelcome, {}! I am glad you are here.\nKeep in mind, this is your journey - we'll take it one day at a time.",
                self.user
            ),
        )
        .await;
        info!(user = %self.user, "session started");

        let outcome = self.menu_loop().await?;
        self.farewell(outcome).await;
        Ok(outcome)
    }

    async fn say(&self, tone: Tone, text: &str) {
        self.console.say(tone, text).await;
    }

    async fn check_in_opening_mood(&mut self) -> Result<(), DomainError> {
        if let Some(mood) = self.preset_mood.take() {
            self.say(
                Tone::Info,
                &format!("\nInitial mood from command line: {}\n", mood.description),
            )
            .await;
            self.mood_history.push(mood.clone());
            self.pending_initial_mood = Some(mood);
            return Ok(());
        }

        self.say(Tone::Heading, "\n==================== INITIAL MOOD CHECK-IN ====================")
            .await;
        self.say(
            Tone::Plain,
            "\nBefore we begin, let's check in with how you're feeling right now.\nThis helps us understand your starting point.\n",
        )
        .await;
        self.say(Tone::Plain, &render_mood_scale()).await;

        let mood = self
            .prompt_mood(
                "How are you feeling as you open the journal today? (1-5 or keyword):",
                "Initial mood recorded",
            )
            .await?;
        self.say(Tone::Info, &format!("\n{}", mood.level.support_message()))
            .await;
        self.pending_initial_mood = Some(mood);
        Ok(())
    }

    /// Re-prompts until the classifier accepts the input.
    async fn prompt_mood(
        &mut self,
        prompt: &str,
        recorded: &str,
    ) -> Result<MoodRecord, DomainError> {
        loop {
            let line = self.console.ask(prompt).await?;
            match self.classifier.classify(line.as_str()) {
                Ok(mood) => {
                    self.say(
                        Tone::Success,
                        &format!(
                            "\n✓ {recorded}: {} {}",
                            mood.level.emoji(),
                            mood.description
                        ),
                    )
                    .await;
                    debug!(level = mood.level.value(), "mood accepted");
                    self.mood_history.push(mood.clone());
                    return Ok(mood);
                }
                Err(rejection) => {
                    debug!(%rejection, "mood rejected");
                    self.say(
                        Tone::Error,
                        "Invalid mood input. Please use 1-5 or a keyword from the scale.",
                    )
                    .await;
                }
            }
        }
    }

    async fn welcome(&self) {
        self.say(
            Tone::Plain,
            "\n============== Welcome to your Journal Companion ===============\n\n\
             This is a private space to reflect on your journey.\n\
             All entries will be saved on your device.\n\
             Take your time, there's no rush.\n",
        )
        .await;
    }

    async fn ask_name(&self) -> Result<String, DomainError> {
        self.say(Tone::Plain, "As we begin this journey, let's get to know you ...")
            .await;
        loop {
            let name = self
                .console
                .ask("What is your first name, or what would you like to be addressed as?")
                .await?;
            let name = name.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            self.say(Tone::Warning, "Please enter your name to continue.").await;
        }
    }

    async fn show_menu(&self) {
        self.say(
            Tone::Heading,
            &format!(
                "\n{MENU_RULE}\nHello {}! What would you like to do?\n{MENU_RULE}",
                self.user
            ),
        )
        .await;
        let mut lines = String::new();
        for rule in self.menu.rules().iter().filter(|r| r.is_valid) {
            let choices = rule
                .valid_inputs
                .iter()
                .map(|c| format!("'{c}'"))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push_str(&format!("[{:<28}] - {}\n", choices, rule.description));
        }
        self.say(Tone::Info, lines.trim_end()).await;
    }

    async fn menu_loop(&mut self) -> Result<SessionOutcome, DomainError> {
        let menu = Arc::clone(&self.menu);
        self.state = SessionState::AwaitingChoice;
        self.invalid_attempts = 0;

        loop {
            self.show_menu().await;
            let choice = self.console.ask("Please select (1-4):").await?;
            let rule = menu.evaluate(choice.as_str());

            if !rule.is_valid {
                self.invalid_attempts += 1;
                warn!(
                    choice = %choice.trim(),
                    attempt = self.invalid_attempts,
                    limit = self.max_invalid_attempts,
                    "invalid menu selection"
                );
                self.say(
                    Tone::Error,
                    &format!(
                        "\n'{}' is not a valid option. {}\nPlease choose one of the options shown above.",
                        choice.trim(),
                        rule.message
                    ),
                )
                .await;
                self.state = self.state.on_choice(
                    rule,
                    self.invalid_attempts,
                    self.max_invalid_attempts,
                );
                if self.state == SessionState::Terminated {
                    self.say(
                        Tone::Error,
                        &format!(
                            "\nToo many invalid attempts ({0}/{0}).\nThe program will now exit to prevent misuse.\nPlease restart when you're ready.",
                            self.max_invalid_attempts
                        ),
                    )
                    .await;
                    return Ok(SessionOutcome::TooManyInvalidAttempts);
                }
                continue;
            }

            self.invalid_attempts = 0;
            debug!(rule = %rule.id, action = %rule.action, "menu dispatch");
            self.say(Tone::Info, &format!("\n{}", rule.message)).await;
            self.state = self.state.on_choice(rule, 0, self.max_invalid_attempts);

            match self.state {
                SessionState::InDailyReflection => self.daily_reflection().await?,
                SessionState::InWeeklyCheckIn => self.weekly_check_in().await?,
                SessionState::ViewingEntries => self.view_entries().await?,
                SessionState::Terminated => return Ok(SessionOutcome::Exited),
                SessionState::AwaitingChoice => {}
            }
            self.state = self.state.on_complete();
        }
    }

    async fn daily_reflection(&mut self) -> Result<(), DomainError> {
        let mut entry = JournalEntry::new(EntryKind::DailyReflection, Local::now());
        self.say(
            Tone::Plain,
            &format!(
                "\nHello {}, let's reflect on today...\n\nToday's Date: {}\nCurrent Time: {}",
                self.user, entry.date, entry.time
            ),
        )
        .await;

        let initial = self.pending_initial_mood.take();
        match &initial {
            Some(mood) => {
                self.say(
                    Tone::Info,
                    &format!(
                        "\nInitial Mood (from start of session):\n{}\n\nHas your mood changed since you started?",
                        mood.description
                    ),
                )
                .await;
            }
            None => {
                self.say(Tone::Info, "\nLet's check in with your current mood...")
                    .await;
            }
        }
        self.say(Tone::Plain, &render_mood_scale()).await;

        let current = self
            .prompt_mood("How are you feeling right now? (1-5 or keyword):", "Mood recorded")
            .await?;
        if let Some(initial) = &initial {
            let reply = match compare_moods(initial, &current).change {
                MoodChange::Declined => {
                    "I notice you're feeling a bit lower than when we started.\nThat's okay - let's explore what's coming up."
                }
                MoodChange::Improved => "Great to see an improvement! Let's build on this.",
                MoodChange::Steady => "Your mood has remained steady.",
            };
            self.say(Tone::Info, reply).await;
        }

        entry.answers = ask_questions(self.console.as_ref(), EntryKind::DailyReflection).await?;
        entry.initial_mood = initial;
        entry.current_mood = Some(current);
        self.save(&entry).await
    }

    async fn weekly_check_in(&mut self) -> Result<(), DomainError> {
        let mut entry = JournalEntry::new(EntryKind::WeeklyCheckIn, Local::now());
        self.say(Tone::Plain, &format!("\n{}, let's check-in...", self.user))
            .await;
        entry.answers = ask_questions(self.console.as_ref(), EntryKind::WeeklyCheckIn).await?;
        self.save(&entry).await
    }

    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let path = self.transcript.append_entry(&self.user, entry).await?;
        self.say(
            Tone::Success,
            &format!("\n√ Your entry has been saved to {}", path.display()),
        )
        .await;
        Ok(())
    }

    async fn view_entries(&self) -> Result<(), DomainError> {
        match self.transcript.read_entries(&self.user).await? {
            Some(text) => {
                self.say(
                    Tone::Plain,
                    &format!(
                        "\nHere are your previous journal entries, {}:\n\n{}",
                        self.user, text
                    ),
                )
                .await;
            }
            None => {
                self.say(
                    Tone::Plain,
                    "\nUnfortunately you have not saved a file yet. Your Journal is ready to listen when you are ready to share.",
                )
                .await;
            }
        }
        Ok(())
    }

    async fn farewell(&self, outcome: SessionOutcome) {
        if outcome == SessionOutcome::Exited {
            self.say(
                Tone::Plain,
                &format!(
                    "\nThank you for doing an entry today, {}.\nRemember: Progress, not perfection. You've got this!\nHope to see you tomorrow.\n",
                    self.user
                ),
            )
            .await;
        }
        if let Some(stats) = aggregate_statistics(&self.mood_history) {
            info!(
                count = stats.count,
                average = stats.average,
                trend = %stats.trend,
                "session mood summary"
            );
            self.say(
                Tone::Info,
                &format!(
                    "Session mood summary: {} check-in(s), average {:.1}, range {}-{}, trend {}",
                    stats.count, stats.average, stats.min, stats.max, stats.trend
                ),
            )
            .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MoodLevel, RuleId, SKIPPED};
    use crate::usecases::testing::{FailingTranscript, MemoryTranscript, ScriptedConsole};

    struct Harness {
        console: Arc<ScriptedConsole>,
        transcript: Arc<MemoryTranscript>,
        session: JournalSession,
    }

    fn harness<'a>(
        script: impl IntoIterator<Item = &'a str>,
        cli_mood: Option<MoodLevel>,
    ) -> Harness {
        let console = Arc::new(ScriptedConsole::new(script));
        let transcript = Arc::new(MemoryTranscript::default());
        let mut session = JournalSession::new(
            Arc::clone(&console) as Arc<dyn ConsolePort>,
            Arc::clone(&transcript) as Arc<dyn TranscriptPort>,
            Arc::new(MoodClassifier::new()),
            Arc::new(MenuRuleTable::new()),
        );
        if let Some(level) = cli_mood {
            session = session.with_initial_mood(MoodRecord::new(level));
        }
        Harness {
            console,
            transcript,
            session,
        }
    }

    #[test]
    fn state_machine_transitions() {
        let table = MenuRuleTable::new();
        let idle = SessionState::AwaitingChoice;
        assert_eq!(
            idle.on_choice(table.rule(RuleId::R1), 0, 3),
            SessionState::InDailyReflection
        );
        assert_eq!(
            idle.on_choice(table.rule(RuleId::R2), 0, 3),
            SessionState::InWeeklyCheckIn
        );
        assert_eq!(
            idle.on_choice(table.rule(RuleId::R3), 0, 3),
            SessionState::ViewingEntries
        );
        assert_eq!(
            idle.on_choice(table.rule(RuleId::R4), 0, 3),
            SessionState::Terminated
        );
        assert_eq!(idle.on_choice(table.default_rule(), 2, 3), idle);
        assert_eq!(
            idle.on_choice(table.default_rule(), 3, 3),
            SessionState::Terminated
        );
        assert_eq!(
            SessionState::InWeeklyCheckIn.on_complete(),
            SessionState::AwaitingChoice
        );
        assert_eq!(
            SessionState::Terminated.on_complete(),
            SessionState::Terminated
        );
    }

    #[tokio::test]
    async fn three_invalid_choices_force_exit_without_actions() {
        let mut h = harness(["Alex", "99", "hello", "   "], Some(MoodLevel::High));
        let outcome = h.session.run().await.unwrap();

        assert_eq!(outcome, SessionOutcome::TooManyInvalidAttempts);
        assert_eq!(h.session.state(), SessionState::Terminated);
        assert!(h.transcript.entries().is_empty());
        assert!(h.console.said_with(Tone::Error, "Too many invalid attempts (3/3)"));
        assert!(!h.console.transcript().contains("Starting"));
    }

    #[tokio::test]
    async fn valid_choice_resets_invalid_counter() {
        let mut h = harness(
            ["Sam", "x", "x", "view", "x", "x", "quit"],
            Some(MoodLevel::Mid),
        );
        let outcome = h.session.run().await.unwrap();

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(h.console.said_with(Tone::Plain, "not saved a file yet"));
        assert!(h.console.said_with(Tone::Plain, "Thank you for doing an entry today, Sam."));
    }

    #[tokio::test]
    async fn custom_limit_is_respected() {
        let mut h = harness(["Sam", "nope"], Some(MoodLevel::Mid));
        h.session = h.session.with_max_invalid_attempts(1);
        let outcome = h.session.run().await.unwrap();
        assert_eq!(outcome, SessionOutcome::TooManyInvalidAttempts);
    }

    #[tokio::test]
    async fn daily_reflection_records_moods_and_skips() {
        let mut h = harness(
            ["Sam", "daily", "low", "Coffee with Jo", "", "Late train", "skip", "quit"],
            Some(MoodLevel::High),
        );
        let outcome = h.session.run().await.unwrap();
        assert_eq!(outcome, SessionOutcome::Exited);

        let entries = h.transcript.entries();
        assert_eq!(entries.len(), 1);
        let (user, entry) = &entries[0];
        assert_eq!(user, "Sam");
        assert_eq!(entry.kind, EntryKind::DailyReflection);
        assert_eq!(entry.initial_mood.as_ref().unwrap().level, MoodLevel::High);
        assert_eq!(entry.current_mood.as_ref().unwrap().level, MoodLevel::Low);
        assert_eq!(entry.answers.len(), 7);
        assert_eq!(entry.answers[0].text, "Coffee with Jo");
        assert_eq!(entry.answers[1].text, "Late train");
        assert!(entry.answers[2..].iter().all(|a| a.text == SKIPPED));
        assert!(h.console.said_with(Tone::Info, "a bit lower than when we started"));
    }

    #[tokio::test]
    async fn opening_mood_is_consumed_once() {
        let mut h = harness(
            ["Sam", "1", "4", "first", "skip", "one", "3", "second", "skip", "4"],
            Some(MoodLevel::Low),
        );
        h.session.run().await.unwrap();

        let entries = h.transcript.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1.initial_mood.as_ref().unwrap().level, MoodLevel::Low);
        assert!(entries[1].1.initial_mood.is_none());
        assert_eq!(entries[1].1.current_mood.as_ref().unwrap().level, MoodLevel::Mid);

        let levels: Vec<u8> = h
            .session
            .mood_history()
            .iter()
            .map(|m| m.level.value())
            .collect();
        assert_eq!(levels, vec![2, 4, 3]);
        assert!(h.console.said_with(Tone::Info, "trend improving"));
    }

    #[tokio::test]
    async fn interactive_opening_mood_reprompts_until_valid() {
        let mut h = harness(["7", "", "Meh", "  ", "Robin", "4"], None);
        let outcome = h.session.run().await.unwrap();

        assert_eq!(outcome, SessionOutcome::Exited);
        assert_eq!(h.session.user(), "Robin");
        assert_eq!(h.session.mood_history().len(), 1);
        assert_eq!(h.session.mood_history()[0].level, MoodLevel::Indifferent);
        assert!(h.console.said_with(Tone::Error, "Invalid mood input"));
        assert!(h.console.said_with(Tone::Warning, "Please enter your name"));
        assert!(h.console.said_with(Tone::Info, "Let's capture this moment"));
    }

    #[tokio::test]
    async fn weekly_check_in_saves_answers_without_moods() {
        let mut h = harness(
            [
                "Sam", "weekly", "Launched", "", "Hiring", "", "Time", "", "Rest", "", "Calmer",
                "exit",
            ],
            Some(MoodLevel::Mid),
        );
        h.session.run().await.unwrap();

        let entries = h.transcript.entries();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0].1;
        assert_eq!(entry.kind, EntryKind::WeeklyCheckIn);
        assert!(entry.initial_mood.is_none() && entry.current_mood.is_none());
        assert_eq!(entry.answers.last().unwrap().text, "Calmer");
    }

    #[tokio::test]
    async fn view_entries_shows_saved_transcript() {
        let mut h = harness(
            ["Sam", "2", "a", "skip", "three", "four"],
            Some(MoodLevel::Mid),
        );
        h.session.run().await.unwrap();
        assert!(h.console.said_with(Tone::Plain, "Here are your previous journal entries, Sam"));
        assert!(h.console.said_with(Tone::Plain, "Weekly Check-in"));
    }

    #[tokio::test]
    async fn transcript_failure_aborts_the_session() {
        let script = ["Sam", "daily", "low", "Coffee", "skip", "quit"];
        let console = Arc::new(ScriptedConsole::new(script));
        let mut session = JournalSession::new(
            Arc::clone(&console) as Arc<dyn ConsolePort>,
            Arc::new(FailingTranscript),
            Arc::new(MoodClassifier::new()),
            Arc::new(MenuRuleTable::new()),
        )
        .with_initial_mood(MoodRecord::new(MoodLevel::Mid));

        let result = session.run().await;

        assert!(matches!(result, Err(DomainError::Transcript(_))));
        assert_eq!(session.state(), SessionState::Terminated);
        // The menu is not shown again, so "quit" is never read.
        assert_eq!(console.remaining(), 1);
        assert!(!console.transcript().contains("has been saved"));
        assert!(!console.transcript().contains("Thank you for doing an entry"));
    }

    #[tokio::test]
    async fn end_of_input_ends_session_gracefully() {
        let mut h = harness(["Sam", "daily"], Some(MoodLevel::Mid));
        let outcome = h.session.run().await.unwrap();

        assert_eq!(outcome, SessionOutcome::InputClosed);
        assert_eq!(h.session.state(), SessionState::Terminated);
        assert!(h.transcript.entries().is_empty());
    }
}
