//! Question-set flow shared by the daily reflection and the weekly check-in.

use crate::domain::{Answer, DomainError, EntryKind};
use crate::ports::{ConsolePort, Tone};

/// Typed (any case) after an answer to finish the question set early.
pub const SKIP_COMMAND: &str = "skip";

const CONTINUE_PROMPT: &str = "Press ENTER to continue or type 'SKIP' to finish:";

/// Asks every question of `kind` in order. After each question but the last the user
/// may type SKIP; the remaining questions are then recorded as skipped.
///
/// Always returns one answer per question.
pub async fn ask_questions(
    console: &dyn ConsolePort,
    kind: EntryKind,
) -> Result<Vec<Answer>, DomainError> {
    let questions = kind.questions();
    let mut answers = Vec::with_capacity(questions.len());

    for (i, question) in questions.iter().enumerate() {
        console
            .say(Tone::Plain, &format!("\n{}. {}", i + 1, question.prompt))
            .await;
        let text = console.ask(kind.answer_prompt()).await?;
        answers.push(Answer::new(question.label, text.trim()));

        let is_last = i + 1 == questions.len();
        if !is_last {
            let next = console.ask(CONTINUE_PROMPT).await?;
            if next.trim().eq_ignore_ascii_case(SKIP_COMMAND) {
                answers.extend(questions[i + 1..].iter().map(|q| Answer::skipped(q.label)));
                break;
            }
        }
    }

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::ScriptedConsole;

    #[tokio::test]
    async fn answers_every_question_without_skip() {
        let console = ScriptedConsole::new([
            "Walked", "", "Deadline", "", "Called mum", "", "Patience", "", "Trip", "",
            "Sleep earlier", "", "calm",
        ]);
        let answers = ask_questions(&console, EntryKind::DailyReflection)
            .await
            .unwrap();
        assert_eq!(answers.len(), 7);
        assert_eq!(answers[0], Answer::new("Positive moment", "Walked"));
        assert_eq!(answers[6], Answer::new("Current feelings", "calm"));
        assert!(answers.iter().all(|a| !a.is_skipped()));
        assert_eq!(console.remaining(), 0);
    }

    #[tokio::test]
    async fn skip_fills_remaining_answers() {
        let console = ScriptedConsole::new(["Shipped it", "", "Scope creep", "  SKIP "]);
        let answers = ask_questions(&console, EntryKind::WeeklyCheckIn)
            .await
            .unwrap();
        assert_eq!(answers.len(), 5);
        assert_eq!(answers[1].text, "Scope creep");
        assert!(answers[2..].iter().all(Answer::is_skipped));
        assert_eq!(answers[4].label, "Growth");
    }

    #[tokio::test]
    async fn last_question_has_no_skip_prompt() {
        let mut script: Vec<&str> = Vec::new();
        for _ in 0..4 {
            script.extend(["answer", ""]);
        }
        script.push("final");
        let console = ScriptedConsole::new(script);
        let answers = ask_questions(&console, EntryKind::WeeklyCheckIn)
            .await
            .unwrap();
        assert_eq!(answers.len(), 5);
        assert_eq!(answers[4].text, "final");
        assert!(
            console
                .prompts()
                .iter()
                .filter(|p| p.contains("SKIP"))
                .count()
                == 4
        );
    }

    #[tokio::test]
    async fn end_of_input_propagates() {
        let console = ScriptedConsole::new(["only one"]);
        let err = ask_questions(&console, EntryKind::DailyReflection)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InputClosed));
    }
}
