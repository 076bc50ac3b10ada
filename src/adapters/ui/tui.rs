//! Implements ConsolePort. Inquire-based prompts, crossterm-colored output.

use crate::domain::DomainError;
use crate::ports::{ConsolePort, Tone};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::Text;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};

/// Applies the prompt theme to every subsequent inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// Cancel and interrupt both end the session; anything else is a console failure.
fn map_prompt_error(e: InquireError) -> DomainError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            DomainError::InputClosed
        }
        other => DomainError::Console(other.to_string()),
    }
}

/// Colored stdout line for a tone. Shared by both console adapters.
pub(crate) fn print_toned(tone: Tone, text: &str) {
    match tone {
        Tone::Plain => println!("{text}"),
        Tone::Heading => println!("{}", text.cyan().bold()),
        Tone::Info => println!("{}", text.cyan()),
        Tone::Success => println!("{}", text.green()),
        Tone::Warning => println!("{}", text.yellow()),
        Tone::Error => println!("{}", text.red()),
    }
}

/// TUI adapter. Inquire prompts; needs a terminal on stdin.
#[derive(Debug, Default)]
pub struct TuiConsole;

impl TuiConsole {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConsolePort for TuiConsole {
    async fn ask(&self, prompt: &str) -> Result<String, DomainError> {
        Text::new(prompt).prompt().map_err(map_prompt_error)
    }

    async fn say(&self, tone: Tone, text: &str) {
        print_toned(tone, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_and_interrupt_close_the_input() {
        assert!(matches!(
            map_prompt_error(InquireError::OperationCanceled),
            DomainError::InputClosed
        ));
        assert!(matches!(
            map_prompt_error(InquireError::OperationInterrupted),
            DomainError::InputClosed
        ));
        assert!(matches!(
            map_prompt_error(InquireError::NotTTY),
            DomainError::Console(_)
        ));
    }
}
