//! Implements ConsolePort for non-terminal stdin (pipes, redirected files).
//! One answer per line; end of stream closes the session.

use crate::adapters::ui::tui::print_toned;
use crate::domain::DomainError;
use crate::ports::{ConsolePort, Tone};
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Line-oriented console. Prompts go to stdout, answers come from `R`.
pub struct LineConsole<R> {
    lines: Mutex<Lines<R>>,
}

impl LineConsole<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> LineConsole<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }
}

#[async_trait]
impl<R> ConsolePort for LineConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn ask(&self, prompt: &str) -> Result<String, DomainError> {
        println!("{prompt}");
        let _ = std::io::stdout().flush();
        let mut lines = self.lines.lock().await;
        match lines.next_line().await {
            Ok(Some(line)) => Ok(line),
            Ok(None) => Err(DomainError::InputClosed),
            Err(e) => Err(DomainError::Console(e.to_string())),
        }
    }

    async fn say(&self, tone: Tone, text: &str) {
        print_toned(tone, text);
    }
}
