//! Wiring & DI. Entry point: parse flags, bootstrap adapters, run the session.
//! No business logic here; classification and menu dispatch live in the domain.

use clap::Parser;
use crossterm::style::Stylize;
use journal_companion::adapters::persistence::TranscriptFile;
use journal_companion::adapters::ui::{self, LineConsole, TuiConsole};
use journal_companion::domain::{MenuRuleTable, MoodClassifier, render_mood_scale};
use journal_companion::ports::{ConsolePort, TranscriptPort};
use journal_companion::shared::config::AppConfig;
use journal_companion::usecases::{JournalSession, SelfCheck};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for a `--mood` value that is not on the scale.
const EXIT_INVALID_MOOD: u8 = 2;

const EXAMPLES: &str = "\
Examples:
  journal-companion                      # Start with an interactive mood check-in
  journal-companion --mood high          # Start with a mood from the command line
  journal-companion --show-scale         # Display the mood scale
  journal-companion --version            # Show version info
  journal-companion --test               # Run the built-in self-check";

#[derive(Parser, Debug)]
#[command(
    name = "journal-companion",
    about = "Journal Companion - A reflective journaling application",
    disable_version_flag = true,
    after_help = EXAMPLES
)]
struct Args {
    /// Start with this mood (1-5 or keywords: critical, low, mid, high, indifferent)
    #[arg(short, long)]
    mood: Option<String>,

    /// Display the mood assessment scale and exit
    #[arg(short = 's', long)]
    show_scale: bool,

    /// Show version information and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Run the built-in self-check and exit
    #[arg(short = 't', long)]
    test: bool,

    /// Directory for journal files (overrides JOURNAL_DIR)
    #[arg(short = 'd', long)]
    journal_dir: Option<PathBuf>,

    /// Do not print the welcome banner
    #[arg(long)]
    no_banner: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let classifier = Arc::new(MoodClassifier::new());
    let menu = Arc::new(MenuRuleTable::new());

    // --- Short-circuit flags: never touch the transcript ---
    if args.version {
        println!("Journal Companion v{}", env!("CARGO_PKG_VERSION"));
        println!("Created with care for reflective practice");
        return Ok(ExitCode::SUCCESS);
    }
    if args.show_scale {
        println!("{}", render_mood_scale());
        return Ok(ExitCode::SUCCESS);
    }
    if args.test {
        return Ok(run_self_check(Arc::clone(&classifier), Arc::clone(&menu)));
    }

    let initial_mood = match args.mood.as_deref() {
        Some(raw) => match classifier.classify(raw) {
            Ok(mood) => Some(mood),
            Err(rejection) => {
                warn!(%rejection, "rejected --mood value");
                eprintln!("Invalid mood value: {raw}");
                eprintln!(
                    "Valid values: 1-5 or keywords like 'critical', 'low', 'mid', 'high', 'indifferent'"
                );
                return Ok(ExitCode::from(EXIT_INVALID_MOOD));
            }
        },
        None => None,
    };

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration; using defaults");
        AppConfig::default()
    });
    let journal_dir = args
        .journal_dir
        .clone()
        .unwrap_or_else(|| cfg.journal_dir_or_default());
    info!(path = %journal_dir.display(), "journal directory");

    ui::init_ui(cfg.show_banner_or_default() && !args.no_banner);

    let console: Arc<dyn ConsolePort> = if std::io::stdin().is_terminal() {
        Arc::new(TuiConsole::new())
    } else {
        info!("stdin is not a terminal; reading answers line by line");
        Arc::new(LineConsole::stdin())
    };
    let transcript: Arc<dyn TranscriptPort> = Arc::new(TranscriptFile::new(&journal_dir));
    let mut session = JournalSession::new(console, transcript, classifier, menu)
        .with_max_invalid_attempts(cfg.max_invalid_attempts_or_default());
    if let Some(mood) = initial_mood {
        session = session.with_initial_mood(mood);
    }

    let outcome = session.run().await?;
    info!(?outcome, "session finished");

    Ok(ExitCode::SUCCESS)
}

/// Prints every case, the decision table and totals. Non-zero exit on any failure.
fn run_self_check(classifier: Arc<MoodClassifier>, menu: Arc<MenuRuleTable>) -> ExitCode {
    let check = SelfCheck::new(classifier, menu);
    let report = check.run();

    println!("{}", "Running self-check...".yellow());
    for outcome in &report.outcomes {
        let line = outcome.to_string();
        if outcome.passed() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }
    println!("\n{}", check.decision_table().cyan());
    println!("\nPassed: {}", report.passed());
    println!("Failed: {}", report.failed());
    println!("Total: {}", report.outcomes.len());

    if report.is_success() {
        println!("{}", "✓ All self-checks passed!".green());
        ExitCode::SUCCESS
    } else {
        println!("{}", format!("✗ {} check(s) failed", report.failed()).red());
        ExitCode::FAILURE
    }
}
