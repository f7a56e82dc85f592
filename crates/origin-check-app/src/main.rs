#![warn(missing_docs)]
//! # origin-check binary
//!
//! Terminal shell for the image and text detection flows.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use origin_check_app::{
    AppConfig, AppDetector, AppError, analyze_image_file, app_version, init_logging,
    read_text_input, run_text_analysis,
};
use origin_check_core::AnalysisResult;
use origin_check_ui::{ImageFlow, Notification, ResultView, Severity, TextFlow};

/// Simulated AI-vs-human content check.
#[derive(Debug, Parser)]
#[command(name = "origin-check", version = app_version(), about)]
struct Cli {
    /// Seed for reproducible mock verdicts (overrides ORIGIN_CHECK_SEED).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Answer from a recorded backend response instead of the mock.
    #[arg(long, global = true, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Print the result record as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze an image file.
    Image {
        /// Image path; MIME type is inferred from the extension.
        path: PathBuf,
    },
    /// Analyze text from an argument, a file, or stdin.
    Text {
        /// Text to analyze.
        text: Option<String>,
        /// Read the text from a file.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Print the version.
    Version,
}

/// CLI entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = init_logging() {
        eprintln!("failed to initialize logging: {error}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Flow and detector errors were already shown as notifications.
            if !matches!(error, AppError::Flow(_) | AppError::Detector(_)) {
                eprintln!("error: {error}");
            }
            tracing::debug!(stage = "shell", action = "exit_failure", %error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::from_env()?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let detector = match &cli.replay {
        Some(path) => AppDetector::replay_from_file(path)?,
        None => AppDetector::Mock(config.mock_detector()),
    };

    match cli.command {
        Command::Version => {
            println!("origin-check {}", app_version());
            Ok(())
        }
        Command::Image { path } => {
            let mut flow = ImageFlow::new();
            eprintln!("Analyzing image...");
            let outcome = analyze_image_file(&mut flow, &path, &detector).await;
            print_notifications(flow.drain_notifications());
            report(outcome, flow.flow().result(), cli.json)
        }
        Command::Text { text, file } => {
            let draft = read_text_input(text, file.as_deref(), std::io::stdin().lock())?;
            let mut flow = TextFlow::new();
            flow.set_text(draft);
            eprintln!("{}", flow.character_count_label());
            eprintln!("Analyzing text...");
            let outcome = run_text_analysis(&mut flow, &detector).await;
            print_notifications(flow.drain_notifications());
            report(outcome, flow.flow().result(), cli.json)
        }
    }
}

fn report<T>(
    outcome: Result<T, AppError>,
    result: Option<&AnalysisResult>,
    json: bool,
) -> Result<(), AppError> {
    outcome?;

    let Some(result) = result else {
        return Ok(());
    };

    if json {
        let bytes = result.to_json_bytes()?;
        println!("{}", String::from_utf8_lossy(&bytes));
    } else {
        print!("{}", ResultView::from_result(result).render_plain());
    }
    Ok(())
}

fn print_notifications(notifications: Vec<Notification>) {
    for notification in notifications {
        let prefix = match notification.severity {
            Severity::Info => "info",
            Severity::Destructive => "error",
        };
        eprintln!(
            "{prefix}: {}: {}",
            notification.title, notification.description
        );
    }
}
