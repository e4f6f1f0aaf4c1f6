use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklens_core::{Summarizer, analyze, local_report};
use tasklens_gemini::{GeminiClient, build_analysis_prompt};
use tracing_subscriber::EnvFilter;

mod input;

#[derive(Parser, Debug)]
#[command(
    name = "tasklens",
    version,
    about = "Task status reports: generative model first, deterministic fallback"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a status report (remote model first, local fallback)
    Analyze {
        /// Input JSON file; `-` reads stdin; omit to use $TASK_DATA
        file: Option<PathBuf>,

        /// Reference instant for overdue checks (RFC3339, default: now)
        #[arg(long)]
        now: Option<String>,
    },

    /// Generate the deterministic local report only
    Report {
        /// Input JSON file; `-` reads stdin; omit to use $TASK_DATA
        file: Option<PathBuf>,

        /// Reference instant for overdue checks (RFC3339, default: now)
        #[arg(long)]
        now: Option<String>,
    },

    /// Print the prompt that would be sent to the text model
    Prompt {
        /// Input JSON file; `-` reads stdin; omit to use $TASK_DATA
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { file, now } => {
            let data = input::load_input(file.as_deref())?;
            let now = parse_now(now.as_deref())?;
            let remote = GeminiClient::from_env();
            if remote.is_none() {
                tracing::debug!("GEMINI_API_KEY not set; using local report");
            }
            let report = analyze(
                &data.user,
                &data.tasks,
                now,
                remote.as_ref().map(|c| c as &dyn Summarizer),
            );
            println!("{report}");
        }

        Command::Report { file, now } => {
            let data = input::load_input(file.as_deref())?;
            let now = parse_now(now.as_deref())?;
            println!("{}", local_report(&data.user, &data.tasks, now));
        }

        Command::Prompt { file } => {
            let data = input::load_input(file.as_deref())?;
            print!("{}", build_analysis_prompt(&data.user, &data.tasks));
        }
    }

    Ok(())
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(s) => {
            let dt = DateTime::parse_from_rfc3339(s)
                .with_context(|| format!("invalid --now value: {s}"))?;
            Ok(dt.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}
