//! mockgrade CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "mockgrade", version, about = "Mock rubric grading for text submissions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single submission
    Grade {
        /// Submission title (defaults to "Untitled Submission")
        #[arg(long, default_value = "")]
        title: String,

        /// Submission text
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Read submission text from a file (stdin if neither --text nor --file)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format: text, table, json, html
        #[arg(long)]
        format: Option<String>,

        /// Write the rendered output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Copy the plain-text export to a file
        #[arg(long)]
        copy_to: Option<PathBuf>,

        /// Also save the JSON record under the configured output directory
        #[arg(long)]
        save: bool,

        /// Grade the submission a second time and report the regraded result
        #[arg(long)]
        regrade: bool,

        /// Simulated grading delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Interactive session: grade, regrade, clear, and copy from stdin
    Session {
        /// Output format for graded results: text, table, json, html
        #[arg(long)]
        format: Option<String>,

        /// Simulated grading delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare two saved JSON records
    Compare {
        /// Baseline record JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current record JSON
        #[arg(long)]
        current: PathBuf,

        /// Exit code 1 if the score went down
        #[arg(long)]
        fail_on_regression: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mockgrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            title,
            text,
            file,
            format,
            output,
            copy_to,
            save,
            regrade,
            delay_ms,
            config,
        } => {
            commands::grade::execute(
                title, text, file, format, output, copy_to, save, regrade, delay_ms, config,
            )
            .await
        }
        Commands::Session {
            format,
            delay_ms,
            config,
        } => commands::session::execute(format, delay_ms, config).await,
        Commands::Compare {
            baseline,
            current,
            fail_on_regression,
            format,
        } => commands::compare::execute(baseline, current, fail_on_regression, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
