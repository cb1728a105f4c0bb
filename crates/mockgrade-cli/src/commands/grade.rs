//! The `mockgrade grade` command.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use mockgrade_core::model::OutputFormat;
use mockgrade_core::session::{CopyOutcome, Session};
use mockgrade_core::traits::FileClipboard;
use mockgrade_report::html::write_html_report;

use crate::render::{render, StdoutClipboard};

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    title: String,
    text: Option<String>,
    file: Option<PathBuf>,
    format: Option<String>,
    output: Option<PathBuf>,
    copy_to: Option<PathBuf>,
    save: bool,
    regrade: bool,
    delay_ms: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::resolve_config(config_path.as_deref(), delay_ms)?;
    let format = super::resolve_format(format.as_deref(), &config)?;
    tracing::debug!(%format, delay_ms = config.delay_ms, "grade command");

    let text = match (text, file) {
        (Some(t), _) => t,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read submission: {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read submission from stdin")?;
            buf
        }
    };

    let mut session = Session::new(&config);
    if !config.delay().is_zero() {
        eprintln!("Grading...");
    }
    let mut record = session
        .grade(&title, &text)
        .await
        .map_err(|e| anyhow::anyhow!(e.notice()))?
        .clone();

    if regrade {
        let first_score = record.result.score;
        record = session
            .regrade()
            .await
            .map_err(|e| anyhow::anyhow!(e.notice()))?
            .clone();
        eprintln!("Regraded: {first_score}% -> {}%", record.result.score);
    }

    match output {
        Some(path) => {
            match format {
                OutputFormat::Json => record.save_json(&path)?,
                OutputFormat::Html => write_html_report(&record, &path)?,
                OutputFormat::Text | OutputFormat::Table => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, render(&record, format)?)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
            }
            eprintln!("Result written to {}", path.display());
        }
        None => print!("{}", render(&record, format)?),
    }

    if save {
        let path = config.output_dir.join(format!("{}.json", record.id));
        record.save_json(&path)?;
        eprintln!("Record saved to {}", path.display());
    }

    if let Some(path) = copy_to {
        let mut primary = FileClipboard::new(&path);
        let outcome = session
            .copy_to(&mut primary, &mut StdoutClipboard)
            .map_err(|e| anyhow::anyhow!(e.notice()))?;
        match outcome {
            CopyOutcome::Copied => eprintln!("Feedback copied to {}", path.display()),
            CopyOutcome::ManualSelection => {
                eprintln!("Could not write {}; feedback printed above.", path.display())
            }
            CopyOutcome::Failed(notice) => eprintln!("{notice}"),
        }
    }

    Ok(())
}
