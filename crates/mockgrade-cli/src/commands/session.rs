//! The `mockgrade session` command.
//!
//! Reads stdin line by line. Plain lines accumulate into the submission
//! text; lines starting with `:` are actions:
//!
//! - `:title <title>` set the title for the next grade
//! - `:grade` grade the accumulated text, then reset the buffer
//! - `:regrade` grade the last submission again
//! - `:clear` drop the last result, the buffer, and the title
//! - `:copy [path]` copy the last result to a file (or print it)
//! - `:quit` exit

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use mockgrade_core::model::OutputFormat;
use mockgrade_core::report::GradedSubmission;
use mockgrade_core::session::{CopyOutcome, Session};
use mockgrade_core::traits::{Clipboard, FileClipboard};

use crate::render::{render, StdoutClipboard};

/// A clipboard that always declines, so copy goes straight to the fallback.
struct NoClipboard;

impl Clipboard for NoClipboard {
    fn name(&self) -> &str {
        "none"
    }

    fn write_text(&mut self, _text: &str) -> Result<()> {
        anyhow::bail!("no clipboard path given")
    }
}

pub async fn execute(
    format: Option<String>,
    delay_ms: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::resolve_config(config_path.as_deref(), delay_ms)?;
    let format = super::resolve_format(format.as_deref(), &config)?;
    let show_progress = !config.delay().is_zero();

    let mut session = Session::new(&config);
    let mut title = String::new();
    let mut buffer = String::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(action) = line.strip_prefix(':') else {
            buffer.push_str(&line);
            buffer.push('\n');
            continue;
        };

        let (name, arg) = match action.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (action.trim(), ""),
        };

        match name {
            "title" => title = arg.to_string(),
            "grade" => {
                if show_progress {
                    eprintln!("Grading...");
                }
                let graded = session.grade(&title, &buffer).await;
                match graded {
                    Ok(record) => {
                        show(record, format)?;
                        buffer.clear();
                    }
                    Err(e) => notice(e.notice()),
                }
            }
            "regrade" => {
                if show_progress {
                    eprintln!("Regrading...");
                }
                match session.regrade().await {
                    Ok(record) => show(record, format)?,
                    Err(e) => notice(e.notice()),
                }
            }
            "clear" => {
                session.clear();
                buffer.clear();
                title.clear();
                println!("Cleared.");
            }
            "copy" => {
                let outcome = if arg.is_empty() {
                    session.copy_to(&mut NoClipboard, &mut StdoutClipboard)
                } else {
                    session.copy_to(&mut FileClipboard::new(arg), &mut StdoutClipboard)
                };
                match outcome {
                    Ok(CopyOutcome::Copied) => println!("Copied to {arg}."),
                    Ok(CopyOutcome::ManualSelection) => {}
                    Ok(CopyOutcome::Failed(msg)) => notice(&msg),
                    Err(e) => notice(e.notice()),
                }
            }
            "quit" | "q" => break,
            other => notice(&format!("Unknown action :{other}")),
        }
    }

    Ok(())
}

fn show(record: &GradedSubmission, format: OutputFormat) -> Result<()> {
    println!("{}", render(record, format)?);
    Ok(())
}

fn notice(message: &str) {
    println!("Notice: {message}");
}
