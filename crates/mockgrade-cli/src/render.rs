//! Terminal rendering of graded submissions.

use anyhow::Result;

use mockgrade_core::export::to_plain_text;
use mockgrade_core::model::OutputFormat;
use mockgrade_core::report::GradedSubmission;
use mockgrade_core::traits::Clipboard;
use mockgrade_report::html::generate_html;

/// Render a record in the requested format.
pub fn render(record: &GradedSubmission, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => to_plain_text(&record.result),
        OutputFormat::Table => render_table(record),
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Html => generate_html(record),
    })
}

fn render_table(record: &GradedSubmission) -> String {
    use comfy_table::{Cell, Table};

    let result = &record.result;
    let mut table = Table::new();
    table.set_header(vec!["Aspect", "Comment", "Points"]);

    for item in &result.rubric {
        table.add_row(vec![
            Cell::new(item.aspect),
            Cell::new(&item.comment),
            Cell::new(format!("{}/10", item.points)),
        ]);
    }

    let mut out = format!("{}\nScore: {}%\n\n{table}\n\nInsights:\n", result.title, result.score);
    for insight in result.display_insights() {
        out.push_str(&format!("- {insight}\n"));
    }
    out
}

/// Manual-selection fallback: prints the export for the user to copy.
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn name(&self) -> &str {
        "stdout"
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        println!("--- copy below ---\n{text}--- copy above ---");
        Ok(())
    }
}
