//! The `mockgrade compare` command.

use std::path::PathBuf;

use anyhow::Result;

use mockgrade_core::report::GradedSubmission;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    fail_on_regression: bool,
    format: String,
) -> Result<()> {
    let baseline = GradedSubmission::load_json(&baseline_path)?;
    let current = GradedSubmission::load_json(&current_path)?;

    let comparison = current.compare(&baseline);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", comparison.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        _ => {
            // text format
            println!(
                "Score: {}% -> {}% ({:+})",
                comparison.baseline_score, comparison.current_score, comparison.score_delta
            );

            println!("\nRubric:");
            for a in &comparison.aspects {
                println!(
                    "  {}: {} -> {} ({:+})",
                    a.aspect, a.baseline_points, a.current_points, a.delta
                );
            }

            if !comparison.resolved_insights.is_empty() {
                println!("\nResolved:");
                for i in &comparison.resolved_insights {
                    println!("  - {i}");
                }
            }

            if !comparison.new_insights.is_empty() {
                println!("\nNew:");
                for i in &comparison.new_insights {
                    println!("  - {i}");
                }
            }
        }
    }

    if fail_on_regression && comparison.is_regression() {
        std::process::exit(1);
    }

    Ok(())
}
