//! HTML results panel generator.
//!
//! Produces a self-contained HTML page with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use mockgrade_core::report::GradedSubmission;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn score_class(score: u8) -> &'static str {
    if score > 85 {
        "high"
    } else if score >= 60 {
        "mid"
    } else {
        "low"
    }
}

/// Generate the results panel for a graded submission.
pub fn generate_html(record: &GradedSubmission) -> String {
    let result = &record.result;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>mockgrade — {}</title>\n",
        html_escape(&result.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<section class=\"results\" id=\"results\">\n");
    html.push_str(&format!(
        "<h1 id=\"result-title\">{}</h1>\n",
        html_escape(&result.title)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Graded {}</p>\n",
        record.graded_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str(&format!(
        "<div class=\"score {}\" id=\"result-score\">{}%</div>\n",
        score_class(result.score),
        result.score
    ));

    html.push_str("<h2>Rubric</h2>\n");
    html.push_str("<table class=\"rubric\">\n");
    html.push_str("<thead><tr><th>Aspect</th><th>Comment</th><th>Points</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for item in &result.rubric {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}/10</td></tr>\n",
            html_escape(&item.aspect.to_string()),
            html_escape(&item.comment),
            item.points
        ));
    }
    html.push_str("</tbody></table>\n");

    html.push_str("<h2>Insights</h2>\n");
    html.push_str("<ul class=\"insights\">\n");
    for insight in result.display_insights() {
        html.push_str(&format!("<li>{}</li>\n", html_escape(insight)));
    }
    html.push_str("</ul>\n");
    html.push_str("</section>\n");

    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(record)
            .unwrap_or_default()
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the results panel to a file.
pub fn write_html_report(record: &GradedSubmission, path: &Path) -> Result<()> {
    let html = generate_html(record);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --high: #22c55e; --mid: #eab308; --low: #ef4444; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.score { font-size: 3rem; font-weight: bold; }
.score.high { color: var(--high); }
.score.mid { color: var(--mid); }
.score.low { color: var(--low); }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.insights li { margin: 0.25rem 0; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
