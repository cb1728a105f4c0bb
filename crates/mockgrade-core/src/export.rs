//! Plain-text export of a graded submission, as placed on the clipboard.

use crate::model::GradeResult;

/// Render a result in the plain-text export format.
///
/// ```text
/// Title: <title>
/// Score: <score>%
///
/// Rubric:
/// - <aspect>: <comment> (Points: <points>)
///
/// Insights:
/// - <insight>
/// ```
///
/// An empty insights list is rendered as the single fallback line.
pub fn to_plain_text(result: &GradeResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Title: {}\n", result.title));
    out.push_str(&format!("Score: {}%\n", result.score));

    out.push_str("\nRubric:\n");
    for item in &result.rubric {
        out.push_str(&format!(
            "- {}: {} (Points: {})\n",
            item.aspect, item.comment, item.points
        ));
    }

    out.push_str("\nInsights:\n");
    for insight in result.display_insights() {
        out.push_str(&format!("- {insight}\n"));
    }

    out
}
