//! Graded-submission records with JSON persistence and comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Aspect, GradeResult, Submission};
use crate::scorer::grade_submission;

/// A submission together with the result it was graded to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedSubmission {
    /// Unique record identifier.
    pub id: Uuid,
    /// When the grade was computed.
    pub graded_at: DateTime<Utc>,
    /// The input exactly as submitted.
    pub submission: Submission,
    /// The scorer's output.
    pub result: GradeResult,
}

impl GradedSubmission {
    /// Grade `submission` and stamp the record.
    pub fn grade(submission: Submission) -> Self {
        let result = grade_submission(&submission);
        Self {
            id: Uuid::new_v4(),
            graded_at: Utc::now(),
            submission,
            result,
        }
    }

    /// Save the record as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize record")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write record to {}", path.display()))?;
        Ok(())
    }

    /// Load a record from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read record from {}", path.display()))?;
        let record: GradedSubmission =
            serde_json::from_str(&content).context("failed to parse record JSON")?;
        Ok(record)
    }

    /// Compare this record against a baseline.
    pub fn compare(&self, baseline: &GradedSubmission) -> GradeComparison {
        let aspects = Aspect::ALL
            .iter()
            .map(|&aspect| {
                let before = baseline.result.points_for(aspect).unwrap_or(0);
                let after = self.result.points_for(aspect).unwrap_or(0);
                AspectDelta {
                    aspect,
                    baseline_points: before,
                    current_points: after,
                    delta: i16::from(after) - i16::from(before),
                }
            })
            .collect();

        let resolved_insights = baseline
            .result
            .insights
            .iter()
            .filter(|i| !self.result.insights.contains(i))
            .cloned()
            .collect();
        let new_insights = self
            .result
            .insights
            .iter()
            .filter(|i| !baseline.result.insights.contains(i))
            .cloned()
            .collect();

        GradeComparison {
            baseline_title: baseline.result.title.clone(),
            current_title: self.result.title.clone(),
            baseline_score: baseline.result.score,
            current_score: self.result.score,
            score_delta: i16::from(self.result.score) - i16::from(baseline.result.score),
            aspects,
            resolved_insights,
            new_insights,
        }
    }
}

/// Result of comparing two graded records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeComparison {
    pub baseline_title: String,
    pub current_title: String,
    pub baseline_score: u8,
    pub current_score: u8,
    /// Current minus baseline.
    pub score_delta: i16,
    /// Point changes per aspect, in rubric order.
    pub aspects: Vec<AspectDelta>,
    /// Insights present in the baseline but gone now.
    pub resolved_insights: Vec<String>,
    /// Insights that appeared since the baseline.
    pub new_insights: Vec<String>,
}

/// Point change for one aspect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectDelta {
    pub aspect: Aspect,
    pub baseline_points: u8,
    pub current_points: u8,
    pub delta: i16,
}

impl GradeComparison {
    /// Format the comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Score:** {}% -> {}% ({:+})\n\n",
            self.baseline_score, self.current_score, self.score_delta
        ));

        md.push_str("| Aspect | Baseline | Current | Delta |\n");
        md.push_str("|--------|----------|---------|-------|\n");
        for a in &self.aspects {
            md.push_str(&format!(
                "| {} | {} | {} | {:+} |\n",
                a.aspect, a.baseline_points, a.current_points, a.delta
            ));
        }

        if !self.resolved_insights.is_empty() {
            md.push_str("\n### Resolved\n\n");
            for i in &self.resolved_insights {
                md.push_str(&format!("- {i}\n"));
            }
        }

        if !self.new_insights.is_empty() {
            md.push_str("\n### New\n\n");
            for i in &self.new_insights {
                md.push_str(&format!("- {i}\n"));
            }
        }

        md
    }

    /// Returns true if the score went down.
    pub fn is_regression(&self) -> bool {
        self.score_delta < 0
    }
}
