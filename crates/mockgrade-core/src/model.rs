//! Core data model types for mockgrade.
//!
//! These are the types shared by the scorer, the session, and every
//! renderer: a submission going in, and a graded result coming out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title used when a submission arrives without one.
pub const DEFAULT_TITLE: &str = "Untitled Submission";

/// Shown by renderers in place of an empty insights list.
pub const NO_INSIGHTS_FALLBACK: &str = "No major issues detected. Well done!";

/// A piece of text submitted for grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Title as entered. May be blank; the scorer resolves the default.
    #[serde(default)]
    pub title: String,
    /// The free-text body being graded.
    pub text: String,
}

impl Submission {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Returns `true` if the text has nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One graded dimension of the rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    #[serde(rename = "Structure & Organization")]
    StructureAndOrganization,
    #[serde(rename = "Coherence & Argument")]
    CoherenceAndArgument,
    #[serde(rename = "Grammar & Style")]
    GrammarAndStyle,
}

impl Aspect {
    /// All aspects, in rubric order.
    pub const ALL: [Aspect; 3] = [
        Aspect::StructureAndOrganization,
        Aspect::CoherenceAndArgument,
        Aspect::GrammarAndStyle,
    ];
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aspect::StructureAndOrganization => write!(f, "Structure & Organization"),
            Aspect::CoherenceAndArgument => write!(f, "Coherence & Argument"),
            Aspect::GrammarAndStyle => write!(f, "Grammar & Style"),
        }
    }
}

/// Feedback for a single aspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricItem {
    /// Which dimension this row grades.
    pub aspect: Aspect,
    /// Human-readable comment, embedding the sub-score as a percentage.
    pub comment: String,
    /// Points awarded, 0 to 10.
    pub points: u8,
}

/// The output of one grading pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Resolved title (never blank).
    pub title: String,
    /// Composite score, 0 to 100.
    pub score: u8,
    /// Exactly three rows, in [`Aspect::ALL`] order.
    pub rubric: Vec<RubricItem>,
    /// Advisory strings, zero to four.
    #[serde(default)]
    pub insights: Vec<String>,
}

impl GradeResult {
    /// Points for a given aspect, if present.
    pub fn points_for(&self, aspect: Aspect) -> Option<u8> {
        self.rubric
            .iter()
            .find(|item| item.aspect == aspect)
            .map(|item| item.points)
    }

    /// Insights to display, substituting the fallback line when empty.
    pub fn display_insights(&self) -> Vec<&str> {
        if self.insights.is_empty() {
            vec![NO_INSIGHTS_FALLBACK]
        } else {
            self.insights.iter().map(String::as_str).collect()
        }
    }
}

/// Supported output formats for rendering a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
