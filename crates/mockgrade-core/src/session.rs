//! Grading session: the state behind a single user's grade, regrade,
//! clear, and copy actions.
//!
//! A session owns the most recent graded submission. Actions take
//! `&mut self`, so at most one grade is in flight per session.

use std::time::Duration;

use crate::config::MockgradeConfig;
use crate::error::SessionError;
use crate::export::to_plain_text;
use crate::model::Submission;
use crate::report::GradedSubmission;
use crate::traits::Clipboard;

/// Outcome of a copy action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The primary clipboard accepted the text.
    Copied,
    /// The primary failed; the text went to the manual-selection sink.
    ManualSelection,
    /// Both sinks failed. Carries the notice to show.
    Failed(String),
}

/// Notice shown when neither sink could take the export.
pub const COPY_FAILED_NOTICE: &str =
    "Could not copy feedback automatically. Please copy it manually.";

/// Session state for one front end.
pub struct Session {
    delay: Duration,
    last: Option<GradedSubmission>,
}

impl Session {
    pub fn new(config: &MockgradeConfig) -> Self {
        Self::with_delay(config.delay())
    }

    /// A session with an explicit simulated latency.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay, last: None }
    }

    /// The cached graded submission, if any.
    pub fn last(&self) -> Option<&GradedSubmission> {
        self.last.as_ref()
    }

    /// Grade a new submission, replacing the cached one.
    ///
    /// Blank text is rejected without touching the cache.
    pub async fn grade(
        &mut self,
        title: &str,
        text: &str,
    ) -> Result<&GradedSubmission, SessionError> {
        let submission = Submission::new(title, text);
        if submission.is_blank() {
            tracing::info!("rejected blank submission");
            return Err(SessionError::EmptySubmission);
        }
        self.run(submission).await
    }

    /// Grade the cached submission again.
    pub async fn regrade(&mut self) -> Result<&GradedSubmission, SessionError> {
        let submission = self
            .last
            .as_ref()
            .map(|record| record.submission.clone())
            .ok_or(SessionError::NothingToRegrade)?;
        self.run(submission).await
    }

    /// Drop the cached submission.
    pub fn clear(&mut self) {
        if self.last.take().is_some() {
            tracing::info!("cleared session");
        }
    }

    /// The cached result in plain-text export format.
    pub fn export_text(&self) -> Result<String, SessionError> {
        self.last
            .as_ref()
            .map(|record| to_plain_text(&record.result))
            .ok_or(SessionError::NothingToCopy)
    }

    /// Copy the export to `primary`, falling back to `fallback`.
    pub fn copy_to(
        &self,
        primary: &mut dyn Clipboard,
        fallback: &mut dyn Clipboard,
    ) -> Result<CopyOutcome, SessionError> {
        let text = self.export_text()?;

        match primary.write_text(&text) {
            Ok(()) => {
                tracing::info!(sink = primary.name(), "copied feedback");
                return Ok(CopyOutcome::Copied);
            }
            Err(e) => {
                tracing::warn!(sink = primary.name(), "copy failed: {e:#}");
            }
        }

        match fallback.write_text(&text) {
            Ok(()) => {
                tracing::info!(sink = fallback.name(), "feedback offered for manual selection");
                Ok(CopyOutcome::ManualSelection)
            }
            Err(e) => {
                tracing::warn!(sink = fallback.name(), "fallback copy failed: {e:#}");
                Ok(CopyOutcome::Failed(COPY_FAILED_NOTICE.to_string()))
            }
        }
    }

    async fn run(&mut self, submission: Submission) -> Result<&GradedSubmission, SessionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let record = GradedSubmission::grade(submission);
        tracing::info!(
            title = %record.result.title,
            score = record.result.score,
            "graded submission"
        );
        let cached: &GradedSubmission = self.last.insert(record);
        Ok(cached)
    }
}
