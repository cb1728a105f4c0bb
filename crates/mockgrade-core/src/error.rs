//! Session error types.
//!
//! The scorer itself never fails. These errors cover the user actions a
//! session rejects, each paired with the notice a front end shows.

use thiserror::Error;

/// Errors raised by [`crate::session::Session`] actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Grade was requested with blank text.
    #[error("submission text is empty")]
    EmptySubmission,

    /// Regrade was requested before anything was graded.
    #[error("no graded submission to regrade")]
    NothingToRegrade,

    /// Copy/export was requested before anything was graded.
    #[error("no graded submission to copy")]
    NothingToCopy,
}

impl SessionError {
    /// User-facing advisory text for this error.
    pub fn notice(&self) -> &'static str {
        match self {
            SessionError::EmptySubmission => "Please enter some text before grading.",
            SessionError::NothingToRegrade => "Nothing to regrade yet. Grade a submission first.",
            SessionError::NothingToCopy => "Nothing to copy yet. Grade a submission first.",
        }
    }
}
