//! mockgrade-report — HTML rendering of graded submissions.

pub mod html;
