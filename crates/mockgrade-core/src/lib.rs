//! mockgrade-core — Heuristic scorer, session state, and text export.
//!
//! This crate defines the data model, the deterministic scoring function,
//! and the session that drives grade/regrade/clear/copy actions on top of it.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod report;
pub mod scorer;
pub mod session;
pub mod traits;

pub use model::{Aspect, GradeResult, RubricItem, Submission};
pub use scorer::grade;
