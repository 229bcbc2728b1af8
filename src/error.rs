//! Error types for the planning engine.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Errors raised while ingesting a catalog, searching, or laying out a grid.
///
/// Unsatisfiable constraints are not errors: an impossible credit range
/// simply yields an empty schedule list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// A meeting time or slot string does not follow `HHMM` / `Day HHMM-HHMM`.
    #[error("Malformed time slot '{input}': {reason}")]
    MalformedTimeSlot { input: String, reason: String },

    /// A meeting does not start on, or does not last, a whole number of 5-minute blocks.
    #[error("Course '{course_id}' slot {slot} is not aligned to 5-minute blocks ({minutes} min)")]
    ClockAlignment {
        course_id: String,
        slot: String,
        minutes: u32,
    },

    /// A professor string could not be parsed.
    #[error("Malformed professor '{input}': {reason}")]
    MalformedProfessor { input: String, reason: String },

    /// Catalog failed integrity checks; every detected problem is listed.
    #[error("Catalog validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// Filter mode other than `credits` or `courses`.
    #[error("Unknown filter mode: {0}")]
    UnknownFilterMode(String),

    /// Wrong number of parameters for a filter mode.
    #[error("Filter mode '{mode}' expects {expected} parameter(s), got {got}")]
    InvalidFilterParams {
        mode: String,
        expected: usize,
        got: usize,
    },

    /// The search visited more nodes than the configured cap.
    #[error("Search aborted after exploring {explored} nodes (limit {limit})")]
    SearchBudgetExceeded { explored: u64, limit: u64 },

    /// The search ran past its wall-clock deadline.
    #[error("Search aborted after {elapsed_ms} ms ({explored} nodes explored)")]
    DeadlineExceeded { explored: u64, elapsed_ms: u64 },
}

impl From<Vec<ValidationError>> for PlannerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}
