//! Constraint filters over candidate schedules.
//!
//! Two modes are defined:
//!
//! | Mode | Params | Keeps |
//! |------|--------|-------|
//! | `credits` | `[min, max]` | `min <= sum(credits) <= max` |
//! | `courses` | `[count]` | exactly `count` courses |
//!
//! An impossible constraint (`min > max`, or a count larger than the
//! catalog) simply matches nothing. An unknown mode is rejected when the
//! filter is built from its `(mode, params)` form.

use serde::{Deserialize, Serialize};

use super::SearchBounds;
use crate::error::{PlannerError, Result};
use crate::models::Schedule;

/// Default credit window: a typical full-time load.
pub const DEFAULT_MIN_CREDITS: u32 = 12;
/// Upper end of the default credit window.
pub const DEFAULT_MAX_CREDITS: u32 = 18;

/// Which schedules to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScheduleFilter {
    /// Total credits within `[min_credits, max_credits]`, inclusive.
    Credits { min_credits: u32, max_credits: u32 },
    /// Exactly `count` courses.
    Courses { count: usize },
}

impl Default for ScheduleFilter {
    fn default() -> Self {
        Self::Credits {
            min_credits: DEFAULT_MIN_CREDITS,
            max_credits: DEFAULT_MAX_CREDITS,
        }
    }
}

impl ScheduleFilter {
    /// Credit-range filter.
    pub fn credits(min_credits: u32, max_credits: u32) -> Self {
        Self::Credits {
            min_credits,
            max_credits,
        }
    }

    /// Exact course-count filter.
    pub fn courses(count: usize) -> Self {
        Self::Courses { count }
    }

    /// Builds a filter from its boundary form: `("credits", [min, max])`
    /// or `("courses", [count])`.
    pub fn from_mode(mode: &str, params: &[u32]) -> Result<Self> {
        let expect = |expected: usize| -> Result<()> {
            if params.len() == expected {
                Ok(())
            } else {
                Err(PlannerError::InvalidFilterParams {
                    mode: mode.to_string(),
                    expected,
                    got: params.len(),
                })
            }
        };

        match mode {
            "credits" => {
                expect(2)?;
                Ok(Self::credits(params[0], params[1]))
            }
            "courses" => {
                expect(1)?;
                Ok(Self::courses(params[0] as usize))
            }
            other => Err(PlannerError::UnknownFilterMode(other.to_string())),
        }
    }

    /// Mode name as used at the boundary.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Credits { .. } => "credits",
            Self::Courses { .. } => "courses",
        }
    }

    /// Whether a schedule passes the filter.
    pub fn matches(&self, schedule: &Schedule<'_>) -> bool {
        match *self {
            Self::Credits {
                min_credits,
                max_credits,
            } => {
                let total = schedule.total_credits();
                min_credits <= total && total <= max_credits
            }
            Self::Courses { count } => schedule.len() == count,
        }
    }

    /// Search bounds implied by this filter.
    ///
    /// Sets that already exceed the filter's ceiling can never pass it,
    /// and neither can their supersets.
    pub fn search_bounds(&self) -> SearchBounds {
        match *self {
            Self::Credits { max_credits, .. } => SearchBounds {
                max_courses: None,
                max_credits: Some(max_credits),
            },
            Self::Courses { count } => SearchBounds {
                max_courses: Some(count),
                max_credits: None,
            },
        }
    }
}

/// Keeps the schedules matching `filter`, preserving order.
pub fn filter_schedules<'a>(
    schedules: Vec<Schedule<'a>>,
    filter: &ScheduleFilter,
) -> Vec<Schedule<'a>> {
    schedules
        .into_iter()
        .filter(|s| filter.matches(s))
        .collect()
}
