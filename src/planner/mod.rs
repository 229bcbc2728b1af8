//! Schedule construction: search, dedupe, filter.
//!
//! `SchedulePlanner` runs the full pipeline over an immutable catalog:
//!
//! 1. Validate the catalog (optional, on by default).
//! 2. Enumerate every conflict-free combination ([`enumerate_schedules`]).
//! 3. Canonicalize and dedupe by course-id set ([`dedupe`]).
//! 4. Keep the combinations matching a [`ScheduleFilter`].
//! 5. Optionally keep only those containing every mandatory course.
//!
//! Each call is independent: no state survives between calls.
//!
//! # Example
//!
//! ```
//! use u_courseplan::models::Course;
//! use u_courseplan::planner::{PlannerConfig, ScheduleFilter, SchedulePlanner};
//!
//! let courses = vec![
//!     Course::new("a", "CSCI 101", "Intro").with_credits(4).with_slots("Mon 0900-0950").unwrap(),
//!     Course::new("b", "MATH 201", "Calc").with_credits(4).with_slots("Tue 0900-0950").unwrap(),
//!     Course::new("c", "PHYS 101", "Physics").with_credits(4).with_slots("Mon 0930-1045").unwrap(),
//! ];
//!
//! let planner = SchedulePlanner::new(PlannerConfig::default());
//! let schedules = planner.plan(&courses, &ScheduleFilter::credits(8, 8)).unwrap();
//! // {a, b} and {b, c}; a and c overlap on Monday.
//! assert_eq!(schedules.len(), 2);
//! ```

mod canonical;
mod config;
mod enumerate;
mod filter;

pub use canonical::{canonicalize, dedupe};
pub use config::{PlannerConfig, DEFAULT_MAX_NODES};
pub use enumerate::{enumerate_schedules, SearchBounds, SearchStats};
pub use filter::{filter_schedules, ScheduleFilter, DEFAULT_MAX_CREDITS, DEFAULT_MIN_CREDITS};

use log::{debug, info};

use crate::error::Result;
use crate::models::{Course, Schedule};
use crate::validation::validate_catalog;

/// Runs the schedule construction pipeline under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct SchedulePlanner {
    config: PlannerConfig,
}

impl SchedulePlanner {
    /// Creates a planner.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Every deduplicated, filtered, conflict-free schedule of `courses`.
    ///
    /// An empty catalog or an unsatisfiable filter yields an empty list.
    ///
    /// With `validate_input` set (the default) the whole catalog goes through
    /// [`validate_catalog`] first, including checks such as professor ratings
    /// that never change which schedules exist. Callers that validate records
    /// upstream can turn it off with [`PlannerConfig::with_validation`].
    pub fn plan<'a>(
        &self,
        courses: &'a [Course],
        filter: &ScheduleFilter,
    ) -> Result<Vec<Schedule<'a>>> {
        if self.config.validate_input {
            validate_catalog(courses)?;
        }

        let (raw, stats) = enumerate_schedules(courses, filter.search_bounds(), &self.config)?;
        let raw_count = raw.len();

        let unique = dedupe(raw);
        debug!(
            "dedupe kept {} of {} schedules",
            unique.len(),
            raw_count
        );

        let mut schedules = filter_schedules(unique, filter);
        if self.config.require_mandatory {
            schedules.retain(|s| s.includes_all_mandatory(courses));
        }

        info!(
            "planned {} schedule(s) from {} courses (mode={}, nodes={})",
            schedules.len(),
            courses.len(),
            filter.mode(),
            stats.nodes_explored
        );

        Ok(schedules)
    }

    /// Like [`plan`](Self::plan), taking the filter in its `(mode, params)` form.
    pub fn plan_by_mode<'a>(
        &self,
        courses: &'a [Course],
        mode: &str,
        params: &[u32],
    ) -> Result<Vec<Schedule<'a>>> {
        let filter = ScheduleFilter::from_mode(mode, params)?;
        self.plan(courses, &filter)
    }
}

/// Every deduplicated, filtered, conflict-free schedule, with default settings.
///
/// Default settings include catalog validation: a catalog with, say, an
/// out-of-range professor rating is rejected with
/// [`PlannerError::Validation`](crate::PlannerError::Validation). Use
/// [`SchedulePlanner`] with `with_validation(false)` to skip it.
pub fn enumerate_non_conflicting_schedules<'a>(
    courses: &'a [Course],
    filter: &ScheduleFilter,
) -> Result<Vec<Schedule<'a>>> {
    SchedulePlanner::default().plan(courses, filter)
}
