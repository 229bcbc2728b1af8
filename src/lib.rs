//! Course schedule construction for a student course planner.
//!
//! Given a catalog of courses with weekly meeting times, this crate finds
//! every combination of courses whose meetings never overlap, filters the
//! combinations by a credit range or an exact course count, and lays a
//! chosen combination out on a 5-minute weekly grid for display.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Weekday`, `ClockTime`, `TimeSlot`,
//!   `Course`, `Professor`, `Schedule`, `TimeTable`
//! - **`conflict`**: Pairwise cross-slot conflict detection
//! - **`planner`**: Combination search, canonical dedupe, constraint filters
//! - **`timetable`**: Weekly grid builder
//! - **`validation`**: Catalog integrity checks (duplicate IDs, slot shape, clock alignment)
//!
//! # Pipeline
//!
//! ```text
//! courses → enumerate (conflict-pruned) → dedupe → filter → schedules → build_time_table
//! ```
//!
//! The engine is a pure function of its input: no I/O, no global state.
//! Persistence, HTTP and templating belong to the caller.
//!
//! # Example
//!
//! ```
//! use u_courseplan::models::Course;
//! use u_courseplan::planner::{enumerate_non_conflicting_schedules, ScheduleFilter};
//! use u_courseplan::timetable::build_time_table;
//!
//! let courses = vec![
//!     Course::new("a", "CSCI 101", "Intro").with_credits(4).with_slots("Mon 0900-1015").unwrap(),
//!     Course::new("b", "MATH 201", "Calculus").with_credits(4).with_slots("Mon 1030-1145").unwrap(),
//! ];
//!
//! let schedules = enumerate_non_conflicting_schedules(&courses, &ScheduleFilter::courses(2)).unwrap();
//! assert_eq!(schedules.len(), 1);
//!
//! let table = build_time_table(schedules[0].iter()).unwrap();
//! assert_eq!(table.len(), 3 * 12); // 09:00 through 11:55
//! ```

pub mod conflict;
pub mod error;
pub mod models;
pub mod planner;
pub mod timetable;
pub mod validation;

pub use error::{PlannerError, Result};
