//! Course planning domain models.
//!
//! Provides the data types flowing through the planner: catalog input
//! (courses and their weekly meetings), search output (schedules) and
//! display output (the weekly timetable grid).
//!
//! # Domain Mappings
//!
//! | u-courseplan | Catalog store | Page template |
//! |--------------|---------------|---------------|
//! | Course | course document | course list entry |
//! | TimeSlot | `scheduledTimes[i]` | - |
//! | Schedule | - | one proposed schedule |
//! | TimeTable | - | weekly grid |

mod clock;
mod course;
mod schedule;
mod time_slot;
mod timetable;

pub use clock::{ClockTime, Weekday, BLOCKS_PER_HOUR, BLOCK_MINUTES};
pub use course::{assign_unique_slugs, parse_professors, slugify, Course, Professor, MAX_RATING};
pub use schedule::{CanonicalKey, Schedule};
pub use time_slot::{parse_time_slots, OverlapPolicy, TimeSlot};
pub use timetable::{CourseBlock, TimeTable, TimeTableCell, TimeTableRow, DAYS_PER_WEEK};
