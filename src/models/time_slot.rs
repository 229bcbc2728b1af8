//! Weekly meeting slot model.
//!
//! A [`TimeSlot`] is one recurring weekly meeting: a day plus a closed
//! clock range `[start, end]`. Its textual form is `"Mon 0930-1045"`.
//!
//! # Overlap
//! Two slots can only overlap on the same day. Whether touching endpoints
//! (one meeting ends at 1000, the next starts at 1000) count as an overlap
//! is decided by [`OverlapPolicy`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ClockTime, Weekday, BLOCK_MINUTES};
use crate::error::{PlannerError, Result};

/// Boundary rule for comparing two clock ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// `startA <= endB && startB <= endA`: back-to-back meetings conflict.
    #[default]
    Inclusive,
    /// `startA < endB && startB < endA`: back-to-back meetings are allowed.
    Strict,
}

impl OverlapPolicy {
    /// Whether `[a_start, a_end]` and `[b_start, b_end]` overlap under this rule.
    #[inline]
    pub fn ranges_overlap(
        self,
        a_start: ClockTime,
        a_end: ClockTime,
        b_start: ClockTime,
        b_end: ClockTime,
    ) -> bool {
        match self {
            OverlapPolicy::Inclusive => a_start <= b_end && b_start <= a_end,
            OverlapPolicy::Strict => a_start < b_end && b_start < a_end,
        }
    }
}

/// One weekly meeting of a course.
///
/// `start < end` is expected but not enforced here; catalog validation
/// reports inverted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Meeting day.
    pub day: Weekday,
    /// Start time (inclusive).
    pub start: ClockTime,
    /// End time.
    pub end: ClockTime,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Self {
        Self { day, start, end }
    }

    /// Whether the slot ends strictly after it starts.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Meeting length in minutes (0 for inverted slots).
    pub fn duration_minutes(&self) -> u32 {
        self.end
            .minutes_since_midnight()
            .saturating_sub(self.start.minutes_since_midnight())
    }

    /// Number of grid blocks spanned.
    ///
    /// `None` unless the slot starts on a block boundary and lasts a
    /// positive whole number of blocks.
    pub fn num_blocks(&self) -> Option<u32> {
        let minutes = self.duration_minutes();
        if minutes == 0 || minutes % BLOCK_MINUTES != 0 || !self.start.is_block_aligned() {
            return None;
        }
        Some(minutes / BLOCK_MINUTES)
    }

    /// Whether two slots share a day and an overlapping clock range.
    pub fn overlaps(&self, other: &Self, policy: OverlapPolicy) -> bool {
        self.day == other.day
            && policy.ranges_overlap(self.start, self.end, other.start, other.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

impl FromStr for TimeSlot {
    type Err = PlannerError;

    /// Parses `"Mon 0930-1045"`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &str| PlannerError::MalformedTimeSlot {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (day, times) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| malformed("expected 'Day HHMM-HHMM'"))?;
        let (start, end) = times
            .trim()
            .split_once('-')
            .ok_or_else(|| malformed("expected 'HHMM-HHMM' after the day"))?;

        Ok(Self {
            day: day.parse()?,
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// Parses a comma-separated slot list (`"Mon 0930-1045, Wed 0930-1045"`).
///
/// Blank input yields an empty list: a course may have no meetings.
pub fn parse_time_slots(s: &str) -> Result<Vec<TimeSlot>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(TimeSlot::from_str)
        .collect()
}
