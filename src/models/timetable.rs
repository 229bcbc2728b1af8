//! Weekly timetable (display grid) model.
//!
//! The grid has one row per 5-minute block and seven day columns
//! (`Sun … Sat`). A course meeting occupies one column for `num_blocks`
//! consecutive rows: the first row holds the [`CourseBlock`], every
//! following row is marked `spanned_over` so a renderer can skip it.
//!
//! Rows and cells serialize with the camelCase field names the page
//! template reads (`timeStr`, `newRow`, `coursesAtTime`, `numBlocks`, ...).

use serde::Serialize;

use super::{ClockTime, Professor, BLOCK_MINUTES};

/// Number of day columns.
pub const DAYS_PER_WEEK: usize = 7;

/// Display data for one course meeting, copied out of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseBlock {
    /// Rows spanned by the meeting.
    pub num_blocks: u32,
    pub course_number: String,
    pub course_name: String,
    pub professors: Vec<Professor>,
    pub color: String,
}

/// One grid cell.
///
/// Empty cells serialize as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTableCell {
    /// Meeting that starts in this row, if any.
    #[serde(flatten)]
    pub block: Option<CourseBlock>,
    /// Covered by a meeting that started in an earlier row.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub spanned_over: bool,
}

impl TimeTableCell {
    /// Whether nothing starts in or covers this cell.
    pub fn is_empty(&self) -> bool {
        self.block.is_none() && !self.spanned_over
    }
}

/// One 5-minute row of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTableRow {
    /// Row start time.
    #[serde(skip)]
    pub time: ClockTime,
    /// Row label, `"HH:MM"`.
    pub time_str: String,
    /// Rendering hint: true on the hour and half hour.
    pub new_row: bool,
    /// Cells indexed by [`Weekday::index`](super::Weekday::index).
    pub courses_at_time: [TimeTableCell; DAYS_PER_WEEK],
}

impl TimeTableRow {
    /// Creates an empty row starting at `time`.
    pub fn new(time: ClockTime) -> Self {
        Self {
            time,
            time_str: time.label(),
            new_row: time.minute() % 30 == 0,
            courses_at_time: Default::default(),
        }
    }
}

/// A complete weekly grid.
///
/// Covers whole hours: from `first_hour:00` through `last_hour:55`.
/// Serializes as its row list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeTable {
    rows: Vec<TimeTableRow>,
}

impl TimeTable {
    /// Creates an empty grid covering `first_hour..=last_hour`.
    ///
    /// A degenerate range (`first_hour > last_hour`) yields no rows.
    pub fn spanning(first_hour: u8, last_hour: u8) -> Self {
        let rows = (first_hour..=last_hour.min(23))
            .flat_map(|hour| {
                (0..60)
                    .step_by(BLOCK_MINUTES as usize)
                    .filter_map(move |minute| ClockTime::new(hour, minute).ok())
            })
            .map(TimeTableRow::new)
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, earliest first.
    pub fn rows(&self) -> &[TimeTableRow] {
        &self.rows
    }

    /// Mutable access for the builder.
    pub(crate) fn rows_mut(&mut self) -> &mut [TimeTableRow] {
        &mut self.rows
    }

    /// Consumes the grid, returning its rows.
    pub fn into_rows(self) -> Vec<TimeTableRow> {
        self.rows
    }

    /// Index of the row starting exactly at `time`.
    pub fn row_index(&self, time: ClockTime) -> Option<usize> {
        let first = self.rows.first()?.time.minutes_since_midnight();
        let t = time.minutes_since_midnight();
        if t < first || (t - first) % BLOCK_MINUTES != 0 {
            return None;
        }
        let idx = ((t - first) / BLOCK_MINUTES) as usize;
        (idx < self.rows.len()).then_some(idx)
    }

    /// Row starting exactly at `time`.
    pub fn row_at(&self, time: ClockTime) -> Option<&TimeTableRow> {
        self.row_index(time).map(|i| &self.rows[i])
    }
}
