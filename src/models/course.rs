//! Course and professor models.
//!
//! A course is the unit the planner combines into schedules. It carries
//! its weekly meetings plus the display fields (number, name, professors,
//! color) that the timetable copies into grid cells.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::time_slot::parse_time_slots;
use super::TimeSlot;
use crate::error::{PlannerError, Result};

/// Highest allowed professor rating.
pub const MAX_RATING: f64 = 5.0;

/// A course offering from the catalog.
///
/// Read-only for the duration of one planner call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier (document id in the catalog store).
    #[serde(alias = "_id")]
    pub id: String,
    /// Catalog number (e.g., "CSCI-UA 101").
    pub course_number: String,
    /// Human-readable title.
    pub course_name: String,
    /// Credit value.
    pub credits: u32,
    /// Weekly meetings, in catalog order. May be empty.
    #[serde(default)]
    pub scheduled_times: Vec<TimeSlot>,
    /// Instructors.
    #[serde(default)]
    pub professors: Vec<Professor>,
    /// Whether the student must take this course.
    #[serde(default)]
    pub mandatory: bool,
    /// Display color for the timetable.
    #[serde(default)]
    pub color: String,
    /// URL-safe unique handle derived from number and name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Course {
    /// Creates a course with no meetings and zero credits.
    pub fn new(
        id: impl Into<String>,
        course_number: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            course_number: course_number.into(),
            course_name: course_name.into(),
            credits: 0,
            scheduled_times: Vec::new(),
            professors: Vec::new(),
            mandatory: false,
            color: String::new(),
            slug: None,
        }
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a weekly meeting.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.scheduled_times.push(slot);
        self
    }

    /// Adds meetings from their textual form (`"Mon 0930-1045, Wed 0930-1045"`).
    pub fn with_slots(mut self, slots: &str) -> Result<Self> {
        self.scheduled_times.extend(parse_time_slots(slots)?);
        Ok(self)
    }

    /// Adds an instructor.
    pub fn with_professor(mut self, professor: Professor) -> Self {
        self.professors.push(professor);
        self
    }

    /// Marks the course as mandatory.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// A course instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    /// Given name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Family name.
    pub last: String,
    /// Student rating in `[0, 5]`, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Professor {
    /// Creates a professor known by family name only.
    pub fn new(last: impl Into<String>) -> Self {
        Self {
            first: None,
            last: last.into(),
            rating: None,
        }
    }

    /// Sets the given name.
    pub fn with_first(mut self, first: impl Into<String>) -> Self {
        self.first = Some(first.into());
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Whether the rating, if present, lies in `[0, 5]`.
    pub fn has_valid_rating(&self) -> bool {
        self.rating
            .map_or(true, |r| (0.0..=MAX_RATING).contains(&r))
    }
}

impl fmt::Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = &self.first {
            write!(f, "{first} ")?;
        }
        f.write_str(&self.last)?;
        if let Some(rating) = self.rating {
            write!(f, " ({rating})")?;
        }
        Ok(())
    }
}

impl FromStr for Professor {
    type Err = PlannerError;

    /// Parses `"Last"`, `"First Last"`, `"Last (4.5)"` or `"First Last (4.5)"`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: String| PlannerError::MalformedProfessor {
            input: s.to_string(),
            reason,
        };
        let parse_rating = |token: &str| -> Result<f64> {
            let inner = token
                .strip_prefix('(')
                .and_then(|t| t.strip_suffix(')'))
                .ok_or_else(|| malformed(format!("rating '{token}' must look like (4.5)")))?;
            let rating: f64 = inner
                .parse()
                .map_err(|_| malformed(format!("rating '{inner}' is not a number")))?;
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(malformed(format!("rating {rating} outside 0-5")));
            }
            Ok(rating)
        };

        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [last] => Ok(Professor::new(*last)),
            [last, rating] if rating.starts_with('(') => {
                Ok(Professor::new(*last).with_rating(parse_rating(rating)?))
            }
            [first, last] => Ok(Professor::new(*last).with_first(*first)),
            [first, last, rating] => Ok(Professor::new(*last)
                .with_first(*first)
                .with_rating(parse_rating(rating)?)),
            _ => Err(malformed(format!(
                "expected 1-3 space-separated parts, got {}",
                parts.len()
            ))),
        }
    }
}

/// Parses a comma-separated professor list (`"Ada Lovelace (4.8), Turing"`).
pub fn parse_professors(s: &str) -> Result<Vec<Professor>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Professor::from_str)
        .collect()
}

/// Derives a URL-safe handle from a course number and name.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single `-`.
pub fn slugify(course_number: &str, course_name: &str) -> String {
    let mut slug = String::with_capacity(course_number.len() + course_name.len() + 1);
    let mut pending_dash = false;

    for c in course_number.chars().chain(std::iter::once(' ')).chain(course_name.chars()) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Assigns a unique slug to every course.
///
/// The first course with a given base slug keeps it; later collisions get
/// a zero-padded counter suffix (`-0001`, `-0002`, ...).
pub fn assign_unique_slugs(courses: &mut [Course]) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for course in courses.iter_mut() {
        let base = slugify(&course.course_number, &course.course_name);
        let count = seen.entry(base.clone()).or_insert(0);
        course.slug = Some(if *count == 0 {
            base
        } else {
            format!("{base}-{count:04}")
        });
        *count += 1;
    }
}
