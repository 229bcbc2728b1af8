//! Input validation for course catalogs.
//!
//! Checks structural integrity of the catalog before planning. Detects:
//! - Duplicate course IDs
//! - Meetings that end at or before their start
//! - Meetings not aligned to the 5-minute grid
//! - Professor ratings outside `[0, 5]`
//! - Professors with a blank family name
//!
//! Malformed `HHMM` strings never get this far: they are rejected when
//! the [`ClockTime`](crate::models::ClockTime) is parsed.

use crate::models::{Course, MAX_RATING};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same ID.
    DuplicateId,
    /// A meeting ends at or before it starts.
    InvertedTimeSlot,
    /// A meeting starts off-grid or lasts a non-multiple of 5 minutes.
    ClockAlignment,
    /// A professor rating is outside `[0, 5]`.
    RatingOutOfRange,
    /// A professor has an empty family name.
    MissingProfessorName,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. Every meeting has `start < end`
/// 3. Every meeting starts on a 5-minute boundary and lasts whole blocks
/// 4. Every professor rating lies in `[0, 5]`
/// 5. Every professor has a family name
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
    }

    for course in courses {
        for slot in &course.scheduled_times {
            if !slot.is_well_formed() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedTimeSlot,
                    format!("Course '{}' meeting {slot} ends before it starts", course.id),
                ));
            } else if slot.num_blocks().is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ClockAlignment,
                    format!(
                        "Course '{}' meeting {slot} ({} min) is not aligned to 5-minute blocks",
                        course.id,
                        slot.duration_minutes()
                    ),
                ));
            }
        }
    }

    for course in courses {
        for prof in &course.professors {
            if prof.last.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingProfessorName,
                    format!("Course '{}' lists a professor without a last name", course.id),
                ));
            }
            if !prof.has_valid_rating() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RatingOutOfRange,
                    format!(
                        "Course '{}' professor '{}' rating {:?} outside 0-{MAX_RATING}",
                        course.id, prof.last, prof.rating
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
