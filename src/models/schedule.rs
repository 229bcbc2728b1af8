//! Schedule (solution) model.
//!
//! A schedule is a set of catalog courses whose weekly meetings never
//! overlap. It borrows the courses from the catalog; identity for
//! deduplication is the set of course ids, not discovery order.

use serde::Serialize;
use std::collections::HashSet;

use super::Course;

/// A conflict-free combination of courses.
///
/// Serializes as the list of its courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schedule<'a> {
    courses: Vec<&'a Course>,
}

/// Order-independent identity of a schedule: its sorted course ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey<'a>(Vec<&'a str>);

impl<'a> CanonicalKey<'a> {
    /// The sorted ids.
    pub fn ids(&self) -> &[&'a str] {
        &self.0
    }
}

impl<'a> Schedule<'a> {
    /// Wraps a list of courses. Conflict-freedom is the caller's concern.
    pub fn new(courses: Vec<&'a Course>) -> Self {
        Self { courses }
    }

    /// Courses in their current order.
    pub fn courses(&self) -> &[&'a Course] {
        &self.courses
    }

    /// Iterates over the courses.
    pub fn iter(&self) -> impl Iterator<Item = &'a Course> + '_ {
        self.courses.iter().copied()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the schedule holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of course credits, saturating at `u32::MAX`.
    pub fn total_credits(&self) -> u32 {
        self.courses
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.credits))
    }

    /// Course ids in current order.
    pub fn course_ids(&self) -> Vec<&'a str> {
        self.courses.iter().map(|&c| c.id.as_str()).collect()
    }

    /// Whether a course with this id is part of the schedule.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }

    /// Whether every mandatory course of `catalog` is included.
    pub fn includes_all_mandatory(&self, catalog: &[Course]) -> bool {
        let ids: HashSet<&str> = self.courses.iter().map(|c| c.id.as_str()).collect();
        catalog
            .iter()
            .filter(|c| c.mandatory)
            .all(|c| ids.contains(c.id.as_str()))
    }

    /// Sorts the courses by id (lexicographic, stable for equal ids).
    pub fn canonicalize(&mut self) {
        self.courses.sort_by(|a, b| a.id.cmp(&b.id));
    }

    /// Order-independent identity of this schedule.
    pub fn canonical_key(&self) -> CanonicalKey<'a> {
        let mut ids = self.course_ids();
        ids.sort_unstable();
        CanonicalKey(ids)
    }
}

impl<'s, 'a> IntoIterator for &'s Schedule<'a> {
    type Item = &'a Course;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, &'a Course>>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter().copied()
    }
}
