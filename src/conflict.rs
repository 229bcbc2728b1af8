//! Conflict detection between courses.
//!
//! Two courses conflict iff some meeting of one and some meeting of the
//! other fall on the same day with overlapping clock ranges. Every pair
//! of slots is compared: courses may meet a different number of times a
//! week, so slots are never matched by position.
//!
//! # Complexity
//! O(n² · s²) for a full check of n courses with up to s slots each.

pub use crate::models::OverlapPolicy;
use crate::models::Course;

/// Whether two courses have overlapping meetings.
pub fn courses_conflict(a: &Course, b: &Course, policy: OverlapPolicy) -> bool {
    a.scheduled_times.iter().any(|sa| {
        b.scheduled_times
            .iter()
            .any(|sb| sa.overlaps(sb, policy))
    })
}

/// Whether `candidate` conflicts with any course in `existing`.
///
/// Used to extend an already conflict-free set by one course.
pub fn conflicts_with(candidate: &Course, existing: &[&Course], policy: OverlapPolicy) -> bool {
    existing
        .iter()
        .any(|other| courses_conflict(candidate, other, policy))
}

/// Whether any two distinct courses in the set conflict.
pub fn has_conflict(courses: &[&Course], policy: OverlapPolicy) -> bool {
    courses
        .iter()
        .enumerate()
        .any(|(i, a)| conflicts_with(a, &courses[i + 1..], policy))
}

/// All conflicting pairs, as `(i, j)` index pairs with `i < j`.
pub fn conflicting_pairs(courses: &[Course], policy: OverlapPolicy) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..courses.len() {
        for j in (i + 1)..courses.len() {
            if courses_conflict(&courses[i], &courses[j], policy) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
