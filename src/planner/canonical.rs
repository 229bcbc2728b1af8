//! Canonical ordering and deduplication of schedules.
//!
//! A schedule's identity is the set of its course ids. Each schedule is
//! sorted by id and keyed by [`CanonicalKey`]; the first schedule seen
//! for a key survives and later ones are dropped. Survivors keep their
//! input order, so the output is deterministic for a given input.

use std::collections::HashSet;

use crate::models::{CanonicalKey, Schedule};

/// Sorts every schedule's courses by id.
pub fn canonicalize(schedules: &mut [Schedule<'_>]) {
    for schedule in schedules.iter_mut() {
        schedule.canonicalize();
    }
}

/// Canonicalizes and removes schedules with an already-seen course-id set.
pub fn dedupe<'a>(schedules: Vec<Schedule<'a>>) -> Vec<Schedule<'a>> {
    let mut seen: HashSet<CanonicalKey<'a>> = HashSet::with_capacity(schedules.len());

    schedules
        .into_iter()
        .filter_map(|mut schedule| {
            schedule.canonicalize();
            seen.insert(schedule.canonical_key()).then_some(schedule)
        })
        .collect()
}
