//! Conflict-pruned combination search.
//!
//! # Algorithm
//!
//! Depth-first over course indices, only ever extending the current set
//! with a course of higher index than any already chosen:
//!
//! 1. For each index `i >= from`, test course `i` against the current set.
//! 2. On conflict, prune: no superset of a conflicting set is valid.
//! 3. Otherwise push it, emit the set as a schedule, and recurse from `i + 1`.
//!
//! Each subset is visited at most once, so there are no order-duplicates
//! and the worst case is `2^n` nodes rather than `n!`. Every non-empty
//! conflict-free subset is emitted, including those that later extend
//! into larger ones.
//!
//! # Bounds
//! Optional [`SearchBounds`] stop descending once a set is already too
//! large or too heavy to pass the final filter. Credits are non-negative,
//! so supersets never come back into range.

use log::{debug, warn};
use std::time::Instant;

use super::PlannerConfig;
use crate::conflict::conflicts_with;
use crate::error::{PlannerError, Result};
use crate::models::{Course, OverlapPolicy, Schedule};

/// Nodes between wall-clock checks.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Upper bounds that let the search stop descending early.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBounds {
    /// Never build sets larger than this.
    pub max_courses: Option<usize>,
    /// Never build sets heavier than this.
    pub max_credits: Option<u32>,
}

/// Counters from one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate extensions examined.
    pub nodes_explored: u64,
    /// Extensions rejected because of a meeting conflict.
    pub pruned_conflicts: u64,
    /// Extensions rejected by [`SearchBounds`].
    pub pruned_bounds: u64,
    /// Schedules emitted.
    pub emitted: u64,
}

struct Search<'a> {
    courses: &'a [Course],
    policy: OverlapPolicy,
    bounds: SearchBounds,
    max_nodes: Option<u64>,
    deadline: Option<(Instant, u64)>,
    current: Vec<&'a Course>,
    current_credits: u64,
    found: Vec<Schedule<'a>>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn tick(&mut self) -> Result<()> {
        self.stats.nodes_explored += 1;
        let explored = self.stats.nodes_explored;

        if let Some(limit) = self.max_nodes {
            if explored > limit {
                return Err(PlannerError::SearchBudgetExceeded { explored, limit });
            }
        }

        if let Some((started, limit_ms)) = self.deadline {
            if explored % DEADLINE_CHECK_INTERVAL == 0 {
                let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                if elapsed_ms > limit_ms {
                    return Err(PlannerError::DeadlineExceeded {
                        explored,
                        elapsed_ms,
                    });
                }
            }
        }

        Ok(())
    }

    fn within_bounds(&self, course: &Course) -> bool {
        let size_ok = self
            .bounds
            .max_courses
            .map_or(true, |max| self.current.len() < max);
        let credits_ok = self
            .bounds
            .max_credits
            .map_or(true, |max| {
                self.current_credits + u64::from(course.credits) <= u64::from(max)
            });
        size_ok && credits_ok
    }

    fn extend(&mut self, from: usize) -> Result<()> {
        let courses = self.courses;
        for (i, course) in courses.iter().enumerate().skip(from) {
            self.tick()?;

            if !self.within_bounds(course) {
                self.stats.pruned_bounds += 1;
                continue;
            }
            if conflicts_with(course, &self.current, self.policy) {
                self.stats.pruned_conflicts += 1;
                continue;
            }

            self.current.push(course);
            self.current_credits += u64::from(course.credits);
            self.found.push(Schedule::new(self.current.clone()));
            self.stats.emitted += 1;

            self.extend(i + 1)?;

            self.current_credits -= u64::from(course.credits);
            self.current.pop();
        }
        Ok(())
    }
}

/// Enumerates every non-empty conflict-free combination of `courses`.
///
/// Courses within each schedule appear in catalog order.
pub fn enumerate_schedules<'a>(
    courses: &'a [Course],
    bounds: SearchBounds,
    config: &PlannerConfig,
) -> Result<(Vec<Schedule<'a>>, SearchStats)> {
    let mut search = Search {
        courses,
        policy: config.overlap_policy,
        bounds,
        max_nodes: config.max_nodes,
        deadline: config.deadline_ms.map(|ms| (Instant::now(), ms)),
        current: Vec::with_capacity(courses.len()),
        current_credits: 0,
        found: Vec::new(),
        stats: SearchStats::default(),
    };

    if let Err(err) = search.extend(0) {
        warn!(
            "schedule search aborted: {err} ({} schedules found so far)",
            search.found.len()
        );
        return Err(err);
    }

    debug!(
        "schedule search over {} courses: {} nodes, {} conflict prunes, {} bound prunes, {} emitted",
        courses.len(),
        search.stats.nodes_explored,
        search.stats.pruned_conflicts,
        search.stats.pruned_bounds,
        search.stats.emitted
    );

    Ok((search.found, search.stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::has_conflict;
    use std::time::Duration;

    fn course(id: &str, credits: u32, slots: &str) -> Course {
        Course::new(id, id, id)
            .with_credits(credits)
            .with_slots(slots)
            .unwrap()
    }

    fn ids(schedules: &[Schedule<'_>]) -> Vec<Vec<String>> {
        schedules
            .iter()
            .map(|s| s.course_ids().into_iter().map(String::from).collect())
            .collect()
    }

    fn run(courses: &[Course]) -> Vec<Schedule<'_>> {
        enumerate_schedules(courses, SearchBounds::default(), &PlannerConfig::default())
            .unwrap()
            .0
    }

    #[test]
    fn test_empty_catalog() {
        let (found, stats) =
            enumerate_schedules(&[], SearchBounds::default(), &PlannerConfig::default()).unwrap();
        assert!(found.is_empty());
        assert_eq!(stats.nodes_explored, 0);
    }

    #[test]
    fn test_all_compatible_yields_power_set() {
        let courses = vec![
            course("a", 4, "Mon 0900-0950"),
            course("b", 4, "Tue 0900-0950"),
            course("c", 4, "Wed 0900-0950"),
        ];
        let found = run(&courses);
        assert_eq!(found.len(), 7); // 2^3 - 1
        assert_eq!(
            ids(&found),
            vec![
                vec!["a"],
                vec!["a", "b"],
                vec!["a", "b", "c"],
                vec!["a", "c"],
                vec!["b"],
                vec!["b", "c"],
                vec!["c"],
            ]
        );
    }

    #[test]
    fn test_conflicting_pair_never_together() {
        let courses = vec![
            course("A", 4, "Mon 0900-1015"),
            course("B", 4, "Mon 1030-1145"),
            course("C", 4, "Mon 0930-1045"),
        ];
        let found = run(&courses);

        // C overlaps both A and B.
        assert_eq!(
            ids(&found),
            vec![vec!["A"], vec!["A", "B"], vec!["B"], vec!["C"]]
        );
        for s in &found {
            assert!(!has_conflict(s.courses(), OverlapPolicy::Inclusive));
        }
    }

    #[test]
    fn test_strict_policy_admits_back_to_back() {
        let courses = vec![course("a", 3, "Thu 0900-1000"), course("b", 3, "Thu 1000-1100")];

        let inclusive = run(&courses);
        assert_eq!(inclusive.len(), 2);

        let config = PlannerConfig::default().with_overlap_policy(OverlapPolicy::Strict);
        let (strict, _) = enumerate_schedules(&courses, SearchBounds::default(), &config).unwrap();
        assert_eq!(strict.len(), 3);
    }

    #[test]
    fn test_bounds_prune_descent() {
        let courses = vec![
            course("a", 4, "Mon 0900-0950"),
            course("b", 4, "Tue 0900-0950"),
            course("c", 4, "Wed 0900-0950"),
        ];
        let bounds = SearchBounds {
            max_courses: Some(2),
            max_credits: None,
        };
        let (found, stats) =
            enumerate_schedules(&courses, bounds, &PlannerConfig::default()).unwrap();
        assert_eq!(found.len(), 6);
        assert!(found.iter().all(|s| s.len() <= 2));
        assert_eq!(stats.pruned_bounds, 1);

        let bounds = SearchBounds {
            max_courses: None,
            max_credits: Some(4),
        };
        let (found, _) = enumerate_schedules(&courses, bounds, &PlannerConfig::default()).unwrap();
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_node_budget() {
        let courses: Vec<Course> = (0..12)
            .map(|i| Course::new(format!("c{i}"), "X", "X").with_credits(1))
            .collect();
        let config = PlannerConfig::default().with_max_nodes(100);

        let err = enumerate_schedules(&courses, SearchBounds::default(), &config).unwrap_err();
        assert_eq!(
            err,
            PlannerError::SearchBudgetExceeded {
                explored: 101,
                limit: 100
            }
        );
    }

    #[test]
    fn test_deadline_aborts_search() {
        let courses: Vec<Course> = (0..22)
            .map(|i| Course::new(format!("c{i:02}"), "X", "X"))
            .collect();
        let config = PlannerConfig::default()
            .unbounded()
            .with_deadline(Duration::from_millis(1));
        let bounds = SearchBounds {
            max_courses: Some(22),
            max_credits: None,
        };

        let err = enumerate_schedules(&courses, bounds, &config).unwrap_err();
        assert!(matches!(err, PlannerError::DeadlineExceeded { .. }), "{err:?}");
    }

    #[test]
    fn test_large_credit_values_do_not_overflow() {
        let courses = vec![
            course("a", 3_000_000_000, "Mon 0900-0950"),
            course("b", 3_000_000_000, "Tue 0900-0950"),
        ];
        let bounds = SearchBounds {
            max_courses: Some(2),
            max_credits: None,
        };
        let (found, _) = enumerate_schedules(&courses, bounds, &PlannerConfig::default()).unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[1].total_credits(), u32::MAX);

        let bounds = SearchBounds {
            max_courses: None,
            max_credits: Some(u32::MAX),
        };
        let (found, _) = enumerate_schedules(&courses, bounds, &PlannerConfig::default()).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_unbounded_budget_completes() {
        let courses: Vec<Course> = (0..10)
            .map(|i| Course::new(format!("c{i}"), "X", "X"))
            .collect();
        let config = PlannerConfig::default().unbounded();

        let (found, stats) =
            enumerate_schedules(&courses, SearchBounds::default(), &config).unwrap();
        assert_eq!(found.len(), 1023);
        assert_eq!(stats.emitted, 1023);
    }
}
