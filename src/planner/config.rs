//! Planner configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::OverlapPolicy;

/// Default cap on search nodes.
pub const DEFAULT_MAX_NODES: u64 = 1_000_000;

/// Tunables for one planner run.
///
/// The search is exponential in catalog size, so it always runs under a
/// node cap; an optional wall-clock deadline can be added on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Boundary rule for overlapping meetings.
    pub overlap_policy: OverlapPolicy,
    /// Maximum search nodes before aborting. `None` = unbounded.
    pub max_nodes: Option<u64>,
    /// Wall-clock limit in milliseconds. `None` = no deadline.
    pub deadline_ms: Option<u64>,
    /// Keep only schedules containing every mandatory course.
    pub require_mandatory: bool,
    /// Run catalog validation before searching.
    pub validate_input: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            overlap_policy: OverlapPolicy::Inclusive,
            max_nodes: Some(DEFAULT_MAX_NODES),
            deadline_ms: None,
            require_mandatory: false,
            validate_input: true,
        }
    }
}

impl PlannerConfig {
    /// Sets the overlap boundary rule.
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Sets the node cap.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Removes the node cap.
    pub fn unbounded(mut self) -> Self {
        self.max_nodes = None;
        self
    }

    /// Sets a wall-clock deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline_ms = Some(u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Requires every mandatory course to appear in each schedule.
    pub fn with_require_mandatory(mut self, required: bool) -> Self {
        self.require_mandatory = required;
        self
    }

    /// Enables or disables catalog validation.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_input = enabled;
        self
    }

    /// Deadline as a `Duration`.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}
