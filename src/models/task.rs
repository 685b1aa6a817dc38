//! Task model.
//!
//! A task is the unit of work the scheduler places into the calendar.
//! Its name doubles as the vertex key in the dependency graph, so names
//! must be unique across one scheduling run.
//!
//! # Time Representation
//! Deadlines are naive local timestamps (`chrono::NaiveDateTime`);
//! workloads are integer minutes. The consumer defines the local clock.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A task to be scheduled.
///
/// Immutable after construction: the dependency list is fixed when the
/// task is built and never mutated by the scheduling pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task name (dependency graph vertex key).
    pub name: String,
    /// Latest acceptable completion time.
    pub deadline: NaiveDateTime,
    /// Work duration in minutes. Must be > 0 (enforced at intake).
    pub workload_min: i64,
    /// Scheduling priority (lower = scheduled first).
    pub priority: i32,
    /// Names of tasks that must be scheduled before this one.
    pub dependencies: Vec<String>,
}

impl Task {
    /// Creates a new task with the given name, deadline, and workload.
    pub fn new(name: impl Into<String>, deadline: NaiveDateTime, workload_min: i64) -> Self {
        Self {
            name: name.into(),
            deadline,
            workload_min,
            priority: 0,
            dependencies: Vec::new(),
        }
    }

    /// Sets the scheduling priority (lower = scheduled first).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a prerequisite task name.
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    /// Replaces the full dependency list.
    pub fn with_dependencies(mut self, names: Vec<String>) -> Self {
        self.dependencies = names;
        self
    }

    /// Workload as a chrono duration.
    #[inline]
    pub fn workload(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.workload_min)
    }

    /// Whether this task declares any prerequisites.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
