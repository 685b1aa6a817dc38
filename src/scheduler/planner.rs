//! Pipeline orchestrator.
//!
//! # Algorithm
//!
//! 1. Build the dependency graph: one vertex per task, one edge per
//!    declared dependency (`dependency → dependent`), weighted by the
//!    dependent's workload minutes.
//! 2. Compute the topological order.
//! 3. Push every task, in topological order, into the priority queue.
//! 4. Drain the queue, booking each extracted task into the calendar.
//!
//! Because all tasks enter the queue before the drain starts, priority
//! acts as the extraction key over the whole batch; the topological
//! order is the insertion key. Booking failures are recorded and the
//! drain continues.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calendar::Calendar;
use crate::error::ScheduleError;
use crate::graph::{shortest_distances, topological_order, DependencyGraph};
use crate::models::{AvailabilityWindow, Task, TimeInterval};
use crate::queue::TaskQueue;

/// Builds the dependency graph for a task set.
///
/// Edges run `dependency → dependent`; the weight is the dependent
/// task's own workload. Dependencies naming unknown tasks are skipped
/// by the graph (logged, not raised).
pub fn build_graph(tasks: &[Task]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for task in tasks {
        graph.add_vertex(&task.name);
    }
    for task in tasks {
        for dep in &task.dependencies {
            graph.add_edge(dep, &task.name, task.workload_min);
        }
    }
    graph
}

/// Outcome of one booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingOutcome {
    /// The task was placed into this interval.
    Booked(TimeInterval),
    /// No availability window had room for the task.
    Unscheduled,
}

/// One task's booking result within a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Task name.
    pub task: String,
    /// What happened when the task was booked.
    pub outcome: BookingOutcome,
}

/// Result of a full planning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanReport {
    /// Topological order the tasks were fed in.
    pub order: Vec<String>,
    /// Per-task booking outcomes, in extraction order.
    pub bookings: Vec<BookingRecord>,
}

impl PlanReport {
    /// Number of successfully booked tasks.
    pub fn booked_count(&self) -> usize {
        self.bookings
            .iter()
            .filter(|r| matches!(r.outcome, BookingOutcome::Booked(_)))
            .count()
    }

    /// Names of tasks that could not be scheduled.
    pub fn unscheduled(&self) -> Vec<&str> {
        self.bookings
            .iter()
            .filter(|r| r.outcome == BookingOutcome::Unscheduled)
            .map(|r| r.task.as_str())
            .collect()
    }

    /// The outcome recorded for a task, if it was part of the run.
    pub fn outcome_for(&self, task: &str) -> Option<&BookingOutcome> {
        self.bookings
            .iter()
            .find(|r| r.task == task)
            .map(|r| &r.outcome)
    }
}

/// Drives one scheduling run over an owned task registry and calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dagenda::models::{AvailabilityWindow, Task};
/// use dagenda::scheduler::Planner;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let window = AvailabilityWindow::new(
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(10, 0, 0).unwrap(),
/// );
/// let deadline = day.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let tasks = vec![
///     Task::new("a", deadline, 30).with_priority(1),
///     Task::new("b", deadline, 30).with_priority(2).with_dependency("a"),
/// ];
///
/// let mut planner = Planner::new(tasks, vec![window]);
/// let report = planner.plan();
/// assert_eq!(report.order, vec!["a", "b"]);
/// assert_eq!(report.booked_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    graph: DependencyGraph,
    registry: HashMap<String, Task>,
    calendar: Calendar,
}

impl Planner {
    /// Creates a planner over validated tasks and availability windows.
    ///
    /// The dependency graph is built immediately; the calendar stays
    /// empty until [`Planner::plan`] runs.
    pub fn new(tasks: Vec<Task>, windows: Vec<AvailabilityWindow>) -> Self {
        let graph = build_graph(&tasks);
        let registry = tasks.into_iter().map(|t| (t.name.clone(), t)).collect();
        Self {
            graph,
            registry,
            calendar: Calendar::new(windows),
        }
    }

    /// The dependency graph for this run.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The calendar holding this run's bookings.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Mutable calendar access (removal, reordering).
    pub fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }

    /// Runs the full pipeline and reports per-task outcomes.
    ///
    /// Sequential, no rollback: a booking failure is recorded and the
    /// remaining tasks are still attempted.
    pub fn plan(&mut self) -> PlanReport {
        let order = topological_order(&self.graph);
        info!(tasks = order.len(), "planning run started");

        let mut queue = TaskQueue::new();
        for name in &order {
            if let Some(task) = self.registry.get(name) {
                queue.push(task.clone());
            }
        }

        let mut report = PlanReport {
            order,
            bookings: Vec::with_capacity(queue.len()),
        };
        while let Some(task) = queue.pop_min() {
            let outcome = match self.calendar.book(&task) {
                Ok(interval) => BookingOutcome::Booked(interval),
                Err(_) => BookingOutcome::Unscheduled,
            };
            report.bookings.push(BookingRecord {
                task: task.name,
                outcome,
            });
        }

        info!(
            booked = report.booked_count(),
            failed = report.unscheduled().len(),
            "planning run finished"
        );
        report
    }

    /// Shortest workload distances from `start` to every task.
    ///
    /// Side query against the same graph; independent of booking state.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownStartVertex`] if `start` is unknown.
    pub fn shortest_distances(
        &self,
        start: &str,
    ) -> Result<HashMap<String, Option<i64>>, ScheduleError> {
        shortest_distances(&self.graph, start)
    }
}
