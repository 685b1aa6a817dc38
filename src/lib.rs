//! Dependency-aware task scheduling.
//!
//! Places user-defined tasks — each with a priority, a workload, a
//! deadline, and prerequisite tasks — into concrete time slots inside a
//! bounded set of availability windows, respecting dependency order.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TimeInterval`, `AvailabilityWindow`
//! - **`graph`**: Dependency graph, topological ordering, shortest distances
//! - **`queue`**: Priority-ordered task extraction
//! - **`calendar`**: Slot search, booking, removal, and re-sorting
//! - **`scheduler`**: The `Planner` pipeline tying the above together
//! - **`validation`**: Input integrity checks (names, workloads, windows)
//!
//! # Pipeline
//!
//! Validated tasks feed the dependency graph (edge `dependency →
//! dependent`, weighted by the dependent's workload). The topological
//! order seeds a priority queue, and the queue drains into the calendar
//! allocator, which books each task into the earliest feasible free
//! interval. Shortest-distance analysis is a side query over the same
//! graph.
//!
//! The engine is single-threaded and synchronous; one `Planner` owns all
//! state for one run. A service exposing these operations concurrently
//! must add its own synchronization.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4, 24.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod calendar;
pub mod error;
pub mod graph;
pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;

pub use calendar::{BookedSlot, Calendar, SortCriterion};
pub use error::ScheduleError;
pub use graph::{shortest_distances, topological_order, DependencyGraph};
pub use models::{AvailabilityWindow, Task, TimeInterval};
pub use queue::TaskQueue;
pub use scheduler::{build_graph, BookingOutcome, BookingRecord, PlanReport, Planner};
