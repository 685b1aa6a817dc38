//! Scheduling domain models.
//!
//! Core data types shared by the dependency graph, the priority queue,
//! and the calendar allocator: tasks, booked intervals, and availability
//! windows. All are plain serde-serializable values; none carry behavior
//! beyond simple time arithmetic.

mod task;
mod window;

pub use task::Task;
pub use window::{AvailabilityWindow, TimeInterval};
