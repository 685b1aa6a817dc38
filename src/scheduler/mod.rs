//! Scheduling pipeline.
//!
//! `Planner` drives the full flow: build the dependency graph from the
//! task set, compute a topological order, feed the ordered tasks through
//! the priority queue, and book each extracted task into the calendar.
//! Per-task booking failures are recorded in the [`PlanReport`] and the
//! drain continues; nothing in the pipeline aborts the batch.

mod planner;

pub use planner::{build_graph, BookingOutcome, BookingRecord, Planner, PlanReport};
