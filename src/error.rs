//! Scheduling error taxonomy.
//!
//! Every variant here is recoverable at the call site that raised it:
//! a distance query from an unknown vertex is reported to the caller, a
//! booking failure skips one task and the batch continues, and a bad
//! sort criterion leaves the calendar untouched. Soft conditions (edges
//! referencing missing vertices, removal of an unknown task) are not
//! errors at all — they surface as no-ops.

use thiserror::Error;

/// Errors produced by the scheduling engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Distance query from a vertex that is not in the graph.
    #[error("start task '{0}' does not exist in the dependency graph")]
    UnknownStartVertex(String),

    /// No availability window has room for the task's workload.
    #[error("no free slot large enough for task '{0}'")]
    NoSlotAvailable(String),

    /// Unrecognized calendar sort criterion.
    #[error("invalid sort criterion '{0}' (expected priority, workload, or deadline)")]
    InvalidSortCriterion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScheduleError::NoSlotAvailable("essay".into());
        assert_eq!(
            err.to_string(),
            "no free slot large enough for task 'essay'"
        );

        let err = ScheduleError::UnknownStartVertex("ghost".into());
        assert!(err.to_string().contains("ghost"));
    }
}
