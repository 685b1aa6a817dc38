//! Input validation for scheduling runs.
//!
//! Checks structural integrity of tasks and availability windows before
//! the pipeline consumes them. Detects:
//! - Empty or duplicate task names
//! - Non-positive workloads
//! - Dependencies on tasks not declared earlier in the input
//! - An empty window set, or windows with `end <= start`
//!
//! Cycle detection is deliberately absent: the engine accepts cyclic
//! dependency input as-is (the topological order then simply does not
//! respect every edge).

use crate::models::{AvailabilityWindow, Task};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same name.
    DuplicateName,
    /// A task has an empty name.
    EmptyName,
    /// A task's workload is zero or negative.
    NonPositiveWorkload,
    /// A dependency names a task not declared earlier in the input.
    UnknownDependency,
    /// No availability windows were supplied.
    EmptyAvailability,
    /// A window ends at or before its start.
    InvalidWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input for one scheduling run.
///
/// Checks:
/// 1. Every task name is non-empty and unique
/// 2. Every workload is positive
/// 3. Every dependency refers to an earlier-declared task
/// 4. At least one availability window exists
/// 5. Every window satisfies `end > start`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], windows: &[AvailabilityWindow]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen: HashSet<&str> = HashSet::new();
    for task in tasks {
        if task.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Task with empty name",
            ));
        }

        if task.workload_min <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWorkload,
                format!(
                    "Task '{}' has workload {} min (must be > 0)",
                    task.name, task.workload_min
                ),
            ));
        }

        for dep in &task.dependencies {
            if !seen.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDependency,
                    format!("Task '{}' depends on undeclared task '{}'", task.name, dep),
                ));
            }
        }

        // Inserted after the dependency check: a task cannot depend on
        // itself or on anything declared later.
        if !seen.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate task name: {}", task.name),
            ));
        }
    }

    if windows.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyAvailability,
            "No availability windows supplied",
        ));
    }

    for window in windows {
        if window.end <= window.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Window ending at {} does not come after its start {}",
                    window.end, window.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
