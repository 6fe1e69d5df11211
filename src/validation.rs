//! Input validation for project trees.
//!
//! The projection trusts its input; this pass is where callers check
//! that trust before projecting. Detects:
//! - Duplicate task IDs anywhere in the tree
//! - Tasks without a start (emitted with an empty start key)
//! - Finish before start (emitted with a negative duration)
//! - Completion percentages outside 0–100

use std::collections::HashSet;

use crate::gantt::format_date_time;
use crate::models::{ProjectRoot, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending task.
    pub task_id: i64,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has no start instant.
    MissingStart,
    /// A task finishes before it starts.
    InvertedInterval,
    /// Completion percentage is not a finite value in 0–100.
    PercentageOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, task_id: i64, message: impl Into<String>) -> Self {
        Self {
            kind,
            task_id,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates every task reachable from `root`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues
/// in depth-first order.
pub fn validate_project(root: &ProjectRoot) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    root.walk(|task| {
        if !seen.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                task.id,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        check_task(task, &mut errors);
    });

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_task(task: &Task, errors: &mut Vec<ValidationError>) {
    match (&task.start, &task.finish) {
        (None, _) => errors.push(ValidationError::new(
            ValidationErrorKind::MissingStart,
            task.id,
            format!("Task {} ('{}') has no start", task.id, task.name),
        )),
        (Some(start), Some(finish)) if finish < start => errors.push(ValidationError::new(
            ValidationErrorKind::InvertedInterval,
            task.id,
            format!(
                "Task {} finishes at {} before it starts at {}",
                task.id,
                format_date_time(finish),
                format_date_time(start)
            ),
        )),
        _ => {}
    }

    let pct = task.percent_complete;
    if !pct.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::PercentageOutOfRange,
            task.id,
            format!("Task {} has completion {pct}; it is written as null", task.id),
        ));
    } else if !(0.0..=100.0).contains(&pct) {
        errors.push(ValidationError::new(
            ValidationErrorKind::PercentageOutOfRange,
            task.id,
            format!("Task {} has completion {pct}, expected 0-100", task.id),
        ));
    }
}
