//! Task model.
//!
//! A task is a node of the schedule tree: it may carry child tasks
//! (a sub-schedule) and resource assignments.
//!
//! # Time Representation
//! Start and finish are absolute instants in UTC. Either may be absent,
//! meaning the task is unscheduled on that side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceAssignment};

/// A task in the project schedule.
///
/// Child order is significant: it is the serialization order and the
/// order in which predecessor links are inferred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (unique across the whole tree).
    pub id: i64,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Scheduled start. `None` = unscheduled.
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// Scheduled finish. `None` = unscheduled.
    #[serde(default)]
    pub finish: Option<DateTime<Utc>>,
    /// Completion percentage (0–100, may be fractional).
    #[serde(default)]
    pub percent_complete: f64,
    /// Ordered child tasks.
    #[serde(default)]
    pub children: Vec<Task>,
    /// Ordered resource assignments.
    #[serde(default)]
    pub assignments: Vec<ResourceAssignment>,
}

impl Task {
    /// Creates a new unscheduled task with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
            start: None,
            finish: None,
            percent_complete: 0.0,
            children: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the start instant.
    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the finish instant.
    pub fn with_finish(mut self, finish: DateTime<Utc>) -> Self {
        self.finish = Some(finish);
        self
    }

    /// Sets the completion percentage.
    pub fn with_percent_complete(mut self, percent: f64) -> Self {
        self.percent_complete = percent;
        self
    }

    /// Appends a child task.
    pub fn with_child(mut self, child: Task) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a resolved assignment to `resource`.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.assignments.push(ResourceAssignment::to(resource));
        self
    }

    /// Appends an arbitrary assignment.
    pub fn with_assignment(mut self, assignment: ResourceAssignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    /// Number of tasks in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Task::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_task_builder() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let finish = Utc.with_ymd_and_hms(2024, 1, 3, 17, 0, 0).unwrap();
        let task = Task::new(10)
            .with_name("Design")
            .with_start(start)
            .with_finish(finish)
            .with_percent_complete(42.5)
            .with_resource(Resource::new("Alice"))
            .with_assignment(ResourceAssignment::unresolved());

        assert_eq!(task.id, 10);
        assert_eq!(task.name, "Design");
        assert_eq!(task.start, Some(start));
        assert_eq!(task.finish, Some(finish));
        assert!((task.percent_complete - 42.5).abs() < 1e-10);
        assert_eq!(task.assignments.len(), 2);
        assert_eq!(task.assignments[1], ResourceAssignment::unresolved());
    }

    #[test]
    fn test_task_subtree() {
        let task = Task::new(1)
            .with_child(Task::new(2).with_child(Task::new(3)))
            .with_child(Task::new(4));

        assert_eq!(task.subtree_len(), 4);
        assert_eq!(task.children[0].children[0].id, 3);
    }

    #[test]
    fn test_task_empty() {
        let task = Task::new(1);
        assert!(task.start.is_none() && task.finish.is_none());
        assert_eq!(task.subtree_len(), 1);
    }

    #[test]
    fn test_task_deserialize_minimal() {
        let task: Task = serde_json::from_str(
            r#"{"id":5,"name":"Build","start":"2024-02-01T09:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(task.id, 5);
        assert_eq!(
            task.start,
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap())
        );
        assert!(task.finish.is_none());
        assert!(task.children.is_empty());
        assert!(task.assignments.is_empty());
    }
}
