//! Task tree → Gantt document projection.
//!
//! # Algorithm
//!
//! Depth-first, pre-order, one recursion per tree level:
//!
//! 1. Walk a container's children in schedule order.
//! 2. Copy `id`/`name`; format the start with the date-only formatter.
//! 3. Link each child after the first to its immediate predecessor when
//!    both starts are known and this one starts strictly later.
//! 4. Derive `duration` from finish − start in the configured unit.
//! 5. Join the names of the distinct resolved resources into `taskOwner`.
//! 6. Recurse into the child's own children at the nested level.
//!
//! # Complexity
//! O(n + a·k) where n = tasks, a = resource assignments, and k = distinct
//! owners of a single task (a handful in practice). Each task is visited
//! exactly once.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::document::{GanttDocument, GanttNode, Level};
use super::format::{duration, format_date};
use crate::config::ProjectionConfig;
use crate::models::{ProjectRoot, Resource, Task, TaskContainer};

/// Placeholder emitted for the start key of an unscheduled task.
pub const MISSING_START: &str = "";

/// Projects a project tree into a [`GanttDocument`].
///
/// Stateless apart from its configuration; a single projector can be
/// shared across threads and reused for any number of projects.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_gantt::gantt::HierarchyProjector;
/// use u_gantt::models::{ProjectRoot, Task};
/// use u_gantt::ProjectionConfig;
///
/// let root = ProjectRoot::new().with_task(
///     Task::new(1)
///         .with_name("Kickoff")
///         .with_start(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
///         .with_finish(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
/// );
///
/// let doc = HierarchyProjector::new(ProjectionConfig::default()).project(&root);
/// assert_eq!(doc.items[0].start, "2024-01-01");
/// assert_eq!(doc.items[0].duration, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HierarchyProjector {
    config: ProjectionConfig,
}

impl HierarchyProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Builds the document for `root`.
    pub fn project(&self, root: &ProjectRoot) -> GanttDocument {
        GanttDocument::new(self.project_children(root, Level::Root))
    }

    /// Projects the direct children of `container` at `level`.
    pub fn project_children<C: TaskContainer + ?Sized>(
        &self,
        container: &C,
        level: Level,
    ) -> Vec<GanttNode> {
        let tasks = container.child_tasks();
        debug!(
            parent_id = ?level.parent_id(),
            children = tasks.len(),
            "projecting task level"
        );

        let mut nodes = Vec::with_capacity(tasks.len());
        let mut previous: Option<&Task> = None;
        for task in tasks {
            let previous_task_id = previous.and_then(|prev| infer_predecessor(prev, task));
            nodes.push(self.project_task(task, previous_task_id, level));
            previous = Some(task);
        }
        nodes
    }

    fn project_task(
        &self,
        task: &Task,
        previous_task_id: Option<i64>,
        level: Level,
    ) -> GanttNode {
        GanttNode {
            id: task.id,
            name: task.name.clone(),
            previous_task_id,
            level,
            start: task
                .start
                .as_ref()
                .map(format_date)
                .unwrap_or_else(|| MISSING_START.to_string()),
            duration: duration(
                task.finish.as_ref(),
                task.start.as_ref(),
                self.config.duration_unit,
            ),
            percentage: task.percent_complete,
            task_owner: task_owner(task),
            children: self.project_children(task, Level::Nested { parent_id: task.id }),
        }
    }
}

/// Projects `root` with the default configuration.
pub fn project(root: &ProjectRoot) -> GanttDocument {
    HierarchyProjector::default().project(root)
}

/// `previous.id` if `current` looks like a sequential successor of its
/// immediately preceding sibling.
fn infer_predecessor(previous: &Task, current: &Task) -> Option<i64> {
    starts_after(current.start.as_ref(), previous.start.as_ref()).then_some(previous.id)
}

fn starts_after(current: Option<&DateTime<Utc>>, previous: Option<&DateTime<Utc>>) -> bool {
    matches!((current, previous), (Some(c), Some(p)) if c > p)
}

/// Names of the distinct resolved resources, in first-assignment order,
/// joined by `", "`.
fn task_owner(task: &Task) -> String {
    let mut owners: Vec<&Resource> = Vec::new();
    for resource in task.assignments.iter().filter_map(|a| a.resource.as_ref()) {
        if !owners.iter().any(|seen| seen.is_same(resource)) {
            owners.push(resource);
        }
    }
    let names: Vec<&str> = owners.iter().map(|r| r.name.as_str()).collect();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gantt::DurationUnit;
    use crate::models::ResourceAssignment;
    use chrono::TimeZone;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn task(id: i64, start: Option<DateTime<Utc>>) -> Task {
        let mut t = Task::new(id).with_name(format!("T{id}"));
        t.start = start;
        t
    }

    fn links(nodes: &[GanttNode]) -> Vec<Option<i64>> {
        nodes.iter().map(|n| n.previous_task_id).collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let root = ProjectRoot::new()
            .with_task(
                Task::new(1)
                    .with_name("A")
                    .with_start(day(2024, 1, 1))
                    .with_finish(day(2024, 1, 2)),
            )
            .with_task(
                Task::new(2)
                    .with_name("B")
                    .with_start(day(2024, 1, 3))
                    .with_finish(day(2024, 1, 4))
                    .with_resource(Resource::new("Alice")),
            );

        let value = serde_json::to_value(project(&root)).unwrap();
        assert_eq!(
            value,
            json!({
                "identifier": "id",
                "items": [
                    {
                        "id": 1, "name": "A", "startdate": "2024-01-01", "duration": 1,
                        "percentage": 0, "taskOwner": "", "children": []
                    },
                    {
                        "id": 2, "name": "B", "previousTaskId": 1, "startdate": "2024-01-03",
                        "duration": 1, "percentage": 0, "taskOwner": "Alice", "children": []
                    }
                ]
            })
        );
    }

    #[test]
    fn test_empty_tree() {
        let doc = project(&ProjectRoot::new());
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"identifier":"id","items":[]}"#
        );
    }

    #[test]
    fn test_isomorphism_and_order() {
        let root = ProjectRoot::new()
            .with_task(
                task(1, None)
                    .with_child(task(11, None).with_child(task(111, None)))
                    .with_child(task(12, None))
                    .with_child(task(13, None)),
            )
            .with_task(task(2, None))
            .with_task(task(3, None).with_child(task(31, None)));

        let doc = project(&root);
        assert_eq!(doc.node_count(), root.task_count());
        assert_eq!(doc.depth(), 3);

        let top: Vec<i64> = doc.items.iter().map(|n| n.id).collect();
        assert_eq!(top, vec![1, 2, 3]);
        let second: Vec<i64> = doc.items[0].children.iter().map(|n| n.id).collect();
        assert_eq!(second, vec![11, 12, 13]);
        assert_eq!(doc.items[0].children[0].children[0].id, 111);
        assert_eq!(doc.items[2].children[0].id, 31);
    }

    #[test]
    fn test_levels_select_start_key() {
        let root = ProjectRoot::new().with_task(
            task(1, Some(day(2024, 1, 1))).with_child(task(2, Some(day(2024, 1, 2)))),
        );
        let value = serde_json::to_value(project(&root)).unwrap();

        let top = &value["items"][0];
        assert_eq!(top["startdate"], "2024-01-01");
        assert!(top.get("starttime").is_none());

        let nested = &top["children"][0];
        assert_eq!(nested["starttime"], "2024-01-02");
        assert!(nested.get("startdate").is_none());
    }

    #[test]
    fn test_nested_level_records_parent() {
        let root = ProjectRoot::new().with_task(task(7, None).with_child(task(8, None)));
        let doc = project(&root);
        assert_eq!(doc.items[0].level, Level::Root);
        assert_eq!(doc.items[0].children[0].level, Level::Nested { parent_id: 7 });
    }

    #[test]
    fn test_first_child_never_linked() {
        let root = ProjectRoot::new().with_task(
            task(1, Some(day(2024, 1, 5)))
                .with_child(task(2, Some(day(2024, 1, 6))))
                .with_child(task(3, Some(day(2024, 1, 7)))),
        );
        let doc = project(&root);
        // Starts after its parent, but parents are never predecessors.
        assert_eq!(doc.items[0].previous_task_id, None);
        assert_eq!(doc.items[0].children[0].previous_task_id, None);
        assert_eq!(doc.items[0].children[1].previous_task_id, Some(2));
    }

    #[test]
    fn test_link_requires_strictly_later_start() {
        let root = ProjectRoot::new()
            .with_task(task(1, Some(day(2024, 1, 2))))
            .with_task(task(2, Some(day(2024, 1, 2)))) // same start
            .with_task(task(3, Some(day(2024, 1, 1)))) // earlier
            .with_task(task(4, Some(day(2024, 1, 3)))) // later
            .with_task(task(5, None)) // unscheduled
            .with_task(task(6, Some(day(2024, 2, 1)))); // predecessor unscheduled

        let doc = project(&root);
        assert_eq!(links(&doc.items), vec![None, None, None, Some(3), None, None]);
    }

    #[test]
    fn test_link_is_local_not_transitive() {
        // 3 starts after 1 but not after 2: no link to either.
        let root = ProjectRoot::new()
            .with_task(task(1, Some(day(2024, 1, 1))))
            .with_task(task(2, Some(day(2024, 1, 10))))
            .with_task(task(3, Some(day(2024, 1, 5))));
        let doc = project(&root);
        assert_eq!(links(&doc.items), vec![None, Some(1), None]);
    }

    #[test]
    fn test_link_ignores_predecessor_children() {
        let root = ProjectRoot::new()
            .with_task(task(1, Some(day(2024, 1, 1))).with_child(task(10, Some(day(2024, 1, 1)))))
            .with_task(task(2, Some(day(2024, 1, 4))));
        let doc = project(&root);
        assert_eq!(doc.items[1].previous_task_id, Some(1));
    }

    #[test]
    fn test_owner_aggregation() {
        let t = task(1, None)
            .with_resource(Resource::new("Alice"))
            .with_assignment(ResourceAssignment::unresolved())
            .with_resource(Resource::new("Bob"));
        assert_eq!(task_owner(&t), "Alice, Bob");

        let only_null = task(2, None).with_assignment(ResourceAssignment::unresolved());
        assert_eq!(task_owner(&only_null), "");
        assert_eq!(task_owner(&task(3, None)), "");
    }

    #[test]
    fn test_owner_lists_each_resource_once() {
        let alice = Resource::new("Alice").with_id(1);
        let t = task(1, None)
            .with_resource(alice.clone())
            .with_resource(alice);
        assert_eq!(task_owner(&t), "Alice");

        // First occurrence fixes the position.
        let t = task(2, None)
            .with_resource(Resource::new("Bob").with_id(2))
            .with_resource(Resource::new("Alice").with_id(1))
            .with_assignment(ResourceAssignment::unresolved())
            .with_resource(Resource::new("Bob").with_id(2));
        assert_eq!(task_owner(&t), "Bob, Alice");
    }

    #[test]
    fn test_owner_distinct_without_ids() {
        let t = task(1, None)
            .with_resource(Resource::new("Carol"))
            .with_resource(Resource::new("Carol"))
            // Same name, different upstream resources.
            .with_resource(Resource::new("Dan").with_id(4))
            .with_resource(Resource::new("Dan").with_id(5));
        assert_eq!(task_owner(&t), "Carol, Dan, Dan");
    }

    #[test]
    fn test_owner_keeps_empty_names() {
        let t = task(1, None)
            .with_resource(Resource::new(""))
            .with_resource(Resource::new("Bob"));
        assert_eq!(task_owner(&t), ", Bob");
    }

    #[test]
    fn test_missing_start_and_duration_fallbacks() {
        let mut t = task(1, None);
        t.finish = Some(day(2024, 1, 9));
        let doc = project(&ProjectRoot::new().with_task(t));
        assert_eq!(doc.items[0].start, MISSING_START);
        assert_eq!(doc.items[0].duration, 0);
    }

    #[test]
    fn test_duration_non_negative_for_ordered_tasks() {
        let root = ProjectRoot::new()
            .with_task(task(1, Some(day(2024, 1, 1))).with_finish(day(2024, 1, 1)))
            .with_task(task(2, Some(day(2024, 1, 1))).with_finish(day(2024, 1, 11)));
        let doc = project(&root);
        assert_eq!(doc.items[0].duration, 0);
        assert_eq!(doc.items[1].duration, 10);
        assert!(doc.items.iter().all(|n| n.duration >= 0));
    }

    #[test]
    fn test_working_hour_unit() {
        let root = ProjectRoot::new()
            .with_task(task(1, Some(day(2024, 1, 1))).with_finish(day(2024, 1, 3)));
        let config = ProjectionConfig::new().with_duration_unit(DurationUnit::WorkingHour);
        let projector = HierarchyProjector::new(config);
        assert_eq!(projector.project(&root).items[0].duration, 16);
    }

    #[test]
    fn test_percentage_copied_verbatim() {
        let root = ProjectRoot::new()
            .with_task(task(1, None).with_percent_complete(33.3))
            .with_task(task(2, None).with_percent_complete(120.0));
        let doc = project(&root);
        assert!((doc.items[0].percentage - 33.3).abs() < 1e-12);
        assert!((doc.items[1].percentage - 120.0).abs() < 1e-12);
    }
}
