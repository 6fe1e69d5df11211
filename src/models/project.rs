//! Project root model.
//!
//! The root of the schedule tree. It holds the top-level tasks but is
//! not itself a task: it has no ID, name, or dates of its own and is
//! never emitted as a node.

use serde::{Deserialize, Serialize};

use super::Task;

/// Anything that owns an ordered list of child tasks.
pub trait TaskContainer {
    /// Direct children, in schedule order.
    fn child_tasks(&self) -> &[Task];
}

/// The whole schedule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectRoot {
    /// Project title, if the source provides one.
    #[serde(default)]
    pub title: Option<String>,
    /// Top-level tasks, in schedule order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ProjectRoot {
    /// Creates an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a top-level task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Total number of tasks reachable from the root.
    pub fn task_count(&self) -> usize {
        self.tasks.iter().map(Task::subtree_len).sum()
    }

    /// Visits every task in depth-first pre-order.
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a Task)) {
        fn go<'a>(tasks: &'a [Task], visit: &mut impl FnMut(&'a Task)) {
            for task in tasks {
                visit(task);
                go(&task.children, visit);
            }
        }
        go(&self.tasks, &mut visit);
    }
}

impl TaskContainer for ProjectRoot {
    fn child_tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl TaskContainer for Task {
    fn child_tasks(&self) -> &[Task] {
        &self.children
    }
}
