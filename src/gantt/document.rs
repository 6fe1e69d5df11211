//! Output document for the Dojo Gantt widget.
//!
//! # Schema
//!
//! ```text
//! { "identifier": "id", "items": [node, ...] }
//!
//! node = { "id", "name", ["previousTaskId"], <start-key>, "duration",
//!          "percentage", "taskOwner", "children": [node, ...] }
//! ```
//!
//! | Level | start-key |
//! |-------|-----------|
//! | directly under the project root | `startdate` |
//! | under another task | `starttime` |

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Value of the document's `identifier` field: the key naming each node.
pub const IDENTIFIER_KEY: &str = "id";

/// Where a node sits in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Direct child of the project root.
    Root,
    /// Child of the task with `parent_id`.
    Nested { parent_id: i64 },
}

impl Level {
    /// JSON key holding the node's formatted start.
    pub fn start_key(self) -> &'static str {
        match self {
            Level::Root => "startdate",
            Level::Nested { .. } => "starttime",
        }
    }

    /// Parent task ID, if the node is nested.
    pub fn parent_id(self) -> Option<i64> {
        match self {
            Level::Root => None,
            Level::Nested { parent_id } => Some(parent_id),
        }
    }
}

/// One task as the Gantt widget sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttNode {
    pub id: i64,
    pub name: String,
    /// Inferred sequential predecessor among the node's siblings.
    pub previous_task_id: Option<i64>,
    /// Level the node was emitted at; selects the start key.
    pub level: Level,
    /// Formatted start date (`""` when the task has no start).
    pub start: String,
    pub duration: i64,
    pub percentage: f64,
    /// Comma-separated names of the assigned resources.
    pub task_owner: String,
    pub children: Vec<GanttNode>,
}

impl GanttNode {
    /// Nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(GanttNode::subtree_len).sum::<usize>()
    }

    /// Height of this subtree (a leaf is 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(GanttNode::depth).max().unwrap_or(0)
    }
}

impl Serialize for GanttNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.previous_task_id.is_some() { 8 } else { 7 };
        let mut node = serializer.serialize_struct("GanttNode", len)?;
        node.serialize_field("id", &self.id)?;
        node.serialize_field("name", &self.name)?;
        match self.previous_task_id {
            Some(prev) => node.serialize_field("previousTaskId", &prev)?,
            None => node.skip_field("previousTaskId")?,
        }
        node.serialize_field(self.level.start_key(), &self.start)?;
        node.serialize_field("duration", &self.duration)?;
        node.serialize_field("percentage", &Percentage(self.percentage))?;
        node.serialize_field("taskOwner", &self.task_owner)?;
        node.serialize_field("children", &self.children)?;
        node.end()
    }
}

/// Completion percentage on the wire.
///
/// Whole values are written as integers (`0`, `50`) and anything else as
/// a float, so the value is never rounded. NaN and infinities have no
/// JSON form and come out as `null`; validation flags them beforehand.
struct Percentage(f64);

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Integers above 2^53 are not exactly representable as f64.
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Top-level document handed to the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttDocument {
    pub identifier: &'static str,
    pub items: Vec<GanttNode>,
}

impl GanttDocument {
    /// Wraps the root-level nodes.
    pub fn new(items: Vec<GanttNode>) -> Self {
        Self {
            identifier: IDENTIFIER_KEY,
            items,
        }
    }

    /// Total number of nodes in the document.
    pub fn node_count(&self) -> usize {
        self.items.iter().map(GanttNode::subtree_len).sum()
    }

    /// Deepest nesting level (0 for an empty document).
    pub fn depth(&self) -> usize {
        self.items.iter().map(GanttNode::depth).max().unwrap_or(0)
    }
}
