//! Project schedule models.
//!
//! The input side of the projection: a rooted, ordered tree of tasks,
//! each carrying optional start/finish instants, a completion percentage,
//! and resource assignments.
//!
//! # Structure
//!
//! | Type | Role |
//! |------|------|
//! | `ProjectRoot` | Whole schedule; root of the tree, never emitted as a node |
//! | `Task` | Unit of work with ordered child tasks |
//! | `ResourceAssignment` | Task → resource link, possibly unresolved |
//! | `Resource` | Person, team, or equipment doing the work |

mod project;
mod resource;
mod task;

pub use project::{ProjectRoot, TaskContainer};
pub use resource::{Resource, ResourceAssignment};
pub use task::Task;
