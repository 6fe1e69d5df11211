//! Project schedule → Dojo Gantt JSON.
//!
//! Projects a hierarchical project schedule (tasks with start/finish,
//! completion, and resource assignments) into the JSON tree rendered by
//! the Dojo Gantt widget.
//!
//! # Modules
//!
//! - **`models`**: Input types: `ProjectRoot`, `Task`, `Resource`,
//!   `ResourceAssignment`
//! - **`gantt`**: The projection, output document, and scalar formatters
//! - **`validation`**: Input integrity checks (duplicate IDs, missing
//!   starts, inverted intervals, out-of-range completion)
//! - **`reader`**: Decoding serialized task trees
//! - **`cli`**: The `project-to-json` command
//!
//! # Pipeline
//!
//! ```text
//! ProjectReader → ProjectRoot → HierarchyProjector → GanttDocument → JSON
//! ```
//!
//! The projection is a pure function of its input: no I/O, no shared
//! state, linear in the number of tasks and assignments.

pub mod cli;
pub mod config;
pub mod error;
pub mod gantt;
pub mod models;
pub mod reader;
pub mod validation;

pub use config::ProjectionConfig;
pub use error::GanttError;
