//! Dojo Gantt projection.
//!
//! Turns a [`ProjectRoot`] into the JSON tree consumed by the Dojo Gantt
//! widget: same shape as the task tree, with formatted dates, derived
//! durations, owner strings, and inferred predecessor links.
//!
//! # Usage
//!
//! ```
//! use u_gantt::gantt;
//! use u_gantt::models::ProjectRoot;
//! use u_gantt::ProjectionConfig;
//!
//! let json = gantt::to_json_string(&ProjectRoot::new(), &ProjectionConfig::default()).unwrap();
//! assert_eq!(json, r#"{"identifier":"id","items":[]}"#);
//! ```

mod document;
mod format;
mod projector;

pub use document::{GanttDocument, GanttNode, Level, IDENTIFIER_KEY};
pub use format::{duration, format_date, format_date_time, DurationUnit, DAY_MS};
pub use projector::{project, HierarchyProjector, MISSING_START};

use std::io::Write;

use crate::config::ProjectionConfig;
use crate::error::GanttError;
use crate::models::ProjectRoot;

/// Projects `root` and returns the serialized document.
pub fn to_json_string(
    root: &ProjectRoot,
    config: &ProjectionConfig,
) -> Result<String, GanttError> {
    let doc = HierarchyProjector::new(config.clone()).project(root);
    let json = if config.pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    };
    json.map_err(GanttError::Serialize)
}

/// Projects `root`, streams the document into `out`, then flushes it.
///
/// Returns the projected document so callers can report on it.
///
/// On failure `out` may already hold part of the document.
pub fn write_json<W: Write>(
    root: &ProjectRoot,
    config: &ProjectionConfig,
    mut out: W,
) -> Result<GanttDocument, GanttError> {
    let doc = HierarchyProjector::new(config.clone()).project(root);
    let written = if config.pretty {
        serde_json::to_writer_pretty(&mut out, &doc)
    } else {
        serde_json::to_writer(&mut out, &doc)
    };
    written.map_err(|e| {
        if e.is_io() {
            GanttError::io("output stream", e.into())
        } else {
            GanttError::Serialize(e)
        }
    })?;
    out.flush().map_err(|e| GanttError::io("flushing output stream", e))?;
    Ok(doc)
}
