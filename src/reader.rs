//! Project readers.
//!
//! Decoding a project file into a [`ProjectRoot`] happens here, outside
//! the projection. Proprietary binary formats are not handled; the
//! bundled [`JsonProjectReader`] reads a serialized task tree.
//!
//! # JSON layout
//!
//! ```text
//! {
//!   "title": "Launch",
//!   "tasks": [
//!     { "id": 1, "name": "Design",
//!       "start": "2024-01-01T08:00:00Z", "finish": "2024-01-03T17:00:00Z",
//!       "percent_complete": 50.0,
//!       "assignments": [ { "resource": { "name": "Alice" } }, { "resource": null } ],
//!       "children": [ ... ] }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::GanttError;
use crate::models::ProjectRoot;

/// Decodes a project file into a task tree.
pub trait ProjectReader {
    /// Decodes from an open stream. `origin` names the source in errors.
    fn read_from<R: Read>(&self, reader: R, origin: &Path) -> Result<ProjectRoot, GanttError>;

    /// Opens and decodes the file at `path`.
    fn read(&self, path: &Path) -> Result<ProjectRoot, GanttError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GanttError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => GanttError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        self.read_from(BufReader::new(file), path)
    }
}

/// Reads a JSON-serialized [`ProjectRoot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProjectReader;

impl ProjectReader for JsonProjectReader {
    fn read_from<R: Read>(&self, reader: R, origin: &Path) -> Result<ProjectRoot, GanttError> {
        let root: ProjectRoot = serde_json::from_reader(reader).map_err(|source| {
            if source.is_io() {
                GanttError::Read {
                    path: origin.to_path_buf(),
                    source: source.into(),
                }
            } else {
                GanttError::Decode {
                    path: origin.to_path_buf(),
                    source,
                }
            }
        })?;
        debug!(
            path = %origin.display(),
            title = root.title.as_deref().unwrap_or(""),
            tasks = root.task_count(),
            "decoded project"
        );
        Ok(root)
    }
}
