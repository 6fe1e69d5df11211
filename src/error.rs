//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by reading, validating, and writing a project.
///
/// The projection itself is infallible; every variant here belongs to a
/// boundary around it.
#[derive(Error, Debug)]
pub enum GanttError {
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("error reading project file {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read project file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error on {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize gantt document")]
    Serialize(#[source] serde_json::Error),

    #[error("project failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}

impl GanttError {
    /// Process exit status for this error.
    ///
    /// `1` is reserved for usage errors reported by the argument parser.
    /// Input-side failures after the file is found share `3`; `4` is only
    /// for the output side.
    pub fn exit_code(&self) -> u8 {
        match self {
            GanttError::InputNotFound { .. } => 2,
            GanttError::Decode { .. } | GanttError::Read { .. } => 3,
            GanttError::Io { .. } | GanttError::Serialize(_) => 4,
            GanttError::Invalid(_) => 5,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        GanttError::Io {
            context: context.into(),
            source,
        }
    }
}
