//! `project-to-json` command.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use crate::config::ProjectionConfig;
use crate::error::GanttError;
use crate::gantt::{self, DurationUnit, GanttDocument};
use crate::models::ProjectRoot;
use crate::reader::{JsonProjectReader, ProjectReader};
use crate::validation::validate_project;

/// Convert a project schedule into Dojo Gantt JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "project-to-json", version)]
pub struct Args {
    /// Project file to convert.
    pub input: PathBuf,

    /// Where to write the JSON document (default: stdout).
    pub output: Option<PathBuf>,

    /// Unit for every task duration.
    #[arg(long, value_enum, default_value_t = DurationUnit::CalendarDay)]
    pub duration_unit: DurationUnit,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Fail instead of warning when the project fails validation.
    #[arg(long)]
    pub strict: bool,

    /// Log projection details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig::new()
            .with_duration_unit(self.duration_unit)
            .with_pretty(self.pretty)
    }
}

/// Reads `args.input`, projects it, and writes the document.
pub fn run(args: &Args) -> Result<(), GanttError> {
    let root = JsonProjectReader.read(&args.input)?;

    if let Err(errors) = validate_project(&root) {
        if args.strict {
            return Err(GanttError::Invalid(errors));
        }
        for error in &errors {
            warn!(task_id = error.task_id, "{error}");
        }
    }

    let config = args.projection_config();
    let doc = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| GanttError::io(format!("creating {}", path.display()), e))?;
            emit(&root, &config, BufWriter::new(file))?
        }
        None => emit(&root, &config, io::stdout().lock())?,
    };

    info!(
        nodes = doc.node_count(),
        depth = doc.depth(),
        unit = ?config.duration_unit,
        "wrote gantt document"
    );
    Ok(())
}

/// Writes the document followed by a newline, then flushes `out`.
pub fn emit<W: Write>(
    root: &ProjectRoot,
    config: &ProjectionConfig,
    mut out: W,
) -> Result<GanttDocument, GanttError> {
    let doc = gantt::write_json(root, config, &mut out)?;
    writeln!(out)
        .and_then(|()| out.flush())
        .map_err(|e| GanttError::io("output stream", e))?;
    Ok(doc)
}
