//! List command handlers: show and export the derived views

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use paintrack::presentation::{create_exporter, output, OutputFormat};
use paintrack::{PaintrackError, ViewKind};

use super::Context;

pub fn cmd_list(ctx: &Context, kind: ViewKind) -> Result<()> {
    let tracker = ctx.tracker()?;
    let lines = tracker.lines(kind);
    ctx.emit(&lines, || output::render_lines(kind, &lines))
}

#[derive(Serialize)]
struct ExportReport {
    kind: ViewKind,
    path: Option<PathBuf>,
    rows: usize,
}

pub fn cmd_export(ctx: &Context, kind: ViewKind, dir: Option<&Path>) -> Result<()> {
    let tracker = ctx.tracker()?;
    let exporter = create_exporter(&ctx.config, dir);

    let report = match tracker.export(kind, &exporter) {
        Ok(path) => ExportReport {
            kind,
            rows: tracker.export_rows(kind).len(),
            path: Some(path),
        },
        Err(e @ PaintrackError::NothingToExport { .. }) => {
            eprintln!("List is empty");
            tracing::debug!(error = %e, "export skipped");
            if ctx.format == OutputFormat::Text {
                return Ok(());
            }
            ExportReport {
                kind,
                path: None,
                rows: 0,
            }
        }
        Err(e) => return Err(e.into()),
    };

    ctx.emit(&report, || match &report.path {
        Some(path) => format!("Exported {} rows to {}", report.rows, path.display()),
        None => String::new(),
    })
}
