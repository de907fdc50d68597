//! Plain-text list export
//!
//! Writes one `code - name - qty` line per row, newline-joined, to the
//! view's default file name inside the export directory.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::domain::ports::ViewExporter;
use crate::domain::services::ExportRow;
use crate::domain::value_objects::ViewKind;
use crate::error::{PaintrackError, PaintrackResult};

#[derive(Debug, Clone)]
pub struct TextFileExporter {
    dir: PathBuf,
}

impl TextFileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Render rows as the exported text body.
pub fn render_rows(rows: &[ExportRow]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ViewExporter for TextFileExporter {
    fn export(&self, kind: ViewKind, rows: &[ExportRow]) -> PaintrackResult<PathBuf> {
        if rows.is_empty() {
            return Err(PaintrackError::NothingToExport { kind });
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(kind.export_file_name());
        fs::write(&path, render_rows(rows))?;

        info!(%kind, rows = rows.len(), path = %path.display(), "list exported");
        Ok(path)
    }
}
