//! ViewExporter port - writes a derived list somewhere the user can take it
//!
//! Implementations must refuse an empty list with
//! `PaintrackError::NothingToExport` and produce no output in that case.

use std::path::PathBuf;

use crate::domain::services::ExportRow;
use crate::domain::value_objects::ViewKind;
use crate::error::PaintrackResult;

pub trait ViewExporter {
    /// Export `rows` for `kind`, returning where they were written.
    fn export(&self, kind: ViewKind, rows: &[ExportRow]) -> PaintrackResult<PathBuf>;
}
