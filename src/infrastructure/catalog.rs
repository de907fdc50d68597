//! Base catalog loading
//!
//! The base paint set ships inside the binary as `data/base_paints.json`.
//! A config entry can point at a replacement file of the same shape:
//! a JSON array of `{"code", "name", "hex"}` records.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::value_objects::Paint;
use crate::error::{PaintrackError, PaintrackResult};

const BUNDLED_BASE_PAINTS: &str = include_str!("../../data/base_paints.json");

/// Raw record as exported from the manufacturer colour chart
#[derive(Debug, Deserialize)]
struct BasePaintRecord {
    code: String,
    name: String,
    hex: String,
}

/// Load the base set from `path`, or the bundled set when `None`.
pub fn load_base_paints(path: Option<&Path>) -> PaintrackResult<Vec<Paint>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| PaintrackError::CatalogLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            parse_base_paints(&content, path)
        }
        None => parse_base_paints(BUNDLED_BASE_PAINTS, Path::new("<bundled>")),
    }
}

/// Parse a base catalog document, normalizing names.
pub fn parse_base_paints(content: &str, origin: &Path) -> PaintrackResult<Vec<Paint>> {
    let records: Vec<BasePaintRecord> =
        serde_json::from_str(content).map_err(|e| PaintrackError::CatalogLoad {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(origin = %origin.display(), count = records.len(), "base catalog loaded");

    Ok(records
        .into_iter()
        .map(|r| Paint::new(r.code.trim(), normalize_name(&r.name), r.hex.trim()))
        .collect())
}

/// Trim whitespace and drop a trailing `(<digits>)` reference number.
///
/// `"Flat Red (957) "` becomes `"Flat Red"`.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let stripped = trimmed
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once('('))
        .filter(|(_, digits)| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .map(|(head, _)| head.trim_end());
    stripped.unwrap_or(trimmed).to_string()
}
