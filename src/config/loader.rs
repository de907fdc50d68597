//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PaintrackError, PaintrackResult};

use super::types::{Config, Verbosity};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key not recognised by any config section
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// User config that could not be read or parsed; defaults were used
    Unreadable { file: PathBuf, message: String },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{line}")?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{suggestion}'?)")?;
                }
                Ok(())
            }
            ConfigWarning::Unreadable { file, message } => write!(
                f,
                "ignoring unreadable user config {}: {message}",
                file.display()
            ),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PaintrackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PaintrackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, else the user config, else defaults.
///
/// An explicit file must load. A broken user config is skipped and
/// reported as a warning. Environment overrides are applied last.
pub fn load_or_default(explicit: Option<&Path>) -> PaintrackResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((config, warnings)) => return Ok((with_env_overrides(config), warnings)),
                Err(e) => {
                    let warning = ConfigWarning::Unreadable {
                        file: user_config,
                        message: e.to_string(),
                    };
                    return Ok((with_env_overrides(Config::default()), vec![warning]));
                }
            }
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `~/.config/paintrack/config.toml` (respects `XDG_CONFIG_HOME`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("paintrack/config.toml"))
}

/// Apply environment variable overrides (PAINTRACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // PAINTRACK_STORAGE_DIR
    if let Some(dir) = var("PAINTRACK_STORAGE_DIR").filter(|v| !v.is_empty()) {
        config.storage.dir = Some(PathBuf::from(dir));
    }

    // PAINTRACK_CATALOG
    if let Some(base) = var("PAINTRACK_CATALOG").filter(|v| !v.is_empty()) {
        config.catalog.base = Some(PathBuf::from(base));
    }

    // PAINTRACK_EXPORT_DIR
    if let Some(dir) = var("PAINTRACK_EXPORT_DIR").filter(|v| !v.is_empty()) {
        config.export.dir = PathBuf::from(dir);
    }

    // PAINTRACK_VERBOSITY
    if let Some(verbosity) = var("PAINTRACK_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // PAINTRACK_REJECT_DUPLICATES
    if let Some(val) = var("PAINTRACK_REJECT_DUPLICATES") {
        config.catalog.reject_duplicate_codes = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// Home directory, honouring `HOME` so tests can isolate it.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "dir",
        "catalog",
        "base",
        "reject_duplicate_codes",
        "export",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
