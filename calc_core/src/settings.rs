//! # Settings
//!
//! Front-end preferences loaded from an optional JSON file. Every field has
//! a default, so a partial file (or none at all) is fine.
//!
//! ```json
//! {
//!   "output": "json",
//!   "dark_mode": true,
//!   "log_filter": "calc_core=debug"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How the CLI prints results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CLI output format
    pub output: OutputFormat,

    /// Start the GUI in dark mode
    pub dark_mode: bool,

    /// Tracing filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output: OutputFormat::Text,
            dark_mode: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid settings JSON: {}", e),
        })
    }
}

/// Load settings from a JSON file.
///
/// # Returns
///
/// * `Ok(Settings)` - Parsed settings, missing fields defaulted
/// * `Err(CalcError::FileError)` - The file could not be read
/// * `Err(CalcError::SerializationError)` - The file is not valid settings JSON
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Settings::from_json(&contents)
}

/// Load settings if a path is given, otherwise use defaults.
pub fn load_or_default(path: Option<&Path>) -> CalcResult<Settings> {
    match path {
        Some(p) => load_settings(p),
        None => Ok(Settings::default()),
    }
}
