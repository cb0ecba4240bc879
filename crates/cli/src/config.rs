//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Console configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOTEL_CATALOG` — path to a room catalog JSON file (default: bundled catalog)
/// - `RUST_LOG` — tracing filter directive (default: `"warn"`)
/// - `HOTEL_LOG_JSON` — `1`/`true` for JSON log lines (default: off)
///
/// Logs go to stderr so they never mix with the interactive transcript.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            catalog_path: lookup("HOTEL_CATALOG")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_json: lookup("HOTEL_LOG_JSON")
                .map(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "yes"))
                .unwrap_or(defaults.log_json),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "warn".to_string(),
            log_json: false,
        }
    }
}
