//! Process-level settings for the query engine.
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (with the `config` feature)
//! 3. environment variables `LOG_DIR`, `LOG_FILE_GLOB`, `DEFAULT_LIMIT`, `MAX_LIMIT`
//!
//! The engine never reads these itself; callers build a [`QueryConfig`] once and
//! pass the values down explicitly.

use log::warn;
use std::path::PathBuf;

#[cfg(feature = "config")]
use crate::error::{LogscopeError, Result};
#[cfg(feature = "config")]
use std::path::Path;

pub const DEFAULT_LOG_DIR: &str = "sample_logs";
pub const DEFAULT_FILE_GLOB: &str = "*.log";
pub const DEFAULT_LIMIT: usize = 100;
pub const DEFAULT_MAX_LIMIT: usize = 1000;

/// Effective settings for one process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub log_dir: PathBuf,
    pub file_glob: String,
    /// Page size used when a listing does not ask for one
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            file_glob: DEFAULT_FILE_GLOB.to_string(),
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl QueryConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Override fields from `lookup`, which maps a variable name to its value
    ///
    /// Integers that fail to parse leave the current value in place.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(glob) = lookup("LOG_FILE_GLOB") {
            self.file_glob = glob;
        }
        if let Some(raw) = lookup("DEFAULT_LIMIT") {
            self.default_limit = parse_or_keep("DEFAULT_LIMIT", &raw, self.default_limit);
        }
        if let Some(raw) = lookup("MAX_LIMIT") {
            self.max_limit = parse_or_keep("MAX_LIMIT", &raw, self.max_limit);
        }
    }
}

/// Parse a size setting, keeping `current` when `raw` is not a usize
///
/// A negative value such as `-3` counts as unparseable. It is not installed as
/// a limit that would reject every page.
fn parse_or_keep(key: &str, raw: &str, current: usize) -> usize {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a non-negative integer");
            current
        }
    }
}

/// Shape of the optional TOML file; every field may be omitted
#[cfg(feature = "config")]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    log_dir: Option<PathBuf>,
    file_glob: Option<String>,
    default_limit: Option<usize>,
    max_limit: Option<usize>,
}

#[cfg(feature = "config")]
impl QueryConfig {
    /// `<user config dir>/logscope/config.toml`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("logscope").join("config.toml"))
    }

    /// Full layered load
    ///
    /// An explicit `path` must exist. Without one, the default path is used
    /// only if a file is present there.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Defaults overridden by the TOML file at `path`
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LogscopeError::config(path, e.to_string()))?;
        Self::from_toml_str(&text).map_err(|message| LogscopeError::config(path, message))
    }

    fn from_toml_str(text: &str) -> std::result::Result<Self, String> {
        let file: FileConfig = toml::from_str(text).map_err(|e| e.to_string())?;
        let defaults = Self::default();
        Ok(Self {
            log_dir: file.log_dir.unwrap_or(defaults.log_dir),
            file_glob: file.file_glob.unwrap_or(defaults.file_glob),
            default_limit: file.default_limit.unwrap_or(defaults.default_limit),
            max_limit: file.max_limit.unwrap_or(defaults.max_limit),
        })
    }
}

#[cfg(not(feature = "config"))]
impl QueryConfig {
    /// Without file support this is the environment layer alone
    pub fn load(_path: Option<&std::path::Path>) -> crate::error::Result<Self> {
        Ok(Self::from_env())
    }
}
