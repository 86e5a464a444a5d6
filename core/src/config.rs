//! config.rs
//! Codec configuration, optionally loaded from JSON.
//!
//! ```json
//! { "backend": { "type": "process", "xz_path": "/usr/local/bin/xz" },
//!   "log_telemetry": true }
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_XZ_PATH;

/// Which LZMA implementation the codec uses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackendConfig {
    /// liblzma linked into the process.
    #[default]
    Linked,
    /// External `xz` executable.
    Process {
        #[serde(default = "default_xz_path")]
        xz_path: PathBuf,
    },
}

fn default_xz_path() -> PathBuf {
    PathBuf::from(DEFAULT_XZ_PATH)
}

impl BackendConfig {
    pub fn process() -> Self {
        BackendConfig::Process { xz_path: default_xz_path() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub backend: BackendConfig,

    /// Emit a telemetry snapshot as a `debug` event after each call.
    /// - `None` or `Some(false)` -> silent (default).
    pub log_telemetry: Option<bool>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::Linked,
            log_telemetry: Some(false),
        }
    }
}

impl CodecConfig {
    pub fn new(backend: BackendConfig, log_telemetry: Option<bool>) -> Self {
        Self { backend, log_telemetry: log_telemetry.or(Some(false)) }
    }

    pub fn with_process_backend(xz_path: impl Into<PathBuf>) -> Self {
        Self::new(BackendConfig::Process { xz_path: xz_path.into() }, None)
    }

    pub fn logs_telemetry(&self) -> bool {
        self.log_telemetry.unwrap_or(false)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            Io { path, source } => write!(f, "cannot read config {}: {}", path.display(), source),
            Json(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json(e) => Some(e),
        }
    }
}
