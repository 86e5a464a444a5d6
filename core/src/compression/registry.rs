//! compression/registry.rs
//! Backend registry and factory.

use std::path::PathBuf;

use crate::compression::backends::{LinkedBackend, ProcessBackend};
use crate::compression::types::{CompressionError, LzmaBackend};
use crate::config::BackendConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendInfo {
    pub name: &'static str,
    /// Runs outside the process (spawns an executable).
    pub external: bool,
    pub executable: Option<PathBuf>,
}

pub fn resolve(config: &BackendConfig) -> BackendInfo {
    match config {
        BackendConfig::Linked =>
            BackendInfo { name: "linked", external: false, executable: None },
        BackendConfig::Process { xz_path } =>
            BackendInfo { name: "process", external: true, executable: Some(xz_path.clone()) },
    }
}

pub fn create_backend(config: &BackendConfig) -> Result<Box<dyn LzmaBackend>, CompressionError> {
    match config {
        BackendConfig::Linked => Ok(Box::new(LinkedBackend::new())),
        BackendConfig::Process { xz_path } if xz_path.as_os_str().is_empty() =>
            Err(CompressionError::BackendInit { backend: "process", msg: "empty xz path".into() }),
        BackendConfig::Process { xz_path } => Ok(Box::new(ProcessBackend::new(xz_path.clone()))),
    }
}
