//! types.rs
//! Top-level error covering every codec stage.
//!
//! - `From<T>` impls enable `?` across the pipeline.
//! - `kind()` gives callers a stable category without matching on causes.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::kind::KindError;
use crate::compression::CompressionError;
use crate::config::ConfigError;
use crate::integrity::IntegrityError;
use crate::payload::ParseError;
use crate::radix::RadixError;

#[derive(Debug, Error)]
pub enum BysquareError {
    #[error("radix error: {0}")]
    Radix(#[from] RadixError),

    #[error("kind error: {0}")]
    Kind(#[from] KindError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("payload error: {0}")]
    Parse(#[from] ParseError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Stable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Bad symbol, non-zero padding or impossible token length.
    RadixFormat,
    /// Unknown or truncated kind header.
    UnsupportedKind,
    Compression,
    Integrity,
    /// Field-level payload error.
    Validation,
    /// Input left after the top-level record.
    ExtraneousData,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::RadixFormat     => "radix_format",
            ErrorKind::UnsupportedKind => "unsupported_kind",
            ErrorKind::Compression     => "compression",
            ErrorKind::Integrity       => "integrity",
            ErrorKind::Validation      => "validation",
            ErrorKind::ExtraneousData  => "extraneous_data",
            ErrorKind::Config          => "config",
        };
        f.write_str(name)
    }
}

impl BysquareError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BysquareError::Radix(_) => ErrorKind::RadixFormat,
            BysquareError::Kind(_) => ErrorKind::UnsupportedKind,
            BysquareError::Compression(_) => ErrorKind::Compression,
            BysquareError::Integrity(_) => ErrorKind::Integrity,
            BysquareError::Parse(ParseError::ExtraneousData { .. }) => ErrorKind::ExtraneousData,
            BysquareError::Parse(_) => ErrorKind::Validation,
            BysquareError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, BysquareError>;
