//! compression/types.rs
//! LZMA parameters, errors, and the backend capability trait.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::constants::{lzma, LENGTH_PREFIX_LEN, MAX_SEALED_LEN};

/// Raw LZMA1 filter parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LzmaParams {
    pub literal_context_bits: u32,
    pub literal_position_bits: u32,
    pub position_bits: u32,
    pub dict_size: u32,
}

impl LzmaParams {
    /// The only parameter set by square readers accept.
    pub const BYSQUARE: LzmaParams = LzmaParams {
        literal_context_bits: lzma::LITERAL_CONTEXT_BITS,
        literal_position_bits: lzma::LITERAL_POSITION_BITS,
        position_bits: lzma::POSITION_BITS,
        dict_size: lzma::DICT_SIZE,
    };

    /// Option string for `xz --lzma1=...`, e.g. `lc=3,lp=0,pb=2,dict=32KiB`.
    pub fn xz_filter_spec(&self) -> String {
        let dict = if self.dict_size % (1024 * 1024) == 0 {
            format!("{}MiB", self.dict_size / (1024 * 1024))
        } else if self.dict_size % 1024 == 0 {
            format!("{}KiB", self.dict_size / 1024)
        } else {
            self.dict_size.to_string()
        };
        format!(
            "lc={},lp={},pb={},dict={}",
            self.literal_context_bits, self.literal_position_bits, self.position_bits, dict
        )
    }
}

impl Default for LzmaParams {
    fn default() -> Self {
        Self::BYSQUARE
    }
}

#[derive(Debug)]
pub enum CompressionError {
    /// Uncompressed input does not fit the u16 length prefix.
    InputTooLarge { have: usize, max: usize },
    MissingLengthPrefix { have: usize },
    /// Decompressed length differs from the length prefix.
    LengthMismatch { expected: usize, actual: usize },
    BackendInit { backend: &'static str, msg: String },
    BackendFailed { backend: &'static str, status: Option<i32>, diagnostics: String },
    Spawn { backend: &'static str, source: io::Error },
}

impl CompressionError {
    pub fn too_large(have: usize) -> Self {
        CompressionError::InputTooLarge { have, max: MAX_SEALED_LEN }
    }
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompressionError::*;
        match self {
            InputTooLarge { have, max } =>
                write!(f, "input too large: {} > {} bytes", have, max),
            MissingLengthPrefix { have } =>
                write!(f, "missing length prefix: have {} byte(s), need {}", have, LENGTH_PREFIX_LEN),
            LengthMismatch { expected, actual } =>
                write!(f, "decompressed length mismatch: expected {}, got {}", expected, actual),
            BackendInit { backend, msg } =>
                write!(f, "backend {} init failed: {}", backend, msg),
            BackendFailed { backend, status: Some(code), diagnostics } =>
                write!(f, "backend {} failed (exit status {}): {}", backend, code, diagnostics),
            BackendFailed { backend, status: None, diagnostics } =>
                write!(f, "backend {} failed: {}", backend, diagnostics),
            Spawn { backend, source } =>
                write!(f, "backend {} could not be started: {}", backend, source),
        }
    }
}

impl std::error::Error for CompressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompressionError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Raw LZMA1 capability. One synchronous request per call, no shared state.
pub trait LzmaBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Compress `input` into a raw LZMA1 stream (no header, no length prefix).
    fn compress(&self, input: &[u8], params: &LzmaParams) -> Result<Vec<u8>, CompressionError>;

    /// Decompress a raw LZMA1 stream. `expected_len` comes from the length
    /// prefix; backends may stop once output exceeds it.
    fn decompress(
        &self,
        input: &[u8],
        params: &LzmaParams,
        expected_len: usize,
    ) -> Result<Vec<u8>, CompressionError>;
}
