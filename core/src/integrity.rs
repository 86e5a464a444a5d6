//! integrity.rs
//! CRC-32 prefix in front of the serialized payload.
//!
//! Design notes:
//! - Digest is CRC-32/IEEE ("crc32b"), stored least significant byte first.
//! - Verification runs before the parser ever sees the payload.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::CHECKSUM_LEN;
use crate::utils::{checksum_bytes, compute_checksum};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    Truncated { have: usize },
    ChecksumMismatch { stored: u32, computed: u32 },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use IntegrityError::*;
        match self {
            Truncated { have } =>
                write!(f, "checksum prefix truncated: have {} byte(s), need {}", have, CHECKSUM_LEN),
            ChecksumMismatch { stored, computed } =>
                write!(f, "checksum mismatch: stored {:08x}, computed {:08x}", stored, computed),
        }
    }
}

impl std::error::Error for IntegrityError {}

/// Prepend the 4-byte checksum of `payload`.
pub fn seal(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(CHECKSUM_LEN + payload.len());
    out.extend_from_slice(&checksum_bytes(payload));
    out.extend_from_slice(payload);
    out
}

/// Split off and check the checksum prefix, returning the payload.
pub fn verify(sealed: &[u8]) -> Result<&[u8], IntegrityError> {
    if sealed.len() < CHECKSUM_LEN {
        return Err(IntegrityError::Truncated { have: sealed.len() });
    }
    let (prefix, payload) = sealed.split_at(CHECKSUM_LEN);
    let stored = LittleEndian::read_u32(prefix);
    let computed = compute_checksum(payload);
    if stored != computed {
        return Err(IntegrityError::ChecksumMismatch { stored, computed });
    }
    Ok(payload)
}
