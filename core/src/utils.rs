//! utils.rs
//! Checksum and formatting helpers shared across stages.

use std::fmt;
use num_enum::TryFromPrimitive;

/// CRC-32 (IEEE 802.3, "crc32b") of `data`.
pub fn compute_checksum(data: &[u8]) -> u32 {
    use crc32fast::Hasher;
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Checksum as stored on the wire: the big-endian digest reversed,
/// which is the little-endian encoding of the value.
pub fn checksum_bytes(data: &[u8]) -> [u8; 4] {
    compute_checksum(data).to_le_bytes()
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:04x}", raw),
    }
}

pub fn fmt_bytes(b: &[u8]) -> String {
    if !b.is_empty() && b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Shorten a token for error messages.
pub fn preview(token: &str, max: usize) -> String {
    if token.chars().count() <= max {
        token.to_string()
    } else {
        let head: String = token.chars().take(max).collect();
        format!("{}...", head)
    }
}
