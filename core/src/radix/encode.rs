//! radix/encode.rs
//! Bytes -> token text.

use crate::constants::{RADIX_ALPHABET, RADIX_BITS};

/// Number of symbols produced for `byte_len` input bytes.
#[inline]
pub fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8).div_ceil(RADIX_BITS as usize)
}

/// Encode `data` 5 bits at a time, most significant bit first.
/// The final group is zero-padded on the right.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        acc = (acc << 8) | byte as u32;
        bits += 8;
        while bits >= RADIX_BITS {
            bits -= RADIX_BITS;
            out.push(symbol((acc >> bits) & 0x1f));
        }
        acc &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(symbol((acc << (RADIX_BITS - bits)) & 0x1f));
    }

    out
}

#[inline]
fn symbol(value: u32) -> char {
    RADIX_ALPHABET[value as usize] as char
}
