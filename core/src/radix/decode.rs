//! radix/decode.rs
//! Token text -> bytes.
//!
//! Design notes:
//! - Matching is case-sensitive; lowercase letters are rejected.
//! - A well-formed token leaves fewer than 5 pad bits, all zero.

use crate::constants::{RADIX_ALPHABET, RADIX_BITS};
use crate::radix::types::RadixError;

const INVALID: u8 = 0xff;

/// ASCII -> symbol value, `INVALID` for anything outside the alphabet.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < RADIX_ALPHABET.len() {
        table[RADIX_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[inline]
fn value_of(c: char) -> Option<u32> {
    let idx = c as usize;
    if idx >= DECODE_TABLE.len() {
        return None;
    }
    match DECODE_TABLE[idx] {
        INVALID => None,
        v => Some(v as u32),
    }
}

pub fn decode(token: &str) -> Result<Vec<u8>, RadixError> {
    let mut out = Vec::with_capacity(token.len() * RADIX_BITS as usize / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut symbols = 0usize;

    for (position, c) in token.chars().enumerate() {
        let v = value_of(c).ok_or(RadixError::InvalidSymbol { symbol: c, position })?;
        acc = (acc << RADIX_BITS) | v;
        bits += RADIX_BITS;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
        acc &= (1 << bits) - 1;
        symbols += 1;
    }

    // A whole symbol of padding never comes out of the encoder.
    if bits >= RADIX_BITS {
        return Err(RadixError::InvalidLength { symbols });
    }
    if acc != 0 {
        return Err(RadixError::NonZeroPadding { bits });
    }

    Ok(out)
}
