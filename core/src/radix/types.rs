//! radix/types.rs
//! Error type of the base-32 token text codec.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// Character outside the alphabet (matching is case-sensitive).
    InvalidSymbol { symbol: char, position: usize },
    /// Trailing bits of the last symbol are not zero.
    NonZeroPadding { bits: u32 },
    /// No byte sequence encodes to this many symbols.
    InvalidLength { symbols: usize },
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RadixError::*;
        match self {
            InvalidSymbol { symbol, position } =>
                write!(f, "invalid symbol {:?} at position {}", symbol, position),
            NonZeroPadding { bits } =>
                write!(f, "non-zero padding in final {} bit(s)", bits),
            InvalidLength { symbols } =>
                write!(f, "invalid token length: {} symbols", symbols),
        }
    }
}

impl std::error::Error for RadixError {}
