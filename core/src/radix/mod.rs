//! radix/mod.rs
//! Custom base-32 text encoding of the framed token.
//!
//! Alphabet `0-9A-V`, 5 bits per symbol, most significant bit first.
//! Unlike RFC 4648 there is no `=` padding; the bit tail is zero-filled.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
