//! payload/mod.rs
//! Flat, delimiter-separated text form of a document.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
