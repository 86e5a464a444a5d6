//! compression/mod.rs
//! Raw LZMA1 compression with a length prefix.
//!
//! Design notes:
//! - Parameters are fixed by the token format (`LzmaParams::BYSQUARE`).
//! - The actual coder sits behind `LzmaBackend`; the registry picks the
//!   in-process liblzma binding or the external `xz` executable.

pub mod types;
pub mod framing;
pub mod registry;
pub mod backends;

pub use types::*;
pub use framing::*;
pub use registry::*;
pub use backends::*;
