//! compression/backends/mod.rs
//! Implementations of `LzmaBackend`.

pub mod linked;
pub mod process;

pub use linked::LinkedBackend;
pub use process::ProcessBackend;
