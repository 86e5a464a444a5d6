//! model/mod.rs
//! Document model consumed (read-only) by the codec.
//!
//! Values are built up front with `Default`/struct literals or the consuming
//! `with_*` helpers; the codec only ever borrows them.

pub mod date;
pub mod document;
pub mod extensions;
pub mod payment;

pub use date::*;
pub use document::*;
pub use extensions::*;
pub use payment::*;
