//! codec/mod.rs
//! Full document <-> token pipeline and the document kind header.

pub mod kind;
pub mod pipeline;

pub use kind::*;
pub use pipeline::*;
