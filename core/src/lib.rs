//! bysquare-core
//!
//! PAY by square document codec: payload serialization, CRC-32 sealing,
//! raw LZMA1 framing, kind header and base-32 token text.
//! Barcode rendering is out of scope; callers get the token string.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Document model
pub mod model;

// Pipeline stages
pub mod payload;
pub mod integrity;
pub mod compression;
pub mod radix;
pub mod codec;

pub mod telemetry;

pub use codec::{DocumentCodec, DocumentKind};
pub use config::{BackendConfig, CodecConfig};
pub use types::{BysquareError, ErrorKind, Result};

/// Encode with the default codec (linked LZMA backend).
pub fn encode(document: &model::Document) -> Result<String> {
    DocumentCodec::default().encode(document)
}

/// Decode with the default codec (linked LZMA backend).
pub fn decode(token: &str) -> Result<model::Document> {
    DocumentCodec::default().decode(token)
}

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{DocumentCodec, DocumentKind};
    pub use crate::config::{BackendConfig, CodecConfig};
    pub use crate::model::{
        BankAccount, DirectDebitExt, DirectDebitScheme, DirectDebitType, Document, MonthSet,
        PayDate, PayDocument, Payment, Periodicity, StandingOrderExt,
    };
    pub use crate::types::{BysquareError, ErrorKind, Result};
}
