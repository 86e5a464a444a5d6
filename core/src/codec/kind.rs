//! codec/kind.rs
//! Document kind discriminator (2-byte header in front of the framed stream).
//!
//! Design notes:
//! - The header is the first thing checked on decode; an unknown kind is
//!   rejected before any decompression work.
//! - Header bytes are the big-endian rendering of the kind id.

use std::fmt;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::{kind_ids, KIND_HEADER_LEN};
use crate::utils::{enum_name_or_hex, fmt_bytes};

#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum DocumentKind {
    Payment = kind_ids::PAYMENT,
}

impl DocumentKind {
    pub fn verify(raw: u16) -> Result<(), KindError> {
        match raw {
            x if x == DocumentKind::Payment as u16 => Ok(()),
            _ => Err(KindError::Unknown { raw }),
        }
    }

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn header(self) -> [u8; KIND_HEADER_LEN] {
        self.id().to_be_bytes()
    }

    /// Split the kind header off `bytes`.
    pub fn split_header(bytes: &[u8]) -> Result<(DocumentKind, &[u8]), KindError> {
        if bytes.len() < KIND_HEADER_LEN {
            return Err(KindError::Truncated { bytes: bytes.to_vec() });
        }
        let (header, rest) = bytes.split_at(KIND_HEADER_LEN);
        let raw = u16::from_be_bytes([header[0], header[1]]);
        let kind = DocumentKind::try_from_primitive(raw).map_err(|_| KindError::Unknown { raw })?;
        Ok((kind, rest))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindError {
    Truncated { bytes: Vec<u8> },
    Unknown { raw: u16 },
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use KindError::*;
        match self {
            Truncated { bytes } =>
                write!(f, "kind header truncated: have {} byte(s) {}, need {}",
                       bytes.len(), fmt_bytes(bytes), KIND_HEADER_LEN),
            Unknown { raw } =>
                write!(f, "unsupported document kind: {}", enum_name_or_hex::<DocumentKind>(*raw)),
        }
    }
}

impl std::error::Error for KindError {}
