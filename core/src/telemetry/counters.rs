//! telemetry/counters.rs
//! Mutable counters collected while encoding or decoding.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end of a call.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub documents: u64,
    pub payments: u64,
    /// Serialized payload text.
    pub bytes_payload: u64,
    /// Payload plus checksum prefix.
    pub bytes_sealed: u64,
    /// Length prefix plus LZMA stream.
    pub bytes_compressed: u64,
    /// Radix symbols.
    pub bytes_token: u64,
}

impl TelemetryCounters {
    /// Record one document passing through every stage.
    ///
    /// - `payments`: payment records in the document
    /// - `payload_len`: serialized payload length
    /// - `sealed_len`: payload plus checksum prefix
    /// - `compressed_len`: framed compressed length (without kind header)
    /// - `token_len`: symbols in the final token
    pub fn add_document(
        &mut self,
        payments: usize,
        payload_len: usize,
        sealed_len: usize,
        compressed_len: usize,
        token_len: usize,
    ) {
        self.documents += 1;
        self.payments += payments as u64;
        self.bytes_payload += payload_len as u64;
        self.bytes_sealed += sealed_len as u64;
        self.bytes_compressed += compressed_len as u64;
        self.bytes_token += token_len as u64;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.documents += other.documents;
        self.payments += other.payments;

        self.bytes_payload += other.bytes_payload;
        self.bytes_sealed += other.bytes_sealed;
        self.bytes_compressed += other.bytes_compressed;
        self.bytes_token += other.bytes_token;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
