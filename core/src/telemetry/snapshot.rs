//! telemetry/snapshot.rs
//! Immutable summary of one encode or decode call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::CHECKSUM_LEN;
use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub documents: u64,
    pub payments: u64,
    pub bytes_payload: u64,
    pub bytes_sealed: u64,
    pub bytes_compressed: u64,
    pub bytes_token: u64,
    /// `bytes_compressed / bytes_sealed`. Short payloads can exceed 1.0.
    pub compression_ratio: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let compression_ratio = if counters.bytes_sealed > 0 {
            counters.bytes_compressed as f64 / counters.bytes_sealed as f64
        } else {
            0.0
        };

        Self {
            documents: counters.documents,
            payments: counters.payments,
            bytes_payload: counters.bytes_payload,
            bytes_sealed: counters.bytes_sealed,
            bytes_compressed: counters.bytes_compressed,
            bytes_token: counters.bytes_token,
            compression_ratio,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal invariants:
    /// - every sealed payload carries exactly one checksum prefix
    /// - stage times never exceed the wall time of the call
    pub fn sanity_check(&self) -> bool {
        self.bytes_sealed == self.bytes_payload + CHECKSUM_LEN as u64 * self.documents
            && self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
