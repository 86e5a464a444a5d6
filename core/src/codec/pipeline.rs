//! codec/pipeline.rs
//!
//! Document <-> token orchestration.
//!
//! Design notes:
//! - Encode: serialize -> seal (CRC-32) -> compress (length prefix) ->
//!   prepend kind header -> radix encode.
//! - Decode runs the inverse; each stage validates its own framing before
//!   handing bytes on, and the first failure aborts.
//! - The codec holds only configuration and a backend handle; calls share
//!   no mutable state.

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::codec::kind::DocumentKind;
use crate::compression::{
    compress_framed, create_backend, decompress_framed, LinkedBackend, LzmaBackend, LzmaParams,
};
use crate::config::CodecConfig;
use crate::constants::KIND_HEADER_LEN;
use crate::integrity;
use crate::model::Document;
use crate::payload::{parse_bytes, PayloadSerializer};
use crate::radix;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::Result;

pub struct DocumentCodec {
    config: CodecConfig,
    backend: Box<dyn LzmaBackend>,
    params: LzmaParams,
    serializer: PayloadSerializer,
}

impl fmt::Debug for DocumentCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentCodec")
            .field("config", &self.config)
            .field("backend", &self.backend.name())
            .field("params", &self.params)
            .finish()
    }
}

impl Default for DocumentCodec {
    fn default() -> Self {
        Self::with_backend(CodecConfig::default(), Box::new(LinkedBackend::new()))
    }
}

impl DocumentCodec {
    pub fn new(config: CodecConfig) -> Result<Self> {
        let backend = create_backend(&config.backend)?;
        Ok(Self::with_backend(config, backend))
    }

    /// Use a caller-provided backend; `config.backend` is kept for reference only.
    pub fn with_backend(config: CodecConfig, backend: Box<dyn LzmaBackend>) -> Self {
        Self {
            config,
            backend,
            params: LzmaParams::BYSQUARE,
            serializer: PayloadSerializer::default(),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn encode(&self, document: &Document) -> Result<String> {
        self.encode_with_telemetry(document).map(|(token, _)| token)
    }

    pub fn decode(&self, token: &str) -> Result<Document> {
        self.decode_with_telemetry(token).map(|(document, _)| document)
    }

    #[instrument(level = "debug", skip_all, fields(backend = self.backend.name()))]
    pub fn encode_with_telemetry(&self, document: &Document) -> Result<(String, TelemetrySnapshot)> {
        let mut timer = TelemetryTimer::new();
        let kind = document.kind();

        let payload = timer.measure(Stage::Serialize, || self.serializer.serialize(document));
        trace!(stage = %Stage::Serialize, bytes = payload.len());

        let sealed = timer.measure(Stage::Seal, || integrity::seal(payload.as_bytes()));
        trace!(stage = %Stage::Seal, bytes = sealed.len());

        let framed = timer.measure(Stage::Compress, || {
            compress_framed(self.backend.as_ref(), &sealed, &self.params)
        })?;
        trace!(stage = %Stage::Compress, bytes = framed.len());

        let mut bytes = Vec::with_capacity(KIND_HEADER_LEN + framed.len());
        bytes.extend_from_slice(&kind.header());
        bytes.extend_from_slice(&framed);

        let token = timer.measure(Stage::RadixEncode, || radix::encode(&bytes));
        timer.finish();

        let mut counters = TelemetryCounters::default();
        counters.add_document(
            payment_count(document),
            payload.len(),
            sealed.len(),
            framed.len(),
            token.len(),
        );
        let snapshot = TelemetrySnapshot::from(&counters, &timer);

        debug!(
            ?kind,
            payload = payload.len(),
            compressed = framed.len(),
            token = token.len(),
            "encoded document"
        );
        self.report(&snapshot);

        Ok((token, snapshot))
    }

    #[instrument(level = "debug", skip_all, fields(backend = self.backend.name(), token_len = token.len()))]
    pub fn decode_with_telemetry(&self, token: &str) -> Result<(Document, TelemetrySnapshot)> {
        let mut timer = TelemetryTimer::new();

        let bytes = timer.measure(Stage::RadixDecode, || radix::decode(token))?;
        trace!(stage = %Stage::RadixDecode, bytes = bytes.len());

        let (kind, framed) = DocumentKind::split_header(&bytes)?;

        let sealed = timer.measure(Stage::Decompress, || {
            decompress_framed(self.backend.as_ref(), framed, &self.params)
        })?;
        trace!(stage = %Stage::Decompress, bytes = sealed.len());

        let payload = timer.measure(Stage::Verify, || integrity::verify(&sealed))?;
        trace!(stage = %Stage::Verify, bytes = payload.len());

        let document = timer.measure(Stage::Parse, || parse_bytes(kind, payload))?;
        timer.finish();

        let mut counters = TelemetryCounters::default();
        counters.add_document(
            payment_count(&document),
            payload.len(),
            sealed.len(),
            framed.len(),
            token.len(),
        );
        let snapshot = TelemetrySnapshot::from(&counters, &timer);

        debug!(?kind, payload = payload.len(), compressed = framed.len(), "decoded document");
        self.report(&snapshot);

        Ok((document, snapshot))
    }

    fn report(&self, snapshot: &TelemetrySnapshot) {
        if !self.config.logs_telemetry() {
            return;
        }
        match snapshot.to_json() {
            Ok(json) => debug!(telemetry = %json, "codec telemetry"),
            Err(e) => debug!(error = %e, "telemetry snapshot not serializable"),
        }
    }
}

fn payment_count(document: &Document) -> usize {
    match document {
        Document::Pay(pay) => pay.payments.len(),
    }
}
