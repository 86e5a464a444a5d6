//! compression/backends/linked.rs
//!
//! Raw LZMA1 through the `liblzma` crate.
//!
//! Design notes:
//! - Filters are rebuilt per call from `LzmaParams`; the backend itself is stateless.
//! - `process_vec` only writes into spare capacity, so capacity is grown before each call.
//! - Streams without an end-of-payload marker are accepted: decoding stops once
//!   input is exhausted and no further output appears.

use liblzma::stream::{Action, Filters, LzmaOptions, Status, Stream};

use crate::compression::types::{CompressionError, LzmaBackend, LzmaParams};

const NAME: &str = "linked";
const CHUNK: usize = 4096;

#[derive(Debug, Default, Clone, Copy)]
pub struct LinkedBackend;

impl LinkedBackend {
    pub const fn new() -> Self {
        LinkedBackend
    }
}

fn filters(params: &LzmaParams) -> Result<Filters, CompressionError> {
    let mut opts = LzmaOptions::new_preset(6).map_err(|e| init_failed(&e))?;
    opts.literal_context_bits(params.literal_context_bits)
        .literal_position_bits(params.literal_position_bits)
        .position_bits(params.position_bits)
        .dict_size(params.dict_size);
    let mut filters = Filters::new();
    filters.lzma1(&opts);
    Ok(filters)
}

fn init_failed(e: &liblzma::stream::Error) -> CompressionError {
    CompressionError::BackendInit { backend: NAME, msg: e.to_string() }
}

fn process_failed(e: &liblzma::stream::Error) -> CompressionError {
    CompressionError::BackendFailed { backend: NAME, status: None, diagnostics: e.to_string() }
}

impl LzmaBackend for LinkedBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compress(&self, input: &[u8], params: &LzmaParams) -> Result<Vec<u8>, CompressionError> {
        let mut stream = Stream::new_raw_encoder(&filters(params)?).map_err(|e| init_failed(&e))?;
        let mut out = Vec::with_capacity(input.len() / 2 + CHUNK);

        loop {
            if out.len() == out.capacity() {
                out.reserve(CHUNK);
            }
            let consumed = stream.total_in() as usize;
            let status = stream
                .process_vec(&input[consumed..], &mut out, Action::Finish)
                .map_err(|e| process_failed(&e))?;
            match status {
                Status::StreamEnd => break,
                Status::Ok | Status::GetCheck => {}
                Status::MemNeeded if out.len() == out.capacity() => {}
                Status::MemNeeded => {
                    return Err(CompressionError::BackendFailed {
                        backend: NAME,
                        status: None,
                        diagnostics: "encoder stalled before end of stream".into(),
                    })
                }
            }
        }

        Ok(out)
    }

    fn decompress(
        &self,
        input: &[u8],
        params: &LzmaParams,
        expected_len: usize,
    ) -> Result<Vec<u8>, CompressionError> {
        let mut stream = Stream::new_raw_decoder(&filters(params)?).map_err(|e| init_failed(&e))?;
        let limit = expected_len + 1;
        let mut out = Vec::with_capacity(limit.min(CHUNK));

        while out.len() < limit {
            if out.len() == out.capacity() {
                out.reserve((limit - out.len()).min(CHUNK));
            }
            let before = (stream.total_in(), stream.total_out());
            let consumed = stream.total_in() as usize;
            let status = stream
                .process_vec(&input[consumed..], &mut out, Action::Finish)
                .map_err(|e| process_failed(&e))?;
            if matches!(status, Status::StreamEnd) {
                break;
            }
            let stalled = before == (stream.total_in(), stream.total_out());
            if stalled && out.len() < out.capacity() {
                break;
            }
        }

        Ok(out)
    }
}
