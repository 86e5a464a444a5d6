//! compression/framing.rs
//! 2-byte little-endian uncompressed-length prefix around the LZMA stream.
//!
//! ```text
//! [ uncompressed length (2, LE) ]
//! [ raw LZMA1 stream (N)        ]
//! ```

use byteorder::{ByteOrder, LittleEndian};

use crate::compression::types::{CompressionError, LzmaBackend, LzmaParams};
use crate::constants::{LENGTH_PREFIX_LEN, MAX_SEALED_LEN};

pub fn compress_framed(
    backend: &dyn LzmaBackend,
    input: &[u8],
    params: &LzmaParams,
) -> Result<Vec<u8>, CompressionError> {
    if input.len() > MAX_SEALED_LEN {
        return Err(CompressionError::too_large(input.len()));
    }

    let body = backend.compress(input, params)?;

    let mut prefix = [0u8; LENGTH_PREFIX_LEN];
    LittleEndian::write_u16(&mut prefix, input.len() as u16);

    let mut out = Vec::with_capacity(LENGTH_PREFIX_LEN + body.len());
    out.extend_from_slice(&prefix);
    out.extend_from_slice(&body);
    Ok(out)
}

pub fn decompress_framed(
    backend: &dyn LzmaBackend,
    framed: &[u8],
    params: &LzmaParams,
) -> Result<Vec<u8>, CompressionError> {
    if framed.len() < LENGTH_PREFIX_LEN {
        return Err(CompressionError::MissingLengthPrefix { have: framed.len() });
    }
    let (prefix, body) = framed.split_at(LENGTH_PREFIX_LEN);
    let expected = LittleEndian::read_u16(prefix) as usize;

    let out = backend.decompress(body, params, expected)?;
    if out.len() != expected {
        return Err(CompressionError::LengthMismatch { expected, actual: out.len() });
    }
    Ok(out)
}
