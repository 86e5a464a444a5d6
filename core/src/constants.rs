//! constants.rs
//! Wire constants shared by every stage of the codec.
//!
//! Design notes:
//! - Everything here is part of the token format; changing a value breaks
//!   interoperability with other by square readers.
//! - Multi-byte integers on the wire are little-endian, except the kind
//!   header which is compared as a raw byte pair.

/// Field delimiter of the client payload.
pub const SEPARATOR: char = '\t';

/// Replacement for a delimiter found inside a text value.
pub const SEPARATOR_REPLACEMENT: char = ' ';

/// Base-32 alphabet, value 0 -> '0' ... value 31 -> 'V'.
pub const RADIX_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Bits carried by one radix symbol.
pub const RADIX_BITS: u32 = 5;

/// Kind header length (bytes).
pub const KIND_HEADER_LEN: usize = 2;

/// Uncompressed-length prefix (u16, LE).
pub const LENGTH_PREFIX_LEN: usize = 2;

/// CRC-32 prefix in front of the payload.
pub const CHECKSUM_LEN: usize = 4;

/// Upper bound for checksum + payload, dictated by the u16 length prefix.
pub const MAX_SEALED_LEN: usize = u16::MAX as usize;

/// Currency code used when none is specified.
pub const DEFAULT_CURRENCY: &str = "XXX";

/// Default location of the `xz` executable for the process backend.
pub const DEFAULT_XZ_PATH: &str = "/usr/bin/xz";

/// Document kind identifiers (kind header values).
pub mod kind_ids {
    pub const PAYMENT: u16 = 0x0000;
}

/// Fixed LZMA1 parameters negotiated by the standard.
pub mod lzma {
    pub const LITERAL_CONTEXT_BITS: u32 = 3;
    pub const LITERAL_POSITION_BITS: u32 = 0;
    pub const POSITION_BITS: u32 = 2;
    pub const DICT_SIZE: u32 = 32 * 1024; // 32 KiB
}

/// Option bitmask of a payment record.
pub mod option_bits {
    pub const PAYMENT_ORDER: u8 = 0x01;
    pub const STANDING_ORDER: u8 = 0x02;
    pub const DIRECT_DEBIT: u8 = 0x04;
}
