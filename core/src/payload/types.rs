//! payload/types.rs
//! Payload parse errors and the payment option bitmask.

use std::fmt;

use bitflags::bitflags;

use crate::constants::option_bits;
use crate::model::Payment;
use crate::utils::preview;

bitflags! {
    /// First field of every payment record.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PaymentOptions: u8 {
        const PAYMENT_ORDER  = option_bits::PAYMENT_ORDER;
        const STANDING_ORDER = option_bits::STANDING_ORDER;
        const DIRECT_DEBIT   = option_bits::DIRECT_DEBIT;
    }
}

impl PaymentOptions {
    pub fn of(payment: &Payment) -> Self {
        let mut options = PaymentOptions::empty();
        options.set(PaymentOptions::PAYMENT_ORDER, payment.order_option);
        options.set(PaymentOptions::STANDING_ORDER, payment.standing_order.is_some());
        options.set(PaymentOptions::DIRECT_DEBIT, payment.direct_debit.is_some());
        options
    }
}

const TOKEN_PREVIEW: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A field was requested after the last one was consumed.
    UnexpectedEndOfInput { offset: usize },
    /// Required value is empty.
    MissingValue { field: &'static str },
    InvalidInteger { field: &'static str, token: String },
    NegativeCount { field: &'static str, value: i64 },
    InvalidBoolean { field: &'static str, token: String },
    InvalidAmount { field: &'static str, token: String },
    InvalidDate { field: &'static str, token: String },
    /// Payload bytes are not UTF-8.
    InvalidEncoding { offset: usize },
    ExtensionNotImplemented { extension: &'static str },
    /// Input left after the top-level record.
    ExtraneousData { offset: usize, remaining: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError::*;
        match self {
            UnexpectedEndOfInput { offset } =>
                write!(f, "unexpected end of input at offset {}", offset),
            MissingValue { field } =>
                write!(f, "missing value for {}", field),
            InvalidInteger { field, token } =>
                write!(f, "invalid integer for {}: {:?}", field, preview(token, TOKEN_PREVIEW)),
            NegativeCount { field, value } =>
                write!(f, "negative count for {}: {}", field, value),
            InvalidBoolean { field, token } =>
                write!(f, "invalid boolean for {}: {:?}", field, preview(token, TOKEN_PREVIEW)),
            InvalidAmount { field, token } =>
                write!(f, "invalid amount for {}: {:?}", field, preview(token, TOKEN_PREVIEW)),
            InvalidDate { field, token } =>
                write!(f, "invalid date for {}: {:?}", field, preview(token, TOKEN_PREVIEW)),
            InvalidEncoding { offset } =>
                write!(f, "payload is not valid UTF-8 (offset {})", offset),
            ExtensionNotImplemented { extension } =>
                write!(f, "decoding of {} extension is not implemented", extension),
            ExtraneousData { offset, remaining } =>
                write!(f, "extraneous data after parsed document: {} byte(s) at offset {}", remaining, offset),
        }
    }
}

impl std::error::Error for ParseError {}
