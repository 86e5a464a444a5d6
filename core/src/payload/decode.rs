//! payload/decode.rs
//! Delimited payload text -> Document.
//!
//! Design notes:
//! - The parser owns an explicit cursor; `None` means every field was consumed.
//!   `"a\t"` is two fields, `"a"` and `""`.
//! - Empty optional fields decode to `None`. Counts and flags are required.
//! - Integers must be in canonical form (`"07"`, `"+7"`, `"-0"` are rejected).
//! - The first failure aborts; no partial document is returned.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::codec::kind::DocumentKind;
use crate::constants::{DEFAULT_CURRENCY, SEPARATOR};
use crate::model::{BankAccount, Document, PayDate, PayDocument, Payment};
use crate::payload::types::{ParseError, PaymentOptions};

/// Upper bound for capacity reserved from an untrusted count.
const MAX_PREALLOC: usize = 16;

pub struct PayloadParser<'a> {
    input: &'a str,
    separator: char,
    pos: Option<usize>,
}

impl<'a> PayloadParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_separator(input, SEPARATOR)
    }

    pub fn with_separator(input: &'a str, separator: char) -> Self {
        Self { input, separator, pos: Some(0) }
    }

    /// Byte offset of the next field, or the input length once exhausted.
    pub fn offset(&self) -> usize {
        self.pos.unwrap_or(self.input.len())
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos.is_none()
    }

    pub fn next_token(&mut self) -> Result<&'a str, ParseError> {
        let start = self
            .pos
            .ok_or(ParseError::UnexpectedEndOfInput { offset: self.input.len() })?;
        let rest = &self.input[start..];
        match rest.find(self.separator) {
            Some(i) => {
                self.pos = Some(start + i + self.separator.len_utf8());
                Ok(&rest[..i])
            }
            None => {
                self.pos = None;
                Ok(rest)
            }
        }
    }

    pub fn read_text(&mut self) -> Result<Option<String>, ParseError> {
        let token = self.next_token()?;
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    pub fn read_int(&mut self, field: &'static str) -> Result<Option<i64>, ParseError> {
        let token = self.next_token()?;
        if token.is_empty() {
            return Ok(None);
        }
        parse_canonical_int(field, token).map(Some)
    }

    /// Required non-negative integer.
    pub fn read_count(&mut self, field: &'static str) -> Result<usize, ParseError> {
        let value = self.read_int(field)?.ok_or(ParseError::MissingValue { field })?;
        if value < 0 {
            return Err(ParseError::NegativeCount { field, value });
        }
        usize::try_from(value).map_err(|_| ParseError::InvalidInteger {
            field,
            token: value.to_string(),
        })
    }

    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, ParseError> {
        match self.next_token()? {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(ParseError::InvalidBoolean { field, token: other.to_string() }),
        }
    }

    pub fn read_amount(&mut self, field: &'static str) -> Result<Option<Decimal>, ParseError> {
        let token = self.next_token()?;
        if token.is_empty() {
            return Ok(None);
        }
        let invalid = || ParseError::InvalidAmount { field, token: token.to_string() };

        let canonical = canonical_amount(token).ok_or_else(invalid)?;
        let value = Decimal::from_str(token).map_err(|_| invalid())?;
        // Catches values rounded away by the decimal type (too many digits).
        if value.normalize().to_string() != canonical {
            return Err(invalid());
        }
        Ok(Some(value))
    }

    pub fn read_date(&mut self, field: &'static str) -> Result<Option<PayDate>, ParseError> {
        let token = self.next_token()?;
        if token.is_empty() {
            return Ok(None);
        }
        PayDate::from_compact(token)
            .map(Some)
            .ok_or_else(|| ParseError::InvalidDate { field, token: token.to_string() })
    }

    /// Fail unless every field has been consumed.
    pub fn finish(&self) -> Result<(), ParseError> {
        match self.pos {
            None => Ok(()),
            Some(pos) => {
                let offset = pos.saturating_sub(self.separator.len_utf8());
                Err(ParseError::ExtraneousData { offset, remaining: self.input.len() - offset })
            }
        }
    }

    fn read_pay(&mut self) -> Result<PayDocument, ParseError> {
        let invoice_id = self.read_text()?;
        let count = self.read_count("payment count")?;
        let mut payments = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            payments.push(self.read_payment()?);
        }
        Ok(PayDocument { invoice_id, payments })
    }

    fn read_payment(&mut self) -> Result<Payment, ParseError> {
        let options = self.read_count("payment options")?;
        let order_option = options & PaymentOptions::PAYMENT_ORDER.bits() as usize != 0;

        let amount = self.read_amount("amount")?;
        let currency = self.read_text()?.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let due_date = self.read_date("due date")?;
        let variable_symbol = self.read_text()?;
        let constant_symbol = self.read_text()?;
        let specific_symbol = self.read_text()?;
        let reference = self.read_text()?;
        let note = self.read_text()?;

        let count = self.read_count("bank account count")?;
        let mut bank_accounts = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            bank_accounts.push(self.read_account()?);
        }

        if self.read_bool("standing order flag")? {
            return Err(ParseError::ExtensionNotImplemented { extension: "standing order" });
        }
        if self.read_bool("direct debit flag")? {
            return Err(ParseError::ExtensionNotImplemented { extension: "direct debit" });
        }

        Ok(Payment {
            order_option,
            amount,
            currency,
            due_date,
            variable_symbol,
            constant_symbol,
            specific_symbol,
            reference,
            note,
            bank_accounts,
            standing_order: None,
            direct_debit: None,
        })
    }

    fn read_account(&mut self) -> Result<BankAccount, ParseError> {
        let iban = self.read_text()?.unwrap_or_default();
        let bic = self.read_text()?;
        Ok(BankAccount { iban, bic })
    }
}

fn parse_canonical_int(field: &'static str, token: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidInteger { field, token: token.to_string() };
    let value: i64 = token.parse().map_err(|_| invalid())?;
    if value.to_string() != token {
        return Err(invalid());
    }
    Ok(value)
}

/// Canonical rendering of a `-?digits[.digits]` token: no leading zeros in
/// the integer part, no trailing zeros in the fraction, no negative zero.
/// `None` when the token does not have that shape.
fn canonical_amount(token: &str) -> Option<String> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(b) => (true, b),
        None => (false, token),
    };
    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(int) || !frac.map_or(true, digits) {
        return None;
    }

    let int = match int.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let frac = frac.map_or("", |f| f.trim_end_matches('0'));

    let mut out = String::with_capacity(token.len());
    if negative && !(int == "0" && frac.is_empty()) {
        out.push('-');
    }
    out.push_str(int);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    Some(out)
}

/// Parse a complete payload of the given kind.
pub fn parse_document(kind: DocumentKind, payload: &str) -> Result<Document, ParseError> {
    let mut parser = PayloadParser::new(payload);
    let document = match kind {
        DocumentKind::Payment => Document::Pay(parser.read_pay()?),
    };
    parser.finish()?;
    Ok(document)
}

/// `parse_document` over raw bytes; the payload must be UTF-8.
pub fn parse_bytes(kind: DocumentKind, payload: &[u8]) -> Result<Document, ParseError> {
    let text = std::str::from_utf8(payload)
        .map_err(|e| ParseError::InvalidEncoding { offset: e.valid_up_to() })?;
    parse_document(kind, text)
}
