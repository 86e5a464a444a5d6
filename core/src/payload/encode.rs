//! payload/encode.rs
//! Document -> delimited payload text.
//!
//! Design notes:
//! - Field order is positional and must match `decode.rs`.
//! - A delimiter inside free text is replaced with a space. This is lossy.
//! - `Some("")` and `None` both serialize as an empty field.

use rust_decimal::Decimal;

use crate::constants::{DEFAULT_CURRENCY, SEPARATOR, SEPARATOR_REPLACEMENT};
use crate::model::{
    BankAccount, DirectDebitExt, Document, PayDate, PayDocument, Payment, StandingOrderExt,
};
use crate::payload::types::PaymentOptions;

#[derive(Debug, Clone, Copy)]
pub struct PayloadSerializer {
    separator: char,
}

impl Default for PayloadSerializer {
    fn default() -> Self {
        Self { separator: SEPARATOR }
    }
}

impl PayloadSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-standard delimiter. by square readers only understand TAB.
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }

    pub fn serialize(&self, document: &Document) -> String {
        let mut w = FieldWriter::new(self.separator);
        match document {
            Document::Pay(pay) => write_pay(&mut w, pay),
        }
        w.finish()
    }
}

/// Accumulates fields and joins them with the delimiter.
struct FieldWriter {
    separator: char,
    out: String,
    first: bool,
}

impl FieldWriter {
    fn new(separator: char) -> Self {
        Self { separator, out: String::new(), first: true }
    }

    fn raw(&mut self, value: &str) {
        if !self.first {
            self.out.push(self.separator);
        }
        self.first = false;
        self.out.push_str(value);
    }

    fn text(&mut self, value: Option<&str>) {
        let value = value.unwrap_or("");
        if value.contains(self.separator) {
            let cleaned = value.replace(self.separator, &SEPARATOR_REPLACEMENT.to_string());
            self.raw(&cleaned);
        } else {
            self.raw(value);
        }
    }

    fn int(&mut self, value: Option<u64>) {
        match value {
            Some(v) => self.raw(&v.to_string()),
            None => self.raw(""),
        }
    }

    fn flag(&mut self, value: bool) {
        self.raw(if value { "1" } else { "0" });
    }

    fn amount(&mut self, value: Option<&Decimal>) {
        match value {
            Some(v) => self.raw(&v.normalize().to_string()),
            None => self.raw(""),
        }
    }

    fn date(&mut self, value: Option<&PayDate>) {
        match value {
            Some(d) => self.raw(&d.to_compact()),
            None => self.raw(""),
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

fn write_pay(w: &mut FieldWriter, pay: &PayDocument) {
    w.text(pay.invoice_id.as_deref());
    w.int(Some(pay.payments.len() as u64));
    for payment in &pay.payments {
        write_payment(w, payment);
    }
}

fn write_payment(w: &mut FieldWriter, p: &Payment) {
    let currency = if p.currency.is_empty() { DEFAULT_CURRENCY } else { p.currency.as_str() };

    w.int(Some(PaymentOptions::of(p).bits() as u64));
    w.amount(p.amount.as_ref());
    w.text(Some(currency));
    w.date(p.due_date.as_ref());
    w.text(p.variable_symbol.as_deref());
    w.text(p.constant_symbol.as_deref());
    w.text(p.specific_symbol.as_deref());
    w.text(p.reference.as_deref());
    w.text(p.note.as_deref());

    w.int(Some(p.bank_accounts.len() as u64));
    for account in &p.bank_accounts {
        write_account(w, account);
    }

    w.flag(p.standing_order.is_some());
    if let Some(ext) = &p.standing_order {
        write_standing_order(w, ext);
    }
    w.flag(p.direct_debit.is_some());
    if let Some(ext) = &p.direct_debit {
        write_direct_debit(w, ext);
    }
}

fn write_account(w: &mut FieldWriter, account: &BankAccount) {
    w.text(Some(&account.iban));
    w.text(account.bic.as_deref());
}

fn write_standing_order(w: &mut FieldWriter, ext: &StandingOrderExt) {
    w.int(ext.day.map(u64::from));
    w.int(ext.month.map(|m| m.bits() as u64));
    w.raw(&ext.periodicity.code().to_string());
    w.date(ext.last_date.as_ref());
}

fn write_direct_debit(w: &mut FieldWriter, ext: &DirectDebitExt) {
    w.text(Some(ext.scheme.as_str()));
    w.text(Some(ext.debit_type.as_str()));
    w.text(ext.variable_symbol.as_deref());
    w.text(ext.specific_symbol.as_deref());
    w.text(ext.reference.as_deref());
    w.text(Some(&ext.mandate_id));
    w.text(Some(&ext.creditor_id));
    w.text(ext.contract_id.as_deref());
    w.amount(ext.max_amount.as_ref());
    w.date(ext.valid_till.as_ref());
}
