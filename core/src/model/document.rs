//! model/document.rs
//! Top-level documents. Each variant maps to one kind header value.

use serde::{Deserialize, Serialize};

use crate::codec::kind::DocumentKind;
use crate::model::payment::Payment;

/// Closed set of document kinds the codec understands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document {
    Pay(PayDocument),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Pay(_) => DocumentKind::Payment,
        }
    }

    pub fn as_pay(&self) -> Option<&PayDocument> {
        match self {
            Document::Pay(doc) => Some(doc),
        }
    }

    pub fn into_pay(self) -> Option<PayDocument> {
        match self {
            Document::Pay(doc) => Some(doc),
        }
    }
}

impl From<PayDocument> for Document {
    fn from(doc: PayDocument) -> Self {
        Document::Pay(doc)
    }
}

/// "Pay" document: one or more payments, optionally tied to an invoice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayDocument {
    /// Only set when the code is printed on an invoice.
    pub invoice_id: Option<String>,
    pub payments: Vec<Payment>,
}

impl PayDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invoice_id(mut self, invoice_id: impl Into<String>) -> Self {
        self.invoice_id = Some(invoice_id.into());
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }
}
