//! model/payment.rs
//! A single payment order and the accounts it can be paid to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY;
use crate::model::date::PayDate;
use crate::model::extensions::{DirectDebitExt, StandingOrderExt};

/// Bank account, carried verbatim. IBAN/BIC are not validated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub iban: String,
    pub bic: Option<String>,
}

impl BankAccount {
    pub fn new(iban: impl Into<String>) -> Self {
        Self { iban: iban.into(), bic: None }
    }

    pub fn with_bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }
}

/// Payment order definition.
///
/// Optional text fields: `Some("")` is indistinguishable from `None` on the
/// wire and decodes back as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    /// `false` = one-off payment order, `true` = standing instruction.
    pub order_option: bool,
    pub amount: Option<Decimal>,
    /// ISO 4217 code; `"XXX"` when unspecified.
    pub currency: String,
    /// Also the first execution date of a standing order.
    pub due_date: Option<PayDate>,
    pub variable_symbol: Option<String>,
    pub constant_symbol: Option<String>,
    pub specific_symbol: Option<String>,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub bank_accounts: Vec<BankAccount>,
    pub standing_order: Option<StandingOrderExt>,
    pub direct_debit: Option<DirectDebitExt>,
}

impl Default for Payment {
    fn default() -> Self {
        Self {
            order_option: false,
            amount: None,
            currency: DEFAULT_CURRENCY.to_string(),
            due_date: None,
            variable_symbol: None,
            constant_symbol: None,
            specific_symbol: None,
            reference: None,
            note: None,
            bank_accounts: Vec::new(),
            standing_order: None,
            direct_debit: None,
        }
    }
}

impl Payment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order_option(mut self, standing: bool) -> Self {
        self.order_option = standing;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// An empty code keeps the `"XXX"` default.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        let currency = currency.into();
        if !currency.is_empty() {
            self.currency = currency;
        }
        self
    }

    pub fn with_due_date(mut self, date: PayDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn with_symbols(
        mut self,
        variable: Option<&str>,
        constant: Option<&str>,
        specific: Option<&str>,
    ) -> Self {
        self.variable_symbol = variable.map(str::to_string);
        self.constant_symbol = constant.map(str::to_string);
        self.specific_symbol = specific.map(str::to_string);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_account(mut self, account: BankAccount) -> Self {
        self.bank_accounts.push(account);
        self
    }

    pub fn with_standing_order(mut self, ext: StandingOrderExt) -> Self {
        self.standing_order = Some(ext);
        self
    }

    pub fn with_direct_debit(mut self, ext: DirectDebitExt) -> Self {
        self.direct_debit = Some(ext);
        self
    }

    pub fn has_extensions(&self) -> bool {
        self.standing_order.is_some() || self.direct_debit.is_some()
    }
}
