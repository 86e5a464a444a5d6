//! model/extensions.rs
//! Standing-order and direct-debit extensions of a payment.

use std::fmt;

use bitflags::bitflags;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::date::PayDate;

/// How often a standing order repeats. Wire form is the one-letter code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Periodicity {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannually,
    Annually,
}

impl Periodicity {
    pub const fn code(self) -> char {
        match self {
            Periodicity::Daily        => 'd',
            Periodicity::Weekly       => 'w',
            Periodicity::Biweekly     => 'b',
            Periodicity::Monthly      => 'm',
            Periodicity::Bimonthly    => 'B',
            Periodicity::Quarterly    => 'q',
            Periodicity::Semiannually => 's',
            Periodicity::Annually     => 'a',
        }
    }

    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'd' => Some(Periodicity::Daily),
            'w' => Some(Periodicity::Weekly),
            'b' => Some(Periodicity::Biweekly),
            'm' => Some(Periodicity::Monthly),
            'B' => Some(Periodicity::Bimonthly),
            'q' => Some(Periodicity::Quarterly),
            's' => Some(Periodicity::Semiannually),
            'a' => Some(Periodicity::Annually),
            _ => None,
        }
    }

    /// Weekly schedules count days of the week (1 = Monday .. 7 = Sunday),
    /// everything else counts days of the month.
    pub const fn max_day(self) -> u8 {
        match self {
            Periodicity::Weekly | Periodicity::Biweekly => 7,
            _ => 31,
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

bitflags! {
    /// Months on which an annual standing order is executed.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MonthSet: u16 {
        const JANUARY   = 1 << 0;
        const FEBRUARY  = 1 << 1;
        const MARCH     = 1 << 2;
        const APRIL     = 1 << 3;
        const MAY       = 1 << 4;
        const JUNE      = 1 << 5;
        const JULY      = 1 << 6;
        const AUGUST    = 1 << 7;
        const SEPTEMBER = 1 << 8;
        const OCTOBER   = 1 << 9;
        const NOVEMBER  = 1 << 10;
        const DECEMBER  = 1 << 11;
    }
}

impl MonthSet {
    /// Month by number, 1 = January.
    pub fn month(n: u8) -> Option<Self> {
        if (1..=12).contains(&n) {
            Self::from_bits(1 << (n - 1))
        } else {
            None
        }
    }
}

/// Data required to set up a standing order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingOrderExt {
    /// Day of month (1-31) or day of week (1-7), depending on `periodicity`.
    pub day: Option<u8>,
    pub month: Option<MonthSet>,
    pub periodicity: Periodicity,
    pub last_date: Option<PayDate>,
}

impl StandingOrderExt {
    pub fn new(periodicity: Periodicity) -> Self {
        Self { day: None, month: None, periodicity, last_date: None }
    }

    pub fn with_day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_month(mut self, month: MonthSet) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_last_date(mut self, date: PayDate) -> Self {
        self.last_date = Some(date);
        self
    }

    /// `true` when `day` fits the range implied by the periodicity.
    pub fn day_in_range(&self) -> bool {
        match self.day {
            Some(d) => d >= 1 && d <= self.periodicity.max_day(),
            None => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectDebitScheme {
    #[serde(rename = "SEPA")]
    Sepa,
    #[serde(rename = "other")]
    Other,
}

impl DirectDebitScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            DirectDebitScheme::Sepa  => "SEPA",
            DirectDebitScheme::Other => "other",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectDebitType {
    #[serde(rename = "one-off")]
    OneOff,
    #[serde(rename = "recurrent")]
    Recurrent,
}

impl DirectDebitType {
    pub const fn as_str(self) -> &'static str {
        match self {
            DirectDebitType::OneOff    => "one-off",
            DirectDebitType::Recurrent => "recurrent",
        }
    }
}

/// Data identifying and setting up a direct debit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectDebitExt {
    pub scheme: DirectDebitScheme,
    pub debit_type: DirectDebitType,
    pub variable_symbol: Option<String>,
    pub specific_symbol: Option<String>,
    pub reference: Option<String>,
    /// Mandate between creditor and debtor.
    pub mandate_id: String,
    pub creditor_id: String,
    pub contract_id: Option<String>,
    /// Maximum amount that can be debited.
    pub max_amount: Option<Decimal>,
    pub valid_till: Option<PayDate>,
}

impl DirectDebitExt {
    pub fn new(
        scheme: DirectDebitScheme,
        debit_type: DirectDebitType,
        mandate_id: impl Into<String>,
        creditor_id: impl Into<String>,
    ) -> Self {
        Self {
            scheme,
            debit_type,
            variable_symbol: None,
            specific_symbol: None,
            reference: None,
            mandate_id: mandate_id.into(),
            creditor_id: creditor_id.into(),
            contract_id: None,
            max_amount: None,
            valid_till: None,
        }
    }

    pub fn with_contract_id(mut self, contract_id: impl Into<String>) -> Self {
        self.contract_id = Some(contract_id.into());
        self
    }

    pub fn with_max_amount(mut self, amount: Decimal) -> Self {
        self.max_amount = Some(amount);
        self
    }

    pub fn with_valid_till(mut self, date: PayDate) -> Self {
        self.valid_till = Some(date);
        self
    }
}
