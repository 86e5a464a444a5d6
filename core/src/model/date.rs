//! model/date.rs
//! Payment dates as carried by the payload.
//!
//! Design notes:
//! - The codec checks digit shape only. `20241301` is a valid `PayDate`;
//!   calendar validation is available through `to_naive_date`.
//! - Logical form is `YYYY-MM-DD`, wire form is `YYYYMMDD`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayDate {
    year: u16,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatError {
    pub input: String,
}

impl fmt::Display for DateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date {:?}: expected YYYY-MM-DD", self.input)
    }
}

impl std::error::Error for DateFormatError {}

impl PayDate {
    /// Build a date from components. Only the digit ranges are enforced
    /// (year <= 9999, month and day <= 99).
    pub fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        if year > 9999 || month > 99 || day > 99 {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Parse the 8-digit wire form.
    pub fn from_compact(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 8 || !b.iter().all(u8::is_ascii_digit) {
            return None;
        }
        Some(Self {
            year: digits(&b[0..4]) as u16,
            month: digits(&b[4..6]) as u8,
            day: digits(&b[6..8]) as u8,
        })
    }

    /// Wire form, `YYYYMMDD`.
    pub fn to_compact(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }

    /// `None` when the digits do not name a real calendar day.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)
    }
}

fn digits(b: &[u8]) -> u32 {
    b.iter().fold(0, |acc, d| acc * 10 + (d - b'0') as u32)
}

impl fmt::Display for PayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for PayDate {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        let shaped = b.len() == 10 && b[4] == b'-' && b[7] == b'-';
        if !shaped {
            return Err(DateFormatError { input: s.to_string() });
        }
        let compact = [&s[0..4], &s[5..7], &s[8..10]].concat();
        Self::from_compact(&compact).ok_or_else(|| DateFormatError { input: s.to_string() })
    }
}

impl TryFrom<String> for PayDate {
    type Error = DateFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayDate> for String {
    fn from(value: PayDate) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for PayDate {
    fn from(d: NaiveDate) -> Self {
        // by square dates are four-digit years; clamp anything outside.
        let year = d.year().clamp(0, 9999) as u16;
        Self { year, month: d.month() as u8, day: d.day() as u8 }
    }
}
