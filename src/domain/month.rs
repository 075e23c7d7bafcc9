use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Key for one calendar month bucket of the ledger.
/// Ordered by (year, month), which matches the lexicographic order of its
/// `YYYY-MM` rendering, so sheet ordering falls out of the natural `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Build a key from a year and 1-based month number.
    /// Returns `None` when the month is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month bucket a date falls into. Always valid: chrono months are
    /// 1-based and in range.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    /// Parse the `YYYY-MM` form used for sheet names and CLI arguments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or(ParseMonthKeyError::InvalidFormat)?;
        let year: i32 = year.parse().map_err(|_| ParseMonthKeyError::InvalidFormat)?;
        let month: u32 = month
            .parse()
            .map_err(|_| ParseMonthKeyError::InvalidFormat)?;
        MonthKey::new(year, month).ok_or(ParseMonthKeyError::MonthOutOfRange)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMonthKeyError {
    InvalidFormat,
    MonthOutOfRange,
}

impl fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMonthKeyError::InvalidFormat => write!(f, "expected YYYY-MM"),
            ParseMonthKeyError::MonthOutOfRange => write!(f, "month must be 01-12"),
        }
    }
}

impl std::error::Error for ParseMonthKeyError {}

/// Thai month names used in sheet titles, indexed by 1-based month number.
const THAI_MONTH_NAMES: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Look up the Thai name for a 1-based month number.
/// `None` outside 1..=12; a valid `MonthKey` can never produce that.
pub fn thai_month_name(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    THAI_MONTH_NAMES.get(index).copied()
}
