use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::{Amount, MonthKey};

/// Display format for entry dates, matching the input form.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One recorded transaction with its running balance.
/// Entries are immutable - there is no update or delete, only append.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Calendar date, rendered `dd/mm/yyyy` everywhere it is shown.
    #[serde(serialize_with = "serialize_display_date")]
    pub date: NaiveDate,
    /// Free-text label (e.g., "Salary", "Buy Cake").
    pub category: String,
    /// Non-negative; zero when the field was left blank.
    pub income: Amount,
    /// Non-negative; zero when the field was left blank.
    pub expense: Amount,
    /// Running balance: previous balance in the same month + income - expense.
    pub balance: Amount,
}

impl Entry {
    /// Create an entry chained onto the month's previous balance.
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        income: Amount,
        expense: Amount,
        previous_balance: Amount,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            income,
            expense,
            balance: previous_balance + income - expense,
        }
    }

    /// The month bucket this entry belongs to.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Date in the fixed dd/mm/yyyy display format.
    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

fn serialize_display_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}
