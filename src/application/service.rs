use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{DATE_FORMAT, Entry, Ledger, MonthKey, parse_amount};
use crate::io::export::{ExportSummary, MonthlyReport};

use super::AppError;

/// Application service owning the session ledger.
/// This is the primary interface for any client (CLI, form UI, tests); it
/// takes the raw field text the user typed and returns typed results.
#[derive(Default)]
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    /// Create a service with an empty ledger. The ledger lives only for the
    /// process - nothing is loaded from or saved to disk between sessions.
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    // ========================
    // Entry operations
    // ========================

    /// Validate raw form input and record a new entry.
    /// The ledger is untouched when any field fails validation. Blank
    /// income/expense fields default to zero.
    pub fn add_entry(
        &mut self,
        date: &str,
        category: &str,
        income: &str,
        expense: &str,
    ) -> Result<Entry, AppError> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| AppError::InvalidDate(date.trim().to_string()))?;

        let income = parse_amount(income).map_err(|_| AppError::InvalidAmount {
            field: "income",
            value: income.trim().to_string(),
        })?;
        let expense = parse_amount(expense).map_err(|_| AppError::InvalidAmount {
            field: "expense",
            value: expense.trim().to_string(),
        })?;

        Ok(self.ledger.append(date, category.trim(), income, expense))
    }

    /// Entries recorded for one month, in insertion order.
    pub fn month_entries(&self, key: &MonthKey) -> &[Entry] {
        self.ledger.entries_for_month(key)
    }

    /// Populated month keys, ascending.
    pub fn month_keys(&self) -> Vec<MonthKey> {
        self.ledger.month_keys().copied().collect()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ========================
    // Report export
    // ========================

    /// Build the monthly report and write it as an xlsx workbook,
    /// overwriting any existing file at `path`. The ledger is read-only
    /// here; a failed save leaves it exactly as it was.
    pub fn export_report(&self, path: &Path) -> Result<ExportSummary, AppError> {
        let report = MonthlyReport::build(&self.ledger)?;
        report.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_entry_parses_and_chains() {
        let mut service = LedgerService::new();
        let first = service.add_entry("01/01/2025", "Salary", "1000", "").unwrap();
        let second = service.add_entry("05/01/2025", "Buy Cake", "", "50").unwrap();

        assert_eq!(first.balance, amount("1000"));
        assert_eq!(second.balance, amount("950"));
        assert_eq!(second.display_date(), "05/01/2025");
    }

    #[test]
    fn test_invalid_date_leaves_ledger_unchanged() {
        let mut service = LedgerService::new();
        let err = service.add_entry("2025-01-01", "Salary", "1000", "").unwrap_err();

        assert!(matches!(err, AppError::InvalidDate(_)));
        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_impossible_calendar_date_is_rejected() {
        let mut service = LedgerService::new();
        let err = service.add_entry("31/02/2025", "Salary", "1000", "").unwrap_err();

        assert!(matches!(err, AppError::InvalidDate(_)));
        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_invalid_amount_leaves_ledger_unchanged() {
        let mut service = LedgerService::new();

        let err = service.add_entry("01/01/2025", "Salary", "lots", "").unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidAmount { field: "income", .. }
        ));

        let err = service.add_entry("01/01/2025", "Salary", "", "-5").unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidAmount { field: "expense", .. }
        ));

        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_blank_amounts_default_to_zero() {
        let mut service = LedgerService::new();
        let entry = service.add_entry("01/01/2025", "Note", "", "").unwrap();

        assert_eq!(entry.income, Amount::ZERO);
        assert_eq!(entry.expense, Amount::ZERO);
        assert_eq!(entry.balance, Amount::ZERO);
    }
}
