use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{Amount, Entry, MonthKey};

/// The in-memory ledger: one insertion-ordered entry list per calendar
/// month. Lives only for the session - created empty at startup, discarded
/// at exit. Growth is append-only; months are created on first use and never
/// removed.
#[derive(Debug, Default)]
pub struct Ledger {
    months: BTreeMap<MonthKey, Vec<Entry>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, chaining its balance onto the month's current
    /// closing balance (zero for the first entry of a month). Returns the
    /// recorded entry.
    pub fn append(
        &mut self,
        date: NaiveDate,
        category: impl Into<String>,
        income: Amount,
        expense: Amount,
    ) -> Entry {
        let key = MonthKey::from_date(date);
        let entries = self.months.entry(key).or_default();
        let previous = entries.last().map(|e| e.balance).unwrap_or(Amount::ZERO);

        let entry = Entry::new(date, category, income, expense, previous);
        entries.push(entry.clone());
        entry
    }

    /// Entries recorded for a month, in insertion order. Empty when the
    /// month has never been written to.
    pub fn entries_for_month(&self, key: &MonthKey) -> &[Entry] {
        self.months.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Populated month keys in ascending order.
    pub fn month_keys(&self) -> impl Iterator<Item = &MonthKey> {
        self.months.keys()
    }

    /// Closing balance of a month: the last entry's running balance.
    /// `None` when the month is absent; populated months are never empty.
    pub fn closing_balance(&self, key: &MonthKey) -> Option<Amount> {
        self.months.get(key)?.last().map(|e| e.balance)
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Total entry count across all months.
    pub fn entry_count(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_balances_chain_within_month() {
        let mut ledger = Ledger::new();
        ledger.append(date(2025, 1, 1), "Salary", amount("1000"), Amount::ZERO);
        let second = ledger.append(date(2025, 1, 5), "Buy Cake", Amount::ZERO, amount("50"));

        assert_eq!(second.balance, amount("950"));

        let key = MonthKey::new(2025, 1).unwrap();
        let entries = ledger.entries_for_month(&key);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].balance, amount("1000"));
        assert_eq!(entries[1].balance, amount("950"));
        assert_eq!(ledger.closing_balance(&key), Some(amount("950")));
    }

    #[test]
    fn test_each_month_starts_from_zero() {
        let mut ledger = Ledger::new();
        ledger.append(date(2025, 1, 1), "Salary", amount("1000"), Amount::ZERO);
        let feb = ledger.append(date(2025, 2, 1), "Rent", Amount::ZERO, amount("300"));

        // February's running balance does not include January's closing
        // balance; carry-over happens only at export time.
        assert_eq!(feb.balance, amount("-300"));
    }

    #[test]
    fn test_month_keys_ascend_regardless_of_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.append(date(2025, 3, 1), "C", Amount::ZERO, Amount::ZERO);
        ledger.append(date(2024, 12, 1), "A", Amount::ZERO, Amount::ZERO);
        ledger.append(date(2025, 1, 1), "B", Amount::ZERO, Amount::ZERO);

        let keys: Vec<String> = ledger.month_keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["2024-12", "2025-01", "2025-03"]);
    }

    #[test]
    fn test_absent_month_is_empty() {
        let ledger = Ledger::new();
        let key = MonthKey::new(2025, 1).unwrap();
        assert!(ledger.entries_for_month(&key).is_empty());
        assert_eq!(ledger.closing_balance(&key), None);
        assert!(ledger.is_empty());
        assert_eq!(ledger.entry_count(), 0);
    }

    #[test]
    fn test_entry_count_spans_months() {
        let mut ledger = Ledger::new();
        ledger.append(date(2025, 1, 1), "A", amount("10"), Amount::ZERO);
        ledger.append(date(2025, 1, 2), "B", amount("10"), Amount::ZERO);
        ledger.append(date(2025, 2, 1), "C", amount("10"), Amount::ZERO);

        assert_eq!(ledger.entry_count(), 3);
        assert!(!ledger.is_empty());
    }
}
