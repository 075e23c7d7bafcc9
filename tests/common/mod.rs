// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use mensis::application::LedgerService;
use mensis::domain::Amount;

/// Helper to parse a decimal amount literal.
pub fn amount(s: &str) -> Amount {
    s.parse().unwrap()
}

/// The worked example from the input form: a January salary followed by a
/// small expense, closing the month at 950.
pub fn january_fixture() -> LedgerService {
    let mut service = LedgerService::new();
    service
        .add_entry("01/01/2025", "Salary", "1000", "")
        .unwrap();
    service
        .add_entry("05/01/2025", "Buy Cake", "", "50")
        .unwrap();
    service
}
