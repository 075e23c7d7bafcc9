use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date '{0}': expected dd/mm/yyyy")]
    InvalidDate(String),

    #[error("Invalid {field} '{value}': expected a non-negative number")]
    InvalidAmount { field: &'static str, value: String },

    /// Month-name lookup outside 1-12. Unreachable from a valid ledger key,
    /// kept as an explicit error rather than a panic.
    #[error("No month name for month number {0}")]
    UnknownMonth(u32),

    #[error("Report export failed: {0}")]
    Report(#[from] rust_xlsxwriter::XlsxError),
}
