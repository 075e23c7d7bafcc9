use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;

use crate::application::AppError;
use crate::domain::{Amount, Entry, Ledger, MonthKey, thai_month_name};

/// Fixed report filename, written into the working directory unless the
/// session overrides it.
pub const DEFAULT_REPORT_PATH: &str = "yearly_income_expense_report.xlsx";

/// Column headers shared by every sheet. The first column doubles as the
/// date column for entry rows.
const COLUMN_HEADERS: [&str; 5] = ["Month", "Category", "Income", "Expense", "Balance"];

const BRING_FORWARD_LABEL: &str = "Bring forward";

/// One worksheet of the yearly report.
#[derive(Debug, Clone)]
pub struct MonthSheet {
    pub key: MonthKey,
    /// Localized title row embedding the Thai month name.
    pub title: String,
    /// Closing balance of the previous populated month in sorted order, zero
    /// for the first sheet. Gap months are not filled in: the balance is
    /// carried across a gap unchanged.
    pub brought_forward: Amount,
    pub entries: Vec<Entry>,
}

/// The full export artifact: one sheet per populated month, ascending by
/// month key. Built as a plain model first so the layout is testable without
/// reading the workbook back.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub sheets: Vec<MonthSheet>,
}

/// What a successful export wrote, for the confirmation message.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub sheet_count: usize,
    pub entry_count: usize,
}

impl MonthlyReport {
    /// Assemble the report model from the ledger. No IO happens here.
    pub fn build(ledger: &Ledger) -> Result<Self, AppError> {
        let mut sheets = Vec::new();
        let mut forward = Amount::ZERO;

        for key in ledger.month_keys() {
            let name =
                thai_month_name(key.month()).ok_or(AppError::UnknownMonth(key.month()))?;

            sheets.push(MonthSheet {
                key: *key,
                title: format!("รายรับรายจ่ายเดือน{name}"),
                brought_forward: forward,
                entries: ledger.entries_for_month(key).to_vec(),
            });

            if let Some(closing) = ledger.closing_balance(key) {
                forward = closing;
            }
        }

        Ok(Self { sheets })
    }

    /// Write the report as an xlsx workbook, overwriting any existing file
    /// at `path`. Only the month sheets are materialized; the writer creates
    /// no default blank sheet that would need removing.
    pub fn save(&self, path: &Path) -> Result<ExportSummary, AppError> {
        let mut workbook = Workbook::new();

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.key.to_string())?;

            worksheet.write_string(0, 0, &sheet.title)?;
            for (col, header) in COLUMN_HEADERS.iter().enumerate() {
                worksheet.write_string(1, col as u16, *header)?;
            }

            // Bring-forward row: label, three blank cells, forward balance.
            worksheet.write_string(2, 0, BRING_FORWARD_LABEL)?;
            worksheet.write_number(2, 4, to_f64(sheet.brought_forward))?;

            for (idx, entry) in sheet.entries.iter().enumerate() {
                let row = 3 + idx as u32;
                worksheet.write_string(row, 0, entry.display_date())?;
                worksheet.write_string(row, 1, &entry.category)?;
                worksheet.write_number(row, 2, to_f64(entry.income))?;
                worksheet.write_number(row, 3, to_f64(entry.expense))?;
                worksheet.write_number(row, 4, to_f64(entry.balance))?;
            }
        }

        workbook.save(path)?;

        Ok(ExportSummary {
            path: path.to_path_buf(),
            sheet_count: self.sheets.len(),
            entry_count: self.sheets.iter().map(|s| s.entries.len()).sum(),
        })
    }
}

fn to_f64(amount: Amount) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}
