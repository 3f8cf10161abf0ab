//! CSV Export functionality
//!
//! Writes stored expenses in spreadsheet-compatible CSV with a header row.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Export all stored expenses to CSV, returning the number of rows written
pub fn export_expenses_csv<W: Write>(store: &ExpenseStore, writer: W) -> ExpenseResult<usize> {
    let expenses = store.list()?;
    write_expenses_csv(&expenses, writer)?;
    Ok(expenses.len())
}

/// Write the given expenses as CSV
///
/// Columns: `id,created_on,amount,memo`. The header is written even when
/// there are no rows.
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["id", "created_on", "amount", "memo"])?;
    for expense in expenses {
        csv_writer.serialize(expense)?;
    }

    csv_writer.flush()?;
    Ok(())
}
