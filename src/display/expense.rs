//! Expense display formatting
//!
//! Formats expense rows, row counts and totals for terminal output.

use crate::models::{Expense, Money};

/// Width of the separator line printed under the table
pub const SEPARATOR_WIDTH: usize = 100;

/// Describe how many rows a query returned
pub fn format_count(rows: usize) -> String {
    if rows == 0 {
        "There are no expenses".to_string()
    } else {
        format!("There are {} rows.", rows)
    }
}

/// Header printed before search results
pub fn format_search_header() -> &'static str {
    "We have found the following expenses with that search term:"
}

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:>4} | {:>12} | {:>10} | {}",
        expense.id,
        expense.created_on.format("%Y-%m-%d").to_string(),
        expense.amount,
        expense.memo
    )
}

/// Format expenses as a table followed by a separator and their total
pub fn format_expense_table(expenses: &[Expense]) -> String {
    let mut output = String::new();

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output.push_str(&"-".repeat(SEPARATOR_WIDTH));
    output.push('\n');

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!("Total {:>25}\n", total));

    output
}

/// Format a query result: the count line, then the table when non-empty
pub fn format_expense_report(expenses: &[Expense]) -> String {
    let mut output = format_count(expenses.len());
    output.push('\n');

    if !expenses.is_empty() {
        output.push_str(&format_expense_table(expenses));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;

    fn create_test_expense(id: i64, cents: i64, memo: &str) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            created_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            amount: Money::from_cents(cents),
            memo: memo.to_string(),
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "There are no expenses");
        assert_eq!(format_count(1), "There are 1 rows.");
        assert_eq!(format_count(12), "There are 12 rows.");
    }

    #[test]
    fn test_format_row_alignment() {
        let row = format_expense_row(&create_test_expense(7, 1000, "Lunch"));
        assert_eq!(row, "   7 |   2024-05-01 |      10.00 | Lunch");
    }

    #[test]
    fn test_format_table_total() {
        let expenses = vec![
            create_test_expense(1, 1000, "Lunch"),
            create_test_expense(2, 255, "Coffee"),
        ];

        let output = format_expense_table(&expenses);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "-".repeat(100));
        assert_eq!(lines[3], format!("Total {:>25}", "12.55"));
    }

    #[test]
    fn test_format_report_empty() {
        assert_eq!(format_expense_report(&[]), "There are no expenses\n");
    }

    #[test]
    fn test_format_report_with_rows() {
        let output = format_expense_report(&[create_test_expense(1, 1000, "Lunch")]);
        assert!(output.starts_with("There are 1 rows.\n"));
        assert!(output.contains("| Lunch"));
        assert!(output.ends_with(&format!("Total {:>25}\n", "10.00")));
    }
}
