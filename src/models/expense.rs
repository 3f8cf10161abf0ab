//! Expense model
//!
//! An expense is immutable once recorded: the database assigns its id, and
//! there is no update operation.

use chrono::{Local, NaiveDate};
use rusqlite::Row;
use serde::Serialize;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense, as stored in the `expenses` table
///
/// Field order is the column order used by CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    /// Database-assigned identifier
    pub id: ExpenseId,

    /// Date the expense was recorded
    pub created_on: NaiveDate,

    /// Amount spent (always at least 0.01 once stored)
    pub amount: Money,

    /// Free-text description
    pub memo: String,
}

impl Expense {
    /// Build an expense from a `SELECT id, amount, memo, created_on` row
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            amount: row.get("amount")?,
            memo: row.get("memo")?,
            created_on: row.get("created_on")?,
        })
    }
}

/// A request to record a new expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Money,
    pub memo: String,
    /// Explicit date; `None` records the expense on today's date
    pub created_on: Option<NaiveDate>,
}

impl NewExpense {
    /// Create an expense request dated today
    pub fn new(amount: Money, memo: impl Into<String>) -> Self {
        Self {
            amount,
            memo: memo.into(),
            created_on: None,
        }
    }

    /// Record the expense on a specific date instead of today
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.created_on = Some(date);
        self
    }

    /// The date that will be stored
    pub fn effective_date(&self) -> NaiveDate {
        self.created_on
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_defaults_to_today() {
        let request = NewExpense::new(Money::from_cents(1000), "Lunch");
        assert!(request.created_on.is_none());
        assert_eq!(request.effective_date(), Local::now().date_naive());
    }

    #[test]
    fn test_new_expense_with_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let request = NewExpense::new(Money::from_cents(250), "Coffee").on(date);
        assert_eq!(request.effective_date(), date);
        assert_eq!(request.memo, "Coffee");
    }
}
