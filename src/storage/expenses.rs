//! Expense store
//!
//! Owns the database connection and performs every operation on the
//! expenses table. Methods return structured results; formatting for the
//! terminal lives in [`crate::display`].

use std::path::Path;

use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, NewExpense};

use super::init;

const SELECT_COLUMNS: &str = "SELECT id, amount, memo, created_on FROM expenses";

/// SQL function lower-casing text with full Unicode rules
const FOLD_CASE_FN: &str = "fold_case";

fn register_fold_case(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        FOLD_CASE_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: String = ctx.get(0)?;
            Ok(text.to_lowercase())
        },
    )
}

/// Handle to the expenses database
///
/// One store is opened per process and passed by reference to whatever
/// needs it. The connection is closed when the store is dropped.
pub struct ExpenseStore {
    conn: Connection,
}

impl ExpenseStore {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> ExpenseResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening expenses database");
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> ExpenseResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> ExpenseResult<Self> {
        register_fold_case(&conn)?;
        Ok(Self { conn })
    }

    /// Create the expenses table if missing; returns `true` if it was created
    pub fn ensure_table(&self) -> ExpenseResult<bool> {
        init::ensure_table(&self.conn)
    }

    /// All expenses, in id order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let expenses = stmt
            .query_map([], Expense::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = expenses.len(), "listed expenses");
        Ok(expenses)
    }

    /// Record a new expense
    ///
    /// Amount limits are enforced by the table constraints, so a zero,
    /// negative, or oversized amount fails with
    /// [`ExpenseError::ConstraintViolation`](crate::error::ExpenseError::ConstraintViolation).
    pub fn insert(&self, expense: &NewExpense) -> ExpenseResult<Expense> {
        let created = self.conn.query_row(
            "INSERT INTO expenses (amount, memo, created_on) VALUES (?1, ?2, ?3)
             RETURNING id, amount, memo, created_on",
            params![expense.amount, expense.memo, expense.effective_date()],
            Expense::from_row,
        )?;

        info!(id = %created.id, amount = %created.amount, "added expense");
        Ok(created)
    }

    /// Expenses whose memo matches `query`, case-insensitively
    ///
    /// The pattern only carries a leading wildcard (`%query`), so a memo
    /// matches when it ends with the query text. Both sides are folded with
    /// Unicode lower-casing, since SQLite's `LIKE` only folds ASCII.
    pub fn search(&self, query: &str) -> ExpenseResult<Vec<Expense>> {
        let pattern = format!("%{}", query);
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE {fold}(memo) LIKE {fold}(?1) ORDER BY id",
            SELECT_COLUMNS,
            fold = FOLD_CASE_FN
        ))?;
        let expenses = stmt
            .query_map([&pattern], Expense::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(%pattern, rows = expenses.len(), "searched expenses");
        Ok(expenses)
    }

    /// Look up a single expense
    pub fn find(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let expense = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [id],
                Expense::from_row,
            )
            .optional()?;
        Ok(expense)
    }

    /// Delete an expense by id, returning the removed row
    ///
    /// Returns `None` and leaves the table untouched when no expense has
    /// that id.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let Some(expense) = self.find(id)? else {
            debug!(%id, "no expense to delete");
            return Ok(None);
        };

        self.conn
            .execute("DELETE FROM expenses WHERE id = ?1", [id])?;

        info!(%id, "deleted expense");
        Ok(Some(expense))
    }

    /// Delete every expense, returning how many were removed
    pub fn clear(&self) -> ExpenseResult<usize> {
        let removed = self.conn.execute("DELETE FROM expenses", [])?;
        info!(removed, "cleared expenses");
        Ok(removed)
    }
}
