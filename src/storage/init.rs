//! Storage initialization
//!
//! Detects whether the expenses table exists and creates it on first run.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::ExpenseError;

/// Name of the single table holding expenses
pub const EXPENSES_TABLE: &str = "expenses";

/// Table definition, sent as one batch
///
/// `amount` is stored in cents. The two amount constraints together give the
/// range of a `numeric(6, 2)` column restricted to positive values.
pub const CREATE_EXPENSES_TABLE: &str = "
    CREATE TABLE expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount INTEGER NOT NULL,
        memo TEXT NOT NULL,
        created_on TEXT NOT NULL,
        CONSTRAINT positive_amount CHECK (amount >= 1),
        CONSTRAINT amount_precision CHECK (amount <= 999999),
        CONSTRAINT memo_present CHECK (length(memo) > 0)
    ) STRICT;
";

/// Check the catalog for the expenses table
pub fn table_exists(conn: &Connection) -> Result<bool, ExpenseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [EXPENSES_TABLE],
        |row| row.get(0),
    )?;

    debug!(count, "checked catalog for expenses table");
    Ok(count == 1)
}

/// Create the expenses table and its constraints
pub fn create_table(conn: &Connection) -> Result<(), ExpenseError> {
    conn.execute_batch(CREATE_EXPENSES_TABLE)?;
    info!("created expenses table");
    Ok(())
}

/// Create the expenses table unless it already exists
///
/// Returns `true` when the table was created by this call.
pub fn ensure_table(conn: &Connection) -> Result<bool, ExpenseError> {
    if table_exists(conn)? {
        return Ok(false);
    }

    create_table(conn)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_database_has_no_table() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn).unwrap());
    }

    #[test]
    fn test_ensure_table_creates_once() {
        let conn = Connection::open_in_memory().unwrap();

        assert!(ensure_table(&conn).unwrap());
        assert!(table_exists(&conn).unwrap());
        assert!(!ensure_table(&conn).unwrap());
    }

    #[test]
    fn test_create_table_twice_fails() {
        let conn = Connection::open_in_memory().unwrap();
        create_table(&conn).unwrap();

        let err = create_table(&conn).unwrap_err();
        assert!(matches!(err, ExpenseError::Database(_)));
    }
}
