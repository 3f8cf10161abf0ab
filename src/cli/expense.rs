//! Expense CLI commands
//!
//! Routes each command to the expense store and prints the result.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::{format_expense_report, format_expense_table, format_search_header};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_expenses_csv;
use crate::models::{ExpenseId, Money, NewExpense};
use crate::storage::ExpenseStore;

use super::args::print_help;
use super::prompt::read_keypress;

/// Prompt shown before `clear` deletes everything
pub const CLEAR_PROMPT: &str = "Are you sure you wish to clear the table. (y/n)";

/// Expense subcommands
///
/// Positional arguments are optional at the clap level so that a missing
/// argument prints the usage block instead of a parse error. Memos, queries,
/// and ids may start with `-`, and arguments past the last positional are
/// collected in a hidden `extra` list and ignored.
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. "10.00")
        #[arg(allow_negative_numbers = true)]
        amount: Option<String>,
        /// Description of the expense
        #[arg(allow_hyphen_values = true)]
        memo: Option<String>,
        /// Date of the expense (YYYY-MM-DD); defaults to today
        #[arg(allow_hyphen_values = true)]
        date: Option<String>,
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// List all expenses
    List {
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// List expenses whose memo ends with QUERY
    Search {
        /// Text to match at the end of the memo (case-insensitive)
        #[arg(allow_hyphen_values = true)]
        query: Option<String>,
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Remove an expense by id
    Delete {
        /// Expense id
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Delete all expenses
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export all expenses as CSV
    Export {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            memo,
            date,
            extra,
        } => {
            ignore_extra("add", &extra);
            let (Some(amount), Some(memo)) = (amount, memo) else {
                println!("Must supply an amount and memo.");
                return Ok(());
            };

            let request = build_new_expense(&amount, memo, date.as_deref())?;
            let expense = store.insert(&request)?;
            println!("Added expense {}.", expense.id);
        }

        ExpenseCommands::List { extra } => {
            ignore_extra("list", &extra);
            let expenses = store.list()?;
            print!("{}", format_expense_report(&expenses));
        }

        ExpenseCommands::Search { query, extra } => {
            ignore_extra("search", &extra);
            let Some(query) = query else {
                debug!("search without a query");
                print_help();
                return Ok(());
            };

            let expenses = store.search(&query)?;
            println!("{}", format_search_header());
            print!("{}", format_expense_report(&expenses));
        }

        ExpenseCommands::Delete { id, extra } => {
            ignore_extra("delete", &extra);
            let Some(id) = id else {
                debug!("delete without an id");
                print_help();
                return Ok(());
            };

            let expense_id = parse_expense_id(&id)?;
            match store.delete(expense_id)? {
                Some(expense) => {
                    println!("Expense {} deleted.", expense.id);
                    print!("{}", format_expense_table(std::slice::from_ref(&expense)));
                }
                None => {
                    println!("There is no expense with the id '{}'", id);
                }
            }
        }

        ExpenseCommands::Clear { yes } => {
            if !yes && settings.confirm_clear {
                println!("{}", CLEAR_PROMPT);
                if read_keypress()? != Some('y') {
                    warn!("clear not confirmed; expenses kept");
                    return Ok(());
                }
            }

            store.clear()?;
            println!("All expenses have been deleted.");
        }

        ExpenseCommands::Export { output } => match output {
            Some(path) => {
                let file = File::create(&path).map_err(|e| {
                    ExpenseError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let rows = export_expenses_csv(store, BufWriter::new(file))?;
                println!("Exported {} expenses to: {}", rows, path.display());
            }
            None => {
                export_expenses_csv(store, io::stdout().lock())?;
            }
        },
    }

    Ok(())
}

fn ignore_extra(command: &str, extra: &[String]) {
    if !extra.is_empty() {
        debug!(command, ?extra, "ignoring extra arguments");
    }
}

/// Turn raw `add` arguments into an insert request
///
/// Zero and negative amounts pass through so the table constraint can
/// reject them.
pub fn build_new_expense(
    amount: &str,
    memo: String,
    date: Option<&str>,
) -> ExpenseResult<NewExpense> {
    let amount = Money::parse(amount).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '10.00'. Error: {}",
            amount, e
        ))
    })?;

    let request = NewExpense::new(amount, memo);
    match date {
        Some(date) => Ok(request.on(parse_date(date)?)),
        None => Ok(request),
    }
}

fn parse_date(date: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid date: '{}'. Use the format YYYY-MM-DD.",
            date
        ))
    })
}

fn parse_expense_id(id: &str) -> ExpenseResult<ExpenseId> {
    id.parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid expense id: '{}'", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> ExpenseStore {
        let store = ExpenseStore::open_in_memory().unwrap();
        store.ensure_table().unwrap();
        store
    }

    #[test]
    fn test_build_new_expense() {
        let request = build_new_expense("10.00", "Lunch".into(), None).unwrap();
        assert_eq!(request.amount, Money::from_cents(1000));
        assert_eq!(request.memo, "Lunch");
        assert!(request.created_on.is_none());
    }

    #[test]
    fn test_build_new_expense_with_date() {
        let request = build_new_expense("3.5", "Coffee".into(), Some("2024-01-31")).unwrap();
        assert_eq!(request.amount.cents(), 350);
        assert_eq!(request.created_on, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn test_build_new_expense_rejects_bad_input() {
        assert!(build_new_expense("ten", "Lunch".into(), None)
            .unwrap_err()
            .is_validation());
        assert!(build_new_expense("10", "Lunch".into(), Some("31/01/2024"))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_negative_amount_reaches_constraint() {
        let store = create_test_store();
        let err = handle_expense_command(
            &store,
            &Settings::default(),
            ExpenseCommands::Add {
                amount: Some("-5.00".into()),
                memo: Some("Refund".into()),
                date: None,
                extra: Vec::new(),
            },
        )
        .unwrap_err();

        assert!(err.is_constraint_violation());
        assert_eq!(store.list().unwrap().len(), 0);
    }

    #[test]
    fn test_add_without_memo_inserts_nothing() {
        let store = create_test_store();
        handle_expense_command(
            &store,
            &Settings::default(),
            ExpenseCommands::Add {
                amount: Some("5.00".into()),
                memo: None,
                date: None,
                extra: Vec::new(),
            },
        )
        .unwrap();

        assert_eq!(store.list().unwrap().len(), 0);
    }

    #[test]
    fn test_delete_with_malformed_id() {
        let store = create_test_store();
        let err = handle_expense_command(
            &store,
            &Settings::default(),
            ExpenseCommands::Delete {
                id: Some("abc".into()),
                extra: Vec::new(),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_negative_id_is_not_found() {
        let store = create_test_store();
        store
            .insert(&NewExpense::new(Money::from_cents(100), "Coffee"))
            .unwrap();

        handle_expense_command(
            &store,
            &Settings::default(),
            ExpenseCommands::Delete {
                id: Some("-1".into()),
                extra: Vec::new(),
            },
        )
        .unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_ignores_extra_arguments() {
        let store = create_test_store();
        handle_expense_command(
            &store,
            &Settings::default(),
            ExpenseCommands::Add {
                amount: Some("5".into()),
                memo: Some("Lunch".into()),
                date: Some("2024-01-01".into()),
                extra: vec!["x".into()],
            },
        )
        .unwrap();

        let expenses = store.list().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].memo, "Lunch");
        assert_eq!(expenses[0].created_on, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_clear_with_yes_skips_prompt() {
        let store = create_test_store();
        store
            .insert(&NewExpense::new(Money::from_cents(100), "Coffee"))
            .unwrap();

        handle_expense_command(
            &store,
            &Settings::default(),
            ExpenseCommands::Clear { yes: true },
        )
        .unwrap();

        assert_eq!(store.list().unwrap().len(), 0);
    }

    #[test]
    fn test_clear_without_confirmation_setting() {
        let store = create_test_store();
        store
            .insert(&NewExpense::new(Money::from_cents(100), "Coffee"))
            .unwrap();
        let settings = Settings {
            confirm_clear: false,
            ..Settings::default()
        };

        handle_expense_command(&store, &settings, ExpenseCommands::Clear { yes: false }).unwrap();

        assert_eq!(store.list().unwrap().len(), 0);
    }
}
