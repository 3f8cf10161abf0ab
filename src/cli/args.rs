//! Argument preparation and help text
//!
//! Command names are matched case-insensitively, so the command token is
//! lower-cased before clap sees it. Help output is a fixed usage block
//! shared by `--help`, unknown commands, and missing arguments.

use std::ffi::OsString;

/// Usage block printed for `--help` and whenever arguments can't be routed
pub const HELP_TEXT: &str = "\
expenses - An expense recording program.

Commands:
    add AMOUNT MEMO [DATE]  -> records a new expense (AMOUNT with at most two decimal places,
                               DATE as YYYY-MM-DD, default today)
    clear [--yes]           -> delete all expenses!
    list                    -> list all expenses
    delete NUMBER           -> remove expense by id NUMBER
    search QUERY            -> list expenses whose memo ends with QUERY
    export [--output FILE]  -> write all expenses as CSV
    config                  -> show configuration and paths
";

/// Print the usage block to stdout
pub fn print_help() {
    print!("{}", HELP_TEXT);
}

/// Lower-case the command token (the first argument after the program name)
///
/// Flags such as `-V` are left alone, as are arguments that are not valid
/// UTF-8 (clap rejects those).
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if let Some(command) = args.get_mut(1) {
        if let Some(token) = command.to_str().filter(|t| !t.starts_with('-')) {
            *command = token.to_lowercase().into();
        }
    }

    args
}
