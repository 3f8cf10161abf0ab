//! Single-keypress confirmation prompt
//!
//! When stdin is a terminal the key is read in raw mode, so the user doesn't
//! need to press Enter. Otherwise the first byte of stdin is used.

use std::io::{self, IsTerminal, Read};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal;

use crate::error::{ExpenseError, ExpenseResult};

/// Read one key from stdin
///
/// Returns `None` for end of input or a key that isn't a character.
pub fn read_keypress() -> ExpenseResult<Option<char>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        read_raw_key()
    } else {
        read_first_char(stdin.lock())
    }
}

/// Read the first byte of `reader` as a character
pub fn read_first_char<R: Read>(mut reader: R) -> ExpenseResult<Option<char>> {
    let mut buf = [0u8; 1];
    let read = reader
        .read(&mut buf)
        .map_err(|e| ExpenseError::Prompt(format!("Failed to read response: {}", e)))?;

    Ok((read == 1).then(|| char::from(buf[0])))
}

fn read_raw_key() -> ExpenseResult<Option<char>> {
    terminal::enable_raw_mode()
        .map_err(|e| ExpenseError::Prompt(format!("Failed to enable raw mode: {}", e)))?;

    // Restore the terminal before reporting a read failure.
    let key = wait_for_key();

    terminal::disable_raw_mode()
        .map_err(|e| ExpenseError::Prompt(format!("Failed to disable raw mode: {}", e)))?;

    key
}

fn wait_for_key() -> ExpenseResult<Option<char>> {
    loop {
        let event = event::read()
            .map_err(|e| ExpenseError::Prompt(format!("Failed to read key: {}", e)))?;

        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            return Ok(match code {
                KeyCode::Char(c) => Some(c),
                _ => None,
            });
        }
    }
}
