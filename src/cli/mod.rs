//! Terminal menu: the presentation layer over [`Services`]

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use crate::{error::AppResult, services::Services};

/// Unwrap a prompt answer, ending the session when input is exhausted
macro_rules! answer_or_close {
    ($prompt:expr) => {
        match $prompt? {
            Some(value) => value,
            None => return Ok(std::ops::ControlFlow::Break(())),
        }
    };
}

pub mod books;
pub mod input;
pub mod loans;
pub mod users;

pub use input::{NumberInput, Terminal};

/// Result of one menu action: keep going, or stop because input ended
pub type Step = AppResult<ControlFlow<()>>;

/// Main menu entries, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    RegisterUser,
    SearchBooks,
    BorrowBook,
    ReturnBook,
    DisplayBooks,
    DisplayUsers,
    Exit,
}

impl MenuChoice {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(MenuChoice::AddBook),
            2 => Some(MenuChoice::RegisterUser),
            3 => Some(MenuChoice::SearchBooks),
            4 => Some(MenuChoice::BorrowBook),
            5 => Some(MenuChoice::ReturnBook),
            6 => Some(MenuChoice::DisplayBooks),
            7 => Some(MenuChoice::DisplayUsers),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
===== Library System =====
1. Add a new book
2. Register a new user
3. Search for books
4. Borrow a book
5. Return a book
6. Display books
7. Display users
8. Exit";

/// Run the menu until the user exits or input ends
pub fn run<R: BufRead, W: Write>(
    services: &mut Services,
    terminal: &mut Terminal<R, W>,
) -> AppResult<()> {
    loop {
        writeln!(terminal.out(), "\n{}", MENU)?;

        let code = match terminal.prompt_number::<i64>("Choose an option: ")? {
            NumberInput::Number(code) => code,
            NumberInput::Invalid(_) => {
                writeln!(terminal.out(), "Invalid input! Enter a number between 1-8.")?;
                continue;
            }
            NumberInput::Closed => break,
        };

        let step = match MenuChoice::from_code(code) {
            Some(MenuChoice::AddBook) => books::add_book(services, terminal)?,
            Some(MenuChoice::RegisterUser) => users::register_user(services, terminal)?,
            Some(MenuChoice::SearchBooks) => books::search_books(services, terminal)?,
            Some(MenuChoice::BorrowBook) => loans::borrow_book(services, terminal)?,
            Some(MenuChoice::ReturnBook) => loans::return_book(services, terminal)?,
            Some(MenuChoice::DisplayBooks) => books::display_books(services, terminal)?,
            Some(MenuChoice::DisplayUsers) => users::display_users(services, terminal)?,
            Some(MenuChoice::Exit) => {
                writeln!(terminal.out(), "Goodbye!")?;
                return Ok(());
            }
            None => {
                writeln!(terminal.out(), "Invalid option! Please try again.")?;
                ControlFlow::Continue(())
            }
        };

        if step.is_break() {
            break;
        }
    }

    tracing::debug!("Input closed, leaving menu");
    writeln!(terminal.out(), "\nGoodbye!")?;
    Ok(())
}

/// Print a core error the way the menu reports failures
fn report_error<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    error: &crate::error::AppError,
) -> AppResult<()> {
    writeln!(terminal.out(), "Error: {}.", error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_codes() {
        assert_eq!(MenuChoice::from_code(1), Some(MenuChoice::AddBook));
        assert_eq!(MenuChoice::from_code(8), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_code(0), None);
        assert_eq!(MenuChoice::from_code(9), None);
    }
}
