//! Book menu actions: add, search, display

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use validator::Validate;

use super::{report_error, Step, Terminal};
use crate::{error::AppError, models::book::NewBook, services::Services};

pub fn add_book<R: BufRead, W: Write>(services: &mut Services, terminal: &mut Terminal<R, W>) -> Step {
    let title = answer_or_close!(terminal.prompt("Enter book title: "));
    let author = answer_or_close!(terminal.prompt("Enter author: "));
    let identifier = answer_or_close!(terminal.prompt("Enter ISBN: "));

    let request = NewBook::new(&title, &author, &identifier);
    let result = request
        .validate()
        .map_err(AppError::from)
        .and_then(|()| services.add_book(&request.title, &request.author, &request.identifier));

    match result {
        Ok(()) => writeln!(terminal.out(), "Book added successfully!")?,
        Err(e) => report_error(terminal, &e)?,
    }
    Ok(ControlFlow::Continue(()))
}

pub fn search_books<R: BufRead, W: Write>(services: &Services, terminal: &mut Terminal<R, W>) -> Step {
    let query = answer_or_close!(terminal.prompt("Enter book title or author to search: "));

    let results = services.search(&query);
    let out = terminal.out();
    writeln!(out, "\nSearch Results for '{}':", query)?;
    if results.is_empty() {
        writeln!(out, "No books found matching the query.")?;
    }
    for book in &results {
        writeln!(out, "{}", book)?;
    }
    Ok(ControlFlow::Continue(()))
}

pub fn display_books<R: BufRead, W: Write>(services: &Services, terminal: &mut Terminal<R, W>) -> Step {
    let out = terminal.out();
    writeln!(out, "\nLibrary Books:")?;
    for book in services.list_books() {
        writeln!(out, "{}", book)?;
    }
    Ok(ControlFlow::Continue(()))
}
