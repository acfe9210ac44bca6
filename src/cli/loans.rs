//! Loan menu actions: borrow, return

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use super::{report_error, NumberInput, Step, Terminal};
use crate::{
    error::AppResult,
    models::{loan::LoanReceipt, user::{UserId, UNASSIGNED_USER_ID}},
    services::Services,
};

enum LoanRequest {
    Ready(UserId, String),
    /// The user ID was not a number; already reported
    Rejected,
    Closed,
}

pub fn borrow_book<R: BufRead, W: Write>(services: &mut Services, terminal: &mut Terminal<R, W>) -> Step {
    loan_action(services, terminal, "borrow", "borrowed", Services::borrow)
}

pub fn return_book<R: BufRead, W: Write>(services: &mut Services, terminal: &mut Terminal<R, W>) -> Step {
    loan_action(services, terminal, "return", "returned", Services::return_book)
}

fn loan_action<R: BufRead, W: Write>(
    services: &mut Services,
    terminal: &mut Terminal<R, W>,
    verb: &str,
    past_tense: &str,
    apply: fn(&mut Services, UserId, &str) -> AppResult<LoanReceipt>,
) -> Step {
    let (user_id, identifier) = match read_loan_request(terminal, verb)? {
        LoanRequest::Ready(user_id, identifier) => (user_id, identifier),
        LoanRequest::Rejected => return Ok(ControlFlow::Continue(())),
        LoanRequest::Closed => return Ok(ControlFlow::Break(())),
    };

    match apply(services, user_id, &identifier) {
        Ok(receipt) => writeln!(
            terminal.out(),
            "{} {} \"{}\".",
            receipt.user_name, past_tense, receipt.title
        )?,
        Err(e) => report_error(terminal, &e)?,
    }
    Ok(ControlFlow::Continue(()))
}

fn read_loan_request<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    verb: &str,
) -> AppResult<LoanRequest> {
    // Numbers outside the ID range (negative ones included) still consume the
    // ISBN line and are rejected by the core as unknown users.
    let user_id = match terminal.prompt_number::<i64>("Enter user ID: ")? {
        NumberInput::Number(n) => UserId::try_from(n).unwrap_or(UNASSIGNED_USER_ID),
        NumberInput::Invalid(_) => {
            writeln!(terminal.out(), "Invalid input! Please enter a valid user ID.")?;
            return Ok(LoanRequest::Rejected);
        }
        NumberInput::Closed => return Ok(LoanRequest::Closed),
    };

    match terminal.prompt(&format!("Enter book ISBN to {}: ", verb))? {
        Some(identifier) => Ok(LoanRequest::Ready(user_id, identifier.trim().to_string())),
        None => Ok(LoanRequest::Closed),
    }
}
