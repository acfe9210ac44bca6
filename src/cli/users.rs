//! User menu actions: register, display

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use validator::Validate;

use super::{report_error, NumberInput, Step, Terminal};
use crate::{
    error::AppError,
    models::user::{NewUser, UserRole},
    services::Services,
};

pub fn register_user<R: BufRead, W: Write>(services: &mut Services, terminal: &mut Terminal<R, W>) -> Step {
    let name = answer_or_close!(terminal.prompt("Enter user name: "));

    let role = match terminal.prompt_number::<i64>("Register as: (1) Student (2) Faculty: ")? {
        NumberInput::Closed => return Ok(ControlFlow::Break(())),
        NumberInput::Number(code) => UserRole::from_menu_code(code),
        NumberInput::Invalid(_) => None,
    };
    let Some(role) = role else {
        writeln!(
            terminal.out(),
            "Invalid selection. Please enter 1 for Student or 2 for Faculty."
        )?;
        return Ok(ControlFlow::Continue(()));
    };

    let request = NewUser::new(&name, role);
    if let Err(e) = request.validate() {
        report_error(terminal, &AppError::from(e))?;
        return Ok(ControlFlow::Continue(()));
    }

    let id = services.register_user(&request.name, request.role);
    writeln!(terminal.out(), "User registered successfully! (ID: {})", id)?;
    Ok(ControlFlow::Continue(()))
}

pub fn display_users<R: BufRead, W: Write>(services: &Services, terminal: &mut Terminal<R, W>) -> Step {
    let out = terminal.out();
    writeln!(out, "\nLibrary Users:")?;
    for user in services.list_users() {
        writeln!(out, "{}", user)?;
    }
    Ok(ControlFlow::Continue(()))
}
