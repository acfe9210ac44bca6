//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::AppResult;

/// Outcome of prompting for a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberInput<T> {
    Number(T),
    /// The line did not parse; carries the raw text
    Invalid(String),
    /// Input is exhausted
    Closed,
}

/// The menu's terminal: reads answers from `input`, writes everything to `output`
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` without a newline and read one line.
    /// Returns `None` at end of input. Bytes that are not UTF-8 are replaced
    /// with U+FFFD rather than failing the session.
    pub fn prompt(&mut self, message: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    pub fn prompt_number<T: FromStr>(&mut self, message: &str) -> AppResult<NumberInput<T>> {
        let Some(line) = self.prompt(message)? else {
            return Ok(NumberInput::Closed);
        };
        Ok(match line.trim().parse::<T>() {
            Ok(n) => NumberInput::Number(n),
            Err(_) => NumberInput::Invalid(line),
        })
    }
}
