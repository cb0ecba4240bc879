//! Line-oriented prompting with re-ask on invalid answers.

use std::io::{BufRead, Write};

use crate::error::CliError;

/// Asks questions on `output` and reads answers from `input`, one per line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream for free-form reports.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Shows `prompt` and returns the trimmed answer.
    pub fn read_answer(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer. A rejection message is printed
    /// before each retry.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> Result<T, CliError> {
        loop {
            let answer = self.read_answer(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    tracing::debug!(%answer, %message, "answer rejected");
                    self.say(message)?;
                }
            }
        }
    }

    /// Asks a 1/0 question.
    pub fn ask_flag(&mut self, prompt: &str) -> Result<bool, CliError> {
        self.ask(prompt, parse_flag)
    }
}

/// Parses `1`/`0` (also `y`/`yes`/`n`/`no`, any case).
pub fn parse_flag(answer: &str) -> Result<bool, String> {
    match answer.to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" => Ok(true),
        "0" | "n" | "no" => Ok(false),
        _ => Err("Invalid choice! Please enter 1 for Yes or 0 for No.".to_string()),
    }
}

/// Rejects blank answers.
pub fn non_empty(field: &'static str) -> impl Fn(&str) -> Result<String, String> {
    move |answer| {
        if answer.is_empty() {
            Err(format!("{field} cannot be empty! Please try again."))
        } else {
            Ok(answer.to_string())
        }
    }
}
