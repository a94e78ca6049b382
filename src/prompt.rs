//! Interactive menu used when the command line leaves choices open
//!
//! Prompts go to `output`, complaints about bad answers go to `errors`, and
//! every question is repeated until it gets a usable answer or the input
//! runs dry.

use crate::config::{Field, SortOrder};
use crate::error::{ChartError, ChartResult};
use std::io::{BufRead, Write};

const GREETING: &str = "Welcome to the COVID-19 Data Interpreter!";
const FILE_QUESTION: &str = "Enter the data filename: ";
const FIELD_QUESTION: &str = "Select field number to sort data by: ";
const ORDER_QUESTION: &str =
    "Press 1 to sort data in Ascending Order OR Press 2 to sort data in Descending Order: ";
const INVALID_SELECTION: &str = "Error: Invalid selection!";

/// Console dialogue over arbitrary reader/writer handles
pub struct Prompt<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Prompt<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    pub fn greet(&mut self) -> ChartResult<()> {
        writeln!(self.output, "{GREETING}")?;
        Ok(())
    }

    /// Ask for a file name until `exists` accepts one
    pub fn file_name<F>(&mut self, exists: F) -> ChartResult<String>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let answer = self.ask(FILE_QUESTION)?;
            if !answer.is_empty() && exists(&answer) {
                writeln!(self.output, "File opened successfully!\n")?;
                return Ok(answer);
            }
            writeln!(
                self.errors,
                "Error: Filename '{answer}' does not exist in current directory!"
            )?;
        }
    }

    /// Show the field menu and read a choice between 1 and 6
    pub fn field(&mut self) -> ChartResult<Field> {
        writeln!(self.output, "Available data fields to sort by: ")?;
        for field in Field::ALL {
            writeln!(self.output, "{}: {}", field.menu_number(), field.label())?;
        }
        writeln!(self.output)?;

        loop {
            let answer = self.ask(FIELD_QUESTION)?;
            if let Some(field) = answer.parse().ok().and_then(Field::from_menu_number) {
                return Ok(field);
            }
            writeln!(self.errors, "{INVALID_SELECTION}")?;
        }
    }

    /// Read 1 (ascending) or 2 (descending)
    pub fn order(&mut self) -> ChartResult<SortOrder> {
        loop {
            let answer = self.ask(ORDER_QUESTION)?;
            if let Some(order) = answer.parse().ok().and_then(SortOrder::from_menu_number) {
                writeln!(self.output, "Sorting data in {order} Order.\n")?;
                return Ok(order);
            }
            writeln!(self.errors, "{INVALID_SELECTION}")?;
        }
    }

    pub fn into_inner(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }

    /// Print a question and return the first word of the answer
    fn ask(&mut self, question: &str) -> ChartResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ChartError::prompt("input ended before a choice was made"));
        }
        Ok(line.split_whitespace().next().unwrap_or_default().to_string())
    }
}
