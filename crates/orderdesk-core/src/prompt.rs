//! Line-oriented operator input.
//!
//! Parsing is kept in plain functions over `&str` so validation can be tested
//! without a terminal; [`Prompter`] only adds the read/re-ask loop.

use crate::error::{OrderError, Result};
use std::fmt;
use std::io::{BufRead, Write};
use unicode_normalization::UnicodeNormalization;

/// Prefix for every operator-facing notice.
pub const NOTICE_PREFIX: &str = "=>";

// ---------------------------------------------------------------------------
// InputError
// ---------------------------------------------------------------------------

/// Rejected operator input. The prompt that produced it is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NotAnInteger,
    TooLarge,
    NegativePrice,
    NonPositiveQuantity,
    NotANumber,
    OutOfRange,
    InvalidMenuChoice,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputError::NotAnInteger => {
                "Error: price and quantity must be whole numbers, please try again"
            }
            InputError::TooLarge => "Error: number is too large, please try again",
            InputError::NegativePrice => "Error: price cannot be negative, please try again",
            InputError::NonPositiveQuantity => {
                "Error: quantity must be a positive whole number, please try again"
            }
            InputError::NotANumber => "Error: please enter a valid number",
            InputError::OutOfRange => "Error: number out of range",
            InputError::InvalidMenuChoice => "Please enter a valid option (1-4)",
        };
        f.write_str(s)
    }
}

impl std::error::Error for InputError {}

// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

/// NFKC-fold an answer so full-width digits from CJK input methods read as ASCII.
fn normalize_digits(input: &str) -> String {
    input.trim().nfkc().collect()
}

fn parse_integer(input: &str) -> std::result::Result<i128, InputError> {
    normalize_digits(input)
        .parse::<i128>()
        .map_err(|_| InputError::NotAnInteger)
}

pub fn parse_price(input: &str) -> std::result::Result<u64, InputError> {
    let n = parse_integer(input)?;
    if n < 0 {
        return Err(InputError::NegativePrice);
    }
    u64::try_from(n).map_err(|_| InputError::TooLarge)
}

pub fn parse_quantity(input: &str) -> std::result::Result<u32, InputError> {
    let n = parse_integer(input)?;
    if n <= 0 {
        return Err(InputError::NonPositiveQuantity);
    }
    u32::try_from(n).map_err(|_| InputError::TooLarge)
}

/// Operator's answer to "which order?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cancel,
    /// 1-based position in the listed orders.
    Position(usize),
}

/// Parse a 1-based position among `len` listed entries. Blank input cancels.
pub fn parse_selection(input: &str, len: usize) -> std::result::Result<Selection, InputError> {
    let input = normalize_digits(input);
    if input.is_empty() {
        return Ok(Selection::Cancel);
    }
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(Selection::Position(n)),
        _ => Err(InputError::OutOfRange),
    }
}

// ---------------------------------------------------------------------------
// Prompter
// ---------------------------------------------------------------------------

/// Reads trimmed answers from `input`, writes prompts and notices to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and return the next line, trimmed.
    ///
    /// Returns [`OrderError::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(OrderError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, printing each rejection as a notice.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, InputError>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.notice(&e)?,
            }
        }
    }

    /// Print a `=>`-prefixed line.
    pub fn notice(&mut self, message: &dyn fmt::Display) -> Result<()> {
        writeln!(self.output, "{NOTICE_PREFIX} {message}")?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
