//! Helper functions for the console side of the converter
//!
//! They take the input and output streams as arguments,
//! so the same code serves the real console and the tests.

use crate::conversion::ExchangeRate;
use std::io::{self, BufRead, Write};

/// **Prints `label` and reads one line of input.**
///
/// The returned line has its line ending stripped, but is otherwise untouched.
///
/// Returns `None` when the input is exhausted.
///
/// # Errors
/// Fails if writing the label, flushing the output,
/// or reading the line fails.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);

    Ok(Some(line))
}

/// `Current rate: 1 USD = 90.50 RUB`
pub fn rate_line(rate: ExchangeRate) -> String {
    format!("Current rate: 1 USD = {rate:.2} RUB")
}

/// `100.00 RUB = 1.10 USD`
pub fn conversion_line(amount_rub: f64, amount_usd: f64) -> String {
    format!("{amount_rub:.2} RUB = {amount_usd:.2} USD")
}
