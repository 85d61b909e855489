use thiserror::Error;

/// **Reasons the exchange rate could not be obtained**
///
/// Every variant carries a human-readable cause.
/// None of them is fatal by itself: the caller decides what to do,
/// which in the CLI means reporting it and exiting before the input loop.
#[derive(Debug, Error, PartialEq)]
pub enum RateError {
    /// Transport failure or a non-2xx HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// The feed is not well-formed markup.
    #[error("Malformed feed document: {0}")]
    MalformedDocument(String),

    /// The feed contains no record for the requested currency code.
    #[error("Currency not found in the feed: {0}")]
    CurrencyNotFound(String),

    /// The matched record lacks a field, or a field can't be read as a number.
    #[error("Malformed currency record: {0}")]
    MalformedRecord(String),
}

/// **Rejected user input in the interactive loop**
///
/// Never terminates the session.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("not a number: '{0}'")]
    NotANumber(String),

    #[error("negative amount: {0}")]
    Negative(f64),
}

pub const RATE_UNAVAILABLE_MSG: &str =
    "Could not retrieve the current USD rate. Please try again later.";
pub const INVALID_INPUT_MSG: &str = "Invalid input. Please enter a numeric value.";
pub const NEGATIVE_AMOUNT_MSG: &str = "Please enter a non-negative number.";

impl InputError {
    /// The message shown to the user for this kind of rejected input.
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::NotANumber(_) => INVALID_INPUT_MSG,
            InputError::Negative(_) => NEGATIVE_AMOUNT_MSG,
        }
    }
}
