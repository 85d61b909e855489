use crate::cli::constants::EXIT_KEYWORDS;
use crate::errors::InputError;

/// **Checks whether the user asked to leave**
///
/// Surrounding whitespace and letter case are ignored.
pub fn is_exit_keyword(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&input.as_str())
}

/// **Reads a ruble amount typed by the user**
///
/// Accepts a comma as the decimal separator.
///
/// # Errors
/// - Not a finite number (this includes an empty line), `InputError::NotANumber`;
/// - Less than zero, `InputError::Negative`.
pub fn parse_amount(input: &str) -> Result<f64, InputError> {
    let input = input.trim();

    let amount = match input.replace(',', ".").parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => return Err(InputError::NotANumber(input.to_string())),
    };

    if amount < 0.0 {
        return Err(InputError::Negative(amount));
    }

    // "-0" parses as negative zero.
    Ok(amount.abs())
}
