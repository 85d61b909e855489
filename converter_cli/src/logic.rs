use crate::errors::AppError;
use converter_common::cli::constants::*;
use converter_common::cli::helpers::*;
use converter_common::errors::RATE_UNAVAILABLE_MSG;
use converter_common::feed;
use converter_common::validation::{is_exit_keyword, parse_amount};
use converter_common::{convert, ExchangeRate, RateError};
use log::{debug, info};
use reqwest::Client;
use std::io::{self, BufRead, Write};

/// **Runs the converter from start to finish**
///
/// Prints the banner, retrieves the rate, and then hands over to
/// [`run_session`].
///
/// If the rate can't be retrieved, the user is told so,
/// and the session is never started.
///
/// # Errors
/// - The rate couldn't be retrieved, `AppError::Rate`;
/// - Reading from `input` or writing to `output` failed, `AppError::Io`.
pub async fn run<R: BufRead, W: Write>(
    client: &Client,
    url: &str,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "{BANNER}\n")?;

    let rate = match retrieve_rate(client, url).await {
        Ok(rate) => rate,
        Err(err) => {
            writeln!(output, "{RATE_UNAVAILABLE_MSG}")?;
            return Err(err.into());
        }
    };
    info!("Using the rate of {rate} RUB per USD");

    run_session(rate, input, output)?;

    Ok(())
}

/// **Fetches the feed and extracts the USD rate from it**
pub async fn retrieve_rate(client: &Client, url: &str) -> Result<ExchangeRate, RateError> {
    let doc = fetch(client, url).await?;
    feed::parse(&doc)
}

/// **Downloads the feed document**
///
/// A single GET, no retries.
/// The body is decoded according to the charset the server announces.
///
/// # Errors
/// - Connection failure, a non-2xx status, or a body that can't be read,
///   all as `RateError::Network`.
pub async fn fetch(client: &Client, url: &str) -> Result<String, RateError> {
    info!("Fetching exchange rates from {url}");

    let response = client.get(url).send().await.map_err(network_error)?;
    debug!("The feed responded with {}", response.status());

    let response = response.error_for_status().map_err(network_error)?;
    let doc = response.text().await.map_err(network_error)?;
    debug!("Received {} bytes of feed", doc.len());

    Ok(doc)
}

fn network_error(err: reqwest::Error) -> RateError {
    RateError::Network(err.to_string())
}

/// **The interactive part: read an amount, print it in dollars, repeat**
///
/// The rate is fixed for the whole session.
///
/// Ends when the user types an exit keyword, or when the input runs out.
/// Bad input is reported and the loop goes on.
///
/// # Errors
/// Only I/O errors on `input` or `output`.
pub fn run_session<R: BufRead, W: Write>(
    rate: ExchangeRate,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}\n", rate_line(rate))?;

    loop {
        let line = match read_line(input, output, PROMPT)? {
            Some(line) => line,
            None => {
                writeln!(output)?;
                break;
            }
        };

        if is_exit_keyword(&line) {
            break;
        }

        match parse_amount(&line) {
            Ok(amount_rub) => {
                let amount_usd = convert(amount_rub, rate);
                debug!("Converted {amount_rub} RUB to {amount_usd} USD");
                writeln!(output, "{}\n", conversion_line(amount_rub, amount_usd))?;
            }
            Err(err) => {
                debug!("Rejected input: {err}");
                writeln!(output, "{}\n", err.user_message())?;
            }
        }
    }

    writeln!(output, "{FAREWELL_MSG}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_session;
    use converter_common::cli::constants::{FAREWELL_MSG, PROMPT};
    use converter_common::errors::{INVALID_INPUT_MSG, NEGATIVE_AMOUNT_MSG};
    use converter_common::ExchangeRate;
    use std::io::Cursor;

    fn session(lines: &str) -> String {
        let rate = ExchangeRate::new(90.5).unwrap();
        let mut input = Cursor::new(lines.to_string());
        let mut output = Vec::new();
        run_session(rate, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_shows_rate_first() {
        let out = session("exit\n");
        assert!(out.starts_with("Current rate: 1 USD = 90.50 RUB\n"));
    }

    #[test]
    fn test_converts_hundred() {
        let out = session("100\nexit\n");
        assert!(out.contains("100.00 RUB = 1.10 USD\n"));
    }

    #[test]
    fn test_zero_is_fine() {
        let out = session("0\nq\n");
        assert!(out.contains("0.00 RUB = 0.00 USD\n"));
    }

    #[test]
    fn test_comma_amount() {
        let out = session("181,00\nquit\n");
        assert!(out.contains("181.00 RUB = 2.00 USD\n"));
    }

    #[test]
    fn test_negative_keeps_looping() {
        let out = session("-5\n100\nexit\n");
        assert!(out.contains(NEGATIVE_AMOUNT_MSG));
        assert!(!out.contains("-5.00 RUB"));
        assert!(out.contains("100.00 RUB = 1.10 USD\n"));
    }

    #[test]
    fn test_garbage_keeps_looping() {
        let out = session("abc\n\n100\nexit\n");
        assert_eq!(out.matches(INVALID_INPUT_MSG).count(), 2);
        assert!(out.contains("100.00 RUB = 1.10 USD\n"));
    }

    #[test]
    fn test_exit_says_goodbye() {
        let out = session("EXIT\n100\n");
        assert!(out.ends_with(&format!("{FAREWELL_MSG}\n")));
        assert!(!out.contains("RUB = "));
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let out = session("100\n");
        assert!(out.contains("100.00 RUB = 1.10 USD\n"));
        assert!(out.ends_with(&format!("{FAREWELL_MSG}\n")));
        assert_eq!(out.matches(PROMPT).count(), 2);
    }
}
