//! The "RUB to USD Converter" app's entry point.

use converter_cli::constants::{DEFAULT_LOG_FILTER, FEED_URL};
use converter_cli::logic::run;
use log::error;
use reqwest::Client;
use std::env;
use std::io::{stdin, stdout};
use std::process::ExitCode;

/// The "RUB to USD Converter" app's entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    let client = Client::new();

    match run(&client, FEED_URL, &mut stdin().lock(), &mut stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
