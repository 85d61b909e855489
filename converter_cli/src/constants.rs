/// The central bank's daily rates feed.
pub const FEED_URL: &str = "http://www.cbr.ru/scripts/XML_daily.asp";

/// Logging filter used when `RUST_LOG` isn't set.
pub const DEFAULT_LOG_FILTER: &str = "converter=warn";
