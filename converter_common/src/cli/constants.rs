/// Words that end the session, compared case-insensitively.
pub const EXIT: &str = "exit";
pub const QUIT: &str = "quit";
pub const EXIT_KEYWORDS: [&str; 3] = [EXIT, QUIT, "q"];

/// Console texts

pub const BANNER: &str = "=== Currency Converter: RUB -> USD ===";
pub const PROMPT: &str = "Enter an amount in rubles to convert (or 'exit' to quit): ";
pub const FAREWELL_MSG: &str = "Thank you for using the converter! Goodbye.";
