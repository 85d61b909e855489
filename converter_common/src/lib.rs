pub mod cli;
pub mod conversion;
pub mod errors;
pub mod feed;
pub mod validation;

pub use conversion::{convert, ExchangeRate};
pub use errors::{InputError, RateError};
