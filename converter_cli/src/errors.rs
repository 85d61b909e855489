use converter_common::RateError;
use std::io;
use thiserror::Error;

/// **Why a converter run ended unsuccessfully**
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Rate(#[from] RateError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
