//! The exchange rate and the ruble-to-dollar conversion

use std::fmt;

/// **Rubles per one US dollar**
///
/// Always strictly positive and finite;
/// [`ExchangeRate::new`] is the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// Returns `None` for zero, negative, NaN or infinite values.
    pub fn new(rub_per_usd: f64) -> Option<Self> {
        if rub_per_usd.is_finite() && rub_per_usd > 0.0 {
            Some(Self(rub_per_usd))
        } else {
            None
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// **Converts a ruble amount to US dollars**
///
/// No rounding is done here; formatting is up to the caller.
pub fn convert(amount_rub: f64, rate: ExchangeRate) -> f64 {
    amount_rub / rate.value()
}
