//! Reading the central bank's daily rates feed
//!
//! The feed looks like this:
//!
//! ```xml
//! <ValCurs Date="19.10.2026" name="Foreign Currency Market">
//!     <Valute ID="R01235">
//!         <NumCode>840</NumCode>
//!         <CharCode>USD</CharCode>
//!         <Nominal>1</Nominal>
//!         <Name>...</Name>
//!         <Value>90,5000</Value>
//!         <VunitRate>90,5</VunitRate>
//!     </Valute>
//!     ...
//! </ValCurs>
//! ```
//!
//! Only `CharCode`, `Nominal` and `Value` matter for the rate.
//! Everything else is tolerated and ignored.

use crate::conversion::ExchangeRate;
use crate::errors::RateError;
use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

/// The currency whose rate we're after.
pub const TARGET_CURRENCY: &str = "USD";

/// **The whole feed: the root element and its `Valute` children**
#[derive(Debug, Deserialize, PartialEq)]
pub struct ValCurs {
    #[serde(rename = "Valute", default)]
    pub valutes: Vec<Valute>,
}

/// **One currency entry of the feed, as raw text**
///
/// Fields are lists because nothing stops the feed from repeating an element;
/// the first occurrence is the one that counts.
/// Any field may be missing; that only matters for the record we pick.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Valute {
    #[serde(rename = "CharCode", default)]
    pub char_code: Vec<String>,
    #[serde(rename = "Nominal", default)]
    pub nominal: Vec<String>,
    #[serde(rename = "Value", default)]
    pub value: Vec<String>,
}

fn first<'a>(code: &str, tag: &str, values: &'a [String]) -> Option<&'a str> {
    if values.len() > 1 {
        warn!("{code} record has {} <{tag}> elements; using the first", values.len());
    }
    values.first().map(String::as_str)
}

impl Valute {
    pub fn char_code(&self) -> Option<&str> {
        self.char_code.first().map(|code| code.trim())
    }

    /// **Per-unit rate of this record: `Value / Nominal`**
    ///
    /// The value uses a comma as its decimal separator, which is normalized
    /// to a period before parsing. The nominal must be an integer of at least 1.
    ///
    /// # Errors
    /// - A missing field, an unparsable number, a zero nominal, or a rate
    ///   that is not strictly positive, all as `RateError::MalformedRecord`.
    pub fn rate(&self) -> Result<ExchangeRate, RateError> {
        let code = self.char_code().unwrap_or("?");

        let value = first(code, "Value", &self.value).ok_or_else(|| {
            RateError::MalformedRecord(format!("{code} record has no <Value>"))
        })?;
        let nominal = first(code, "Nominal", &self.nominal).ok_or_else(|| {
            RateError::MalformedRecord(format!("{code} record has no <Nominal>"))
        })?;

        let value = value.trim().replace(',', ".").parse::<f64>().map_err(|_| {
            RateError::MalformedRecord(format!("{code} value '{value}' is not a number"))
        })?;

        let nominal = match nominal.trim().parse::<u64>() {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(RateError::MalformedRecord(format!(
                    "{code} nominal '{nominal}' is not a positive integer"
                )))
            }
        };

        ExchangeRate::new(value / nominal as f64).ok_or_else(|| {
            RateError::MalformedRecord(format!("{code} rate {value}/{nominal} is not positive"))
        })
    }
}

/// **Checks that `doc` is a single, properly nested element tree**
///
/// The deserializer stops reading at the end of the root element,
/// so anything after it, or a missing root, is caught here.
fn check_well_formed(doc: &str) -> Result<(), RateError> {
    let mut reader = Reader::from_str(doc);
    reader.trim_text(true);

    let mut depth = 0usize;
    let mut seen_root = false;

    let malformed = |reader: &Reader<&[u8]>, what: String| {
        RateError::MalformedDocument(format!("{what} (at byte {})", reader.buffer_position()))
    };

    loop {
        match reader.read_event() {
            Err(err) => return Err(malformed(&reader, err.to_string())),
            Ok(Event::Eof) => break,
            Ok(Event::Start(_)) | Ok(Event::Empty(_)) if depth == 0 && seen_root => {
                return Err(malformed(&reader, "more than one root element".into()));
            }
            Ok(Event::Start(_)) => {
                seen_root = true;
                depth += 1;
            }
            Ok(Event::Empty(_)) => seen_root = true,
            Ok(Event::End(_)) if depth == 0 => {
                return Err(malformed(&reader, "closing tag without an opening one".into()));
            }
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Text(_)) | Ok(Event::CData(_)) if depth == 0 => {
                return Err(malformed(&reader, "text outside the root element".into()));
            }
            Ok(_) => {}
        }
    }

    if depth != 0 {
        return Err(malformed(&reader, "unexpected end of document".into()));
    }
    if !seen_root {
        return Err(malformed(&reader, "no root element".into()));
    }

    Ok(())
}

/// **Reads every currency record of the feed, in document order**
///
/// The whole document is read, so markup errors are caught
/// even after the record we're interested in.
///
/// # Errors
/// - Anything that is not well-formed markup, or doesn't fit the feed's
///   shape: `RateError::MalformedDocument`.
pub fn parse_records(doc: &str) -> Result<Vec<Valute>, RateError> {
    check_well_formed(doc)?;

    let feed: ValCurs = quick_xml::de::from_str(doc)
        .map_err(|err| RateError::MalformedDocument(err.to_string()))?;

    debug!("Read {} currency records from the feed", feed.valutes.len());

    Ok(feed.valutes)
}

/// **Finds the first record with the given character code**
///
/// Records without a code are skipped.
pub fn find_record<'a>(records: &'a [Valute], code: &str) -> Option<&'a Valute> {
    records.iter().find(|rec| rec.char_code() == Some(code))
}

/// **Extracts the per-unit USD rate from a feed document**
///
/// # Errors
/// - Not well-formed markup, `RateError::MalformedDocument`;
/// - No USD record, `RateError::CurrencyNotFound`;
/// - The USD record can't be read, `RateError::MalformedRecord`.
pub fn parse(doc: &str) -> Result<ExchangeRate, RateError> {
    let records = parse_records(doc)?;

    let record = find_record(&records, TARGET_CURRENCY)
        .ok_or_else(|| RateError::CurrencyNotFound(TARGET_CURRENCY.to_string()))?;

    let rate = record.rate()?;
    debug!("{TARGET_CURRENCY} rate: {rate}");

    Ok(rate)
}
