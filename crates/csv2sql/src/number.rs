//! Tolerant numeric readings of raw field text.
//!
//! Each reading takes the longest leading numeric match and reports why it
//! failed through [`ConversionError`]. The sentinel accessors on `Record`
//! are thin wrappers that collapse the error into [`DECIMAL_SENTINEL`] or
//! [`INTEGER_SENTINEL`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConversionError;

/// Returned by the percent and dollar accessors when nothing parses.
pub const DECIMAL_SENTINEL: f64 = 0.0;
/// Returned by the integer accessor when nothing parses.
pub const INTEGER_SENTINEL: i32 = i32::MIN;

static SIGNED_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)*").unwrap());
static UNSIGNED_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)*").unwrap());
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+").unwrap());

/// `12.5%` reads as `0.125`. No characters are stripped first.
pub fn percent(raw: &str) -> Result<f64, ConversionError> {
    let matched = leading_match(&SIGNED_DECIMAL, raw, raw)?;
    let value = parse_decimal(raw, matched)?;
    Ok(value / 100.0)
}

/// `$1,234.50` reads as `1234.5`. Dollar signs, commas and whitespace are
/// removed before matching; a sign is not accepted.
pub fn dollar(raw: &str) -> Result<f64, ConversionError> {
    let stripped = strip(raw, |c| c == '$' || c == ',' || c.is_whitespace());
    let matched = leading_match(&UNSIGNED_DECIMAL, &stripped, raw)?;
    parse_decimal(raw, matched)
}

/// `1,234` reads as `1234`. Commas and whitespace are removed before
/// matching; the leading digit run must fit an `i32`.
pub fn integer(raw: &str) -> Result<i32, ConversionError> {
    let stripped = strip(raw, |c| c == ',' || c.is_whitespace());
    let matched = leading_match(&DIGITS, &stripped, raw)?;
    matched.parse::<i32>().map_err(|_| ConversionError::Invalid {
        raw: raw.to_string(),
        matched: matched.to_string(),
    })
}

fn strip(raw: &str, drop: impl Fn(char) -> bool) -> String {
    raw.chars().filter(|&c| !drop(c)).collect()
}

fn leading_match<'t>(re: &Regex, text: &'t str, raw: &str) -> Result<&'t str, ConversionError> {
    re.find(text)
        .map(|m| m.as_str())
        .ok_or_else(|| ConversionError::NoMatch {
            raw: raw.to_string(),
        })
}

// `(\.\d+)*` admits `1.2.3`, which then fails here.
fn parse_decimal(raw: &str, matched: &str) -> Result<f64, ConversionError> {
    matched
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConversionError::Invalid {
            raw: raw.to_string(),
            matched: matched.to_string(),
        })
}
