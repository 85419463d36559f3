//! Measurement string parsing
//!
//! Free-form input like `1,23 m`, `12' 6"`, or `100 lbs` is reduced to
//! a number in the canonical base unit. Suffix matching walks the
//! caller's table in order; the imperial grammar scans for feet and
//! inch components independently.

use boatplans_core::{CatalogError, Length, MeasureError};
use thiserror::Error;

use crate::units::{UnitFactor, MM_PER_FOOT, MM_PER_INCH};

/// Errors from the free-form measurement parser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("cannot parse `{0}` as a number")]
    InvalidNumber(String),
    #[error("unsupported inch fraction in `{0}`, only 1/2 is accepted")]
    UnsupportedFraction(String),
    #[error(transparent)]
    Measure(#[from] MeasureError),
}

impl From<UnitError> for CatalogError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::Measure(e) => e.into(),
            other => CatalogError::parse_error(other.to_string()),
        }
    }
}

/// Normalize free-form input: spaces stripped, decimal comma to
/// point, lower-cased.
pub fn normalize(value: &str) -> String {
    value.replace(' ', "").replace(',', ".").to_lowercase()
}

/// Scale a string by the first matching unit suffix.
///
/// Returns `Ok(None)` when no suffix in the table matches, leaving the
/// caller to try the next interpretation. A matching suffix with a
/// non-numeric remainder is an error, not a fallthrough.
pub fn match_unit_suffix(value: &str, table: &[UnitFactor]) -> Result<Option<f64>, UnitError> {
    let norm = normalize(value);
    for entry in table {
        let token = entry.token.replace(' ', "");
        if let Some(number) = norm.strip_suffix(&token) {
            let parsed: f64 = number
                .parse()
                .map_err(|_| UnitError::InvalidNumber(number.to_string()))?;
            return Ok(Some(parsed * entry.factor));
        }
    }
    Ok(None)
}

/// Extract the raw feet and inch tokens from an imperial length string.
///
/// Feet are digits followed by `'` or `ft`; inches are digits and `/`
/// followed by `"` or `in`. Each component is scanned independently
/// and the first occurrence wins; a missing component is `"0"`. The
/// inch token may still carry a `1/2` fraction suffix.
pub fn split_feet_inches(value: &str) -> (String, String) {
    let norm = normalize(value);
    let feet = scan_component(&norm, |c| c.is_ascii_digit(), &["'", "ft"]);
    let inches = scan_component(&norm, |c| c.is_ascii_digit() || c == '/', &["\"", "in"]);
    (
        feet.unwrap_or_else(|| "0".to_string()),
        inches.unwrap_or_else(|| "0".to_string()),
    )
}

/// First run of accepted characters immediately followed by one of the
/// marker tokens.
fn scan_component<F>(s: &str, accept: F, markers: &[&str]) -> Option<String>
where
    F: Fn(char) -> bool,
{
    let mut start = 0;
    while start < s.len() {
        let run_start = match s[start..].char_indices().find(|&(_, c)| accept(c)) {
            Some((offset, _)) => start + offset,
            None => return None,
        };
        let run_end = s[run_start..]
            .char_indices()
            .find(|&(_, c)| !accept(c))
            .map(|(offset, _)| run_start + offset)
            .unwrap_or(s.len());
        let rest = &s[run_end..];
        if markers.iter().any(|marker| rest.starts_with(marker)) {
            return Some(s[run_start..run_end].to_string());
        }
        start = run_end;
    }
    None
}

/// Convert an imperial size string (feet and inches) to millimetres.
///
/// Ties round to even. A string with no feet or inch token at all is
/// treated as a bare millimetre figure.
pub fn parse_imperial_size(value: &str) -> Result<Length, UnitError> {
    let (feet_token, inch_token) = split_feet_inches(value);

    let feet: u64 = feet_token
        .parse()
        .map_err(|_| UnitError::InvalidNumber(feet_token.clone()))?;

    let inches: f64 = if inch_token.ends_with("1/2") {
        if inch_token.len() > 3 {
            let whole: u64 = inch_token[..inch_token.len() - 3]
                .parse()
                .map_err(|_| UnitError::UnsupportedFraction(inch_token.clone()))?;
            whole as f64 + 0.5
        } else {
            0.5
        }
    } else {
        let whole: u64 = inch_token.parse().map_err(|_| {
            if inch_token.contains('/') {
                UnitError::UnsupportedFraction(inch_token.clone())
            } else {
                UnitError::InvalidNumber(inch_token.clone())
            }
        })?;
        whole as f64
    };

    if feet as f64 + inches > 0.0 {
        let mm = MM_PER_FOOT * feet as f64 + MM_PER_INCH * inches;
        return Ok(Length::from_f64_rounded(mm)?);
    }

    parse_bare_integer(value).map(Length::from_mm)
}

/// Parse a bare numeric string as a whole number of base units.
///
/// A trailing `.0…0` is tolerated, matching how integer form fields
/// accept `100.0`.
pub fn parse_bare_integer(value: &str) -> Result<u64, UnitError> {
    let trimmed = value.trim();
    let cleaned = match trimmed.split_once('.') {
        Some((whole, frac)) if frac.chars().all(|c| c == '0') => whole,
        _ => trimmed,
    };
    cleaned
        .parse()
        .map_err(|_| UnitError::InvalidNumber(trimmed.to_string()))
}
