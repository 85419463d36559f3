//! Canonical measurement values
//!
//! Dimensions are stored in fixed base units regardless of display
//! preference: lengths in whole millimetres, weights in whole grams,
//! areas in square metres with six fractional digits.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced while validating canonical values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("cannot parse `{0}` as a number")]
    InvalidNumber(String),
    #[error("value is not a finite number")]
    NotFinite,
    #[error("negative value {0} is not a valid measurement")]
    Negative(f64),
    #[error("{value} is not a whole number of {unit}")]
    NotIntegral { value: f64, unit: &'static str },
    #[error("`{0}` has more than {1} decimal places")]
    TooPrecise(String, u32),
    #[error("`{0}` has more than {1} whole digits")]
    TooManyDigits(String, u32),
}

/// Tolerance for float artifacts introduced by unit-factor multiplication.
const INTEGER_EPS: f64 = 1e-6;

fn check_finite_positive(value: f64) -> Result<f64, MeasureError> {
    if !value.is_finite() {
        return Err(MeasureError::NotFinite);
    }
    if value < 0.0 {
        return Err(MeasureError::Negative(value));
    }
    Ok(value)
}

/// Validate a scaled float as a whole count of base units.
///
/// Anything farther than `INTEGER_EPS` from an integer is a validation
/// failure, not a silent truncation. Ties round to even.
fn whole_units(value: f64, unit: &'static str) -> Result<u64, MeasureError> {
    let value = check_finite_positive(value)?;
    let rounded = value.round_ties_even();
    if (value - rounded).abs() > INTEGER_EPS {
        return Err(MeasureError::NotIntegral { value, unit });
    }
    Ok(rounded as u64)
}

/// Length in whole millimetres
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Length(u64);

impl Length {
    pub const fn from_mm(mm: u64) -> Self {
        Length(mm)
    }

    pub const fn as_mm(self) -> u64 {
        self.0
    }

    /// Validate a float as a whole millimetre count.
    pub fn from_f64(value: f64) -> Result<Self, MeasureError> {
        whole_units(value, "millimetres").map(Length)
    }

    /// Round a float to the nearest millimetre, ties to even.
    pub fn from_f64_rounded(value: f64) -> Result<Self, MeasureError> {
        let value = check_finite_positive(value)?;
        Ok(Length(value.round_ties_even() as u64))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weight in whole grams
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Weight(u64);

impl Weight {
    pub const fn from_g(grams: u64) -> Self {
        Weight(grams)
    }

    pub const fn as_g(self) -> u64 {
        self.0
    }

    /// Validate a float as a whole gram count.
    pub fn from_f64(value: f64) -> Result<Self, MeasureError> {
        whole_units(value, "grams").map(Weight)
    }

    /// Round a float to the nearest gram, ties to even.
    pub fn from_f64_rounded(value: f64) -> Result<Self, MeasureError> {
        let value = check_finite_positive(value)?;
        Ok(Weight(value.round_ties_even() as u64))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Area in square metres, stored with six fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Area {
    micro_m2: u64,
}

impl Area {
    /// Fractional digits kept by the stored representation
    pub const DECIMAL_PLACES: u32 = 6;
    /// Whole digits allowed before the decimal point
    pub const MAX_WHOLE_DIGITS: u32 = 9;

    const SCALE: u64 = 1_000_000;

    pub const fn from_micro_m2(micro_m2: u64) -> Self {
        Area { micro_m2 }
    }

    pub const fn as_micro_m2(self) -> u64 {
        self.micro_m2
    }

    pub fn to_f64(self) -> f64 {
        self.micro_m2 as f64 / Self::SCALE as f64
    }

    /// Launder a float through the fixed-point formatter.
    ///
    /// Formatting to six fractional digits before re-parsing keeps float
    /// representation artifacts out of the stored value.
    pub fn from_f64(value: f64) -> Result<Self, MeasureError> {
        let value = check_finite_positive(value)?;
        format!("{:.6}", value).parse()
    }
}

impl FromStr for Area {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        let has_digits = whole.chars().chain(frac.chars()).any(|c| c.is_ascii_digit());
        let all_digits = whole
            .chars()
            .chain(frac.chars())
            .all(|c| c.is_ascii_digit());
        if !has_digits || !all_digits {
            return Err(MeasureError::InvalidNumber(s.to_string()));
        }
        if frac.len() as u32 > Self::DECIMAL_PLACES {
            return Err(MeasureError::TooPrecise(s.to_string(), Self::DECIMAL_PLACES));
        }
        let significant = whole.trim_start_matches('0');
        if significant.len() as u32 > Self::MAX_WHOLE_DIGITS {
            return Err(MeasureError::TooManyDigits(
                s.to_string(),
                Self::MAX_WHOLE_DIGITS,
            ));
        }
        let whole_part: u64 = if significant.is_empty() {
            0
        } else {
            significant
                .parse()
                .map_err(|_| MeasureError::InvalidNumber(s.to_string()))?
        };
        let mut frac_part: u64 = 0;
        if !frac.is_empty() {
            frac_part = frac
                .parse()
                .map_err(|_| MeasureError::InvalidNumber(s.to_string()))?;
            frac_part *= 10u64.pow(Self::DECIMAL_PLACES - frac.len() as u32);
        }
        Ok(Area {
            micro_m2: whole_part * Self::SCALE + frac_part,
        })
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:06}",
            self.micro_m2 / Self::SCALE,
            self.micro_m2 % Self::SCALE
        )
    }
}

impl Serialize for Area {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Area {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_from_mm() {
        let loa = Length::from_mm(3050);
        assert_eq!(loa.as_mm(), 3050);
    }

    #[test]
    fn test_length_from_f64_accepts_float_artifacts() {
        // 1.23 * 1000.0 carries a representation artifact either way
        let loa = Length::from_f64(1.23 * 1000.0).unwrap();
        assert_eq!(loa.as_mm(), 1230);
    }

    #[test]
    fn test_length_from_f64_rejects_fractional() {
        assert!(matches!(
            Length::from_f64(1.5),
            Err(MeasureError::NotIntegral { .. })
        ));
    }

    #[test]
    fn test_length_from_f64_rejects_negative() {
        assert!(matches!(
            Length::from_f64(-10.0),
            Err(MeasureError::Negative(_))
        ));
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        assert_eq!(Length::from_f64_rounded(317.5).unwrap().as_mm(), 318);
        assert_eq!(Length::from_f64_rounded(316.5).unwrap().as_mm(), 316);
    }

    #[test]
    fn test_weight_rounded() {
        let w = Weight::from_f64_rounded(45359.237).unwrap();
        assert_eq!(w.as_g(), 45359);
    }

    #[test]
    fn test_area_parse_plain_integer() {
        let area: Area = "10".parse().unwrap();
        assert_eq!(area.as_micro_m2(), 10_000_000);
        assert_eq!(area.to_string(), "10.000000");
    }

    #[test]
    fn test_area_parse_six_places() {
        let area: Area = "0.929030".parse().unwrap();
        assert_eq!(area.as_micro_m2(), 929_030);
        assert_eq!(area.to_string(), "0.929030");
    }

    #[test]
    fn test_area_parse_short_fraction_scales() {
        let area: Area = "12.5".parse().unwrap();
        assert_eq!(area.as_micro_m2(), 12_500_000);
    }

    #[test]
    fn test_area_rejects_too_precise() {
        assert!(matches!(
            "1.1234567".parse::<Area>(),
            Err(MeasureError::TooPrecise(_, _))
        ));
    }

    #[test]
    fn test_area_rejects_garbage() {
        assert!("1,5".parse::<Area>().is_err());
        assert!("-1".parse::<Area>().is_err());
        assert!("".parse::<Area>().is_err());
        assert!("sq.ft".parse::<Area>().is_err());
    }

    #[test]
    fn test_area_rejects_too_many_whole_digits() {
        assert!(matches!(
            "1234567890".parse::<Area>(),
            Err(MeasureError::TooManyDigits(_, _))
        ));
    }

    #[test]
    fn test_area_from_f64_launders_artifacts() {
        // 10 * 0.092903 = 0.9290299999... as a float product
        let area = Area::from_f64(10.0 * 0.092903).unwrap();
        assert_eq!(area.to_string(), "0.929030");
    }

    #[test]
    fn test_area_serde_round_trip() {
        let area: Area = "3.141593".parse().unwrap();
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, "\"3.141593\"");
        let back: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(back, area);
    }
}
