//! Field-cleaning pipelines
//!
//! Each pipeline takes a raw form value and produces a canonical
//! measure, or a validation error for the caller to surface. Numeric
//! input is already canonical and only gets validated.

use boatplans_core::{Area, Length, RawMeasure, Weight};

use crate::parse::{match_unit_suffix, parse_bare_integer, parse_imperial_size, UnitError};
use crate::units::{AREA_UNITS, SIZE_UNITS, WEIGHT_UNITS};

/// Clean a size (metric or imperial) to whole millimetres.
///
/// Metric suffixes are tried first; anything else goes through the
/// imperial feet/inches grammar.
pub fn clean_size(raw: &RawMeasure) -> Result<Length, UnitError> {
    match raw {
        RawMeasure::Number(n) => Ok(Length::from_f64(*n)?),
        RawMeasure::Text(s) => match match_unit_suffix(s, &SIZE_UNITS)? {
            Some(mm) => Ok(Length::from_f64(mm)?),
            None => parse_imperial_size(s),
        },
    }
}

/// Clean an area to square metres.
///
/// Imperial square-foot input is converted; metric input passes the
/// fixed-point validator unchanged.
pub fn clean_area(raw: &RawMeasure) -> Result<Area, UnitError> {
    match raw {
        RawMeasure::Number(n) => Ok(Area::from_f64(*n)?),
        RawMeasure::Text(s) => match match_unit_suffix(s, &AREA_UNITS)? {
            Some(m2) => Ok(Area::from_f64(m2)?),
            None => Ok(s.trim().parse::<Area>()?),
        },
    }
}

/// Clean a weight (metric or imperial) to whole grams.
///
/// A converted float rounds to the nearest gram; a bare figure must
/// already be whole grams.
pub fn clean_weight(raw: &RawMeasure) -> Result<Weight, UnitError> {
    match raw {
        RawMeasure::Number(n) => Ok(Weight::from_f64(*n)?),
        RawMeasure::Text(s) => match match_unit_suffix(s, &WEIGHT_UNITS)? {
            Some(grams) => Ok(Weight::from_f64_rounded(grams)?),
            None => Ok(Weight::from_g(parse_bare_integer(s)?)),
        },
    }
}
