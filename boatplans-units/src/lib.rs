//! Boatplans Units - Dimension Normalization and Humanization
//!
//! Free-form user measurements are parsed into canonical storage units
//! and rendered back into locale-appropriate display strings.
//!
//! Accepted input notations:
//! - Metric lengths: `500`, `1,23 m`, `85 cm`, `250mm` (Latin or Cyrillic)
//! - Imperial lengths: `12' 6"`, `1 ft 1/2 in`, `4"`
//! - Areas: `10`, `10.5`, `100 sq.ft.`, `95 sf`
//! - Weights: `1,5kg`, `2t`, `100 lbs`
//!
//! Canonical units are millimetres, grams, and square metres (six
//! fractional digits); see `boatplans-core`.

mod units;
mod parse;
mod clean;
mod humanize;

pub use units::{
    UnitFactor, AREA_UNITS, G_PER_LB, MM_PER_FOOT, MM_PER_INCH, SIZE_UNITS, SQM_PER_SQFT,
    SQM_PER_SQFT_DISPLAY, WEIGHT_UNITS,
};
pub use parse::{
    match_unit_suffix, normalize, parse_bare_integer, parse_imperial_size, split_feet_inches,
    UnitError,
};
pub use clean::{clean_area, clean_size, clean_weight};
pub use humanize::{
    humanize_imperial_area, humanize_imperial_size, humanize_metric_area, humanize_metric_size,
    humanize_size_range, OPEN_END,
};
