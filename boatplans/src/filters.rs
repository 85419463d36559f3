//! Query-filter value parsing
//!
//! Listing endpoints take LOA bounds as raw query-string values; a
//! visitor may type either `20ft` or a whole number of metres.

use boatplans_units::{parse_imperial_size, UnitError};

/// Parse a LOA query filter into millimetres.
///
/// An empty value means no filter. A value mentioning feet goes
/// through the imperial grammar; anything else is whole metres.
pub fn parse_size_filter(value: &str) -> Result<Option<u64>, UnitError> {
    if value.is_empty() {
        return Ok(None);
    }
    if value.contains("ft") {
        return Ok(Some(parse_imperial_size(value)?.as_mm()));
    }
    let metres: u64 = value
        .trim()
        .parse()
        .map_err(|_| UnitError::InvalidNumber(value.to_string()))?;
    Ok(Some(metres * 1000))
}

/// A LOA-bounded design listing query
#[derive(Debug, Clone, PartialEq)]
pub struct DesignQuery {
    pub propulsion: String,
    pub loa_min: Option<u64>,
    pub loa_max: Option<u64>,
}

impl DesignQuery {
    pub fn new(propulsion: &str) -> Self {
        DesignQuery {
            propulsion: propulsion.to_string(),
            loa_min: None,
            loa_max: None,
        }
    }

    /// Build from raw query params as they arrive on the wire.
    pub fn from_params(propulsion: &str, loa_min: &str, loa_max: &str) -> Result<Self, UnitError> {
        Ok(DesignQuery {
            propulsion: propulsion.to_string(),
            loa_min: parse_size_filter(loa_min)?,
            loa_max: parse_size_filter(loa_max)?,
        })
    }
}
