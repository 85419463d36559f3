//! Unit definitions - suffix tables and conversion constants

/// A unit suffix and its multiplier into the base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFactor {
    /// The suffix as typed by the user, before space stripping
    pub token: &'static str,
    /// Multiplier into the canonical base unit
    pub factor: f64,
}

const fn unit(token: &'static str, factor: f64) -> UnitFactor {
    UnitFactor { token, factor }
}

pub const MM_PER_FOOT: f64 = 304.8;
pub const MM_PER_INCH: f64 = 25.4;

/// m² per ft², as accepted on input
pub const SQM_PER_SQFT: f64 = 0.092903;

/// Coarser factor used on the display side; kept separate on purpose,
/// existing data was rendered with it.
pub const SQM_PER_SQFT_DISPLAY: f64 = 0.0929;

pub const G_PER_LB: f64 = 453.59237;

/// Metric size suffixes, Latin and Cyrillic, in matching order.
///
/// Matching stops at the first suffix the input ends with, so `mm`
/// and `cm` must precede `m`.
pub const SIZE_UNITS: [UnitFactor; 6] = [
    unit("mm", 1.0),
    unit("мм", 1.0),
    unit("cm", 10.0),
    unit("см", 10.0),
    unit("m", 1000.0),
    unit("м", 1000.0),
];

/// Imperial square-foot spellings
pub const AREA_UNITS: [UnitFactor; 5] = [
    unit("sq.ft", SQM_PER_SQFT),
    unit("sq.ft.", SQM_PER_SQFT),
    unit("sq ft", SQM_PER_SQFT),
    unit("sqf", SQM_PER_SQFT),
    unit("sf", SQM_PER_SQFT),
];

/// Weight suffixes. Dotted pound spellings are listed before their
/// undotted prefixes.
pub const WEIGHT_UNITS: [UnitFactor; 8] = [
    unit("kg", 1000.0),
    unit("кг", 1000.0),
    unit("t", 1_000_000.0),
    unit("т", 1_000_000.0),
    unit("lbs.", G_PER_LB),
    unit("lbs", G_PER_LB),
    unit("lb.", G_PER_LB),
    unit("lb", G_PER_LB),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_table_orders_mm_before_m() {
        let mm_pos = SIZE_UNITS.iter().position(|u| u.token == "mm").unwrap();
        let m_pos = SIZE_UNITS.iter().position(|u| u.token == "m").unwrap();
        assert!(mm_pos < m_pos);

        let cm_pos = SIZE_UNITS.iter().position(|u| u.token == "cm").unwrap();
        assert!(cm_pos < m_pos);
    }

    #[test]
    fn test_weight_table_orders_dotted_pounds_first() {
        let dotted = WEIGHT_UNITS.iter().position(|u| u.token == "lbs.").unwrap();
        let plain = WEIGHT_UNITS.iter().position(|u| u.token == "lb").unwrap();
        assert!(dotted < plain);
    }

    #[test]
    fn test_cyrillic_tokens_share_factors() {
        for (latin, cyrillic) in [("mm", "мм"), ("cm", "см"), ("m", "м")] {
            let a = SIZE_UNITS.iter().find(|u| u.token == latin).unwrap();
            let b = SIZE_UNITS.iter().find(|u| u.token == cyrillic).unwrap();
            assert_eq!(a.factor, b.factor);
        }
    }
}
