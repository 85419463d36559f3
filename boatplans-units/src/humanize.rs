//! Humanizers - canonical values back to display strings
//!
//! Every humanizer goes through the injected translator, and an absent
//! canonical value propagates as `None` so callers can omit the field
//! instead of rendering a null marker.

use boatplans_core::{Area, Length, Translate};

use crate::units::{MM_PER_INCH, SQM_PER_SQFT_DISPLAY};

/// Upper-bound sentinel meaning "and above" in a size range
pub const OPEN_END: u32 = 99;

const RANGE_FROM: &str = "from {size_from} {unit}";
const RANGE_UP_TO: &str = "up to {size_to} {unit}";
const RANGE_BETWEEN: &str = "{size_from}-{size_to} {unit}";
const METRIC_SIZE: &str = "{size} m";
const FEET_MARK: &str = "{feet}'";
const INCHES_MARK: &str = "{inches}\"";
const METRIC_AREA: &str = "{area} m²";
const IMPERIAL_AREA: &str = "{area} sq. ft.";

/// Render a size range as a human readable string.
///
/// A `to` of 99 marks the open-ended top range, a `from` of 0 the
/// bottom one; absent bounds count as 0.
pub fn humanize_size_range(
    from: Option<u32>,
    to: Option<u32>,
    unit: &str,
    tr: &dyn Translate,
) -> String {
    let from = from.unwrap_or(0);
    let to = to.unwrap_or(0);

    if to == OPEN_END {
        return tr.translate(
            RANGE_FROM,
            &[("size_from", from.to_string()), ("unit", unit.to_string())],
        );
    }

    if from == 0 {
        return tr.translate(
            RANGE_UP_TO,
            &[("size_to", to.to_string()), ("unit", unit.to_string())],
        );
    }

    tr.translate(
        RANGE_BETWEEN,
        &[
            ("size_from", from.to_string()),
            ("size_to", to.to_string()),
            ("unit", unit.to_string()),
        ],
    )
}

/// Format millimetres as metres, e.g. `1.5 m`.
pub fn humanize_metric_size(size: Option<Length>, tr: &dyn Translate) -> Option<String> {
    let size = size?;
    let metres = trim_decimal(&format!("{:.2}", size.as_mm() as f64 / 1000.0));
    Some(tr.translate(METRIC_SIZE, &[("size", metres)]))
}

/// Format millimetres as feet and inches, e.g. `10' 6"`.
///
/// Above ten feet a stray inch either way is a conversion artifact:
/// one inch drops to zero, eleven inches rounds up to the next foot.
pub fn humanize_imperial_size(size: Option<Length>, tr: &dyn Translate) -> Option<String> {
    let size = size?;
    let total_inches = (size.as_mm() as f64 / MM_PER_INCH).round_ties_even() as u64;
    let mut feet = total_inches / 12;
    let mut inches = total_inches % 12;

    if feet > 10 {
        if inches == 1 {
            inches = 0;
        } else if inches == 11 {
            inches = 0;
            feet += 1;
        }
    }

    let mut parts: Vec<String> = Vec::new();
    if feet > 0 {
        parts.push(tr.translate(FEET_MARK, &[("feet", feet.to_string())]));
    }
    if inches != 0 {
        parts.push(tr.translate(INCHES_MARK, &[("inches", inches.to_string())]));
    }
    Some(parts.join(" ").trim().to_string())
}

/// Format square metres with one decimal, e.g. `12.3 m²`.
pub fn humanize_metric_area(area: Option<Area>, tr: &dyn Translate) -> Option<String> {
    let area = area?;
    let rendered = trim_decimal(&format!("{:.1}", area.to_f64()));
    Some(tr.translate(METRIC_AREA, &[("area", rendered)]))
}

/// Format square metres as whole square feet, e.g. `124 sq. ft.`.
pub fn humanize_imperial_area(area: Option<Area>, tr: &dyn Translate) -> Option<String> {
    let area = area?;
    let sq_ft = (area.to_f64() / SQM_PER_SQFT_DISPLAY).round_ties_even() as u64;
    Some(tr.translate(IMPERIAL_AREA, &[("area", sq_ft.to_string())]))
}

/// Strip trailing zeros, and a then-trailing point, from a fixed
/// decimal rendering.
fn trim_decimal(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boatplans_core::EchoTranslator;

    fn mm(value: u64) -> Option<Length> {
        Some(Length::from_mm(value))
    }

    fn m2(value: &str) -> Option<Area> {
        Some(value.parse().unwrap())
    }

    #[test]
    fn test_size_range_up_to() {
        let tr = EchoTranslator;
        assert_eq!(
            humanize_size_range(Some(0), Some(10), "ft", &tr),
            "up to 10 ft"
        );
    }

    #[test]
    fn test_size_range_between() {
        let tr = EchoTranslator;
        assert_eq!(
            humanize_size_range(Some(10), Some(14), "ft", &tr),
            "10-14 ft"
        );
        assert_eq!(humanize_size_range(Some(10), Some(14), "m", &tr), "10-14 m");
    }

    #[test]
    fn test_size_range_open_end() {
        let tr = EchoTranslator;
        assert_eq!(
            humanize_size_range(Some(16), Some(99), "ft", &tr),
            "from 16 ft"
        );
    }

    #[test]
    fn test_size_range_absent_bound_counts_as_zero() {
        let tr = EchoTranslator;
        assert_eq!(humanize_size_range(None, Some(10), "ft", &tr), "up to 10 ft");
    }

    #[test]
    fn test_metric_size() {
        let tr = EchoTranslator;
        assert_eq!(humanize_metric_size(mm(1000), &tr).unwrap(), "1 m");
        assert_eq!(humanize_metric_size(mm(1500), &tr).unwrap(), "1.5 m");
        assert_eq!(humanize_metric_size(mm(1250), &tr).unwrap(), "1.25 m");
        assert_eq!(humanize_metric_size(None, &tr), None);
    }

    #[test]
    fn test_imperial_size() {
        let tr = EchoTranslator;
        assert_eq!(humanize_imperial_size(mm(3050), &tr).unwrap(), "10'");
        assert_eq!(humanize_imperial_size(mm(3200), &tr).unwrap(), "10' 6\"");
        assert_eq!(humanize_imperial_size(mm(254), &tr).unwrap(), "10\"");
        assert_eq!(humanize_imperial_size(None, &tr), None);
    }

    #[test]
    fn test_imperial_size_smooths_stray_inch_on_long_boats() {
        let tr = EchoTranslator;
        // 3683 mm is 12' 1"; the inch is dropped
        assert_eq!(humanize_imperial_size(mm(3683), &tr).unwrap(), "12'");
        // 3632 mm is 11' 11"; rounds up to the next foot
        assert_eq!(humanize_imperial_size(mm(3632), &tr).unwrap(), "12'");
        // below the threshold the inches stay
        assert_eq!(humanize_imperial_size(mm(2464), &tr).unwrap(), "8' 1\"");
    }

    #[test]
    fn test_humanizers_never_render_null_markers() {
        let tr = EchoTranslator;
        for value in [25u64, 305, 1000, 3050, 9999, 30500] {
            let metric = humanize_metric_size(mm(value), &tr).unwrap();
            let imperial = humanize_imperial_size(mm(value), &tr).unwrap();
            assert!(!metric.contains("None") && !metric.is_empty());
            assert!(!imperial.contains("None") && !imperial.is_empty());
        }
    }

    #[test]
    fn test_metric_area() {
        let tr = EchoTranslator;
        assert_eq!(humanize_metric_area(m2("10.000000"), &tr).unwrap(), "10 m²");
        assert_eq!(
            humanize_metric_area(m2("12.340000"), &tr).unwrap(),
            "12.3 m²"
        );
        assert_eq!(humanize_metric_area(None, &tr), None);
    }

    #[test]
    fn test_imperial_area() {
        let tr = EchoTranslator;
        assert_eq!(
            humanize_imperial_area(m2("11.500000"), &tr).unwrap(),
            "124 sq. ft."
        );
        assert_eq!(humanize_imperial_area(None, &tr), None);
    }
}
