//! Length buckets
//!
//! Designs are grouped into a fixed ordered set of length ranges for
//! navigation. The table and its display unit depend on the
//! measurement system.

use boatplans_core::{Length, MeasurementSystem, Translate};
use boatplans_units::{humanize_size_range, OPEN_END};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{DesignStore, StoreError};

/// A length range in display units (metres or feet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBucket {
    pub from: u32,
    pub to: u32,
}

const fn bucket(from: u32, to: u32) -> LengthBucket {
    LengthBucket { from, to }
}

/// Metric navigation ranges, metres
pub const METRIC_BUCKETS: [LengthBucket; 5] = [
    bucket(0, 4),
    bucket(4, 6),
    bucket(6, 8),
    bucket(8, 10),
    bucket(10, OPEN_END),
];

/// Imperial navigation ranges, feet
pub const IMPERIAL_BUCKETS: [LengthBucket; 7] = [
    bucket(0, 10),
    bucket(10, 14),
    bucket(14, 18),
    bucket(18, 24),
    bucket(24, 30),
    bucket(30, 36),
    bucket(36, OPEN_END),
];

/// Fallback when a length lands outside every range
pub const FALLBACK_BUCKET: LengthBucket = bucket(1, OPEN_END);

/// The bucket table for a measurement system
pub fn buckets_for(system: MeasurementSystem) -> &'static [LengthBucket] {
    if system.is_metric() {
        &METRIC_BUCKETS
    } else {
        &IMPERIAL_BUCKETS
    }
}

/// Millimetres per display unit for bucket boundaries.
///
/// The imperial multiplier is a whole-millimetre 305, not 304.8;
/// boundaries and stored slugs were defined against it.
pub fn bucket_multiplier(system: MeasurementSystem) -> u64 {
    if system.is_metric() {
        1000
    } else {
        305
    }
}

impl LengthBucket {
    /// URL slug for the bucket, e.g. `10ft-14ft` or `4-6`
    pub fn slug(&self, system: MeasurementSystem) -> String {
        if system.is_metric() {
            format!("{}-{}", self.from, self.to)
        } else {
            format!("{}ft-{}ft", self.from, self.to)
        }
    }

    /// Display label via the range humanizer
    pub fn label(&self, system: MeasurementSystem, tr: &dyn Translate) -> String {
        let unit = if system.is_metric() { "м" } else { "ft" };
        humanize_size_range(Some(self.from), Some(self.to), unit, tr)
    }

    fn bounds_mm(&self, system: MeasurementSystem) -> (u64, u64) {
        let mult = bucket_multiplier(system);
        (self.from as u64 * mult, self.to as u64 * mult)
    }
}

/// Find the navigation bucket for a canonical length.
///
/// Buckets are tried in table order over half-open millimetre ranges
/// `[from, to)`, so a length sitting exactly on a shared boundary
/// belongs to the higher bucket: 3050 mm under the imperial table is
/// 10-14 ft, not 0-10 ft.
pub fn bucket_for_length(system: MeasurementSystem, loa: Length) -> LengthBucket {
    for bucket in buckets_for(system) {
        let (from_mm, to_mm) = bucket.bounds_mm(system);
        if from_mm <= loa.as_mm() && loa.as_mm() < to_mm {
            return *bucket;
        }
    }
    FALLBACK_BUCKET
}

/// Buckets containing at least one design of the propulsion,
/// preserving table order.
///
/// Each bucket is an independent existence query. The lower bound is
/// applied only when nonzero; the upper bound always is, 99 display
/// units being a real millimetre figure even for the visually open
/// top bucket.
pub fn available_buckets<S: DesignStore + ?Sized>(
    store: &S,
    system: MeasurementSystem,
    propulsion: &str,
) -> Result<Vec<LengthBucket>, StoreError> {
    let mut available = Vec::new();
    for bucket in buckets_for(system) {
        let (from_mm, to_mm) = bucket.bounds_mm(system);
        let loa_min = if from_mm > 0 { Some(from_mm) } else { None };
        let found = store.exists(propulsion, loa_min, Some(to_mm))?;
        debug!(
            propulsion,
            from = bucket.from,
            to = bucket.to,
            found,
            "bucket existence query"
        );
        if found {
            available.push(*bucket);
        }
    }
    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Design, Designer, Propulsion};
    use crate::store::MemoryStore;
    use boatplans_core::EchoTranslator;

    #[test]
    fn test_boundary_goes_to_higher_bucket() {
        // exactly 10 ft under the 305 multiplier
        let bucket = bucket_for_length(MeasurementSystem::Imperial, Length::from_mm(3050));
        assert_eq!(bucket, LengthBucket { from: 10, to: 14 });

        let below = bucket_for_length(MeasurementSystem::Imperial, Length::from_mm(3049));
        assert_eq!(below, LengthBucket { from: 0, to: 10 });
    }

    #[test]
    fn test_metric_buckets() {
        let bucket = bucket_for_length(MeasurementSystem::Metric, Length::from_mm(4500));
        assert_eq!(bucket, LengthBucket { from: 4, to: 6 });

        let tiny = bucket_for_length(MeasurementSystem::Metric, Length::from_mm(500));
        assert_eq!(tiny, LengthBucket { from: 0, to: 4 });
    }

    #[test]
    fn test_out_of_table_length_takes_fallback() {
        let huge = bucket_for_length(MeasurementSystem::Metric, Length::from_mm(200_000));
        assert_eq!(huge, FALLBACK_BUCKET);
    }

    #[test]
    fn test_bucket_slugs() {
        let bucket = LengthBucket { from: 10, to: 14 };
        assert_eq!(bucket.slug(MeasurementSystem::Imperial), "10ft-14ft");
        assert_eq!(bucket.slug(MeasurementSystem::Metric), "10-14");
    }

    #[test]
    fn test_bucket_labels() {
        let tr = EchoTranslator;
        let top = LengthBucket { from: 36, to: 99 };
        assert_eq!(top.label(MeasurementSystem::Imperial, &tr), "from 36 ft");

        let bottom = LengthBucket { from: 0, to: 4 };
        assert_eq!(bottom.label(MeasurementSystem::Metric, &tr), "up to 4 м");
    }

    fn demo_store() -> MemoryStore {
        let designer = Designer::new("welsford", "John Welsford");
        MemoryStore::new()
            .with_propulsion(Propulsion::new("sail", "sail", "Sailboats", 1))
            .with_design(Design::new("scamp", "SCAMP", designer.clone(), "sail").with_loa(3580))
            .with_design(Design::new("pathfinder", "Pathfinder", designer, "sail").with_loa(5180))
    }

    #[test]
    fn test_available_buckets_preserve_table_order() {
        let store = demo_store();
        let available =
            available_buckets(&store, MeasurementSystem::Imperial, "sail").unwrap();
        // 3580 mm falls in 10-14 ft, 5180 mm in 14-18 ft
        assert_eq!(
            available,
            vec![
                LengthBucket { from: 10, to: 14 },
                LengthBucket { from: 14, to: 18 },
            ]
        );
    }

    #[test]
    fn test_available_buckets_empty_for_unknown_propulsion() {
        let store = demo_store();
        let available = available_buckets(&store, MeasurementSystem::Imperial, "motor").unwrap();
        assert!(available.is_empty());
    }

    #[test]
    fn test_bottom_bucket_omits_lower_filter() {
        // a design with no loa still matches when both bounds are open,
        // but the bottom bucket applies an upper bound, which a
        // loa-less record cannot satisfy
        let designer = Designer::new("welsford", "John Welsford");
        let store = MemoryStore::new()
            .with_design(Design::new("mystery", "Mystery", designer, "sail"));
        let available = available_buckets(&store, MeasurementSystem::Imperial, "sail").unwrap();
        assert!(available.is_empty());
    }
}
