//! Record-store seam
//!
//! Bucketing and listing only need a narrow query capability; the
//! real database stays behind this trait. Every query is implicitly
//! scoped to enabled designs whose designer is also enabled.

use boatplans_core::CatalogError;
use thiserror::Error;

use crate::model::{Design, Propulsion};

/// Errors surfaced by a store implementation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::store_error(err.to_string())
    }
}

/// Narrow query interface over the design records
pub trait DesignStore: Send + Sync {
    /// Is there any enabled design of an enabled designer matching the
    /// propulsion and the optional LOA bounds (inclusive, millimetres)?
    fn exists(
        &self,
        propulsion: &str,
        loa_min: Option<u64>,
        loa_max: Option<u64>,
    ) -> Result<bool, StoreError>;

    /// Matching designs, ordered by length overall.
    fn list(
        &self,
        propulsion: &str,
        loa_min: Option<u64>,
        loa_max: Option<u64>,
    ) -> Result<Vec<Design>, StoreError>;

    /// Latest designs for a propulsion, newest first.
    fn recent(&self, propulsion: &str, limit: usize) -> Result<Vec<Design>, StoreError>;

    /// All propulsions, in display order.
    fn propulsions(&self) -> Result<Vec<Propulsion>, StoreError>;
}

/// In-memory store for tests and demos
#[derive(Debug, Default)]
pub struct MemoryStore {
    propulsions: Vec<Propulsion>,
    designs: Vec<Design>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_propulsion(mut self, propulsion: Propulsion) -> Self {
        self.propulsions.push(propulsion);
        self
    }

    pub fn with_design(mut self, design: Design) -> Self {
        self.designs.push(design);
        self
    }

    fn matching<'a>(
        &'a self,
        propulsion: &'a str,
        loa_min: Option<u64>,
        loa_max: Option<u64>,
    ) -> impl Iterator<Item = &'a Design> {
        self.designs.iter().filter(move |design| {
            design.enabled
                && design.designer.enabled
                && design.propulsion == propulsion
                && loa_min.map_or(true, |min| {
                    design.loa.map_or(false, |loa| loa.as_mm() >= min)
                })
                && loa_max.map_or(true, |max| {
                    design.loa.map_or(false, |loa| loa.as_mm() <= max)
                })
        })
    }
}

impl DesignStore for MemoryStore {
    fn exists(
        &self,
        propulsion: &str,
        loa_min: Option<u64>,
        loa_max: Option<u64>,
    ) -> Result<bool, StoreError> {
        Ok(self.matching(propulsion, loa_min, loa_max).next().is_some())
    }

    fn list(
        &self,
        propulsion: &str,
        loa_min: Option<u64>,
        loa_max: Option<u64>,
    ) -> Result<Vec<Design>, StoreError> {
        let mut designs: Vec<Design> = self.matching(propulsion, loa_min, loa_max).cloned().collect();
        // unsized records sort last; insertion order breaks ties
        designs.sort_by_key(|design| design.loa.map_or(u64::MAX, |loa| loa.as_mm()));
        Ok(designs)
    }

    fn recent(&self, propulsion: &str, limit: usize) -> Result<Vec<Design>, StoreError> {
        Ok(self
            .matching(propulsion, None, None)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    fn propulsions(&self) -> Result<Vec<Propulsion>, StoreError> {
        let mut propulsions = self.propulsions.clone();
        propulsions.sort_by_key(|p| p.order);
        Ok(propulsions)
    }
}
