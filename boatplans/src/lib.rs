//! Boatplans - Boat Design Catalog Engine
//!
//! Ties the unit engine, the record-store seam, and the length buckets
//! together behind the operations the site endpoints need: site info
//! with navigation ranges, recent-design feeds, and bounded listings.

mod config;
mod filters;
mod repr;

pub use config::SiteConfig;
pub use filters::{parse_size_filter, DesignQuery};
pub use repr::{
    design_card, design_list_item, AreaRepr, DesignCard, DesignListItem, DesignerRepr,
    LengthOption, PropulsionInfo, PropulsionRepr, RecentGroup, SiteInfo, SizeRepr,
};

use std::sync::Arc;

use boatplans_catalog::{
    available_buckets, bucket_for_length, Design, DesignStore, LengthBucket, FALLBACK_BUCKET,
};
use boatplans_core::{CatalogError, EchoTranslator, MeasurementSystem, Translate};

/// Designs shown per propulsion on the recent feed
const RECENT_LIMIT: usize = 4;

/// Main catalog engine
pub struct Catalog<S: DesignStore> {
    store: S,
    translator: Arc<dyn Translate>,
    config: SiteConfig,
}

impl<S: DesignStore> Catalog<S> {
    pub fn new(store: S, config: SiteConfig) -> Self {
        Self {
            store,
            translator: Arc::new(EchoTranslator),
            config,
        }
    }

    /// Builder: install a locale-aware translator
    pub fn with_translator(mut self, translator: Arc<dyn Translate>) -> Self {
        self.translator = translator;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn system(&self) -> MeasurementSystem {
        self.config.measurement_system
    }

    /// Site metadata plus navigation: every propulsion with its
    /// available length ranges.
    pub fn site_info(&self) -> Result<SiteInfo, CatalogError> {
        let system = self.system();
        let mut propulsions = Vec::new();
        for propulsion in self.store.propulsions()? {
            let lengths = available_buckets(&self.store, system, &propulsion.slug)?
                .into_iter()
                .map(|bucket| LengthOption {
                    slug: bucket.slug(system),
                    label: bucket.label(system, self.translator.as_ref()),
                })
                .collect();
            propulsions.push(PropulsionInfo {
                slug: propulsion.slug,
                long_name: propulsion.long_name,
                lengths,
            });
        }
        Ok(SiteInfo {
            site_name: self.config.site_name.clone(),
            propulsions,
        })
    }

    /// The newest designs per propulsion, as cards
    pub fn recent_designs(&self) -> Result<Vec<RecentGroup>, CatalogError> {
        let mut groups = Vec::new();
        for propulsion in self.store.propulsions()? {
            let recent = self
                .store
                .recent(&propulsion.slug, RECENT_LIMIT)?
                .iter()
                .map(|design| self.design_card(design))
                .collect();
            groups.push(RecentGroup {
                propulsion: PropulsionRepr {
                    slug: propulsion.slug,
                    long_name: propulsion.long_name,
                },
                recent,
            });
        }
        Ok(groups)
    }

    /// Designs matching a query, in listing form
    pub fn designs(&self, query: &DesignQuery) -> Result<Vec<DesignListItem>, CatalogError> {
        Ok(self
            .store
            .list(&query.propulsion, query.loa_min, query.loa_max)?
            .iter()
            .map(|design| self.design_list_item(design))
            .collect())
    }

    pub fn design_card(&self, design: &Design) -> DesignCard {
        repr::design_card(design, self.config.legacy_urls, self.translator.as_ref())
    }

    pub fn design_list_item(&self, design: &Design) -> DesignListItem {
        repr::design_list_item(design, self.config.legacy_urls, self.translator.as_ref())
    }

    /// Navigation bucket for a design; unsized designs take the
    /// fallback bucket.
    pub fn bucket_for(&self, design: &Design) -> LengthBucket {
        match design.loa {
            Some(loa) => bucket_for_length(self.system(), loa),
            None => FALLBACK_BUCKET,
        }
    }
}
