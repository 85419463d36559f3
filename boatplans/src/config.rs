//! Site configuration
//!
//! Resolved once from the environment at startup and immutable
//! afterwards; the rest of the engine receives it by injection.

use std::env;

use boatplans_core::{CatalogError, MeasurementSystem};
use serde::Serialize;
use tracing::info;

/// Deployment-wide settings
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub site_name: String,
    pub measurement_system: MeasurementSystem,
    /// Serve design pages under the old one-segment URL scheme
    pub legacy_urls: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Boatplans".to_string(),
            measurement_system: MeasurementSystem::Imperial,
            legacy_urls: false,
        }
    }
}

impl SiteConfig {
    /// Read configuration from the environment.
    ///
    /// `SITE_NAME`, `MEASUREMENT_SYSTEM` (metric|imperial, default
    /// imperial) and `LEGACY_URLS` (1/true) are all optional; an
    /// unknown measurement system is a fatal configuration error.
    pub fn from_env() -> Result<Self, CatalogError> {
        let mut config = Self::default();
        if let Ok(name) = env::var("SITE_NAME") {
            config.site_name = name;
        }
        if let Ok(system) = env::var("MEASUREMENT_SYSTEM") {
            config.measurement_system = system.parse()?;
        }
        if let Ok(legacy) = env::var("LEGACY_URLS") {
            config.legacy_urls = matches!(legacy.as_str(), "1" | "true" | "True");
        }
        info!(
            site_name = %config.site_name,
            system = %config.measurement_system,
            legacy_urls = config.legacy_urls,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Builder: override the measurement system
    pub fn with_system(mut self, system: MeasurementSystem) -> Self {
        self.measurement_system = system;
        self
    }

    /// Builder: override the site name
    pub fn with_site_name(mut self, site_name: &str) -> Self {
        self.site_name = site_name.to_string();
        self
    }
}
