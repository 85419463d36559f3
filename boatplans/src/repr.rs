//! API representations
//!
//! Serializable view structs for the endpoints that sit above the
//! engine. Dimensions are rendered for both display systems at once;
//! clients pick the one matching the visitor's locale.

use boatplans_catalog::{Design, Designer};
use boatplans_core::{Area, Length, Translate};
use boatplans_units::{
    humanize_imperial_area, humanize_imperial_size, humanize_metric_area, humanize_metric_size,
};
use serde::Serialize;

/// A size rendered for both display systems
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeRepr {
    pub metric: Option<String>,
    pub imperial: Option<String>,
}

impl SizeRepr {
    pub fn new(size: Option<Length>, tr: &dyn Translate) -> Self {
        SizeRepr {
            metric: humanize_metric_size(size, tr),
            imperial: humanize_imperial_size(size, tr),
        }
    }
}

/// An area rendered for both display systems
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaRepr {
    pub metric: Option<String>,
    pub imperial: Option<String>,
}

impl AreaRepr {
    pub fn new(area: Option<Area>, tr: &dyn Translate) -> Self {
        AreaRepr {
            metric: humanize_metric_area(area, tr),
            imperial: humanize_imperial_area(area, tr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignerRepr {
    pub slug: String,
    pub name: String,
}

impl From<&Designer> for DesignerRepr {
    fn from(designer: &Designer) -> Self {
        DesignerRepr {
            slug: designer.slug.clone(),
            name: designer.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropulsionRepr {
    pub slug: String,
    pub long_name: String,
}

/// Compact design representation for card grids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignCard {
    pub slug: String,
    pub absolute_url: String,
    pub name: String,
    pub designer: DesignerRepr,
    pub tiny_description: String,
    pub loa: SizeRepr,
}

pub fn design_card(design: &Design, legacy_urls: bool, tr: &dyn Translate) -> DesignCard {
    DesignCard {
        slug: design.slug.clone(),
        absolute_url: design.absolute_url(legacy_urls),
        name: design.name.clone(),
        designer: DesignerRepr::from(&design.designer),
        tiny_description: design.tiny_description.clone(),
        loa: SizeRepr::new(design.loa, tr),
    }
}

/// Design representation for listing pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignListItem {
    pub slug: String,
    pub absolute_url: String,
    pub name: String,
    pub designer: DesignerRepr,
    pub tiny_description: String,
    pub loa: SizeRepr,
    pub beam: SizeRepr,
    pub sail_area: AreaRepr,
    pub horse_power: Option<String>,
}

pub fn design_list_item(design: &Design, legacy_urls: bool, tr: &dyn Translate) -> DesignListItem {
    DesignListItem {
        slug: design.slug.clone(),
        absolute_url: design.absolute_url(legacy_urls),
        name: design.name.clone(),
        designer: DesignerRepr::from(&design.designer),
        tiny_description: design.tiny_description.clone(),
        loa: SizeRepr::new(design.loa, tr),
        beam: SizeRepr::new(design.beam, tr),
        sail_area: AreaRepr::new(design.sail_area, tr),
        horse_power: design.horsepower.clone(),
    }
}

/// One selectable length range in navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthOption {
    pub slug: String,
    pub label: String,
}

/// A propulsion with its available length ranges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropulsionInfo {
    pub slug: String,
    pub long_name: String,
    pub lengths: Vec<LengthOption>,
}

/// Site metadata plus navigation structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteInfo {
    pub site_name: String,
    pub propulsions: Vec<PropulsionInfo>,
}

/// Recent designs of one propulsion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentGroup {
    pub propulsion: PropulsionRepr,
    pub recent: Vec<DesignCard>,
}
