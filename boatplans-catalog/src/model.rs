//! Catalog domain model
//!
//! Value types only; persistence stays behind the `DesignStore` seam.
//! Dimension fields hold canonical measures, cleaned on the way in.

use boatplans_core::{Area, Length, Weight};
use serde::{Deserialize, Serialize};

/// Boat propulsion (oars, motor, sail)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Propulsion {
    pub slug: String,
    pub name: String,
    pub long_name: String,
    pub order: u32,
}

impl Propulsion {
    pub fn new(slug: &str, name: &str, long_name: &str, order: u32) -> Self {
        Propulsion {
            slug: slug.to_string(),
            name: name.to_string(),
            long_name: long_name.to_string(),
            order,
        }
    }
}

/// Boat designer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designer {
    pub slug: String,
    pub name: String,
    pub url: String,
    pub enabled: bool,
}

impl Designer {
    pub fn new(slug: &str, name: &str) -> Self {
        Designer {
            slug: slug.to_string(),
            name: name.to_string(),
            url: String::new(),
            enabled: true,
        }
    }

    /// Designer page path
    pub fn absolute_url(&self) -> String {
        format!("/{}/", self.slug)
    }
}

/// Hull configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HullType {
    Mono,
    Catamaran,
    Trimaran,
}

/// Engine placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineType {
    #[serde(rename = "o")]
    Outboard,
    #[serde(rename = "i")]
    Inboard,
}

/// Boat design record, designer joined in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub slug: String,
    pub name: String,
    pub tiny_description: String,
    pub designer: Designer,
    pub url: String,
    pub propulsion: String,
    pub hull_type: HullType,

    /// Length overall, the bucketing key
    pub loa: Option<Length>,
    pub beam: Option<Length>,
    pub draft: Option<Length>,

    pub weight: Option<Weight>,
    pub displacement: Option<Weight>,

    pub sail_area: Option<Area>,

    pub horsepower: Option<String>,
    pub engine_type: Option<EngineType>,

    pub enabled: bool,
    pub score: i32,
}

impl Design {
    /// A minimal enabled record; dimension fields start empty.
    pub fn new(slug: &str, name: &str, designer: Designer, propulsion: &str) -> Self {
        Design {
            slug: slug.to_string(),
            name: name.to_string(),
            tiny_description: String::new(),
            designer,
            url: String::new(),
            propulsion: propulsion.to_string(),
            hull_type: HullType::Mono,
            loa: None,
            beam: None,
            draft: None,
            weight: None,
            displacement: None,
            sail_area: None,
            horsepower: None,
            engine_type: None,
            enabled: true,
            score: 0,
        }
    }

    /// Builder: set length overall in millimetres
    pub fn with_loa(mut self, mm: u64) -> Self {
        self.loa = Some(Length::from_mm(mm));
        self
    }

    /// Design page path; the legacy scheme had no designer segment.
    pub fn absolute_url(&self, legacy_urls: bool) -> String {
        if legacy_urls {
            format!("/{}/", self.slug)
        } else {
            format!("/{}/{}/", self.designer.slug, self.slug)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls() {
        let design = Design::new("scamp", "SCAMP", Designer::new("welsford", "John Welsford"), "sail");
        assert_eq!(design.absolute_url(false), "/welsford/scamp/");
        assert_eq!(design.absolute_url(true), "/scamp/");
        assert_eq!(design.designer.absolute_url(), "/welsford/");
    }

    #[test]
    fn test_engine_type_slugs() {
        assert_eq!(serde_json::to_string(&EngineType::Outboard).unwrap(), "\"o\"");
        assert_eq!(serde_json::to_string(&EngineType::Inboard).unwrap(), "\"i\"");
    }

    #[test]
    fn test_hull_type_slugs() {
        assert_eq!(serde_json::to_string(&HullType::Catamaran).unwrap(), "\"catamaran\"");
    }
}
