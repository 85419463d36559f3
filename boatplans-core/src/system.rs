//! Measurement system configuration
//!
//! A deployment serves either metric or imperial visitors. The value is
//! resolved once at startup and passed explicitly to every function that
//! needs it; nothing in the engine reads it from ambient state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Display and bucketing mode for the whole deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    Metric,
    Imperial,
}

impl MeasurementSystem {
    pub fn is_metric(self) -> bool {
        matches!(self, MeasurementSystem::Metric)
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementSystem::Metric => write!(f, "metric"),
            MeasurementSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(MeasurementSystem::Metric),
            "imperial" => Ok(MeasurementSystem::Imperial),
            other => Err(CatalogError::config_error(format!(
                "unknown measurement system: {}",
                other
            ))
            .with_suggestion("Use \"metric\" or \"imperial\"")),
        }
    }
}
