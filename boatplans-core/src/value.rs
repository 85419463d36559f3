//! Raw measurement input
//!
//! Form and query values arrive either as numbers (already canonical)
//! or as free text with embedded unit tokens. The two cases are kept as
//! explicit variants; there is no implicit coercion between them.

use serde::{Deserialize, Serialize};

/// A user-supplied measurement before cleaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMeasure {
    Number(f64),
    Text(String),
}

impl RawMeasure {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawMeasure::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawMeasure::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for RawMeasure {
    fn from(value: f64) -> Self {
        RawMeasure::Number(value)
    }
}

impl From<u64> for RawMeasure {
    fn from(value: u64) -> Self {
        RawMeasure::Number(value as f64)
    }
}

impl From<&str> for RawMeasure {
    fn from(value: &str) -> Self {
        RawMeasure::Text(value.to_string())
    }
}

impl From<String> for RawMeasure {
    fn from(value: String) -> Self {
        RawMeasure::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let n = RawMeasure::from(1230.0);
        assert_eq!(n.as_number(), Some(1230.0));
        assert_eq!(n.as_text(), None);

        let t = RawMeasure::from("1 ft 2 in");
        assert_eq!(t.as_text(), Some("1 ft 2 in"));
        assert_eq!(t.as_number(), None);
    }

    #[test]
    fn test_untagged_deserialization() {
        let n: RawMeasure = serde_json::from_str("1230").unwrap();
        assert_eq!(n, RawMeasure::Number(1230.0));

        let t: RawMeasure = serde_json::from_str("\"1,23 m\"").unwrap();
        assert_eq!(t, RawMeasure::Text("1,23 m".to_string()));
    }
}
