//! Fuel type reference data
//!
//! Fuel types follow the Canadian Forest Fire Behaviour Prediction (FBP)
//! System classification: conifer (C-1..C-7), deciduous (D-1/D-2), mixedwood
//! (M-1..M-4), slash (S-1..S-3) and open/grass (O-1a/O-1b).
//!
//! # Scientific References
//! - Forestry Canada Fire Danger Group (1992). "Development and Structure of the
//!   Canadian Forest Fire Behavior Prediction System." Information Report ST-X-3.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fuel type as delivered by the fire-behaviour model
///
/// Immutable reference data; equality is by all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuelType {
    /// Upstream database identifier
    pub fuel_type_id: i64,
    /// Short FBP code, e.g. "C-5" or "S-1"
    pub fuel_type_code: String,
    /// Free-text description, e.g. "Red and White Pine"
    pub description: String,
}

impl FuelType {
    /// Create a fuel type
    pub fn new(fuel_type_id: i64, code: impl Into<String>, description: impl Into<String>) -> Self {
        FuelType {
            fuel_type_id,
            fuel_type_code: code.into(),
            description: description.into(),
        }
    }

    /// Short FBP code
    pub fn code(&self) -> &str {
        &self.fuel_type_code
    }

    /// Boreal spruce-lichen woodland
    pub fn c1() -> Self {
        Self::new(1, "C-1", "Spruce-Lichen Woodland")
    }

    /// Boreal spruce
    pub fn c2() -> Self {
        Self::new(2, "C-2", "Boreal Spruce")
    }

    /// Mature jack or lodgepole pine
    pub fn c3() -> Self {
        Self::new(3, "C-3", "Mature Jack or Lodgepole Pine")
    }

    /// Red and white pine
    pub fn c5() -> Self {
        Self::new(5, "C-5", "Red and White Pine")
    }

    /// Conifer plantation
    pub fn c6() -> Self {
        Self::new(6, "C-6", "Conifer Plantation")
    }

    /// Ponderosa pine / Douglas-fir
    pub fn c7() -> Self {
        Self::new(7, "C-7", "Ponderosa Pine - Douglas-Fir")
    }

    /// Leafless aspen
    pub fn d1() -> Self {
        Self::new(8, "D-1/D-2", "Aspen")
    }

    /// Boreal mixedwood
    pub fn m1() -> Self {
        Self::new(9, "M-1/M-2", "Boreal Mixedwood")
    }

    /// Jack or lodgepole pine slash
    pub fn s1() -> Self {
        Self::new(11, "S-1", "Jack or Lodgepole Pine Slash")
    }

    /// White spruce / balsam slash
    pub fn s2() -> Self {
        Self::new(12, "S-2", "White Spruce - Balsam Slash")
    }

    /// Coastal cedar / hemlock / Douglas-fir slash
    pub fn s3() -> Self {
        Self::new(13, "S-3", "Coastal Cedar - Hemlock - Douglas-Fir Slash")
    }

    /// Grass
    pub fn o1() -> Self {
        Self::new(14, "O-1a/O-1b", "Grass")
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.fuel_type_code, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_type_deserializes_upstream_shape() {
        let json = r#"{
            "fuel_type_id": 5,
            "fuel_type_code": "C-5",
            "description": "Red and White Pine"
        }"#;
        let fuel: FuelType = serde_json::from_str(json).unwrap();
        assert_eq!(fuel, FuelType::c5());
        assert_eq!(fuel.to_string(), "C-5 (Red and White Pine)");
    }
}
