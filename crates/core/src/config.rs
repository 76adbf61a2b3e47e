//! Advisory configuration
//!
//! Every tunable constant of the advisory rules in one serde struct. The
//! defaults reproduce the operational values; a TOML file may override any
//! subset of them:
//!
//! ```toml
//! advisory_threshold = 25.0
//! always_included_fuel_types = ["C-5", "S-1", "S-2", "S-3", "C-7"]
//!
//! [palette]
//! warning_fill = "rgba(200, 0, 0, 0.5)"
//! ```

use crate::advisory::area_filter::{ALWAYS_INCLUDED_FUEL_TYPES, AREA_THRESHOLD};
use crate::advisory::critical_hours::NEXT_DAY_CUTOFF;
use crate::advisory::zone_status::{StatusPalette, DEFAULT_ADVISORY_THRESHOLD};
use crate::core_types::units::{HourOfDay, Percent, SquareMeters};
use crate::error::{AdvisoryError, AdvisoryResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable constants of the advisory rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Fuel types covering no more than this area are dropped
    pub area_threshold: SquareMeters,
    /// Fuel type codes kept regardless of area
    pub always_included_fuel_types: Vec<String>,
    /// Elevated-area percentage a zone must exceed to be flagged
    pub advisory_threshold: Percent,
    /// End hours before this one get the "next day" marker
    pub next_day_cutoff: HourOfDay,
    /// Map colours
    pub palette: StatusPalette,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        AdvisoryConfig {
            area_threshold: AREA_THRESHOLD,
            always_included_fuel_types: ALWAYS_INCLUDED_FUEL_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
            advisory_threshold: DEFAULT_ADVISORY_THRESHOLD,
            next_day_cutoff: NEXT_DAY_CUTOFF,
            palette: StatusPalette::default(),
        }
    }
}

impl AdvisoryConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns [`AdvisoryError::ConfigParse`] for malformed TOML and
    /// [`AdvisoryError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> AdvisoryResult<Self> {
        let config: AdvisoryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    ///
    /// # Errors
    /// Returns [`AdvisoryError::ConfigRead`] if the file cannot be read, otherwise
    /// the errors of [`AdvisoryConfig::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> AdvisoryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AdvisoryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded advisory configuration");
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    /// Returns [`AdvisoryError::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> AdvisoryResult<()> {
        if !self.area_threshold.is_finite() || *self.area_threshold < 0.0 {
            return Err(AdvisoryError::InvalidConfig(format!(
                "area_threshold must be finite and non-negative, got {}",
                *self.area_threshold
            )));
        }
        if !(0.0..=100.0).contains(&*self.advisory_threshold) {
            return Err(AdvisoryError::InvalidConfig(format!(
                "advisory_threshold must be within 0-100, got {}",
                *self.advisory_threshold
            )));
        }
        if !self.next_day_cutoff.is_valid() {
            return Err(AdvisoryError::InvalidConfig(format!(
                "next_day_cutoff must be within [0, 24), got {}",
                *self.next_day_cutoff
            )));
        }
        if let Some(code) = self
            .always_included_fuel_types
            .iter()
            .find(|code| code.trim().is_empty())
        {
            return Err(AdvisoryError::InvalidConfig(format!(
                "always_included_fuel_types contains a blank code '{code}'"
            )));
        }
        Ok(())
    }

    /// Whether a fuel type code bypasses the area filter
    pub fn is_always_included(&self, code: &str) -> bool {
        self.always_included_fuel_types.iter().any(|c| c == code)
    }
}
