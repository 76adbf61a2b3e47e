//! Head fire intensity thresholds and advisory statuses
//!
//! Two intensity bands drive every advisory decision:
//! - **Advisory**: 4,000 ≤ HFI < 10,000 kW/m
//! - **Warning**: HFI ≥ 10,000 kW/m
//!
//! Upstream identifies the bands by the numeric ids 1 and 2. Inside the crate
//! they are the closed enum [`ThresholdLevel`]; the numbers only appear at the
//! serde boundary, where an unrecognised id is rejected instead of silently
//! falling through.

use crate::core_types::units::KilowattsPerMeter;
use crate::error::{AdvisoryError, AdvisoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Head fire intensity ranges (kW/m) for each threshold band
pub mod hfi_ranges {
    use std::ops::{Range, RangeFrom};

    /// Advisory band `[4000, 10000)`
    pub const ADVISORY: Range<f64> = 4000.0..10000.0;

    /// Warning band `[10000, ∞)`
    pub const WARNING: RangeFrom<f64> = 10000.0..;
}

/// Intensity threshold band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ThresholdLevel {
    /// 4,000-9,999 kW/m
    Advisory,
    /// 10,000+ kW/m
    Warning,
}

impl ThresholdLevel {
    /// Both levels, in id order
    pub const ALL: [ThresholdLevel; 2] = [ThresholdLevel::Advisory, ThresholdLevel::Warning];

    /// Numeric id used on the wire
    pub const fn id(self) -> u8 {
        match self {
            Self::Advisory => 1,
            Self::Warning => 2,
        }
    }

    /// Upstream name of the band
    pub const fn name(self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Warning => "warning",
        }
    }

    /// Human-readable band description
    pub const fn description(self) -> &'static str {
        match self {
            Self::Advisory => "4000 < hfi < 10000",
            Self::Warning => "hfi >= 10000",
        }
    }

    /// Lowest intensity that meets this level
    pub fn lower_bound(self) -> KilowattsPerMeter {
        match self {
            Self::Advisory => KilowattsPerMeter::new(hfi_ranges::ADVISORY.start),
            Self::Warning => KilowattsPerMeter::new(hfi_ranges::WARNING.start),
        }
    }

    /// Whether an intensity falls inside this level's band
    pub fn contains(self, hfi: KilowattsPerMeter) -> bool {
        match self {
            Self::Advisory => hfi_ranges::ADVISORY.contains(&*hfi),
            Self::Warning => hfi_ranges::WARNING.contains(&*hfi),
        }
    }

    /// Band a given intensity belongs to, if any
    pub fn for_intensity(hfi: KilowattsPerMeter) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.contains(hfi))
    }

    /// Status a zone is given when this level's criterion is exceeded
    pub const fn status(self) -> AdvisoryStatus {
        match self {
            Self::Advisory => AdvisoryStatus::Advisory,
            Self::Warning => AdvisoryStatus::Warning,
        }
    }
}

impl TryFrom<u8> for ThresholdLevel {
    type Error = AdvisoryError;

    fn try_from(id: u8) -> AdvisoryResult<Self> {
        match id {
            1 => Ok(Self::Advisory),
            2 => Ok(Self::Warning),
            other => Err(AdvisoryError::UnknownThreshold(other)),
        }
    }
}

impl From<ThresholdLevel> for u8 {
    fn from(level: ThresholdLevel) -> u8 {
        level.id()
    }
}

impl fmt::Display for ThresholdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Threshold record as delivered by the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Threshold {
    /// Band id, 1 or 2 on the wire
    pub id: ThresholdLevel,
    /// Band name
    pub name: String,
    /// Band description
    pub description: String,
}

impl Threshold {
    /// Canonical record for a level
    pub fn of(level: ThresholdLevel) -> Self {
        Threshold {
            id: level,
            name: level.name().to_string(),
            description: level.description().to_string(),
        }
    }

    /// The advisory (4,000-9,999 kW/m) threshold
    pub fn advisory() -> Self {
        Self::of(ThresholdLevel::Advisory)
    }

    /// The warning (10,000+ kW/m) threshold
    pub fn warning() -> Self {
        Self::of(ThresholdLevel::Warning)
    }

    /// Band level
    pub fn level(&self) -> ThresholdLevel {
        self.id
    }
}

/// Zone advisory status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AdvisoryStatus {
    /// Fire behaviour advisory
    Advisory,
    /// Fire behaviour warning
    Warning,
}

impl AdvisoryStatus {
    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Advisory => "Advisory",
            Self::Warning => "Warning",
        }
    }

    /// Threshold band the status corresponds to
    pub const fn level(self) -> ThresholdLevel {
        match self {
            Self::Advisory => ThresholdLevel::Advisory,
            Self::Warning => ThresholdLevel::Warning,
        }
    }
}

impl FromStr for AdvisoryStatus {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> AdvisoryResult<Self> {
        if s.eq_ignore_ascii_case("advisory") {
            Ok(Self::Advisory)
        } else if s.eq_ignore_ascii_case("warning") {
            Ok(Self::Warning)
        } else {
            Err(AdvisoryError::UnknownStatus(s.to_string()))
        }
    }
}

impl fmt::Display for AdvisoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
