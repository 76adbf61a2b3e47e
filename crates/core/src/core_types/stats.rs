//! Per-zone fire-behaviour statistics
//!
//! These are the upstream provider's outputs for one model run: one
//! [`FireZoneFuelStats`] per (fuel type, threshold) within a zone, the
//! minimum triggering wind speed per threshold, and per-threshold area
//! summaries used for status classification.

use crate::core_types::fuel::FuelType;
use crate::core_types::threshold::{AdvisoryStatus, Threshold, ThresholdLevel};
use crate::core_types::units::{HourOfDay, KilometersPerHour, Percent, SquareMeters};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Zone (fire shape) identifier
pub type ZoneId = i64;

/// Zone id → statistics bundle, for one fire centre
pub type ZoneStatsMap = FxHashMap<ZoneId, FireZoneHfiStats>;

/// Fire-centre name → zone id → statistics bundle
pub type FireCentreStats = FxHashMap<String, ZoneStatsMap>;

/// Time-of-day window in which a fuel type exceeds a threshold
///
/// Either bound missing means no critical hours were computed. `end_time <=
/// start_time` is a window crossing midnight; equal bounds are a full day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CriticalHoursWindow {
    #[serde(default)]
    pub start_time: Option<HourOfDay>,
    #[serde(default)]
    pub end_time: Option<HourOfDay>,
}

impl CriticalHoursWindow {
    /// Window with both bounds set
    pub fn new(start_time: HourOfDay, end_time: HourOfDay) -> Self {
        CriticalHoursWindow {
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    /// Window with no critical hours
    pub const fn empty() -> Self {
        CriticalHoursWindow {
            start_time: None,
            end_time: None,
        }
    }

    /// Both bounds, when present
    pub fn bounds(&self) -> Option<(HourOfDay, HourOfDay)> {
        Some((self.start_time?, self.end_time?))
    }
}

/// One fuel type under one threshold within one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireZoneFuelStats {
    pub fuel_type: FuelType,
    pub threshold: Threshold,
    #[serde(default)]
    pub critical_hours: CriticalHoursWindow,
    /// Area of this fuel type under elevated intensity
    pub area: SquareMeters,
    /// Total area of this fuel type in the zone
    pub fuel_area: SquareMeters,
}

impl FireZoneFuelStats {
    /// Create a fuel stat
    pub fn new(
        fuel_type: FuelType,
        threshold: Threshold,
        critical_hours: CriticalHoursWindow,
        area: SquareMeters,
        fuel_area: SquareMeters,
    ) -> Self {
        FireZoneFuelStats {
            fuel_type,
            threshold,
            critical_hours,
            area,
            fuel_area,
        }
    }

    /// Threshold band of this entry
    pub fn level(&self) -> ThresholdLevel {
        self.threshold.level()
    }

    /// Share of this fuel type's area under elevated intensity
    pub fn percent_elevated(&self) -> Percent {
        self.area.percent_of(self.fuel_area)
    }
}

/// Minimum wind speed at which a threshold's intensity criterion is met
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinWindStat {
    pub threshold: Threshold,
    /// Negative values are "not computed" sentinels
    #[serde(default)]
    pub min_wind_speed: Option<KilometersPerHour>,
}

impl MinWindStat {
    /// Create a wind stat
    pub fn new(threshold: Threshold, min_wind_speed: Option<KilometersPerHour>) -> Self {
        MinWindStat {
            threshold,
            min_wind_speed,
        }
    }

    /// The wind speed, if present and not a sentinel
    pub fn valid_speed(&self) -> Option<KilometersPerHour> {
        self.min_wind_speed.filter(|speed| speed.is_valid())
    }
}

/// Complete statistics bundle for one zone
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FireZoneHfiStats {
    #[serde(default)]
    pub fuel_area_stats: Vec<FireZoneFuelStats>,
    #[serde(default)]
    pub min_wind_stats: Vec<MinWindStat>,
}

/// Status classification of one zone, consumed by map styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStatusDetail {
    pub fire_shape_id: ZoneId,
    pub status: AdvisoryStatus,
    pub fire_shape_name: String,
    pub fire_centre_name: String,
}

/// Elevated-intensity area of one zone under one threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAreaSummary {
    pub fire_shape_id: ZoneId,
    pub threshold: ThresholdLevel,
    /// Area that can burn
    pub combustible_area: SquareMeters,
    /// Area meeting the threshold
    pub elevated_hfi_area: SquareMeters,
    /// `elevated_hfi_area / combustible_area` as a percentage
    pub elevated_hfi_percentage: Percent,
}

impl ZoneAreaSummary {
    /// Build a summary, computing the percentage from the two areas
    pub fn from_areas(
        fire_shape_id: ZoneId,
        threshold: ThresholdLevel,
        combustible_area: SquareMeters,
        elevated_hfi_area: SquareMeters,
    ) -> Self {
        ZoneAreaSummary {
            fire_shape_id,
            threshold,
            combustible_area,
            elevated_hfi_area,
            elevated_hfi_percentage: elevated_hfi_area.percent_of(combustible_area),
        }
    }
}
