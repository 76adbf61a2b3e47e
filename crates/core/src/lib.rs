//! Fire Behaviour Advisory Core Library
//!
//! Turns per-fuel-type head fire intensity statistics, produced by a Canadian
//! Fire Weather Index / Fire Behaviour Prediction model run, into zone-level
//! advisory decisions:
//! - low-prevalence fuel type suppression
//! - a single critical-hours window per zone, wrapping past midnight
//! - the minimum wind speed that triggers an advisory or warning
//! - advisory/warning status and map colours per zone
//!
//! ## Example
//!
//! ```
//! use fire_advisory_core::advisory::{min_start_and_max_end, wind_speed_minimum};
//! use fire_advisory_core::core_types::{
//!     CriticalHoursWindow, FireZoneFuelStats, FuelType, HourOfDay, KilometersPerHour,
//!     MinWindStat, SquareMeters, Threshold,
//! };
//!
//! let stats = vec![FireZoneFuelStats::new(
//!     FuelType::c5(),
//!     Threshold::advisory(),
//!     CriticalHoursWindow::new(HourOfDay::new(22.0), HourOfDay::new(6.0)),
//!     SquareMeters::new(1.0e6),
//!     SquareMeters::new(5.0e6),
//! )];
//! let hours = min_start_and_max_end(&stats).unwrap();
//! assert_eq!(*hours.duration, 8.0);
//!
//! let wind = [MinWindStat::new(Threshold::warning(), Some(KilometersPerHour::new(14.0)))];
//! assert_eq!(wind_speed_minimum(&wind), Some(KilometersPerHour::new(14.0)));
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Advisory decision rules
pub mod advisory;
pub mod config;

// Upstream contract, batch reporting and diagnostics
pub mod model;
pub mod report;
pub mod validation;

// Re-export core types
pub use core_types::{
    AdvisoryStatus, CriticalHoursWindow, FireCentreStats, FireZoneFuelStats, FireZoneHfiStats,
    FuelType, MinWindStat, Rgba, RunParameters, RunType, Threshold, ThresholdLevel,
    ZoneAreaSummary, ZoneId, ZoneStatusDetail,
};
pub use error::{AdvisoryError, AdvisoryResult};

// Re-export advisory operations
pub use advisory::{
    derive_zone_status, filter_fire_centres, format_critical_hours_time_text,
    format_wind_speed_text, min_start_and_max_end, wind_speed_minimum, zone_area_fill,
    zone_status_colour, AdvisoryText, CriticalHoursSummary, StatusPalette, TimeTextStyle,
};
pub use config::AdvisoryConfig;
pub use model::FireBehaviourModel;
pub use report::{build_zone_reports, group_area_summaries, ZoneAreaSummaries, ZoneReport};
pub use validation::{validate_zone, DataIssue};
