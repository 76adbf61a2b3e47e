//! Advisory decision rules
//!
//! Data flows one way through these stages:
//! 1. [`area_filter`] drops statistically insignificant fuel types
//! 2. [`critical_hours`] and [`wind_speed`] reduce the survivors to advisory text
//! 3. [`zone_status`] classifies zones for map and table rendering
//!
//! Every function here is pure: no I/O, no shared state, identical output for
//! identical input. Missing or invalid data degrades to `None`/empty results.

pub mod area_filter;
pub mod critical_hours;
pub mod summary;
pub mod text;
pub mod wind_speed;
pub mod zone_status;

pub use area_filter::{
    filter_fire_centres, filter_fire_centres_with, filter_fuel_stats, filter_fuel_stats_with,
    ALWAYS_INCLUDED_FUEL_TYPES, AREA_THRESHOLD,
};
pub use critical_hours::{
    aggregate_windows, format_critical_hours_time_text, format_critical_hours_time_text_with,
    min_start_and_max_end, CriticalHoursSummary, DangerWindow, TimeTextStyle,
};
pub use summary::{fuel_type_rows, FuelTypeRow};
pub use text::AdvisoryText;
pub use wind_speed::{format_wind_speed_text, wind_speed_minimum};
pub use zone_status::{
    derive_zone_status, zone_area_fill, zone_status_colour, zone_status_detail, StatusPalette,
};
