//! Batch zone reports
//!
//! Runs the full advisory pipeline (filter, aggregate, classify) for every
//! zone of every fire centre. Zones are independent, so they are evaluated in
//! parallel; the output is sorted so it serialises identically across runs.

use crate::advisory::area_filter::filter_zone_with;
use crate::advisory::critical_hours::{
    format_critical_hours_time_text_with, min_start_and_max_end, CriticalHoursSummary,
    TimeTextStyle,
};
use crate::advisory::summary::{fuel_type_rows_with, FuelTypeRow};
use crate::advisory::wind_speed::{format_wind_speed_text, wind_speed_minimum};
use crate::advisory::zone_status::derive_zone_status;
use crate::config::AdvisoryConfig;
use crate::core_types::colour::Rgba;
use crate::core_types::stats::{FireCentreStats, FireZoneHfiStats, ZoneAreaSummary, ZoneId};
use crate::core_types::threshold::AdvisoryStatus;
use crate::core_types::units::KilometersPerHour;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Zone id → per-threshold area summaries
pub type ZoneAreaSummaries = FxHashMap<ZoneId, Vec<ZoneAreaSummary>>;

/// Group a flat summary list, as served upstream, by zone
pub fn group_area_summaries<I>(summaries: I) -> ZoneAreaSummaries
where
    I: IntoIterator<Item = ZoneAreaSummary>,
{
    let mut grouped = ZoneAreaSummaries::default();
    for summary in summaries {
        grouped.entry(summary.fire_shape_id).or_default().push(summary);
    }
    grouped
}

/// Advisory outcome for one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneReport {
    pub fire_centre_name: String,
    pub zone_id: ZoneId,
    pub status: Option<AdvisoryStatus>,
    /// Polygon fill, absent for unflagged zones
    pub fill: Option<Rgba>,
    pub critical_hours: Option<CriticalHoursSummary>,
    /// Long `[start, end]` text
    pub critical_hours_text: Option<[String; 2]>,
    pub min_wind_speed: Option<KilometersPerHour>,
    pub wind_speed_text: Option<String>,
    pub fuel_types: Vec<FuelTypeRow>,
}

/// Report for one zone
pub fn build_zone_report(
    fire_centre_name: &str,
    zone_id: ZoneId,
    zone: &FireZoneHfiStats,
    summaries: &[ZoneAreaSummary],
    config: &AdvisoryConfig,
) -> ZoneReport {
    let zone = filter_zone_with(zone, config);
    let status = derive_zone_status(summaries, config.advisory_threshold);
    let critical_hours = min_start_and_max_end(&zone.fuel_area_stats);

    ZoneReport {
        fire_centre_name: fire_centre_name.to_string(),
        zone_id,
        status,
        fill: status.map(|s| config.palette.fill(s)),
        critical_hours,
        critical_hours_text: critical_hours.map(|h| {
            format_critical_hours_time_text_with(
                h.min_start_time,
                h.max_end_time,
                TimeTextStyle::Long,
                config.next_day_cutoff,
            )
        }),
        min_wind_speed: wind_speed_minimum(&zone.min_wind_stats),
        wind_speed_text: format_wind_speed_text(&zone.min_wind_stats),
        fuel_types: fuel_type_rows_with(&zone.fuel_area_stats, config.next_day_cutoff),
    }
}

/// Reports for every zone, sorted by fire centre then zone id
///
/// Zones without area summaries get no status.
pub fn build_zone_reports(
    centres: &FireCentreStats,
    summaries: &ZoneAreaSummaries,
    config: &AdvisoryConfig,
) -> Vec<ZoneReport> {
    let zones: Vec<(&str, ZoneId, &FireZoneHfiStats)> = centres
        .iter()
        .flat_map(|(centre, zones)| {
            zones
                .iter()
                .map(move |(zone_id, zone)| (centre.as_str(), *zone_id, zone))
        })
        .collect();

    let mut reports: Vec<ZoneReport> = zones
        .par_iter()
        .map(|(centre, zone_id, zone)| {
            let zone_summaries = summaries.get(zone_id).map_or(&[][..], Vec::as_slice);
            build_zone_report(centre, *zone_id, zone, zone_summaries, config)
        })
        .collect();

    reports.sort_by(|a, b| {
        a.fire_centre_name
            .cmp(&b.fire_centre_name)
            .then(a.zone_id.cmp(&b.zone_id))
    });

    let flagged = reports.iter().filter(|r| r.status.is_some()).count();
    info!(zones = reports.len(), flagged, "Built zone reports");
    reports
}
