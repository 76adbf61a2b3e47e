//! Low-prevalence fuel type suppression
//!
//! Intensity statistics are computed on a 2 km raster. A fuel type covering
//! fewer than 100 cells of a zone is too sparse for its statistics to mean
//! much, so it is dropped before any other advisory stage sees it. C-5 and the
//! slash types (S-1, S-2, S-3) are kept regardless of area: they burn
//! intensely even in small patches.

use crate::config::AdvisoryConfig;
use crate::core_types::stats::{FireCentreStats, FireZoneFuelStats, FireZoneHfiStats, ZoneStatsMap};
use crate::core_types::units::SquareMeters;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Area of 100 cells at 2 km resolution (4.0e8 m²)
pub const AREA_THRESHOLD: SquareMeters = SquareMeters::new(100.0 * 2000.0 * 2000.0);

/// Fuel type codes kept regardless of area
pub const ALWAYS_INCLUDED_FUEL_TYPES: [&str; 4] = ["C-5", "S-1", "S-2", "S-3"];

/// Whether a stat survives the default filter
pub fn is_significant(stat: &FireZoneFuelStats) -> bool {
    stat.fuel_area > AREA_THRESHOLD || ALWAYS_INCLUDED_FUEL_TYPES.contains(&stat.fuel_type.code())
}

/// Whether a stat survives the filter under `config`
pub fn is_significant_with(stat: &FireZoneFuelStats, config: &AdvisoryConfig) -> bool {
    stat.fuel_area > config.area_threshold || config.is_always_included(stat.fuel_type.code())
}

/// Filter one zone's fuel stats with the default thresholds
pub fn filter_fuel_stats(stats: &[FireZoneFuelStats]) -> Vec<FireZoneFuelStats> {
    stats.iter().filter(|s| is_significant(s)).cloned().collect()
}

/// Filter one zone's fuel stats under `config`
pub fn filter_fuel_stats_with(
    stats: &[FireZoneFuelStats],
    config: &AdvisoryConfig,
) -> Vec<FireZoneFuelStats> {
    stats
        .iter()
        .filter(|stat| {
            let keep = is_significant_with(stat, config);
            if !keep {
                trace!(
                    fuel_type = stat.fuel_type.code(),
                    fuel_area = *stat.fuel_area,
                    "Dropping low-prevalence fuel type"
                );
            }
            keep
        })
        .cloned()
        .collect()
}

/// Filter a zone bundle; wind stats pass through unchanged
pub fn filter_zone_with(zone: &FireZoneHfiStats, config: &AdvisoryConfig) -> FireZoneHfiStats {
    FireZoneHfiStats {
        fuel_area_stats: filter_fuel_stats_with(&zone.fuel_area_stats, config),
        min_wind_stats: zone.min_wind_stats.clone(),
    }
}

/// Filter every zone of every fire centre with the default thresholds
pub fn filter_fire_centres(centres: &FireCentreStats) -> FireCentreStats {
    filter_fire_centres_with(centres, &AdvisoryConfig::default())
}

/// Filter every zone of every fire centre under `config`
///
/// Fire centres are processed in parallel; the result has the same keys as the input.
pub fn filter_fire_centres_with(
    centres: &FireCentreStats,
    config: &AdvisoryConfig,
) -> FireCentreStats {
    centres
        .par_iter()
        .map(|(centre, zones)| {
            let filtered: ZoneStatsMap = zones
                .iter()
                .map(|(zone_id, zone)| {
                    let kept = filter_zone_with(zone, config);
                    debug!(
                        fire_centre = %centre,
                        zone_id,
                        kept = kept.fuel_area_stats.len(),
                        total = zone.fuel_area_stats.len(),
                        "Filtered zone fuel stats"
                    );
                    (*zone_id, kept)
                })
                .collect();
            (centre.clone(), filtered)
        })
        .collect()
}
