//! Minimum triggering wind speed
//!
//! Upstream reports, per threshold, the lowest wind speed at which a zone
//! reaches that threshold's intensity. The advisory quotes the lowest of them.
//! Negative values are "not computed" sentinels, never minima.

use crate::core_types::stats::MinWindStat;
use crate::core_types::units::KilometersPerHour;
use tracing::warn;

/// Smallest valid wind speed across thresholds
///
/// Entries with no speed or a negative speed are skipped; zero is a valid minimum.
/// Returns `None` when nothing valid remains, including for an empty list.
pub fn wind_speed_minimum(stats: &[MinWindStat]) -> Option<KilometersPerHour> {
    stats
        .iter()
        .filter_map(|stat| {
            let valid = stat.valid_speed();
            if valid.is_none() {
                if let Some(speed) = stat.min_wind_speed {
                    warn!(
                        threshold = %stat.threshold.level(),
                        speed = *speed,
                        "Ignoring invalid minimum wind speed"
                    );
                }
            }
            valid
        })
        .min()
}

/// Advisory wording for the minimum wind speed
///
/// `None` when there is no valid minimum; callers must then omit wind text entirely.
pub fn format_wind_speed_text(stats: &[MinWindStat]) -> Option<String> {
    wind_speed_minimum(stats).map(|speed| format!("if winds exceed {} km/h", *speed))
}
