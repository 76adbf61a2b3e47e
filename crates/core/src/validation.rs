//! Data-validity diagnostics
//!
//! The advisory rules tolerate malformed input. These checks report what is
//! wrong with a zone's statistics so callers can log it; they never stop the
//! rules from running.

use crate::core_types::stats::{FireZoneFuelStats, FireZoneHfiStats, MinWindStat};
use crate::core_types::threshold::ThresholdLevel;
use crate::core_types::units::{HourOfDay, KilometersPerHour, SquareMeters};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// One problem found in a zone's statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIssue {
    /// Elevated area larger than the fuel type's total area
    AreaExceedsFuelArea {
        fuel_type: String,
        area: SquareMeters,
        fuel_area: SquareMeters,
    },
    /// Negative or non-finite area
    InvalidArea { fuel_type: String, area: SquareMeters },
    /// Critical-hours bound outside `[0, 24)`
    HourOutOfRange { fuel_type: String, hour: HourOfDay },
    /// Negative or non-finite wind speed sentinel
    InvalidWindSpeed {
        threshold: ThresholdLevel,
        speed: KilometersPerHour,
    },
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIssue::AreaExceedsFuelArea {
                fuel_type,
                area,
                fuel_area,
            } => write!(f, "{fuel_type}: elevated area {area} exceeds fuel area {fuel_area}"),
            DataIssue::InvalidArea { fuel_type, area } => {
                write!(f, "{fuel_type}: invalid area {area}")
            }
            DataIssue::HourOutOfRange { fuel_type, hour } => {
                write!(f, "{fuel_type}: critical hour {} outside [0, 24)", **hour)
            }
            DataIssue::InvalidWindSpeed { threshold, speed } => {
                write!(f, "{threshold}: invalid minimum wind speed {speed}")
            }
        }
    }
}

fn check_fuel_stat(stat: &FireZoneFuelStats, issues: &mut Vec<DataIssue>) {
    let fuel_type = stat.fuel_type.code();
    for area in [stat.area, stat.fuel_area] {
        if !area.is_finite() || *area < 0.0 {
            issues.push(DataIssue::InvalidArea {
                fuel_type: fuel_type.to_string(),
                area,
            });
        }
    }
    if stat.area > stat.fuel_area {
        issues.push(DataIssue::AreaExceedsFuelArea {
            fuel_type: fuel_type.to_string(),
            area: stat.area,
            fuel_area: stat.fuel_area,
        });
    }
    let hours = [stat.critical_hours.start_time, stat.critical_hours.end_time];
    for hour in hours.into_iter().flatten() {
        if !hour.is_valid() {
            issues.push(DataIssue::HourOutOfRange {
                fuel_type: fuel_type.to_string(),
                hour,
            });
        }
    }
}

/// Problems in a list of fuel stats
pub fn validate_fuel_stats(stats: &[FireZoneFuelStats]) -> Vec<DataIssue> {
    let mut issues = Vec::new();
    for stat in stats {
        check_fuel_stat(stat, &mut issues);
    }
    issues
}

/// Problems in a list of wind stats
pub fn validate_min_wind_stats(stats: &[MinWindStat]) -> Vec<DataIssue> {
    stats
        .iter()
        .filter_map(|stat| {
            let speed = stat.min_wind_speed.filter(|speed| !speed.is_valid())?;
            Some(DataIssue::InvalidWindSpeed {
                threshold: stat.threshold.level(),
                speed,
            })
        })
        .collect()
}

/// Problems in a zone bundle, each also logged at `warn`
pub fn validate_zone(zone: &FireZoneHfiStats) -> Vec<DataIssue> {
    let mut issues = validate_fuel_stats(&zone.fuel_area_stats);
    issues.extend(validate_min_wind_stats(&zone.min_wind_stats));
    for issue in &issues {
        warn!(%issue, "Zone statistics failed validation");
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{CriticalHoursWindow, FuelType, Threshold};

    fn stat(area: f64, fuel_area: f64, window: CriticalHoursWindow) -> FireZoneFuelStats {
        FireZoneFuelStats::new(
            FuelType::c2(),
            Threshold::advisory(),
            window,
            SquareMeters::new(area),
            SquareMeters::new(fuel_area),
        )
    }

    #[test]
    fn test_clean_data_has_no_issues() {
        let window = CriticalHoursWindow::new(HourOfDay::new(10.0), HourOfDay::new(18.0));
        assert!(validate_fuel_stats(&[stat(10.0, 20.0, window)]).is_empty());
    }

    #[test]
    fn test_area_exceeding_fuel_area() {
        let issues = validate_fuel_stats(&[stat(30.0, 20.0, CriticalHoursWindow::empty())]);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], DataIssue::AreaExceedsFuelArea { .. }));
        assert_eq!(issues[0].to_string(), "C-2: elevated area 30 m² exceeds fuel area 20 m²");
    }

    #[test]
    fn test_out_of_range_hours_from_json() {
        let window: CriticalHoursWindow =
            serde_json::from_str(r#"{"start_time": 25.0, "end_time": 6.0}"#).unwrap();
        let issues = validate_fuel_stats(&[stat(1.0, 2.0, window)]);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], DataIssue::HourOutOfRange { .. }));
    }

    #[test]
    fn test_negative_area_and_wind() {
        let zone = FireZoneHfiStats {
            fuel_area_stats: vec![stat(-1.0, 20.0, CriticalHoursWindow::empty())],
            min_wind_stats: vec![
                MinWindStat::new(Threshold::advisory(), Some(KilometersPerHour::new(-1.0))),
                MinWindStat::new(Threshold::warning(), None),
            ],
        };
        let issues = validate_zone(&zone);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], DataIssue::InvalidArea { .. }));
        assert!(matches!(
            issues[1],
            DataIssue::InvalidWindSpeed {
                threshold: ThresholdLevel::Advisory,
                ..
            }
        ));
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let issue = DataIssue::InvalidWindSpeed {
            threshold: ThresholdLevel::Warning,
            speed: KilometersPerHour::new(-3.0),
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "invalid_wind_speed");
        assert_eq!(json["threshold"], 2);
    }
}
