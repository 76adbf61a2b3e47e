//! Per-fuel-type table rows
//!
//! The zone summary table lists one row per fuel type, merging that fuel
//! type's advisory and warning entries.

use crate::advisory::critical_hours::{
    format_critical_hours_time_text_with, min_start_and_max_end, CriticalHoursSummary,
    TimeTextStyle, NEXT_DAY_CUTOFF,
};
use crate::core_types::stats::FireZoneFuelStats;
use crate::core_types::units::{HourOfDay, Percent, SquareMeters};
use serde::{Deserialize, Serialize};

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelTypeRow {
    pub code: String,
    pub description: String,
    /// Elevated area of this fuel type, summed over thresholds
    pub area: SquareMeters,
    /// Share of the zone's total elevated area
    pub percent_of_zone: Percent,
    pub critical_hours: Option<CriticalHoursSummary>,
    /// Short `[start, end]` text, absent without critical hours
    pub critical_hours_text: Option<[String; 2]>,
}

/// Rows for one zone with the default next-day cutoff
pub fn fuel_type_rows(stats: &[FireZoneFuelStats]) -> Vec<FuelTypeRow> {
    fuel_type_rows_with(stats, NEXT_DAY_CUTOFF)
}

/// Rows for one zone, largest elevated area first (ties by code)
pub fn fuel_type_rows_with(
    stats: &[FireZoneFuelStats],
    next_day_cutoff: HourOfDay,
) -> Vec<FuelTypeRow> {
    let mut groups: Vec<(&str, Vec<FireZoneFuelStats>)> = Vec::new();
    for stat in stats {
        let code = stat.fuel_type.code();
        if let Some((_, members)) = groups.iter_mut().find(|(c, _)| *c == code) {
            members.push(stat.clone());
        } else {
            groups.push((code, vec![stat.clone()]));
        }
    }

    let zone_area: SquareMeters = stats.iter().map(|s| s.area).sum();

    let mut rows: Vec<FuelTypeRow> = groups
        .into_iter()
        .map(|(code, members)| {
            let area: SquareMeters = members.iter().map(|s| s.area).sum();
            let critical_hours = min_start_and_max_end(&members);
            let critical_hours_text = critical_hours.map(|h| {
                format_critical_hours_time_text_with(
                    h.min_start_time,
                    h.max_end_time,
                    TimeTextStyle::Short,
                    next_day_cutoff,
                )
            });
            FuelTypeRow {
                code: code.to_string(),
                description: members[0].fuel_type.description.clone(),
                area,
                percent_of_zone: area.percent_of(zone_area),
                critical_hours,
                critical_hours_text,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.area.cmp(&a.area).then_with(|| a.code.cmp(&b.code)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{CriticalHoursWindow, FuelType, Threshold};
    use approx::assert_relative_eq;

    fn stat(
        fuel_type: FuelType,
        threshold: Threshold,
        hours: (f64, f64),
        area: f64,
    ) -> FireZoneFuelStats {
        FireZoneFuelStats::new(
            fuel_type,
            threshold,
            CriticalHoursWindow::new(HourOfDay::new(hours.0), HourOfDay::new(hours.1)),
            SquareMeters::new(area),
            SquareMeters::new(area * 4.0),
        )
    }

    #[test]
    fn test_groups_by_fuel_type_and_sorts_by_area() {
        let stats = [
            stat(FuelType::c2(), Threshold::advisory(), (12.0, 18.0), 10.0),
            stat(FuelType::c5(), Threshold::advisory(), (11.0, 17.0), 20.0),
            stat(FuelType::c2(), Threshold::warning(), (14.0, 2.0), 20.0),
        ];
        let rows = fuel_type_rows(&stats);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].code, "C-2");
        assert_eq!(*rows[0].area, 30.0);
        assert_relative_eq!(*rows[0].percent_of_zone, 60.0);
        assert_eq!(
            rows[0].critical_hours_text,
            Some(["12".to_string(), "2 (+1 day)".to_string()])
        );

        assert_eq!(rows[1].code, "C-5");
        assert_eq!(rows[1].description, "Red and White Pine");
        assert_relative_eq!(*rows[1].percent_of_zone, 40.0);
    }

    #[test]
    fn test_equal_areas_sorted_by_code() {
        let stats = [
            stat(FuelType::s1(), Threshold::advisory(), (12.0, 18.0), 5.0),
            stat(FuelType::c7(), Threshold::advisory(), (12.0, 18.0), 5.0),
        ];
        let codes: Vec<String> = fuel_type_rows(&stats).into_iter().map(|r| r.code).collect();
        assert_eq!(codes, ["C-7", "S-1"]);
    }

    #[test]
    fn test_row_without_critical_hours() {
        let mut entry = stat(FuelType::c3(), Threshold::advisory(), (12.0, 18.0), 5.0);
        entry.critical_hours = CriticalHoursWindow::empty();
        let rows = fuel_type_rows(&[entry]);
        assert_eq!(rows[0].critical_hours, None);
        assert_eq!(rows[0].critical_hours_text, None);
    }

    #[test]
    fn test_empty_zone() {
        assert!(fuel_type_rows(&[]).is_empty());
    }
}
