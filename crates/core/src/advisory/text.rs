//! Human-facing advisory message
//!
//! Combines the zone status, the fuel types involved, the aggregated critical
//! hours and the minimum wind speed into the message shown alongside the map.

use crate::advisory::critical_hours::{
    format_critical_hours_time_text_with, min_start_and_max_end, TimeTextStyle, NEXT_DAY_CUTOFF,
};
use crate::advisory::wind_speed::format_wind_speed_text;
use crate::core_types::stats::{FireZoneFuelStats, FireZoneHfiStats, MinWindStat};
use crate::core_types::threshold::AdvisoryStatus;
use crate::core_types::units::HourOfDay;

/// Builder for a zone's advisory message
#[derive(Debug, Clone)]
pub struct AdvisoryText<'a> {
    zone_name: &'a str,
    fire_centre_name: Option<&'a str>,
    status: Option<AdvisoryStatus>,
    fuel_stats: &'a [FireZoneFuelStats],
    min_wind_stats: &'a [MinWindStat],
    next_day_cutoff: HourOfDay,
}

impl<'a> AdvisoryText<'a> {
    /// Message for a zone; `zone` should already have passed the area filter
    pub fn new(
        zone_name: &'a str,
        status: Option<AdvisoryStatus>,
        zone: &'a FireZoneHfiStats,
    ) -> Self {
        AdvisoryText {
            zone_name,
            fire_centre_name: None,
            status,
            fuel_stats: &zone.fuel_area_stats,
            min_wind_stats: &zone.min_wind_stats,
            next_day_cutoff: NEXT_DAY_CUTOFF,
        }
    }

    /// Name the fire centre after the zone
    pub fn with_fire_centre(mut self, fire_centre_name: &'a str) -> Self {
        self.fire_centre_name = Some(fire_centre_name);
        self
    }

    /// Override the hour before which end times read as "tomorrow"
    pub fn with_next_day_cutoff(mut self, cutoff: HourOfDay) -> Self {
        self.next_day_cutoff = cutoff;
        self
    }

    fn location(&self) -> String {
        if let Some(centre) = self.fire_centre_name {
            format!("{} ({centre})", self.zone_name)
        } else {
            self.zone_name.to_string()
        }
    }

    /// Fuel type codes in first-seen order, without repeats
    fn fuel_codes(&self) -> Vec<&'a str> {
        let mut codes: Vec<&'a str> = Vec::new();
        for stat in self.fuel_stats {
            let code = stat.fuel_type.code();
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        codes
    }

    fn critical_hours_sentence(&self, codes: &[&str]) -> String {
        let fuels = join_with_and(codes);
        let fuel_phrase = match codes.len() {
            0 => String::new(),
            1 => format!(" in {fuels} fuel type"),
            _ => format!(" in {fuels} fuel types"),
        };
        let wind = format_wind_speed_text(self.min_wind_stats)
            .map(|text| format!(" {text}"))
            .unwrap_or_default();

        let Some(hours) = min_start_and_max_end(self.fuel_stats) else {
            return format!(
                "Expect high intensity fire{fuel_phrase}{wind}. \
                 No critical hours are available for this zone."
            );
        };
        let [start, end] = format_critical_hours_time_text_with(
            hours.min_start_time,
            hours.max_end_time,
            TimeTextStyle::Long,
            self.next_day_cutoff,
        );
        let mut sentence = format!(
            "Expect high intensity fire{fuel_phrase} during critical hours \
             from {start} to {end}{wind}."
        );
        if hours.min_start_time < HourOfDay::NOON {
            sentence.push_str(" Be prepared for fire behaviour to increase early in the day.");
        }
        sentence
    }

    /// Render the message
    pub fn render(&self) -> String {
        let Some(status) = self.status else {
            return format!(
                "No fire behaviour advisories are in effect for {}.",
                self.location()
            );
        };
        let headline = format!(
            "There is a fire behaviour {} in effect for {}.",
            status.label().to_lowercase(),
            self.location()
        );
        let body = self.critical_hours_sentence(&self.fuel_codes());
        format!("{headline}\n\n{body}")
    }
}

/// "a", "a and b", "a, b and c"
fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{KilometersPerHour, SquareMeters};
    use crate::core_types::{CriticalHoursWindow, FuelType, Threshold};

    fn stat(fuel_type: FuelType, start: Option<f64>, end: Option<f64>) -> FireZoneFuelStats {
        FireZoneFuelStats::new(
            fuel_type,
            Threshold::advisory(),
            CriticalHoursWindow {
                start_time: start.map(HourOfDay::new),
                end_time: end.map(HourOfDay::new),
            },
            SquareMeters::new(1.0e8),
            SquareMeters::new(5.0e8),
        )
    }

    #[test]
    fn test_join_with_and() {
        assert_eq!(join_with_and(&[]), "");
        assert_eq!(join_with_and(&["C-5"]), "C-5");
        assert_eq!(join_with_and(&["C-5", "S-1"]), "C-5 and S-1");
        assert_eq!(join_with_and(&["C-2", "C-5", "S-1"]), "C-2, C-5 and S-1");
    }

    #[test]
    fn test_no_status() {
        let zone = FireZoneHfiStats::default();
        let text = AdvisoryText::new("K2 Zone", None, &zone).render();
        assert_eq!(text, "No fire behaviour advisories are in effect for K2 Zone.");
    }

    #[test]
    fn test_full_advisory_message() {
        let zone = FireZoneHfiStats {
            fuel_area_stats: vec![
                stat(FuelType::c5(), Some(13.0), Some(20.0)),
                stat(FuelType::s1(), Some(14.0), Some(18.0)),
                stat(FuelType::c5(), Some(15.0), Some(19.0)),
            ],
            min_wind_stats: vec![MinWindStat::new(
                Threshold::advisory(),
                Some(KilometersPerHour::new(12.0)),
            )],
        };
        let text = AdvisoryText::new("K2 Zone", Some(AdvisoryStatus::Advisory), &zone)
            .with_fire_centre("Kamloops Fire Centre")
            .render();
        assert_eq!(
            text,
            "There is a fire behaviour advisory in effect for K2 Zone (Kamloops Fire Centre).\n\n\
             Expect high intensity fire in C-5 and S-1 fuel types during critical hours \
             from 13:00 to 20:00 if winds exceed 12 km/h."
        );
    }

    #[test]
    fn test_overnight_early_start_warning() {
        let zone = FireZoneHfiStats {
            fuel_area_stats: vec![stat(FuelType::c2(), Some(10.0), Some(6.0))],
            min_wind_stats: vec![],
        };
        let text = AdvisoryText::new("K2 Zone", Some(AdvisoryStatus::Warning), &zone).render();
        assert_eq!(
            text,
            "There is a fire behaviour warning in effect for K2 Zone.\n\n\
             Expect high intensity fire in C-2 fuel type during critical hours \
             from 10:00 to 06:00 tomorrow. \
             Be prepared for fire behaviour to increase early in the day."
        );
    }

    #[test]
    fn test_missing_critical_hours() {
        let zone = FireZoneHfiStats {
            fuel_area_stats: vec![stat(FuelType::c3(), None, None)],
            min_wind_stats: vec![MinWindStat::new(
                Threshold::warning(),
                Some(KilometersPerHour::new(-1.0)),
            )],
        };
        let text = AdvisoryText::new("K2 Zone", Some(AdvisoryStatus::Advisory), &zone).render();
        assert!(text.ends_with(
            "Expect high intensity fire in C-3 fuel type. \
             No critical hours are available for this zone."
        ));
        assert!(!text.contains("winds exceed"));
    }
}
