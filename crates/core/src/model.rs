//! Upstream fire-behaviour model contract
//!
//! The Fire Weather Index moisture codes and the FBP System rate-of-spread
//! equations live upstream. All the advisory layer needs from them is head
//! fire intensity for a fuel type at a given hour and wind speed; from that,
//! the two per-zone inputs it consumes can be derived:
//! - critical hours: the longest run of hours (wrapping past midnight) in
//!   which intensity meets a threshold
//! - minimum wind speed: the lowest whole km/h wind at which it does
//!
//! # Scientific References
//! - Van Wagner, C.E. (1987). "Development and Structure of the Canadian Forest
//!   Fire Weather Index System." Forestry Technical Report 35.
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3.
//! - Byram, G.M. (1959). "Combustion of forest fuels." Forest Fires: Control and Use.

use crate::core_types::fuel::FuelType;
use crate::core_types::stats::CriticalHoursWindow;
use crate::core_types::threshold::ThresholdLevel;
use crate::core_types::units::{HourOfDay, KilometersPerHour, KilowattsPerMeter};
use tracing::debug;

/// Hourly values for one day, index = hour
pub type HourlySeries<T> = [T; 24];

/// Head fire intensity provider
pub trait FireBehaviourModel {
    /// Head fire intensity of `fuel_type` at `hour` under `wind_speed`
    fn head_fire_intensity(
        &self,
        fuel_type: &FuelType,
        hour: HourOfDay,
        wind_speed: KilometersPerHour,
    ) -> KilowattsPerMeter;

    /// Critical hours of `fuel_type` for `level` under an hourly wind forecast
    fn critical_hours(
        &self,
        fuel_type: &FuelType,
        hourly_wind: &HourlySeries<KilometersPerHour>,
        level: ThresholdLevel,
    ) -> CriticalHoursWindow {
        let mut hourly_hfi = [KilowattsPerMeter::default(); 24];
        for (hour, (hfi, wind)) in (0u8..).zip(hourly_hfi.iter_mut().zip(hourly_wind)) {
            *hfi = self.head_fire_intensity(fuel_type, HourOfDay::new(f64::from(hour)), *wind);
        }
        critical_hours_from_series(&hourly_hfi, level)
    }

    /// Lowest whole wind speed in `0..=max_wind` at which `level` is met at `hour`
    fn min_wind_speed(
        &self,
        fuel_type: &FuelType,
        hour: HourOfDay,
        level: ThresholdLevel,
        max_wind: KilometersPerHour,
    ) -> Option<KilometersPerHour> {
        if !max_wind.is_valid() {
            return None;
        }
        let bound = level.lower_bound();
        let found = (0..=max_wind.floor() as u32)
            .map(|speed| KilometersPerHour::new(f64::from(speed)))
            .find(|speed| self.head_fire_intensity(fuel_type, hour, *speed).meets(bound));
        debug!(
            fuel_type = fuel_type.code(),
            level = %level,
            found = ?found.map(|s| *s),
            "Scanned minimum wind speed"
        );
        found
    }
}

impl<F> FireBehaviourModel for F
where
    F: Fn(&FuelType, HourOfDay, KilometersPerHour) -> KilowattsPerMeter,
{
    fn head_fire_intensity(
        &self,
        fuel_type: &FuelType,
        hour: HourOfDay,
        wind_speed: KilometersPerHour,
    ) -> KilowattsPerMeter {
        self(fuel_type, hour, wind_speed)
    }
}

/// Critical hours from a day of hourly intensities
///
/// Picks the longest run of hours meeting the level's lower bound, treating
/// hour 23 as adjacent to hour 0; ties go to the earliest start. The end is
/// exclusive (the hour after the last qualifying one), so a run through 23:00
/// ends at 0 and a run covering every hour has `start == end`. No qualifying
/// hour gives an empty window. Hours with a NaN intensity never qualify.
pub fn critical_hours_from_series(
    hourly_hfi: &HourlySeries<KilowattsPerMeter>,
    level: ThresholdLevel,
) -> CriticalHoursWindow {
    let bound = level.lower_bound();
    let meets: [bool; 24] = hourly_hfi.map(|hfi| hfi.meets(bound));

    if meets.iter().all(|m| *m) {
        return CriticalHoursWindow::new(HourOfDay::MIDNIGHT, HourOfDay::MIDNIGHT);
    }

    let mut best: Option<(usize, usize)> = None;
    for start in 0..24 {
        let previous = (start + 23) % 24;
        if !meets[start] || meets[previous] {
            continue;
        }
        let length = (0..24).take_while(|offset| meets[(start + offset) % 24]).count();
        if let Some((_, best_len)) = best {
            if length <= best_len {
                continue;
            }
        }
        best = Some((start, length));
    }

    let Some((start, length)) = best else {
        return CriticalHoursWindow::empty();
    };
    CriticalHoursWindow::new(
        HourOfDay::new(start as f64),
        HourOfDay::new(((start + length) % 24) as f64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(qualifying: impl Fn(usize) -> bool) -> HourlySeries<KilowattsPerMeter> {
        std::array::from_fn(|h| KilowattsPerMeter::new(if qualifying(h) { 5000.0 } else { 100.0 }))
    }

    fn bounds(window: CriticalHoursWindow) -> Option<(f64, f64)> {
        window.bounds().map(|(s, e)| (*s, *e))
    }

    #[test]
    fn test_afternoon_run() {
        let afternoon = series(|h| (13..18).contains(&h));
        let window = critical_hours_from_series(&afternoon, ThresholdLevel::Advisory);
        assert_eq!(bounds(window), Some((13.0, 18.0)));
    }

    #[test]
    fn test_run_through_midnight() {
        let window =
            critical_hours_from_series(&series(|h| h >= 20 || h < 4), ThresholdLevel::Advisory);
        assert_eq!(bounds(window), Some((20.0, 4.0)));
    }

    #[test]
    fn test_full_day_and_no_hours() {
        let all = critical_hours_from_series(&series(|_| true), ThresholdLevel::Advisory);
        assert_eq!(bounds(all), Some((0.0, 0.0)));
        let none = critical_hours_from_series(&series(|_| false), ThresholdLevel::Advisory);
        assert_eq!(none, CriticalHoursWindow::empty());
    }

    #[test]
    fn test_longest_run_wins_ties_earliest() {
        let window = critical_hours_from_series(
            &series(|h| (2..4).contains(&h) || (10..14).contains(&h) || (16..20).contains(&h)),
            ThresholdLevel::Advisory,
        );
        assert_eq!(bounds(window), Some((10.0, 14.0)));
    }

    #[test]
    fn test_warning_needs_higher_intensity() {
        let window = critical_hours_from_series(&series(|h| h == 12), ThresholdLevel::Warning);
        assert_eq!(window, CriticalHoursWindow::empty());
    }

    #[test]
    fn test_nan_intensity_never_qualifies() {
        let mut hourly = [KilowattsPerMeter::new(100.0); 24];
        hourly[12] = KilowattsPerMeter::new(f64::NAN);
        assert_eq!(
            critical_hours_from_series(&hourly, ThresholdLevel::Warning),
            CriticalHoursWindow::empty()
        );

        hourly[13] = KilowattsPerMeter::new(12000.0);
        let window = critical_hours_from_series(&hourly, ThresholdLevel::Warning);
        assert_eq!(bounds(window), Some((13.0, 14.0)));
    }

    #[test]
    fn test_unknown_intensity_has_no_min_wind_speed() {
        let model = |_: &FuelType, _: HourOfDay, wind: KilometersPerHour| {
            if *wind < 5.0 {
                KilowattsPerMeter::new(f64::NAN)
            } else {
                KilowattsPerMeter::new(*wind * 1000.0)
            }
        };
        let found = model.min_wind_speed(
            &FuelType::c2(),
            HourOfDay::NOON,
            ThresholdLevel::Advisory,
            KilometersPerHour::new(30.0),
        );
        assert_eq!(found, Some(KilometersPerHour::new(5.0)));
    }

    #[test]
    fn test_closure_model_drives_derivations() {
        // Intensity grows with wind, only in the afternoon.
        let model = |_: &FuelType, hour: HourOfDay, wind: KilometersPerHour| {
            let diurnal = if (12.0..19.0).contains(&*hour) { 1.0 } else { 0.1 };
            KilowattsPerMeter::new(*wind * 500.0 * diurnal)
        };
        let fuel = FuelType::c3();

        let wind = [KilometersPerHour::new(10.0); 24];
        let window = model.critical_hours(&fuel, &wind, ThresholdLevel::Advisory);
        assert_eq!(bounds(window), Some((12.0, 19.0)));

        let min_wind = |level, max_wind| {
            model.min_wind_speed(&fuel, HourOfDay::NOON, level, KilometersPerHour::new(max_wind))
        };
        assert_eq!(
            min_wind(ThresholdLevel::Advisory, 60.0),
            Some(KilometersPerHour::new(8.0))
        );
        assert_eq!(
            min_wind(ThresholdLevel::Warning, 60.0),
            Some(KilometersPerHour::new(20.0))
        );
        assert_eq!(min_wind(ThresholdLevel::Warning, 15.0), None);
    }
}
