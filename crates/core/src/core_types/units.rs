//! Semantic unit types for advisory quantities
//!
//! Newtype wrappers keep hours-of-day, durations, areas, wind speeds and
//! intensities from being mixed up as bare `f64`s.
//!
//! # Design Philosophy
//! - All quantities are f64 (areas reach 1e9 m² and hours need exact comparisons)
//! - Total ordering via `total_cmp` so values can be used with `min`/`max`
//! - `Deref` to the raw value for arithmetic in the advisory rules
//! - Serialised as bare numbers so JSON stays wire-compatible with the upstream API
//!
//! # Usage
//! ```
//! use fire_advisory_core::core_types::units::{HourOfDay, Hours};
//!
//! let start = HourOfDay::new(22.0);
//! let end = HourOfDay::new(6.0);
//! assert_eq!(start.hours_until(end), Hours::new(8.0));
//! ```

use crate::error::{AdvisoryError, AdvisoryResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Sub};

/// Hours in one day
pub const HOURS_PER_DAY: f64 = 24.0;

#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Implements `Eq`/`Ord` via `total_cmp` and `Deref<Target = f64>`.
macro_rules! total_order_f64 {
    ($name:ident) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                f64_total_cmp(self.0, other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }
    };
}

// ============================================================================
// TIME TYPES
// ============================================================================

/// Hour of the day in `[0, 24)`
///
/// Fractional values are allowed (e.g. 13.5 is half past one in the afternoon).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct HourOfDay(f64);

total_order_f64!(HourOfDay);

impl HourOfDay {
    /// Midnight
    pub const MIDNIGHT: HourOfDay = HourOfDay(0.0);

    /// Noon
    pub const NOON: HourOfDay = HourOfDay(12.0);

    /// Create a new hour of day. Asserts value is in `[0, 24)`.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "HourOfDay::new: value is before midnight");
        assert!(value < HOURS_PER_DAY, "HourOfDay::new: value must be below 24");
        HourOfDay(value)
    }

    /// Create an hour of day, rejecting values outside `[0, 24)`.
    ///
    /// # Errors
    /// Returns [`AdvisoryError::HourOutOfRange`] for non-finite values or values outside `[0, 24)`.
    pub fn try_new(value: f64) -> AdvisoryResult<Self> {
        if value.is_finite() && (0.0..HOURS_PER_DAY).contains(&value) {
            Ok(HourOfDay(value))
        } else {
            Err(AdvisoryError::HourOutOfRange(value))
        }
    }

    /// Wrap any finite hour count onto the clock (e.g. 25 → 1, -1 → 23).
    #[must_use]
    pub fn wrapping(value: f64) -> Self {
        HourOfDay(value.rem_euclid(HOURS_PER_DAY))
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the value lies on the clock face. Deserialised values skip the constructor check.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && (0.0..HOURS_PER_DAY).contains(&self.0)
    }

    /// Clock hours from `self` forward to `end`, crossing midnight when `end <= self`.
    ///
    /// Equal hours count as a full day.
    #[must_use]
    pub fn hours_until(self, end: HourOfDay) -> Hours {
        if end.0 <= self.0 {
            Hours(HOURS_PER_DAY - self.0 + end.0)
        } else {
            Hours(end.0 - self.0)
        }
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0.floor() as u32)
    }
}

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Hours(f64);

total_order_f64!(Hours);

impl Hours {
    /// One full day
    pub const FULL_DAY: Hours = Hours(HOURS_PER_DAY);

    /// Create a new duration. Asserts value is non-negative.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Hours::new: negative duration is invalid");
        Hours(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} h", self.0)
    }
}

// ============================================================================
// AREA TYPES
// ============================================================================

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SquareMeters(f64);

total_order_f64!(SquareMeters);

impl SquareMeters {
    /// No area
    pub const ZERO: SquareMeters = SquareMeters(0.0);

    /// Create a new area
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        SquareMeters(value)
    }

    /// Area of `count` square raster cells with the given side length in metres
    #[must_use]
    pub fn from_pixels(count: u32, side_m: f64) -> Self {
        SquareMeters(f64::from(count) * side_m * side_m)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Share of `whole` covered by `self`, 0 when `whole` is empty
    #[must_use]
    pub fn percent_of(self, whole: SquareMeters) -> Percent {
        if whole.0 > 0.0 {
            Percent(self.0 / whole.0 * 100.0)
        } else {
            Percent(0.0)
        }
    }
}

impl Add for SquareMeters {
    type Output = SquareMeters;
    fn add(self, rhs: SquareMeters) -> SquareMeters {
        SquareMeters(self.0 + rhs.0)
    }
}

impl Sub for SquareMeters {
    type Output = SquareMeters;
    fn sub(self, rhs: SquareMeters) -> SquareMeters {
        SquareMeters(self.0 - rhs.0)
    }
}

impl std::iter::Sum for SquareMeters {
    fn sum<I: Iterator<Item = SquareMeters>>(iter: I) -> SquareMeters {
        SquareMeters(iter.map(|a| a.0).sum())
    }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} m²", self.0)
    }
}

// ============================================================================
// VELOCITY TYPES
// ============================================================================

/// Wind speed in kilometres per hour
///
/// Negative values arrive from upstream as "not computed" sentinels and are
/// deliberately representable; [`KilometersPerHour::is_valid`] separates them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

total_order_f64!(KilometersPerHour);

impl KilometersPerHour {
    /// Create a new `KilometersPerHour` value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerHour(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// A usable minimum: finite and not a negative sentinel
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

// ============================================================================
// INTENSITY TYPES
// ============================================================================

/// Fireline intensity in kW/m (Byram's intensity at the head of the fire)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KilowattsPerMeter(f64);

total_order_f64!(KilowattsPerMeter);

impl KilowattsPerMeter {
    /// Create a new intensity
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilowattsPerMeter(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this intensity reaches `bound`. NaN reaches nothing, unlike under `Ord`.
    #[inline]
    #[must_use]
    pub fn meets(self, bound: KilowattsPerMeter) -> bool {
        self.0 >= bound.0
    }
}

impl fmt::Display for KilowattsPerMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} kW/m", self.0)
    }
}

// ============================================================================
// DIMENSIONLESS TYPES
// ============================================================================

/// Percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(f64);

total_order_f64!(Percent);

impl Percent {
    /// Create a new percentage
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for Percent {
    type Output = Percent;
    fn add(self, rhs: Percent) -> Percent {
        Percent(self.0 + rhs.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hour_of_day_checked_constructor() {
        assert!(HourOfDay::try_new(0.0).is_ok());
        assert!(HourOfDay::try_new(23.99).is_ok());
        assert!(HourOfDay::try_new(24.0).is_err());
        assert!(HourOfDay::try_new(-0.5).is_err());
        assert!(HourOfDay::try_new(f64::NAN).is_err());
    }

    #[test]
    fn test_hour_of_day_wrapping() {
        assert_eq!(HourOfDay::wrapping(25.0), HourOfDay::new(1.0));
        assert_eq!(HourOfDay::wrapping(-1.0), HourOfDay::new(23.0));
        assert_eq!(HourOfDay::wrapping(24.0), HourOfDay::MIDNIGHT);
    }

    #[test]
    fn test_hours_until_same_day_and_overnight() {
        assert_eq!(HourOfDay::new(10.0).hours_until(HourOfDay::new(21.0)), Hours::new(11.0));
        assert_eq!(HourOfDay::new(22.0).hours_until(HourOfDay::new(6.0)), Hours::new(8.0));
        assert_eq!(HourOfDay::new(7.0).hours_until(HourOfDay::new(7.0)), Hours::FULL_DAY);
    }

    #[test]
    fn test_hour_of_day_display_is_zero_padded() {
        assert_eq!(HourOfDay::new(6.0).to_string(), "06:00");
        assert_eq!(HourOfDay::new(13.5).to_string(), "13:00");
    }

    #[test]
    fn test_area_from_pixels() {
        let area = SquareMeters::from_pixels(100, 2000.0);
        assert_eq!(*area, 400_000_000.0);
    }

    #[test]
    fn test_percent_of_handles_empty_whole() {
        let part = SquareMeters::new(25.0);
        assert_relative_eq!(*part.percent_of(SquareMeters::new(100.0)), 25.0);
        assert_eq!(part.percent_of(SquareMeters::ZERO), Percent::new(0.0));
    }

    #[test]
    fn test_wind_speed_validity() {
        assert!(KilometersPerHour::new(0.0).is_valid());
        assert!(KilometersPerHour::new(12.0).is_valid());
        assert!(!KilometersPerHour::new(-5.0).is_valid());
        assert!(!KilometersPerHour::new(f64::NAN).is_valid());
    }

    #[test]
    fn test_total_ordering_min_max() {
        let a = KilometersPerHour::new(12.0);
        let b = KilometersPerHour::new(8.0);
        assert_eq!(a.min(b), b);
        assert_eq!(HourOfDay::new(4.0).max(HourOfDay::new(6.0)), HourOfDay::new(6.0));
    }

    #[test]
    fn test_intensity_meets_bound() {
        let bound = KilowattsPerMeter::new(4000.0);
        assert!(KilowattsPerMeter::new(4000.0).meets(bound));
        assert!(!KilowattsPerMeter::new(3999.9).meets(bound));
        assert!(!KilowattsPerMeter::new(f64::NAN).meets(bound));
        assert!(KilowattsPerMeter::new(f64::NAN) > bound);
    }

    #[test]
    fn test_units_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&SquareMeters::new(1500.0)).unwrap();
        assert_eq!(json, "1500.0");
        let speed: KilometersPerHour = serde_json::from_str("-1").unwrap();
        assert_eq!(*speed, -1.0);
    }
}
