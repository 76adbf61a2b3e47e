//! C ABI for the fire behaviour advisory rules
//!
//! Every fallible function returns an [`AdvisoryErrorCode`] and records a
//! message retrievable with [`fire_advisory_get_last_error`]. Absent values
//! (missing critical-hours bounds, missing wind speeds) are passed as `NaN`.

mod error;
mod helpers;

use fire_advisory_core::advisory::area_filter::is_significant;
use fire_advisory_core::advisory::{
    aggregate_windows, derive_zone_status, format_critical_hours_time_text,
    format_wind_speed_text, wind_speed_minimum, TimeTextStyle,
};
use fire_advisory_core::core_types::{
    AdvisoryStatus, CriticalHoursWindow, FireZoneFuelStats, FuelType, HourOfDay,
    KilometersPerHour, MinWindStat, Percent, Rgba, SquareMeters, Threshold, ThresholdLevel,
    ZoneAreaSummary, ZoneStatusDetail,
};
use fire_advisory_core::zone_status_colour;
use std::ffi::CString;
use std::os::raw::c_char;

pub use error::{fire_advisory_get_last_error, fire_advisory_get_last_error_code, AdvisoryErrorCode};
use error::DefaultFfiError;
use helpers::{finish, into_c_string, slice_arg, str_arg, write_out};

/// Critical-hours window of one fuel type; `NaN` marks a missing bound.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryHoursWindow {
    /// Hour of day in [0, 24)
    pub start_time: f64,
    /// Hour of day in [0, 24); at or before `start_time` crosses midnight
    pub end_time: f64,
}

/// Zone-level critical hours.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdvisoryCriticalHoursSummary {
    pub min_start_time: f64,
    pub max_end_time: f64,
    /// Hours, within [0, 24]
    pub duration: f64,
}

/// Minimum wind speed for one threshold.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryMinWindStat {
    /// 1 = advisory, 2 = warning
    pub threshold: u8,
    /// km/h; `NaN` when not computed, negative values are sentinels
    pub min_wind_speed: f64,
}

/// RGBA colour; channels 0-255, alpha 0.0-1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl From<Rgba> for AdvisoryRgba {
    fn from(c: Rgba) -> Self {
        AdvisoryRgba {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<AdvisoryRgba> for Rgba {
    fn from(c: AdvisoryRgba) -> Self {
        Rgba::new(c.r, c.g, c.b, c.a)
    }
}

/// Zone status; `Unflagged` means no advisory is in effect.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryZoneStatus {
    Unflagged = 0,
    Advisory = 1,
    Warning = 2,
}

impl From<Option<AdvisoryStatus>> for AdvisoryZoneStatus {
    fn from(status: Option<AdvisoryStatus>) -> Self {
        match status {
            None => AdvisoryZoneStatus::Unflagged,
            Some(AdvisoryStatus::Advisory) => AdvisoryZoneStatus::Advisory,
            Some(AdvisoryStatus::Warning) => AdvisoryZoneStatus::Warning,
        }
    }
}

fn optional_hour(value: f64, name: &str) -> Result<Option<HourOfDay>, DefaultFfiError> {
    if value.is_nan() {
        return Ok(None);
    }
    HourOfDay::try_new(value)
        .map(Some)
        .map_err(|e| DefaultFfiError::from_core(name, &e))
}

fn required_hour(value: f64, name: &str) -> Result<HourOfDay, DefaultFfiError> {
    HourOfDay::try_new(value).map_err(|e| DefaultFfiError::from_core(name, &e))
}

fn min_wind_stats(stats: &[AdvisoryMinWindStat]) -> Result<Vec<MinWindStat>, DefaultFfiError> {
    stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let level = ThresholdLevel::try_from(stat.threshold)
                .map_err(|e| DefaultFfiError::from_core(&format!("stats[{i}].threshold"), &e))?;
            let speed = (!stat.min_wind_speed.is_nan())
                .then_some(KilometersPerHour::new(stat.min_wind_speed));
            Ok(MinWindStat::new(Threshold::of(level), speed))
        })
        .collect()
}

/// Aggregate per-fuel-type critical-hours windows into one zone window.
///
/// Windows with a `NaN` bound are ignored. `out_found` is set to `false` (and
/// `out_summary` left untouched) when no window has both bounds.
///
/// Returns
/// - `AdvisoryErrorCode::Ok` on success
/// - `AdvisoryErrorCode::NullPointer` if `windows` is null with `len > 0`, or an out-pointer
///   is null
/// - `AdvisoryErrorCode::InvalidParameter` if a bound lies outside [0, 24)
///
/// # Safety
/// - `windows` must point to `len` readable `AdvisoryHoursWindow` values (may be null when
///   `len == 0`).
/// - `out_summary` and `out_found` must be valid for writes.
///
/// # Example Usage (C++)
/// ```cpp
/// AdvisoryHoursWindow windows[] = {{10, 21}, {11, 6}, {12, 4}, {NAN, NAN}};
/// AdvisoryCriticalHoursSummary summary;
/// bool found = false;
/// fire_advisory_critical_hours(windows, 4, &summary, &found);
/// // summary = {10, 6, 20}
/// ```
#[no_mangle]
pub unsafe extern "C" fn fire_advisory_critical_hours(
    windows: *const AdvisoryHoursWindow,
    len: usize,
    out_summary: *mut AdvisoryCriticalHoursSummary,
    out_found: *mut bool,
) -> AdvisoryErrorCode {
    finish(unsafe { critical_hours(windows, len, out_summary, out_found) })
}

unsafe fn critical_hours(
    windows: *const AdvisoryHoursWindow,
    len: usize,
    out_summary: *mut AdvisoryCriticalHoursSummary,
    out_found: *mut bool,
) -> Result<(), DefaultFfiError> {
    let windows = unsafe { slice_arg(windows, len, "windows")? };
    let parsed = windows
        .iter()
        .enumerate()
        .map(|(i, w)| {
            Ok(CriticalHoursWindow {
                start_time: optional_hour(w.start_time, &format!("windows[{i}].start_time"))?,
                end_time: optional_hour(w.end_time, &format!("windows[{i}].end_time"))?,
            })
        })
        .collect::<Result<Vec<_>, DefaultFfiError>>()?;

    let summary = aggregate_windows(parsed);
    unsafe { write_out(out_found, summary.is_some(), "out_found")? };
    if let Some(summary) = summary {
        let value = AdvisoryCriticalHoursSummary {
            min_start_time: *summary.min_start_time,
            max_end_time: *summary.max_end_time,
            duration: *summary.duration,
        };
        unsafe { write_out(out_summary, value, "out_summary")? };
    }
    Ok(())
}

/// Render `[start, end]` critical-hours text.
///
/// Short style gives bare hours (`"22"`, `"6 (+1 day)"`); long style gives
/// clock times (`"22:00"`, `"06:00 tomorrow"`). Both strings must be released
/// with [`fire_advisory_string_free`].
///
/// # Safety
/// `out_start` and `out_end` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn fire_advisory_format_critical_hours(
    start_time: f64,
    end_time: f64,
    long_style: bool,
    out_start: *mut *mut c_char,
    out_end: *mut *mut c_char,
) -> AdvisoryErrorCode {
    finish(unsafe { format_critical_hours(start_time, end_time, long_style, out_start, out_end) })
}

unsafe fn format_critical_hours(
    start_time: f64,
    end_time: f64,
    long_style: bool,
    out_start: *mut *mut c_char,
    out_end: *mut *mut c_char,
) -> Result<(), DefaultFfiError> {
    if out_start.is_null() {
        return Err(DefaultFfiError::null_pointer("out_start"));
    }
    if out_end.is_null() {
        return Err(DefaultFfiError::null_pointer("out_end"));
    }
    let start = required_hour(start_time, "start_time")?;
    let end = required_hour(end_time, "end_time")?;
    let style = if long_style {
        TimeTextStyle::Long
    } else {
        TimeTextStyle::Short
    };
    let [start_text, end_text] = format_critical_hours_time_text(start, end, style);
    let start_ptr = into_c_string(start_text, "start_text")?;
    let end_ptr = into_c_string(end_text, "end_text")?;
    unsafe {
        out_start.write(start_ptr);
        out_end.write(end_ptr);
    }
    Ok(())
}

/// Smallest valid minimum wind speed across thresholds.
///
/// `NaN` and negative speeds are skipped. `out_found` is `false` when none remain.
///
/// # Safety
/// - `stats` must point to `len` readable values (may be null when `len == 0`).
/// - `out_speed` and `out_found` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn fire_advisory_wind_speed_minimum(
    stats: *const AdvisoryMinWindStat,
    len: usize,
    out_speed: *mut f64,
    out_found: *mut bool,
) -> AdvisoryErrorCode {
    finish(unsafe { wind_minimum(stats, len, out_speed, out_found) })
}

unsafe fn wind_minimum(
    stats: *const AdvisoryMinWindStat,
    len: usize,
    out_speed: *mut f64,
    out_found: *mut bool,
) -> Result<(), DefaultFfiError> {
    let stats = min_wind_stats(unsafe { slice_arg(stats, len, "stats")? })?;
    let minimum = wind_speed_minimum(&stats);
    unsafe { write_out(out_found, minimum.is_some(), "out_found")? };
    if let Some(speed) = minimum {
        unsafe { write_out(out_speed, *speed, "out_speed")? };
    }
    Ok(())
}

/// Wind-speed advisory wording, e.g. `"if winds exceed 12 km/h"`.
///
/// Writes null to `out_text` when there is no valid minimum; otherwise the
/// string must be released with [`fire_advisory_string_free`].
///
/// # Safety
/// - `stats` must point to `len` readable values (may be null when `len == 0`).
/// - `out_text` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn fire_advisory_format_wind_speed(
    stats: *const AdvisoryMinWindStat,
    len: usize,
    out_text: *mut *mut c_char,
) -> AdvisoryErrorCode {
    finish(unsafe { wind_text(stats, len, out_text) })
}

unsafe fn wind_text(
    stats: *const AdvisoryMinWindStat,
    len: usize,
    out_text: *mut *mut c_char,
) -> Result<(), DefaultFfiError> {
    let stats = min_wind_stats(unsafe { slice_arg(stats, len, "stats")? })?;
    let text = format_wind_speed_text(&stats)
        .map(|text| into_c_string(text, "text"))
        .transpose()?
        .unwrap_or(std::ptr::null_mut());
    unsafe { write_out(out_text, text, "out_text") }
}

/// Whether a fuel type survives the low-prevalence filter.
///
/// # Safety
/// - `fuel_type_code` must be a null-terminated string.
/// - `out_keep` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn fire_advisory_is_fuel_type_significant(
    fuel_type_code: *const c_char,
    fuel_area: f64,
    out_keep: *mut bool,
) -> AdvisoryErrorCode {
    finish(unsafe { fuel_type_significant(fuel_type_code, fuel_area, out_keep) })
}

unsafe fn fuel_type_significant(
    fuel_type_code: *const c_char,
    fuel_area: f64,
    out_keep: *mut bool,
) -> Result<(), DefaultFfiError> {
    let code = unsafe { str_arg(fuel_type_code, "fuel_type_code")? };
    if !fuel_area.is_finite() {
        return Err(DefaultFfiError::invalid_parameter(
            "fuel_area",
            &format!("must be finite, got {fuel_area}"),
        ));
    }
    let stat = FireZoneFuelStats::new(
        FuelType::new(0, code, ""),
        Threshold::advisory(),
        CriticalHoursWindow::empty(),
        SquareMeters::new(0.0),
        SquareMeters::new(fuel_area),
    );
    unsafe { write_out(out_keep, is_significant(&stat), "out_keep") }
}

/// Zone status from elevated-area percentages.
///
/// Warning when `warning_percent` exceeds `threshold_percent`, advisory when
/// the sum of both does. Infallible: `NaN` inputs never exceed the threshold.
#[no_mangle]
pub extern "C" fn fire_advisory_derive_zone_status(
    advisory_percent: f64,
    warning_percent: f64,
    threshold_percent: f64,
) -> AdvisoryZoneStatus {
    let summary = |level, percent| ZoneAreaSummary {
        fire_shape_id: 0,
        threshold: level,
        combustible_area: SquareMeters::new(0.0),
        elevated_hfi_area: SquareMeters::new(0.0),
        elevated_hfi_percentage: Percent::new(percent),
    };
    let summaries = [
        summary(ThresholdLevel::Advisory, advisory_percent),
        summary(ThresholdLevel::Warning, warning_percent),
    ];
    derive_zone_status(&summaries, Percent::new(threshold_percent)).into()
}

/// Line colour for a zone status; `default_colour` for `AdvisoryZoneStatus::Unflagged`.
#[no_mangle]
pub extern "C" fn fire_advisory_zone_status_colour(
    status: AdvisoryZoneStatus,
    default_colour: AdvisoryRgba,
) -> AdvisoryRgba {
    let status = match status {
        AdvisoryZoneStatus::Unflagged => None,
        AdvisoryZoneStatus::Advisory => Some(AdvisoryStatus::Advisory),
        AdvisoryZoneStatus::Warning => Some(AdvisoryStatus::Warning),
    };
    let detail = status.map(|status| ZoneStatusDetail {
        fire_shape_id: 0,
        status,
        fire_shape_name: String::new(),
        fire_centre_name: String::new(),
    });
    zone_status_colour(detail.as_ref(), default_colour.into()).into()
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
/// `text` must be null or a pointer returned by this library that has not been freed.
#[no_mangle]
pub unsafe extern "C" fn fire_advisory_string_free(text: *mut c_char) {
    if !text.is_null() {
        drop(unsafe { CString::from_raw(text) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::ptr;

    unsafe fn take_string(text: *mut c_char) -> String {
        let owned = unsafe { CStr::from_ptr(text) }.to_str().unwrap().to_string();
        unsafe { fire_advisory_string_free(text) };
        owned
    }

    #[test]
    fn test_critical_hours_overnight_windows() {
        let windows = [
            AdvisoryHoursWindow { start_time: 10.0, end_time: 21.0 },
            AdvisoryHoursWindow { start_time: 11.0, end_time: 6.0 },
            AdvisoryHoursWindow { start_time: 12.0, end_time: 4.0 },
            AdvisoryHoursWindow { start_time: f64::NAN, end_time: f64::NAN },
        ];
        let mut summary = AdvisoryCriticalHoursSummary::default();
        let mut found = false;
        let code = unsafe {
            fire_advisory_critical_hours(windows.as_ptr(), windows.len(), &mut summary, &mut found)
        };
        assert_eq!(code, AdvisoryErrorCode::Ok);
        assert!(found);
        assert_eq!(
            summary,
            AdvisoryCriticalHoursSummary {
                min_start_time: 10.0,
                max_end_time: 6.0,
                duration: 20.0
            }
        );
        assert!(fire_advisory_get_last_error().is_null());
    }

    #[test]
    fn test_critical_hours_empty_and_invalid() {
        let mut summary = AdvisoryCriticalHoursSummary::default();
        let mut found = true;
        let code =
            unsafe { fire_advisory_critical_hours(ptr::null(), 0, &mut summary, &mut found) };
        assert_eq!(code, AdvisoryErrorCode::Ok);
        assert!(!found);

        let bad = [AdvisoryHoursWindow { start_time: 25.0, end_time: 3.0 }];
        let code =
            unsafe { fire_advisory_critical_hours(bad.as_ptr(), 1, &mut summary, &mut found) };
        assert_eq!(code, AdvisoryErrorCode::InvalidParameter);
        assert_eq!(fire_advisory_get_last_error_code(), AdvisoryErrorCode::InvalidParameter);
        let message = unsafe { CStr::from_ptr(fire_advisory_get_last_error()) };
        assert!(message.to_str().unwrap().contains("windows[0].start_time"));
    }

    #[test]
    fn test_null_out_pointer() {
        let windows = [AdvisoryHoursWindow { start_time: 10.0, end_time: 12.0 }];
        let code = unsafe {
            fire_advisory_critical_hours(windows.as_ptr(), 1, ptr::null_mut(), ptr::null_mut())
        };
        assert_eq!(code, AdvisoryErrorCode::NullPointer);
    }

    #[test]
    fn test_format_critical_hours() {
        let mut start = ptr::null_mut();
        let mut end = ptr::null_mut();
        let code =
            unsafe { fire_advisory_format_critical_hours(22.0, 6.0, false, &mut start, &mut end) };
        assert_eq!(code, AdvisoryErrorCode::Ok);
        assert_eq!(unsafe { take_string(start) }, "22");
        assert_eq!(unsafe { take_string(end) }, "6 (+1 day)");

        let code =
            unsafe { fire_advisory_format_critical_hours(22.0, 6.0, true, &mut start, &mut end) };
        assert_eq!(code, AdvisoryErrorCode::Ok);
        assert_eq!(unsafe { take_string(start) }, "22:00");
        assert_eq!(unsafe { take_string(end) }, "06:00 tomorrow");
    }

    #[test]
    fn test_wind_speed_minimum_and_text() {
        let stats = [
            AdvisoryMinWindStat { threshold: 1, min_wind_speed: 0.0 },
            AdvisoryMinWindStat { threshold: 2, min_wind_speed: -5.0 },
            AdvisoryMinWindStat { threshold: 2, min_wind_speed: f64::NAN },
        ];
        let mut speed = -1.0;
        let mut found = false;
        let code = unsafe {
            fire_advisory_wind_speed_minimum(stats.as_ptr(), stats.len(), &mut speed, &mut found)
        };
        assert_eq!(code, AdvisoryErrorCode::Ok);
        assert!(found);
        assert_eq!(speed, 0.0);

        let mut text = ptr::null_mut();
        let code = unsafe { fire_advisory_format_wind_speed(stats.as_ptr(), 1, &mut text) };
        assert_eq!(code, AdvisoryErrorCode::Ok);
        assert_eq!(unsafe { take_string(text) }, "if winds exceed 0 km/h");

        let code = unsafe { fire_advisory_format_wind_speed(stats[1..].as_ptr(), 2, &mut text) };
        assert_eq!(code, AdvisoryErrorCode::Ok);
        assert!(text.is_null());
    }

    #[test]
    fn test_unknown_threshold_rejected() {
        let stats = [AdvisoryMinWindStat { threshold: 7, min_wind_speed: 10.0 }];
        let mut speed = 0.0;
        let mut found = false;
        let code =
            unsafe { fire_advisory_wind_speed_minimum(stats.as_ptr(), 1, &mut speed, &mut found) };
        assert_eq!(code, AdvisoryErrorCode::InvalidParameter);
    }

    #[test]
    fn test_fuel_type_significance() {
        let mut keep = false;
        let c5 = c"C-5";
        let code = unsafe { fire_advisory_is_fuel_type_significant(c5.as_ptr(), 1.0, &mut keep) };
        assert_eq!(code, AdvisoryErrorCode::Ok);
        assert!(keep);

        let c2 = c"C-2";
        unsafe { fire_advisory_is_fuel_type_significant(c2.as_ptr(), 1.0e6, &mut keep) };
        assert!(!keep);
        unsafe { fire_advisory_is_fuel_type_significant(c2.as_ptr(), 5.0e8, &mut keep) };
        assert!(keep);

        let code = unsafe { fire_advisory_is_fuel_type_significant(ptr::null(), 5.0e8, &mut keep) };
        assert_eq!(code, AdvisoryErrorCode::NullPointer);
    }

    #[test]
    fn test_zone_status_and_colour() {
        let status = fire_advisory_derive_zone_status;
        assert_eq!(status(15.0, 10.0, 20.0), AdvisoryZoneStatus::Advisory);
        assert_eq!(status(0.0, 25.0, 20.0), AdvisoryZoneStatus::Warning);
        assert_eq!(status(10.0, 10.0, 20.0), AdvisoryZoneStatus::Unflagged);

        let grey = AdvisoryRgba { r: 128, g: 128, b: 128, a: 1.0 };
        assert_eq!(fire_advisory_zone_status_colour(AdvisoryZoneStatus::Unflagged, grey), grey);
        assert_eq!(
            fire_advisory_zone_status_colour(AdvisoryZoneStatus::Warning, grey),
            AdvisoryRgba { r: 128, g: 0, b: 0, a: 1.0 }
        );
    }

    #[test]
    fn test_nan_percentages_leave_zone_unflagged() {
        let status = fire_advisory_derive_zone_status;
        let nan = f64::NAN;
        assert_eq!(status(0.0, nan, 20.0), AdvisoryZoneStatus::Unflagged);
        assert_eq!(status(nan, 0.0, 20.0), AdvisoryZoneStatus::Unflagged);
        assert_eq!(status(50.0, 0.0, nan), AdvisoryZoneStatus::Unflagged);
        assert_eq!(status(nan, 25.0, 20.0), AdvisoryZoneStatus::Warning);
    }
}
