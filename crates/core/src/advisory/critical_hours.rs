//! Critical hours aggregation
//!
//! Each fuel type/threshold pair of a zone carries its own critical-hours
//! window. The zone advisory shows a single window spanning all of them:
//!
//! 1. Entries missing either bound, or with a non-finite bound, are ignored.
//! 2. An entry whose end is at or before its start crosses midnight
//!    ([`DangerWindow::Wrapping`]); equal bounds are a full 24 hours.
//! 3. The zone window starts at the earliest start of any entry.
//! 4. With no wrapping entry, it ends at the latest end and lasts `end - start`.
//! 5. With at least one wrapping entry, only wrapping entries may set the end
//!    (the latest of their ends), and it lasts `24 - start + end`.
//!
//! Rule 5 means a single overnight window hides the same-day end times of every
//! other fuel type, and a full-day entry stretches the zone window to 24 hours.

use crate::core_types::stats::{CriticalHoursWindow, FireZoneFuelStats};
use crate::core_types::units::{HourOfDay, Hours, HOURS_PER_DAY};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// End hours earlier than this are labelled as falling on the next day
pub const NEXT_DAY_CUTOFF: HourOfDay = HourOfDay::new(8.0);

/// A critical-hours window with both bounds, tagged by whether it crosses midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerWindow {
    /// `start < end`, both on the same day
    SameDay { start: HourOfDay, end: HourOfDay },
    /// `end <= start`; the window runs past midnight (a full day when equal)
    Wrapping { start: HourOfDay, end: HourOfDay },
}

impl DangerWindow {
    /// Tag a pair of bounds
    pub fn classify(start: HourOfDay, end: HourOfDay) -> Self {
        if end <= start {
            DangerWindow::Wrapping { start, end }
        } else {
            DangerWindow::SameDay { start, end }
        }
    }

    /// Tag a window; `None` when either bound is missing or not finite
    pub fn from_window(window: &CriticalHoursWindow) -> Option<Self> {
        window
            .bounds()
            .filter(|(start, end)| start.is_finite() && end.is_finite())
            .map(|(start, end)| Self::classify(start, end))
    }

    /// Start hour
    pub fn start(self) -> HourOfDay {
        match self {
            DangerWindow::SameDay { start, .. } | DangerWindow::Wrapping { start, .. } => start,
        }
    }

    /// End hour
    pub fn end(self) -> HourOfDay {
        match self {
            DangerWindow::SameDay { end, .. } | DangerWindow::Wrapping { end, .. } => end,
        }
    }

    /// Whether the window crosses midnight
    pub fn is_wrapping(self) -> bool {
        matches!(self, DangerWindow::Wrapping { .. })
    }

    /// Length of this window alone
    pub fn duration(self) -> Hours {
        self.start().hours_until(self.end())
    }
}

/// Zone-level critical hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalHoursSummary {
    pub min_start_time: HourOfDay,
    pub max_end_time: HourOfDay,
    pub duration: Hours,
}

impl CriticalHoursSummary {
    /// Whether the zone window runs past midnight
    pub fn crosses_midnight(&self) -> bool {
        self.max_end_time <= self.min_start_time
    }
}

/// Aggregate bare windows into one zone window
///
/// Returns `None` when no window has both bounds. The result does not depend on input order.
pub fn aggregate_windows<I>(windows: I) -> Option<CriticalHoursSummary>
where
    I: IntoIterator<Item = CriticalHoursWindow>,
{
    let mut min_start: Option<HourOfDay> = None;
    let mut max_same_day_end: Option<HourOfDay> = None;
    let mut max_wrapping_end: Option<HourOfDay> = None;

    for window in windows.into_iter().filter_map(|w| DangerWindow::from_window(&w)) {
        min_start = Some(min_start.map_or(window.start(), |s| s.min(window.start())));
        match window {
            DangerWindow::SameDay { end, .. } => {
                max_same_day_end = Some(max_same_day_end.map_or(end, |e| e.max(end)));
            }
            DangerWindow::Wrapping { end, .. } => {
                max_wrapping_end = Some(max_wrapping_end.map_or(end, |e| e.max(end)));
            }
        }
    }

    let min_start_time = min_start?;
    let (max_end_time, raw_duration) = match (max_wrapping_end, max_same_day_end) {
        (Some(end), _) => (end, HOURS_PER_DAY - *min_start_time + *end),
        (None, Some(end)) => (end, *end - *min_start_time),
        (None, None) => return None,
    };

    // A wrapping end later than the earliest same-day start would overlap it; cap at one day.
    let duration = Hours::new(raw_duration.clamp(0.0, HOURS_PER_DAY));
    trace!(
        min_start = *min_start_time,
        max_end = *max_end_time,
        duration = *duration,
        "Aggregated critical hours"
    );
    Some(CriticalHoursSummary {
        min_start_time,
        max_end_time,
        duration,
    })
}

/// Zone window across a zone's fuel stats; `None` when none has critical hours
pub fn min_start_and_max_end(stats: &[FireZoneFuelStats]) -> Option<CriticalHoursSummary> {
    aggregate_windows(stats.iter().map(|s| s.critical_hours))
}

/// Rendering style for critical-hours text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeTextStyle {
    /// Bare hours: `"13"`, `"6 (+1 day)"`
    #[default]
    Short,
    /// Clock times: `"13:00"`, `"06:00 tomorrow"`
    Long,
}

/// Render `[start, end]` text with the default next-day cutoff
pub fn format_critical_hours_time_text(
    start: HourOfDay,
    end: HourOfDay,
    style: TimeTextStyle,
) -> [String; 2] {
    format_critical_hours_time_text_with(start, end, style, NEXT_DAY_CUTOFF)
}

/// Render `[start, end]` text
///
/// The end gets a next-day marker only when the window wraps *and* ends
/// before `next_day_cutoff`, so late-evening ends are never labelled as tomorrow.
pub fn format_critical_hours_time_text_with(
    start: HourOfDay,
    end: HourOfDay,
    style: TimeTextStyle,
    next_day_cutoff: HourOfDay,
) -> [String; 2] {
    let next_day = end <= start && end < next_day_cutoff;
    match style {
        TimeTextStyle::Short => {
            let start_text = format!("{}", *start);
            let end_text = if next_day {
                format!("{} (+1 day)", *end)
            } else {
                format!("{}", *end)
            };
            [start_text, end_text]
        }
        TimeTextStyle::Long => {
            let start_text = start.to_string();
            let end_text = if next_day {
                format!("{end} tomorrow")
            } else {
                end.to_string()
            };
            [start_text, end_text]
        }
    }
}
