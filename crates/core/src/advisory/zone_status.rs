//! Zone status classification
//!
//! A zone is under a **warning** when its warning-band area exceeds the
//! advisory threshold percentage of its combustible area, and under an
//! **advisory** when its combined advisory and warning area does. The status
//! then selects the colours map layers use for the zone polygon.

use crate::core_types::colour::Rgba;
use crate::core_types::stats::{ZoneAreaSummary, ZoneId, ZoneStatusDetail};
use crate::core_types::threshold::{AdvisoryStatus, ThresholdLevel};
use crate::core_types::units::Percent;
use serde::{Deserialize, Serialize};

/// Elevated-area percentage a zone must exceed to be flagged
pub const DEFAULT_ADVISORY_THRESHOLD: Percent = Percent::new(20.0);

/// Colours for each status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPalette {
    /// Outline/legend colour for advisories
    pub advisory_line: Rgba,
    /// Outline/legend colour for warnings
    pub warning_line: Rgba,
    /// Polygon fill for advisories
    pub advisory_fill: Rgba,
    /// Polygon fill for warnings
    pub warning_fill: Rgba,
}

impl StatusPalette {
    /// Advisory orange
    pub const ADVISORY_ORANGE: Rgba = Rgba::rgb(255, 147, 38);
    /// Warning red
    pub const WARNING_RED: Rgba = Rgba::rgb(128, 0, 0);
    /// Opacity of polygon fills
    pub const FILL_ALPHA: f32 = 0.4;

    /// Line colour for a status
    pub fn line(&self, status: AdvisoryStatus) -> Rgba {
        match status {
            AdvisoryStatus::Advisory => self.advisory_line,
            AdvisoryStatus::Warning => self.warning_line,
        }
    }

    /// Fill colour for a status
    pub fn fill(&self, status: AdvisoryStatus) -> Rgba {
        match status {
            AdvisoryStatus::Advisory => self.advisory_fill,
            AdvisoryStatus::Warning => self.warning_fill,
        }
    }

    /// Colour for a zone's status detail, or `default` when the zone has none
    pub fn status_colour(&self, detail: Option<&ZoneStatusDetail>, default: Rgba) -> Rgba {
        detail.map_or(default, |d| self.line(d.status))
    }
}

impl Default for StatusPalette {
    fn default() -> Self {
        StatusPalette {
            advisory_line: Self::ADVISORY_ORANGE,
            warning_line: Self::WARNING_RED,
            advisory_fill: Self::ADVISORY_ORANGE.with_alpha(Self::FILL_ALPHA),
            warning_fill: Self::WARNING_RED.with_alpha(Self::FILL_ALPHA),
        }
    }
}

/// Colour for a zone's status detail using the default palette
///
/// `default` when the detail is absent, advisory orange for advisories and
/// warning red for warnings.
pub fn zone_status_colour(detail: Option<&ZoneStatusDetail>, default: Rgba) -> Rgba {
    StatusPalette::default().status_colour(detail, default)
}

fn percentage_for(summaries: &[ZoneAreaSummary], level: ThresholdLevel) -> Percent {
    summaries
        .iter()
        .find(|s| s.threshold == level)
        .map_or(Percent::new(0.0), |s| s.elevated_hfi_percentage)
}

/// Status implied by a zone's area summaries
///
/// A missing summary for a threshold counts as 0 %. Percentages must strictly
/// exceed `advisory_threshold`; NaN never does.
pub fn derive_zone_status(
    summaries: &[ZoneAreaSummary],
    advisory_threshold: Percent,
) -> Option<AdvisoryStatus> {
    let advisory = percentage_for(summaries, ThresholdLevel::Advisory);
    let warning = percentage_for(summaries, ThresholdLevel::Warning);

    // Raw f64 comparisons: the newtype ordering ranks NaN above every number.
    if *warning > *advisory_threshold {
        Some(AdvisoryStatus::Warning)
    } else if *advisory + *warning > *advisory_threshold {
        Some(AdvisoryStatus::Advisory)
    } else {
        None
    }
}

/// Polygon fill for a zone; `None` means no fill
///
/// An empty summary list (no data for the zone) is never filled.
pub fn zone_area_fill(
    summaries: &[ZoneAreaSummary],
    advisory_threshold: Percent,
    palette: &StatusPalette,
) -> Option<Rgba> {
    derive_zone_status(summaries, advisory_threshold).map(|status| palette.fill(status))
}

/// Build the status detail consumed by map styling, if the zone is flagged
pub fn zone_status_detail(
    fire_shape_id: ZoneId,
    fire_shape_name: &str,
    fire_centre_name: &str,
    summaries: &[ZoneAreaSummary],
    advisory_threshold: Percent,
) -> Option<ZoneStatusDetail> {
    derive_zone_status(summaries, advisory_threshold).map(|status| ZoneStatusDetail {
        fire_shape_id,
        status,
        fire_shape_name: fire_shape_name.to_string(),
        fire_centre_name: fire_centre_name.to_string(),
    })
}
