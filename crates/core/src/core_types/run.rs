//! Model run identification
//!
//! Statistics are always tied to one run of the fire-behaviour model: either a
//! forecast run or a run on observed ("actual") weather, issued at a given
//! time for a given target date.

use crate::error::{AdvisoryError, AdvisoryResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of model run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunType {
    /// Run on forecast weather
    Forecast,
    /// Run on observed weather
    Actual,
}

impl RunType {
    /// Wire name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forecast => "FORECAST",
            Self::Actual => "ACTUAL",
        }
    }
}

impl FromStr for RunType {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> AdvisoryResult<Self> {
        if s.eq_ignore_ascii_case("forecast") {
            Ok(Self::Forecast)
        } else if s.eq_ignore_ascii_case("actual") {
            Ok(Self::Actual)
        } else {
            Err(AdvisoryError::UnknownRunType(s.to_string()))
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key under which the upstream provider serves one set of zone statistics
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunParameters {
    /// Forecast or actual
    pub run_type: RunType,
    /// When the model run was issued
    pub run_datetime: DateTime<Utc>,
    /// Day the statistics describe
    pub for_date: NaiveDate,
}

impl RunParameters {
    /// Create run parameters
    pub fn new(run_type: RunType, run_datetime: DateTime<Utc>, for_date: NaiveDate) -> Self {
        RunParameters {
            run_type,
            run_datetime,
            for_date,
        }
    }

    /// Whether the target date falls after the run's issue date
    pub fn is_future_date(&self) -> bool {
        self.for_date > self.run_datetime.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_run_type_wire_format() {
        assert_eq!(serde_json::to_string(&RunType::Forecast).unwrap(), r#""FORECAST""#);
        let parsed: RunType = serde_json::from_str(r#""ACTUAL""#).unwrap();
        assert_eq!(parsed, RunType::Actual);
        assert_eq!("forecast".parse::<RunType>().unwrap(), RunType::Forecast);
        assert!("hindcast".parse::<RunType>().is_err());
    }

    #[test]
    fn test_future_date() {
        let issued = Utc.with_ymd_and_hms(2024, 7, 1, 18, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        assert!(!RunParameters::new(RunType::Forecast, issued, today).is_future_date());
        assert!(RunParameters::new(RunType::Forecast, issued, tomorrow).is_future_date());
    }
}
