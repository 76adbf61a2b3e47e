//! Boundary errors
//!
//! The advisory transforms themselves never fail. Errors only arise where data
//! crosses into typed form: numeric ids and status strings from the wire,
//! hour values through the checked constructor, and configuration files.

use std::path::PathBuf;

/// Result type for boundary operations
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;

/// Error type for boundary operations
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("Unknown threshold id {0}: expected 1 (advisory) or 2 (warning)")]
    UnknownThreshold(u8),

    #[error("Unknown advisory status '{0}': expected Advisory or Warning")]
    UnknownStatus(String),

    #[error("Unknown run type '{0}': expected FORECAST or ACTUAL")]
    UnknownRunType(String),

    #[error("Hour of day {0} is outside [0, 24)")]
    HourOutOfRange(f64),

    #[error("Invalid colour '{0}': expected #RRGGBB")]
    InvalidColour(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        assert_eq!(
            AdvisoryError::UnknownThreshold(3).to_string(),
            "Unknown threshold id 3: expected 1 (advisory) or 2 (warning)"
        );
        assert_eq!(
            AdvisoryError::HourOutOfRange(24.0).to_string(),
            "Hour of day 24 is outside [0, 24)"
        );
    }
}
