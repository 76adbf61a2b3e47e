//! Core types: units, reference data and the upstream statistics model

pub mod colour;
pub mod fuel;
pub mod run;
pub mod stats;
pub mod threshold;
pub mod units;

pub use colour::Rgba;
pub use fuel::FuelType;
pub use run::{RunParameters, RunType};
pub use stats::*;
pub use threshold::{AdvisoryStatus, Threshold, ThresholdLevel};
pub use units::*;
