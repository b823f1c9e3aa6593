pub mod config;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod message;
pub mod workout;

pub use dispatch::{read_package, WorkoutCode};
pub use driver::{
    default_packages, run_batch, summarize, BatchOptions, BatchReport, ErrorPolicy, OutputFormat,
    Package,
};
pub use error::TrackerError;
pub use message::{InfoMessage, MessageLocale};
pub use workout::{Running, SportsWalking, Swimming, TrainingBase, Workout};

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::InvalidPhysicalValue { field, value })
    }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrackerError::InvalidPhysicalValue { field, value })
    }
}

pub(crate) fn count(field: &'static str, value: f64) -> Result<u32, TrackerError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(TrackerError::InvalidPhysicalValue { field, value })
    }
}
