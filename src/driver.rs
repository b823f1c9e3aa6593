use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{info, warn};

use crate::dispatch::read_package;
use crate::message::{InfoMessage, MessageLocale};
use crate::workout::Workout;
use crate::{finite, TrackerError};

/// One `(type, readings)` pair as delivered by the sensor unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(alias = "tag")]
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }
}

pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    #[default]
    Abort,
    Skip,
}

impl ErrorPolicy {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "abort" | "stop" => Some(ErrorPolicy::Abort),
            "skip" | "continue" => Some(ErrorPolicy::Skip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub on_error: ErrorPolicy,
    pub locale: MessageLocale,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
}

/// Summary for one workout. Readings big enough to overflow a metric are refused
/// rather than printed as `inf`.
pub fn summarize(workout: &Workout) -> Result<InfoMessage, TrackerError> {
    let message = workout.show_training_info();
    finite("distance", message.distance)?;
    finite("speed", message.speed)?;
    finite("calories", message.calories)?;
    Ok(message)
}

pub fn write_message<W: Write>(
    out: &mut W,
    message: &InfoMessage,
    options: &BatchOptions,
) -> Result<(), TrackerError> {
    match options.format {
        OutputFormat::Text => writeln!(out, "{}", message.get_message_in(options.locale))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, message).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Summarize every package in order, writing one line each.
///
/// I/O failures always abort; bad packages abort or are skipped per `on_error`.
pub fn run_batch<W: Write>(
    packages: &[Package],
    options: &BatchOptions,
    out: &mut W,
) -> Result<BatchReport, TrackerError> {
    let mut report = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        let summary = read_package(&package.workout_type, &package.data)
            .and_then(|workout| summarize(&workout));
        let message = match summary {
            Ok(message) => message,
            Err(err) if options.on_error == ErrorPolicy::Skip => {
                warn!(index, workout_type = %package.workout_type, error = %err, "skipping package");
                report.skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        write_message(out, &message, options)?;
        report.processed += 1;
    }

    info!(processed = report.processed, skipped = report.skipped, "batch finished");
    Ok(report)
}
