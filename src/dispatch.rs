use tracing::debug;

use crate::workout::{Running, SportsWalking, Swimming, Workout};
use crate::{count, TrackerError};

/// Action count, duration and weight always lead the packet. The trailing fields are
/// read from the end, so a three-value packet is enough for every code.
pub const MIN_FIELDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swimming,
    Running,
    Walking,
}

impl WorkoutCode {
    pub fn from_code(value: &str) -> Option<Self> {
        match value {
            "SWM" => Some(WorkoutCode::Swimming),
            "RUN" => Some(WorkoutCode::Running),
            "WLK" => Some(WorkoutCode::Walking),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::Walking => "WLK",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkoutCode::Swimming => Swimming::LABEL,
            WorkoutCode::Running => Running::LABEL,
            WorkoutCode::Walking => SportsWalking::LABEL,
        }
    }
}

/// Build the workout for a sensor packet.
///
/// Positions: `[action, duration, weight, ..]`; walking reads height from the last
/// value, swimming reads pool length and lap count from the last two, whatever the
/// packet length. On a short packet those tail reads overlap the leading readings.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, TrackerError> {
    let code = WorkoutCode::from_code(workout_type)
        .ok_or_else(|| TrackerError::UnknownWorkoutTag(workout_type.to_string()))?;

    if data.len() < MIN_FIELDS {
        return Err(TrackerError::MalformedInputData {
            tag: code.code(),
            expected: MIN_FIELDS,
            actual: data.len(),
        });
    }
    debug!(code = code.code(), fields = data.len(), "reading package");

    let action = count("action count", data[0])?;
    let duration = data[1];
    let weight = data[2];
    let last = data[data.len() - 1];

    let workout: Workout = match code {
        WorkoutCode::Running => Running::new(action, duration, weight)?.into(),
        WorkoutCode::Walking => SportsWalking::new(action, duration, weight, last)?.into(),
        WorkoutCode::Swimming => {
            let length_pool = data[data.len() - 2];
            let count_pool = count("pool lap count", last)?;
            Swimming::new(action, duration, weight, length_pool, count_pool)?.into()
        }
    };
    Ok(workout)
}
