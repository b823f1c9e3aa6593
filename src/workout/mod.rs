pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::message::InfoMessage;
use crate::{positive, TrackerError};

pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Sensor readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrackerError> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }

    pub fn distance_km(&self, len_step: f64) -> f64 {
        self.action as f64 * len_step / M_IN_KM
    }

    pub fn mean_speed_kmh(&self, len_step: f64) -> f64 {
        self.distance_km(len_step) / self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn base(&self) -> &TrainingBase {
        match self {
            Workout::Running(running) => &running.base,
            Workout::SportsWalking(walking) => &walking.base,
            Workout::Swimming(swimming) => &swimming.base,
        }
    }

    pub fn duration(&self) -> f64 {
        self.base().duration
    }

    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(_) => Running::LABEL,
            Workout::SportsWalking(_) => SportsWalking::LABEL,
            Workout::Swimming(_) => Swimming::LABEL,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(running) => running.distance_km(),
            Workout::SportsWalking(walking) => walking.distance_km(),
            Workout::Swimming(swimming) => swimming.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(running) => running.mean_speed_kmh(),
            Workout::SportsWalking(walking) => walking.mean_speed_kmh(),
            Workout::Swimming(swimming) => swimming.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(running) => running.spent_calories(),
            Workout::SportsWalking(walking) => walking.spent_calories(),
            Workout::Swimming(swimming) => swimming.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.label().to_string(),
            duration: self.duration(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}
