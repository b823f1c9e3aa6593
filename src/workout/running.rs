use crate::workout::{TrainingBase, LEN_STEP, MIN_IN_H, M_IN_KM};
use crate::TrackerError;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    pub const LABEL: &'static str = "Running";
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrackerError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
        })
    }

    pub fn distance_km(&self) -> f64 {
        self.base.distance_km(LEN_STEP)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.base.mean_speed_kmh(LEN_STEP)
    }

    pub fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration
            * MIN_IN_H
    }
}
