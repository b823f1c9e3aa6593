use crate::workout::{TrainingBase, LEN_STEP, MIN_IN_H};
use crate::{positive, TrackerError};

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Body height in centimetres.
    pub height: f64,
}

impl SportsWalking {
    pub const LABEL: &'static str = "SportsWalking";
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self, TrackerError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            height: positive("height", height)?,
        })
    }

    pub fn distance_km(&self) -> f64 {
        self.base.distance_km(LEN_STEP)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.base.mean_speed_kmh(LEN_STEP)
    }

    pub fn spent_calories(&self) -> f64 {
        let height_in_m = self.height / Self::CM_IN_M;
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + speed_ms.powi(2) / height_in_m
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.base.weight)
            * self.base.duration
            * MIN_IN_H
    }
}
