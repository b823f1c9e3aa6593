use crate::workout::{TrainingBase, M_IN_KM};
use crate::{positive, TrackerError};

/// Pool swim. `base.action` counts strokes and only feeds `distance_km`; speed and
/// calories come from the pool geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Pool length in metres.
    pub length_pool: f64,
    pub count_pool: u32,
}

impl Swimming {
    pub const LABEL: &'static str = "Swimming";
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, TrackerError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            length_pool: positive("pool length", length_pool)?,
            count_pool,
        })
    }

    pub fn distance_km(&self) -> f64 {
        self.base.distance_km(Self::LEN_STEP)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.base.duration
    }

    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
            * self.base.duration
    }
}
