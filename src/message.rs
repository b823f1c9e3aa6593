use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format_float;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageLocale {
    #[default]
    English,
    Russian,
}

impl MessageLocale {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Some(MessageLocale::English),
            "ru" | "russian" => Some(MessageLocale::Russian),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MessageLocale::English => "en",
            MessageLocale::Russian => "ru",
        }
    }
}

/// Summary of a single workout, ready to be printed once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.get_message_in(MessageLocale::English)
    }

    pub fn get_message_in(&self, locale: MessageLocale) -> String {
        let duration = format_float(self.duration, 3);
        let distance = format_float(self.distance, 3);
        let speed = format_float(self.speed, 3);
        let calories = format_float(self.calories, 3);

        match locale {
            MessageLocale::English => format!(
                "Workout type: {}; Duration: {} h; Distance: {} km; Avg speed: {} km/h; Calories burned: {}.",
                self.training_type, duration, distance, speed, calories
            ),
            MessageLocale::Russian => format!(
                "Тип тренировки: {}; Длительность: {} ч.; Дистанция: {} км; Ср. скорость: {} км/ч; Потрачено ккал: {}.",
                self.training_type, duration, distance, speed, calories
            ),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
