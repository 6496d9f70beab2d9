//! Workout definitions - types, categories and scoring

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind of workout session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Walking,
    Running,
    Cycling,
    Yoga,
    Strength,
}

/// Which fields a workout needs and how it is scored
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    DistanceBased,
    TimeBased,
}

impl WorkoutType {
    /// All workout types for iteration
    pub fn all() -> &'static [WorkoutType] {
        &[
            WorkoutType::Walking,
            WorkoutType::Running,
            WorkoutType::Cycling,
            WorkoutType::Yoga,
            WorkoutType::Strength,
        ]
    }

    /// Canonical lowercase name, as stored and as typed by the user
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Walking => "walking",
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
            WorkoutType::Yoga => "yoga",
            WorkoutType::Strength => "strength",
        }
    }

    /// Exact, case-sensitive match against the canonical names
    pub fn is_valid(s: &str) -> bool {
        s.parse::<WorkoutType>().is_ok()
    }

    pub fn category(&self) -> WorkoutCategory {
        match self {
            WorkoutType::Walking | WorkoutType::Running | WorkoutType::Cycling => {
                WorkoutCategory::DistanceBased
            }
            WorkoutType::Yoga | WorkoutType::Strength => WorkoutCategory::TimeBased,
        }
    }

    /// Score weight of this type
    pub fn factor(&self) -> i64 {
        match self {
            WorkoutType::Walking => 2,
            WorkoutType::Cycling => 4,
            WorkoutType::Running => 6,
            WorkoutType::Yoga => 2,
            WorkoutType::Strength => 3,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidType(s.to_string()))
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded workout session, one element of the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub customer_id: String,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    pub date: String,    // YYYY-MM-DD
    pub time: String,    // HH:MM
    pub duration: i64,   // minutes
    #[serde(default)]
    pub distance: i64,   // metres, 0 for time-based workouts
}

impl Workout {
    pub fn category(&self) -> WorkoutCategory {
        self.kind.category()
    }

    /// Average speed in metres per minute.
    ///
    /// `None` for time-based workouts and when the duration is not positive.
    pub fn speed(&self) -> Option<f64> {
        match self.category() {
            WorkoutCategory::DistanceBased if self.duration > 0 => {
                Some(self.distance as f64 / self.duration as f64)
            }
            _ => None,
        }
    }

    /// Performance score shown next to each listed workout.
    ///
    /// Distance-based: `factor * speed`, or 0 when the duration is not positive.
    /// Time-based: `factor * duration`.
    pub fn score(&self) -> f64 {
        let factor = self.kind.factor() as f64;
        match self.category() {
            WorkoutCategory::DistanceBased => self.speed().map_or(0.0, |speed| factor * speed),
            WorkoutCategory::TimeBased => factor * self.duration as f64,
        }
    }
}
