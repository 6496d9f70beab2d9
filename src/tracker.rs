//! Tracker - validates new workouts, stores them and scores listings

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, ValidationError};
use crate::store::WorkoutRepository;
use crate::validate::{
    DATE_FORMAT, TIME_FORMAT, validate_customer_id, validate_date, validate_distance,
    validate_duration, validate_time, validate_type,
};
use crate::workout::{Workout, WorkoutCategory};

/// Trimmed, not yet validated input for one workout.
///
/// `distance` is only looked at for distance-based types.
#[derive(Debug, Clone, Default)]
pub struct RawWorkout<'a> {
    pub customer_id: &'a str,
    pub kind: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub duration: &'a str,
    pub distance: Option<&'a str>,
}

impl RawWorkout<'_> {
    /// Check every field in input order, stopping at the first failure
    pub fn validate(&self) -> std::result::Result<Workout, ValidationError> {
        let customer_id = validate_customer_id(self.customer_id)?;
        let kind = validate_type(self.kind)?;
        let date = validate_date(self.date)?;
        let time = validate_time(self.time)?;
        let duration = validate_duration(self.duration)?;
        let distance = match kind.category() {
            WorkoutCategory::DistanceBased => match self.distance {
                Some(distance) => validate_distance(distance)?,
                None => return Err(ValidationError::MissingDistance(kind)),
            },
            WorkoutCategory::TimeBased => 0,
        };

        Ok(Workout {
            customer_id,
            kind,
            date: date.format(DATE_FORMAT).to_string(),
            time: time.format(TIME_FORMAT).to_string(),
            duration,
            distance,
        })
    }
}

/// A stored workout with its derived numbers
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWorkout {
    pub workout: Workout,
    pub speed: Option<f64>,
    pub score: f64,
}

impl From<Workout> for ScoredWorkout {
    fn from(workout: Workout) -> Self {
        Self {
            speed: workout.speed(),
            score: workout.score(),
            workout,
        }
    }
}

/// Result of listing one customer's workouts
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Empty,
    Entries(Vec<ScoredWorkout>),
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn entries(&self) -> &[ScoredWorkout] {
        match self {
            Listing::Empty => &[],
            Listing::Entries(entries) => entries,
        }
    }
}

pub struct Tracker {
    repo: WorkoutRepository,
}

impl Tracker {
    pub fn new(repo: WorkoutRepository) -> Self {
        Self { repo }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(WorkoutRepository::new(config.store_path.clone()))
    }

    pub fn repository(&self) -> &WorkoutRepository {
        &self.repo
    }

    /// Validate raw input and append it to the store
    pub fn record(&self, raw: &RawWorkout<'_>) -> Result<Workout> {
        let workout = raw.validate().inspect_err(|e| warn!("Workout rejected: {}", e))?;
        self.repo.save(&workout)?;
        info!(
            customer_id = %workout.customer_id,
            kind = %workout.kind,
            date = %workout.date,
            "Workout recorded"
        );
        Ok(workout)
    }

    /// All workouts of a customer with scores, in insertion order
    pub fn list(&self, customer_id: &str) -> Result<Listing> {
        let workouts = self.repo.fetch(customer_id)?;
        if workouts.is_empty() {
            return Ok(Listing::Empty);
        }
        Ok(Listing::Entries(
            workouts.into_iter().map(ScoredWorkout::from).collect(),
        ))
    }
}
