//! workoutlog - Personal workout logger
//!
//! Records walking, running, cycling, yoga and strength sessions per customer
//! in a JSON file and lists them with a performance score.

pub mod cli;
pub mod config;
pub mod error;
pub mod store;
pub mod tracker;
pub mod tui;
pub mod validate;
pub mod workout;

pub use config::Config;
pub use error::{Result, StoreError, TrackerError, ValidationError};
pub use store::WorkoutRepository;
pub use tracker::{Listing, RawWorkout, ScoredWorkout, Tracker};
pub use workout::{Workout, WorkoutCategory, WorkoutType};
