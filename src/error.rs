//! Error types for validation and storage

use std::path::PathBuf;

use thiserror::Error;

use crate::workout::WorkoutType;

/// Why a raw input field was rejected during recording
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Customer ID must not be empty")]
    EmptyCustomerId,

    #[error("Invalid workout type: {0:?}")]
    InvalidType(String),

    #[error("Invalid {field} format: {value:?} (use {expected})")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid {field}: {value:?} is not a whole number")]
    NotANumber { field: &'static str, value: String },

    #[error("Invalid {field}: must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: i64 },

    #[error("Distance is required for {0} workouts")]
    MissingDistance(WorkoutType),
}

/// Failures of the JSON workout store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Workout store {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Workout store I/O error on {path}: {source}")]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize workouts: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
