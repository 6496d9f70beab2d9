//! Store module - JSON file storage for workout records

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::workout::Workout;

/// Append-only workout repository backed by one JSON array file.
///
/// Nothing is cached: every call reads the file again, so the file is the
/// only source of truth. Callers sharing a file across processes must
/// serialize access themselves.
#[derive(Debug, Clone)]
pub struct WorkoutRepository {
    path: PathBuf,
}

impl WorkoutRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a workout to the end of the store
    pub fn save(&self, workout: &Workout) -> Result<(), StoreError> {
        let mut workouts = self.load()?;
        workouts.push(workout.clone());
        self.persist(&workouts)?;
        debug!(path = %self.path.display(), total = workouts.len(), "Workout appended");
        Ok(())
    }

    /// All workouts of one customer, in insertion order
    pub fn fetch(&self, customer_id: &str) -> Result<Vec<Workout>, StoreError> {
        let workouts: Vec<Workout> = self
            .load()?
            .into_iter()
            .filter(|w| w.customer_id == customer_id)
            .collect();
        debug!(customer_id, found = workouts.len(), "Workouts fetched");
        Ok(workouts)
    }

    /// Every stored workout; a missing file is an empty store
    pub fn load(&self) -> Result<Vec<Workout>, StoreError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::StorageIo {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&data).map_err(|source| StoreError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    /// Rewrite the whole file via a sibling temp file and rename
    fn persist(&self, workouts: &[Workout]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(workouts)?;
        let io_err = |source: std::io::Error| StoreError::StorageIo {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
