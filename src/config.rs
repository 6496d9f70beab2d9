//! Runtime configuration

use std::path::PathBuf;

pub const STORE_ENV: &str = "WORKOUT_STORE";
pub const DEFAULT_STORE_PATH: &str = "workouts.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_in_working_directory() {
        assert_eq!(Config::default().store_path, PathBuf::from("workouts.json"));
        assert_eq!(Config::new("/tmp/w.json").store_path, PathBuf::from("/tmp/w.json"));
    }
}
