use std::{env, path::PathBuf};

use log::LevelFilter;

use crate::utils::parse_level;

pub const DEFAULT_STORE_FILE: &str = "moods.json";

#[derive(Debug, Clone)]
pub struct JournalConfig {
    pub data_dir: PathBuf,
    pub store_file: String,
    pub log_level: LevelFilter,
}

impl JournalConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            store_file: DEFAULT_STORE_FILE.into(),
            log_level: LevelFilter::Info,
        }
    }

    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("MOODRING_DATA_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            store_file: env::var("MOODRING_STORE_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STORE_FILE.into()),
            log_level: env::var("MOODRING_LOG")
                .map(|v| parse_level(&v))
                .unwrap_or(LevelFilter::Info),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }
}
