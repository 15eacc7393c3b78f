#![allow(dead_code)]

use calorie_tracker::db::DataFile;
use calorie_tracker::models::config::{Config, DATA_FILE_NAME};
use chrono::NaiveDate;
use tempfile::TempDir;

/// Create a data file handle inside a fresh temporary directory.
pub fn setup_store() -> (TempDir, DataFile) {
    let dir = TempDir::new().unwrap();
    let config = Config::with_data_file(dir.path().join(DATA_FILE_NAME));
    let db = DataFile::open(config.data_file());
    (dir, db)
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}
