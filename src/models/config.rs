use std::path::{Path, PathBuf};

/// File the CLI reads and writes, relative to the working directory.
pub const DATA_FILE_NAME: &str = "calorie_data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATA_FILE_NAME),
        }
    }
}

impl Config {
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
