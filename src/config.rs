//! Application settings.
//!
//! Nothing is read from the environment or the command line; every value
//! here is a built-in default. Tests override `data_dir` to point at a
//! temporary directory.

use std::path::PathBuf;

/// Runtime settings for the window and the CSV files
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Window title
    pub title: &'static str,
    /// Initial window size in logical pixels (width, height)
    pub window_size: (f32, f32),
    /// Directory the CSV files are written to
    pub data_dir: PathBuf,
    /// File name for finished books
    pub read_file: String,
    /// File name for the to-be-read pile
    pub to_be_read_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Reading Lists",
            window_size: (500.0, 510.0),
            // Current working directory
            data_dir: PathBuf::from("."),
            read_file: "read_books.csv".to_string(),
            to_be_read_file: "tbr.csv".to_string(),
        }
    }
}

impl Settings {
    /// Same defaults, writing into `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn read_path(&self) -> PathBuf {
        self.data_dir.join(&self.read_file)
    }

    pub fn to_be_read_path(&self) -> PathBuf {
        self.data_dir.join(&self.to_be_read_file)
    }
}
