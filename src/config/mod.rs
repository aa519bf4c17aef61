//! Configuration for the EDA report.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::schema::date_utils::DateFormatConfig;

/// Default input file names, resolved against [`ReportConfig::input_dir`]
pub const PATIENTS_FILE: &str = "patients.csv";
pub const ENCOUNTERS_FILE: &str = "encounters.csv";
pub const CONDITIONS_FILE: &str = "conditions.csv";

/// Configuration for the `ReportGenerator`
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding the three input CSV files
    pub input_dir: PathBuf,
    /// Directory the chart images are written to
    pub output_dir: PathBuf,
    /// Reference date for age calculation
    pub today: NaiveDate,
    /// Number of categories kept by the top-N condition charts
    pub top_n: usize,
    /// Number of histogram bins for the age distribution
    pub age_bins: usize,
    /// Whether to display a progress bar while rendering charts
    pub show_progress: bool,
    /// Date format configuration for string-to-date conversions
    pub date_format_config: DateFormatConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            today: Local::now().date_naive(),
            top_n: 10,
            age_bins: 30,
            show_progress: true,
            date_format_config: DateFormatConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Configuration reading from and writing to the same directory
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            input_dir: dir.as_ref().to_path_buf(),
            output_dir: dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    #[must_use]
    pub fn patients_path(&self) -> PathBuf {
        self.input_dir.join(PATIENTS_FILE)
    }

    #[must_use]
    pub fn encounters_path(&self) -> PathBuf {
        self.input_dir.join(ENCOUNTERS_FILE)
    }

    #[must_use]
    pub fn conditions_path(&self) -> PathBuf {
        self.input_dir.join(CONDITIONS_FILE)
    }

    /// All input paths in load order
    #[must_use]
    pub fn input_paths(&self) -> [PathBuf; 3] {
        [
            self.patients_path(),
            self.encounters_path(),
            self.conditions_path(),
        ]
    }

    /// Path of an output image inside the output directory
    #[must_use]
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
