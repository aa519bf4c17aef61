//! Exploratory data analysis report for Synthea patient exports.
//!
//! Loads `patients.csv`, `encounters.csv` and `conditions.csv`, prints a
//! summary of each table and renders a fixed set of PNG charts.

pub mod algorithm;
pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod reader;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use reader::{Table, read_csv_table};
pub use report::{ReportChart, ReportData, ReportGenerator, ReportSummary};

// Arrow types
pub use arrow::record_batch::RecordBatch;
