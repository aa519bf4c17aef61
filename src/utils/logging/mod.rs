//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging, console output, and progress tracking.

pub mod console;
pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use console::{ColumnSummary, TableSummary, print_table_summary};
pub use log::{log_chart_written, log_operation_complete, log_operation_start, log_warning};
pub use progress::{create_report_progress_bar, finish_progress_bar};
