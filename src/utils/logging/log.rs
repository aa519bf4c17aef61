//! Logging utilities
//!
//! Standardized log lines for file reads and chart writes.

use std::path::Path;
use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `path` - Path of the file that was operated on
/// * `rows` - Number of rows processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    rows: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} rows from {} in {:?}",
            operation,
            rows,
            path.display(),
            duration
        ),
        None => log::info!(
            "Successfully {} {} rows from {}",
            operation,
            rows,
            path.display()
        ),
    }
}

/// Log a written chart image
///
/// # Arguments
/// * `path` - The image file
/// * `points` - Number of bars, bins or points drawn
/// * `elapsed` - Time spent computing and rendering
pub fn log_chart_written(path: &Path, points: usize, elapsed: Duration) {
    log::info!(
        "Wrote {} ({} data points) in {:?}",
        path.display(),
        points,
        elapsed
    );
}

/// Log a warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
