//! Progress reporting for the chart rendering steps, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for the report progress bar
pub const DEFAULT_REPORT_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Create the progress bar that ticks once per chart
///
/// # Arguments
/// * `length` - Number of charts to render
/// * `visible` - When false the bar is hidden and draws nothing
#[must_use]
pub fn create_report_progress_bar(length: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(length);
    if let Ok(style) = ProgressStyle::default_bar().template(DEFAULT_REPORT_TEMPLATE) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// Finish a progress bar with a completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}
