//! Module for handling date and timestamp parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Configuration for date and timestamp string parsing
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// List of timestamp format strings tried before the date formats
    pub timestamp_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%d-%m-%Y".to_string(), // European: 15-01-2023
                "%m/%d/%Y".to_string(), // US: 01/15/2023
                "%d/%m/%Y".to_string(), // UK: 15/01/2023
                "%d.%m.%Y".to_string(), // German/Danish: 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
            ],
            timestamp_formats: vec![
                "%Y-%m-%dT%H:%M:%S%.f".to_string(), // 2019-02-16T08:19:26.123
                "%Y-%m-%dT%H:%M:%S".to_string(),    // 2019-02-16T08:19:26
                "%Y-%m-%d %H:%M:%S%.f".to_string(), // 2019-02-16 08:19:26.123
                "%Y-%m-%d %H:%M:%S".to_string(),    // 2019-02-16 08:19:26
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    // Timestamps carry a date too
    parse_timestamp_string(s, config).map(|ts| ts.date())
}

/// Parse a timestamp string, falling back to a date at midnight
///
/// Zoned timestamps (`2019-02-16T08:19:26Z`, `...+01:00`) keep their wall-clock
/// time; the offset is dropped, not applied.
#[must_use]
pub fn parse_timestamp_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.naive_local());
    }

    for format in &config.timestamp_formats {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts);
        }
    }

    config
        .date_formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    // ISO-like format with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d");
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d");
            } else if parts[2].len() == 4 {
                return Some("%d/%m/%Y");
            }
        }
    }

    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y");
        }
    }

    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d");
    }

    None
}
