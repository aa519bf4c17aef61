//! Column layout of the Synthea CSV exports used by the report.

pub mod date_utils;

pub use date_utils::{DateFormatConfig, parse_date_string, parse_timestamp_string};

use arrow::datatypes::Schema;

use crate::error::{ReportError, Result};

/// Columns read from `patients.csv`
pub mod patients {
    pub const ID: &str = "Id";
    pub const BIRTHDATE: &str = "BIRTHDATE";
    pub const GENDER: &str = "GENDER";

    pub const REQUIRED: &[&str] = &[ID, BIRTHDATE, GENDER];
    /// Decoded as text and parsed by the model
    pub const TEXT: &[&str] = &[ID, BIRTHDATE, GENDER];
}

/// Columns read from `encounters.csv`
pub mod encounters {
    pub const ID: &str = "Id";
    pub const PATIENT: &str = "PATIENT";
    pub const START: &str = "START";
    pub const ENCOUNTERCLASS: &str = "ENCOUNTERCLASS";

    /// `Id` and `PATIENT` are read when present but not needed by any chart
    pub const REQUIRED: &[&str] = &[START, ENCOUNTERCLASS];
    pub const TEXT: &[&str] = &[ID, PATIENT, START, ENCOUNTERCLASS];
}

/// Columns read from `conditions.csv`
pub mod conditions {
    pub const PATIENT: &str = "PATIENT";
    pub const DESCRIPTION: &str = "DESCRIPTION";

    pub const REQUIRED: &[&str] = &[PATIENT, DESCRIPTION];
    pub const TEXT: &[&str] = &[PATIENT, DESCRIPTION];
}

/// Check that every required column is present in a schema
///
/// Reports the first missing column in `required` order.
pub fn validate_columns(table: &str, schema: &Schema, required: &[&str]) -> Result<()> {
    match required
        .iter()
        .find(|column| schema.index_of(column).is_err())
    {
        Some(column) => Err(ReportError::column_not_found(table, column)),
        None => Ok(()),
    }
}
