//! Domain models for the Synthea export tables
//!
//! Typed rows extracted from the loaded CSV tables, with the derived
//! attributes the charts aggregate over.

pub mod condition;
pub mod encounter;
pub mod patient;

pub use condition::Condition;
pub use encounter::Encounter;
pub use patient::{Patient, age_in_years};

use crate::error::Result;
use crate::reader::Table;
use crate::schema::{DateFormatConfig, validate_columns};

/// Extraction of typed rows from a loaded table
pub trait FromTable: Sized {
    /// Columns that must be present in the table
    const REQUIRED_COLUMNS: &'static [&'static str];

    /// Build one value per table row
    fn from_rows(table: &Table, dates: &DateFormatConfig) -> Result<Vec<Self>>;

    /// Validate the required columns and extract all rows
    fn from_table(table: &Table, dates: &DateFormatConfig) -> Result<Vec<Self>> {
        validate_columns(table.name(), table.schema(), Self::REQUIRED_COLUMNS)?;
        Self::from_rows(table, dates)
    }
}

/// Read an optional column, yielding `None` for every row when it is absent
pub(crate) fn optional_column(table: &Table, column: &str) -> Result<Vec<Option<String>>> {
    if table.has_column(column) {
        table.string_column(column)
    } else {
        Ok(vec![None; table.num_rows()])
    }
}
