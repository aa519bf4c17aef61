//! Condition entity model

use crate::error::Result;
use crate::models::FromTable;
use crate::reader::Table;
use crate::schema::{DateFormatConfig, conditions};

/// A row of `conditions.csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Reference to `Patient::id`
    pub patient: Option<String>,
    /// Free-text condition description
    pub description: Option<String>,
}

impl Condition {
    #[must_use]
    pub fn new(patient: &str, description: &str) -> Self {
        Self {
            patient: Some(patient.to_string()),
            description: Some(description.to_string()),
        }
    }
}

impl FromTable for Condition {
    const REQUIRED_COLUMNS: &'static [&'static str] = conditions::REQUIRED;

    fn from_rows(table: &Table, _dates: &DateFormatConfig) -> Result<Vec<Self>> {
        let patients = table.string_column(conditions::PATIENT)?;
        let descriptions = table.string_column(conditions::DESCRIPTION)?;

        Ok(patients
            .into_iter()
            .zip(descriptions)
            .map(|(patient, description)| Self {
                patient,
                description,
            })
            .collect())
    }
}
