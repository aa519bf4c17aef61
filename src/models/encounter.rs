//! Encounter entity model

use chrono::{Datelike, NaiveDateTime};

use crate::error::{ReportError, Result};
use crate::models::{FromTable, optional_column};
use crate::reader::Table;
use crate::schema::{DateFormatConfig, encounters, parse_timestamp_string};

/// A row of `encounters.csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    /// Encounter identifier, when the export has one
    pub id: Option<String>,
    /// Reference to `Patient::id`
    pub patient: Option<String>,
    /// Start of the encounter
    pub start: Option<NaiveDateTime>,
    /// Encounter class (ambulatory, wellness, emergency, ...)
    pub class: Option<String>,
}

impl Encounter {
    /// Calendar year the encounter started in
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.start.map(|start| start.year())
    }
}

impl FromTable for Encounter {
    const REQUIRED_COLUMNS: &'static [&'static str] = encounters::REQUIRED;

    /// Fails on the first non-empty `START` value that is not a timestamp.
    fn from_rows(table: &Table, dates: &DateFormatConfig) -> Result<Vec<Self>> {
        let ids = optional_column(table, encounters::ID)?;
        let patients = optional_column(table, encounters::PATIENT)?;
        let starts = table.string_column(encounters::START)?;
        let classes = table.string_column(encounters::ENCOUNTERCLASS)?;

        ids.into_iter()
            .zip(patients)
            .zip(starts)
            .zip(classes)
            .enumerate()
            .map(|(row, (((id, patient), start), class))| {
                let start = start
                    .map(|raw| {
                        parse_timestamp_string(&raw, dates).ok_or_else(|| {
                            ReportError::invalid_value(table.name(), encounters::START, row, raw)
                        })
                    })
                    .transpose()?;
                Ok(Self {
                    id,
                    patient,
                    start,
                    class,
                })
            })
            .collect()
    }
}
