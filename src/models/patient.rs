//! Patient entity model

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::FromTable;
use crate::reader::Table;
use crate::schema::{DateFormatConfig, parse_date_string, patients};

/// Days per year used by the age approximation
pub const DAYS_PER_YEAR: i64 = 365;

/// Whole years between a birth date and a reference date
///
/// Counts elapsed days and floor-divides by 365, so leap days make the
/// result run slightly ahead of calendar age near birthdays.
#[must_use]
pub fn age_in_years(birth_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    (reference_date - birth_date)
        .num_days()
        .div_euclid(DAYS_PER_YEAR)
}

/// A row of `patients.csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Patient identifier, `None` when blank
    pub id: Option<String>,
    /// Birth date, `None` when missing or unparseable
    pub birth_date: Option<NaiveDate>,
    /// Gender category
    pub gender: Option<String>,
}

impl Patient {
    #[must_use]
    pub fn new(id: &str, birth_date: Option<NaiveDate>, gender: Option<&str>) -> Self {
        Self {
            id: Some(id.to_string()),
            birth_date,
            gender: gender.map(str::to_string),
        }
    }

    /// Age at the reference date, `None` without a birth date
    #[must_use]
    pub fn age_at(&self, reference_date: NaiveDate) -> Option<i64> {
        self.birth_date
            .map(|birth_date| age_in_years(birth_date, reference_date))
    }
}

impl FromTable for Patient {
    const REQUIRED_COLUMNS: &'static [&'static str] = patients::REQUIRED;

    fn from_rows(table: &Table, dates: &DateFormatConfig) -> Result<Vec<Self>> {
        let ids = table.string_column(patients::ID)?;
        let birth_dates = table.string_column(patients::BIRTHDATE)?;
        let genders = table.string_column(patients::GENDER)?;

        let mut unparsed = 0usize;
        let rows = ids
            .into_iter()
            .zip(birth_dates)
            .zip(genders)
            .map(|((id, birth_date), gender)| {
                let birth_date = birth_date.and_then(|raw| {
                    let parsed = parse_date_string(&raw, dates);
                    if parsed.is_none() {
                        unparsed += 1;
                    }
                    parsed
                });
                Self {
                    id,
                    birth_date,
                    gender,
                }
            })
            .collect::<Vec<_>>();

        if unparsed > 0 {
            log::warn!(
                "{unparsed} birth dates in {} could not be parsed and are treated as missing",
                table.name()
            );
        }
        Ok(rows)
    }
}
