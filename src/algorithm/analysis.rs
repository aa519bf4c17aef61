//! Chart data for each report section
//!
//! One function per chart. Each takes the typed rows it needs and returns
//! the series the renderer draws, so the aggregations can be checked
//! without producing images.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::algorithm::statistics::{
    CrossTab, Histogram, counts_by_key, counts_in_appearance_order, gaussian_kde, linspace,
    value_counts,
};
use crate::models::{Condition, Encounter, Patient};

/// Number of points the density overlay is evaluated at
pub const DENSITY_POINTS: usize = 200;

/// Histogram of patient ages with a density curve scaled to counts
#[derive(Debug, Clone, PartialEq)]
pub struct AgeDistribution {
    /// Ages of patients with a known birth date
    pub ages: Vec<i64>,
    /// Patients left out for lack of a birth date
    pub excluded: usize,
    /// `None` when no patient has a known age
    pub histogram: Option<Histogram>,
    /// `(age, expected count)` points, `None` when the ages do not vary
    pub density: Option<Vec<(f64, f64)>>,
}

/// Categorical counts in display order
pub type CategoryCounts = Vec<(String, usize)>;

/// Ages at `today` binned into `bins` bins, with a KDE overlay
#[must_use]
pub fn age_distribution(patients: &[Patient], today: NaiveDate, bins: usize) -> AgeDistribution {
    let ages: Vec<i64> = patients.iter().filter_map(|p| p.age_at(today)).collect();
    let excluded = patients.len() - ages.len();

    let values: Vec<f64> = ages.iter().map(|&age| age as f64).collect();
    let histogram = Histogram::from_values(&values, bins);

    let density = histogram.as_ref().and_then(|hist| {
        let (lo, hi) = hist.range();
        let grid = linspace(lo, hi, DENSITY_POINTS);
        let scale = values.len() as f64 * hist.bin_width();
        gaussian_kde(&values, &grid).map(|density| {
            grid.into_iter()
                .zip(density)
                .map(|(x, d)| (x, d * scale))
                .collect()
        })
    });

    AgeDistribution {
        ages,
        excluded,
        histogram,
        density,
    }
}

/// Patients per gender, in order of first appearance
#[must_use]
pub fn gender_distribution(patients: &[Patient]) -> CategoryCounts {
    counts_in_appearance_order(patients.iter().filter_map(|p| p.gender.clone()))
}

/// Encounters per start year, years ascending
#[must_use]
pub fn encounters_per_year(encounters: &[Encounter]) -> Vec<(i32, usize)> {
    counts_by_key(encounters.iter().filter_map(Encounter::year))
}

/// Encounters per class, most frequent first
#[must_use]
pub fn encounter_types(encounters: &[Encounter]) -> CategoryCounts {
    value_counts(encounters.iter().filter_map(|e| e.class.clone()))
}

/// The `n` most frequent condition descriptions, most frequent first
#[must_use]
pub fn common_conditions(conditions: &[Condition], n: usize) -> CategoryCounts {
    let mut counts = value_counts(conditions.iter().filter_map(|c| c.description.clone()));
    counts.truncate(n);
    counts
}

/// Condition counts per patient gender for the `n` most frequent descriptions
///
/// Conditions are inner-joined to patients on the patient identifier;
/// conditions without a matching patient, or whose patient has no gender,
/// are dropped. Patients with a blank identifier join nothing.
#[must_use]
pub fn conditions_by_gender(conditions: &[Condition], patients: &[Patient], n: usize) -> CrossTab {
    // A patient id listed twice joins each of its rows; blank ids never match
    let mut genders_by_patient: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for patient in patients {
        if let (Some(id), Some(gender)) = (patient.id.as_deref(), patient.gender.as_deref()) {
            genders_by_patient.entry(id).or_default().push(gender);
        }
    }

    let pairs = conditions.iter().flat_map(|condition| {
        let matches = match (condition.patient.as_deref(), condition.description.as_ref()) {
            (Some(patient), Some(description)) => genders_by_patient
                .get(patient)
                .map(|genders| (description, genders.as_slice())),
            _ => None,
        };
        matches.into_iter().flat_map(|(description, genders)| {
            genders
                .iter()
                .map(move |gender| (description.clone(), (*gender).to_string()))
        })
    });

    CrossTab::from_pairs(pairs).top_rows(n)
}
