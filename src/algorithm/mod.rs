//! Algorithms behind the report charts
//!
//! `statistics` holds the generic aggregations; `analysis` applies them to
//! patients, encounters and conditions.

pub mod analysis;
pub mod statistics;

pub use analysis::{
    AgeDistribution, CategoryCounts, age_distribution, common_conditions, conditions_by_gender,
    encounter_types, encounters_per_year, gender_distribution,
};
pub use statistics::{CrossTab, Histogram};
