use synthea_eda::algorithm::analysis::{
    age_distribution, common_conditions, conditions_by_gender, encounter_types,
    encounters_per_year, gender_distribution,
};
use synthea_eda::{ReportData, ReportGenerator};

use crate::utils::{fixture_dir, fixture_today, test_config};

fn fixture_data() -> ReportData {
    let dir = fixture_dir();
    let (data, _) = ReportGenerator::new(test_config(dir.path())).load().unwrap();
    data
}

#[test]
fn test_encounters_per_year_sums_to_row_count() {
    let data = fixture_data();
    let per_year = encounters_per_year(&data.encounters);

    assert_eq!(per_year, vec![(2019, 2), (2020, 2), (2021, 2)]);
    let total: usize = per_year.iter().map(|(_, count)| count).sum();
    assert_eq!(total, data.encounters.len());
}

#[test]
fn test_encounter_types_descending() {
    let data = fixture_data();
    let types = encounter_types(&data.encounters);

    assert_eq!(
        types,
        vec![
            ("ambulatory".to_string(), 3),
            ("wellness".to_string(), 2),
            ("emergency".to_string(), 1),
        ]
    );
}

#[test]
fn test_gender_distribution_in_first_seen_order() {
    let data = fixture_data();
    assert_eq!(
        gender_distribution(&data.patients),
        vec![("F".to_string(), 3), ("M".to_string(), 2)]
    );
}

#[test]
fn test_age_distribution_skips_missing_birth_dates() {
    let data = fixture_data();
    let dist = age_distribution(&data.patients, fixture_today(), 30);

    assert_eq!(dist.ages.len(), 4);
    assert_eq!(dist.excluded, 1);
    assert_eq!(dist.histogram.unwrap().total(), 4);
}

#[test]
fn test_common_conditions_is_idempotent() {
    let data = fixture_data();
    let first = common_conditions(&data.conditions, 10);
    let second = common_conditions(&data.conditions, 10);

    assert_eq!(first, second);
    assert_eq!(first[0], ("Viral sinusitis (disorder)".to_string(), 3));
    // Ties keep the order of first appearance
    assert_eq!(first[1].0, "Acute viral pharyngitis (disorder)");
    assert_eq!(first[2].0, "Acute bronchitis (disorder)");
    assert_eq!(first[3].0, "Chronic sinusitis (disorder)");
}

#[test]
fn test_common_conditions_limits_to_n() {
    let data = fixture_data();
    assert_eq!(common_conditions(&data.conditions, 2).len(), 2);
}

#[test]
fn test_conditions_by_gender_join() {
    let data = fixture_data();
    let tab = conditions_by_gender(&data.conditions, &data.patients, 10);

    // The condition of the unknown patient is left out
    assert!(!tab.rows.iter().any(|row| row == "Chronic sinusitis (disorder)"));
    assert_eq!(tab.total(), 5);

    assert_eq!(tab.columns, vec!["F", "M"]);
    assert_eq!(
        tab.rows,
        vec![
            "Viral sinusitis (disorder)",
            "Acute bronchitis (disorder)",
            "Acute viral pharyngitis (disorder)",
        ]
    );
    assert_eq!(tab.count("Viral sinusitis (disorder)", "F"), 1);
    assert_eq!(tab.count("Viral sinusitis (disorder)", "M"), 2);
    // Missing combinations are filled with zero
    assert_eq!(tab.counts[1], vec![1, 0]);

    let again = conditions_by_gender(&data.conditions, &data.patients, 10);
    assert_eq!(tab, again);
}
