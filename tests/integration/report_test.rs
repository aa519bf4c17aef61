use std::fs;

use synthea_eda::algorithm::age_distribution;
use synthea_eda::{ReportChart, ReportError, ReportGenerator};

use crate::utils::{fixture_dir, fixture_today, png_files, test_config, write_file};

fn expected_files() -> Vec<String> {
    let mut names: Vec<String> = ReportChart::ALL
        .iter()
        .map(|chart| chart.file_name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_run_writes_every_chart() {
    let dir = fixture_dir();
    let summary = ReportGenerator::new(test_config(dir.path())).run().unwrap();

    assert_eq!(summary.charts.len(), ReportChart::ALL.len());
    assert_eq!(summary.rows("Patients"), Some(5));
    assert_eq!(summary.rows("Encounters"), Some(6));
    assert_eq!(summary.rows("Conditions"), Some(6));
    assert_eq!(png_files(dir.path()), expected_files());

    for path in &summary.charts {
        let bytes = fs::read(path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", path.display());
    }
}

#[test]
fn test_rerun_overwrites_outputs() {
    let dir = fixture_dir();
    let generator = ReportGenerator::new(test_config(dir.path()));

    let first = generator.run().unwrap();
    let before: Vec<Vec<u8>> = first.charts.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = generator.run().unwrap();
    let after: Vec<Vec<u8>> = second.charts.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first.charts, second.charts);
    assert_eq!(png_files(dir.path()), expected_files());
    assert_eq!(before, after);
}

#[test]
fn test_missing_patients_file_writes_nothing() {
    let dir = fixture_dir();
    fs::remove_file(dir.path().join("patients.csv")).unwrap();

    let err = ReportGenerator::new(test_config(dir.path()))
        .run()
        .unwrap_err();

    assert!(matches!(err, ReportError::MissingInput { ref path } if path.ends_with("patients.csv")));
    assert!(png_files(dir.path()).is_empty());
}

#[test]
fn test_missing_column_fails_before_any_chart() {
    let dir = fixture_dir();
    write_file(
        dir.path(),
        "conditions.csv",
        "START,PATIENT,CODE\n2019-02-17,p1,444814009\n",
    );

    let err = ReportGenerator::new(test_config(dir.path()))
        .run()
        .unwrap_err();

    assert!(matches!(err, ReportError::ColumnNotFound { ref column, .. } if column == "DESCRIPTION"));
    assert!(png_files(dir.path()).is_empty());
}

#[test]
fn test_separate_output_directory() {
    let dir = fixture_dir();
    let out = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.output_dir = out.path().join("charts");

    ReportGenerator::new(config).run().unwrap();

    assert_eq!(png_files(&out.path().join("charts")), expected_files());
    assert!(png_files(dir.path()).is_empty());
}

#[test]
fn test_empty_tables_still_render() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "patients.csv", "Id,BIRTHDATE,GENDER\n");
    write_file(dir.path(), "encounters.csv", "Id,START,ENCOUNTERCLASS\n");
    write_file(dir.path(), "conditions.csv", "PATIENT,DESCRIPTION\n");

    let summary = ReportGenerator::new(test_config(dir.path())).run().unwrap();

    assert_eq!(summary.rows("Patients"), Some(0));
    assert_eq!(png_files(dir.path()), expected_files());
}

#[test]
fn test_impossible_birth_date_does_not_abort() {
    let dir = fixture_dir();
    write_file(
        dir.path(),
        "patients.csv",
        "Id,BIRTHDATE,GENDER\np1,1990-01-01,F\np2,1990-02-30,M\n",
    );
    let generator = ReportGenerator::new(test_config(dir.path()));

    let (data, _) = generator.load().unwrap();
    let dist = age_distribution(&data.patients, fixture_today(), 30);
    assert_eq!(dist.excluded, 1);
    assert_eq!(dist.ages.len(), 1);

    let summary = generator.run().unwrap();
    assert_eq!(summary.charts.len(), ReportChart::ALL.len());
    assert_eq!(png_files(dir.path()), expected_files());
}

#[test]
fn test_blank_patient_id_does_not_abort() {
    let dir = fixture_dir();
    write_file(
        dir.path(),
        "patients.csv",
        "Id,BIRTHDATE,GENDER\np1,1990-01-01,F\n,1980-01-01,M\n",
    );

    let summary = ReportGenerator::new(test_config(dir.path())).run().unwrap();

    assert_eq!(summary.rows("Patients"), Some(2));
    assert_eq!(png_files(dir.path()), expected_files());
}
