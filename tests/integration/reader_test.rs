use synthea_eda::ReportError;
use synthea_eda::models::{Condition, Encounter, FromTable, Patient};
use synthea_eda::reader::read_csv_table;
use synthea_eda::schema::{self, DateFormatConfig};
use synthea_eda::utils::logging::TableSummary;

use crate::utils::{fixture_dir, fixture_today, write_file};

#[test]
fn test_read_patients_table() {
    let dir = fixture_dir();
    let table = read_csv_table("patients", &dir.path().join("patients.csv"), schema::patients::TEXT).unwrap();

    assert_eq!(table.num_rows(), 5);
    assert_eq!(table.num_columns(), 6);
    assert!(table.has_column("BIRTHDATE"));
    assert_eq!(table.null_count("BIRTHDATE").unwrap(), 1);
    assert_eq!(table.null_count("DEATHDATE").unwrap(), 4);
    assert_eq!(table.null_count("GENDER").unwrap(), 0);
}

#[test]
fn test_table_summary_counts_nulls() {
    let dir = fixture_dir();
    let table = read_csv_table("conditions", &dir.path().join("conditions.csv"), schema::conditions::TEXT).unwrap();
    let summary = TableSummary::from_table("Conditions", &table).unwrap();

    assert_eq!(summary.file_name, "conditions.csv");
    assert_eq!(summary.rows, 6);
    assert_eq!(summary.columns.len(), 6);

    let stop = summary.columns.iter().find(|c| c.name == "STOP").unwrap();
    assert_eq!(stop.nulls, 6);
    assert_eq!(stop.non_null, 0);

    let description = summary
        .columns
        .iter()
        .find(|c| c.name == "DESCRIPTION")
        .unwrap();
    assert_eq!(description.nulls, 0);
    assert_eq!(description.dtype, "Utf8");

    let code = summary.columns.iter().find(|c| c.name == "CODE").unwrap();
    assert_eq!(code.dtype, "Int64");
}

#[test]
fn test_models_from_tables() {
    let dir = fixture_dir();
    let dates = DateFormatConfig::default();

    let patients = read_csv_table("patients", &dir.path().join("patients.csv"), schema::patients::TEXT).unwrap();
    let patients = Patient::from_table(&patients, &dates).unwrap();
    assert_eq!(patients.len(), 5);
    assert_eq!(patients[0].id.as_deref(), Some("p1"));
    assert_eq!(patients[0].age_at(fixture_today()), Some(34));
    assert_eq!(patients[4].birth_date, None);
    assert_eq!(patients[4].gender.as_deref(), Some("F"));

    let encounters = read_csv_table("encounters", &dir.path().join("encounters.csv"), schema::encounters::TEXT).unwrap();
    let encounters = Encounter::from_table(&encounters, &dates).unwrap();
    assert_eq!(encounters.len(), 6);
    assert_eq!(encounters[0].year(), Some(2019));
    assert_eq!(encounters[5].year(), Some(2021));

    let conditions = read_csv_table("conditions", &dir.path().join("conditions.csv"), schema::conditions::TEXT).unwrap();
    let conditions = Condition::from_table(&conditions, &dates).unwrap();
    assert_eq!(conditions[5], Condition::new("ghost", "Chronic sinusitis (disorder)"));
}

#[test]
fn test_missing_required_column() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "patients.csv", "Id,BIRTHDATE\np1,1990-01-01\n");

    let table = read_csv_table("patients", &dir.path().join("patients.csv"), schema::patients::TEXT).unwrap();
    let err = Patient::from_table(&table, &DateFormatConfig::default()).unwrap_err();
    match err {
        ReportError::ColumnNotFound { table, column } => {
            assert_eq!(table, "patients");
            assert_eq!(column, "GENDER");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unparseable_start_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "encounters.csv",
        "Id,START,PATIENT,ENCOUNTERCLASS\ne1,2019-02-17T10:00:00Z,p1,wellness\ne2,yesterday,p1,ambulatory\n",
    );

    let table = read_csv_table("encounters", &dir.path().join("encounters.csv"), schema::encounters::TEXT).unwrap();
    let err = Encounter::from_table(&table, &DateFormatConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ReportError::InvalidValue { ref column, row: 1, .. } if column == "START"
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_csv_table("patients", &dir.path().join("patients.csv"), schema::patients::TEXT).unwrap_err();
    assert!(matches!(err, ReportError::MissingInput { .. }));
}

#[test]
fn test_impossible_birth_date_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "patients.csv",
        "Id,BIRTHDATE,GENDER\np1,1990-01-01,F\np2,1990-02-30,M\n",
    );

    let table = read_csv_table("patients", &dir.path().join("patients.csv"), schema::patients::TEXT)
        .unwrap();
    let patients = Patient::from_table(&table, &DateFormatConfig::default()).unwrap();

    assert_eq!(patients.len(), 2);
    assert!(patients[0].birth_date.is_some());
    assert_eq!(patients[1].birth_date, None);
    assert_eq!(patients[1].gender.as_deref(), Some("M"));
}

#[test]
fn test_numeric_ids_keep_leading_zeros() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "patients.csv", "Id,BIRTHDATE,GENDER\n007,1990-01-01,F\n");
    write_file(dir.path(), "conditions.csv", "PATIENT,DESCRIPTION\n007,Asthma\n");

    let dates = DateFormatConfig::default();
    let patients = read_csv_table("patients", &dir.path().join("patients.csv"), schema::patients::TEXT)
        .unwrap();
    let patients = Patient::from_table(&patients, &dates).unwrap();
    let conditions = read_csv_table(
        "conditions",
        &dir.path().join("conditions.csv"),
        schema::conditions::TEXT,
    )
    .unwrap();
    let conditions = Condition::from_table(&conditions, &dates).unwrap();

    assert_eq!(patients[0].id.as_deref(), Some("007"));
    assert_eq!(conditions[0].patient.as_deref(), Some("007"));
}

#[test]
fn test_blank_patient_id_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "patients.csv",
        "Id,BIRTHDATE,GENDER\np1,1990-01-01,F\n,1980-01-01,M\n",
    );

    let table = read_csv_table("patients", &dir.path().join("patients.csv"), schema::patients::TEXT)
        .unwrap();
    let patients = Patient::from_table(&table, &DateFormatConfig::default()).unwrap();

    assert_eq!(patients.len(), 2);
    assert_eq!(patients[1].id, None);
    assert_eq!(patients[1].age_at(fixture_today()), Some(44));
}
