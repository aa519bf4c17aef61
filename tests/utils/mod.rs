use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use synthea_eda::ReportConfig;
use tempfile::TempDir;

pub const PATIENTS_CSV: &str = "\
Id,BIRTHDATE,DEATHDATE,FIRST,LAST,GENDER
p1,1990-01-01,,Ana,Silva,F
p2,1985-06-15,,Ben,Olsen,M
p3,2000-03-20,,Cleo,Park,F
p4,1960-11-02,2020-01-01,Dan,Moore,M
p5,,,Eve,Stone,F
";

pub const ENCOUNTERS_CSV: &str = "\
Id,START,STOP,PATIENT,ENCOUNTERCLASS,DESCRIPTION
e1,2019-02-17T10:00:00Z,2019-02-17T10:15:00Z,p1,wellness,Well child visit
e2,2019-05-01T08:00:00Z,2019-05-01T08:30:00Z,p2,ambulatory,Encounter for symptom
e3,2020-01-10T09:30:00Z,,p3,ambulatory,Encounter for symptom
e4,2020-07-04T14:00:00Z,,p1,emergency,Emergency room admission
e5,2021-03-03T11:00:00Z,,p4,ambulatory,Encounter for problem
e6,2021-12-31T23:00:00Z,,p2,wellness,General examination of patient
";

pub const CONDITIONS_CSV: &str = "\
START,STOP,PATIENT,ENCOUNTER,CODE,DESCRIPTION
2019-02-17,,p1,e1,444814009,Viral sinusitis (disorder)
2019-05-01,,p2,e2,444814009,Viral sinusitis (disorder)
2020-01-10,,p3,e3,195662009,Acute viral pharyngitis (disorder)
2020-07-04,,p1,e4,10509002,Acute bronchitis (disorder)
2021-03-03,,p4,e5,444814009,Viral sinusitis (disorder)
2021-12-31,,ghost,e6,40055000,Chronic sinusitis (disorder)
";

/// Run date the fixtures are written against
#[must_use]
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Write a file into a directory
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Temporary directory holding the three fixture CSV files
#[must_use]
pub fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "patients.csv", PATIENTS_CSV);
    write_file(dir.path(), "encounters.csv", ENCOUNTERS_CSV);
    write_file(dir.path(), "conditions.csv", CONDITIONS_CSV);
    dir
}

/// Report configuration over a directory, with the pinned run date and no progress bar
#[must_use]
pub fn test_config(dir: &Path) -> ReportConfig {
    ReportConfig::in_dir(dir)
        .with_today(fixture_today())
        .with_progress(false)
}

/// Names of the PNG files in a directory, sorted
#[must_use]
pub fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            name.ends_with(".png").then_some(name)
        })
        .collect();
    names.sort();
    names
}
