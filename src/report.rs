//! Report orchestration
//!
//! [`ReportGenerator`] loads the three Synthea exports, prints their
//! summaries, then computes and renders every chart in [`ReportChart::ALL`]
//! order. All inputs are loaded and validated before the first image is
//! written.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::algorithm::analysis::{
    age_distribution, common_conditions, conditions_by_gender, encounter_types,
    encounters_per_year, gender_distribution,
};
use crate::chart::{
    ChartSpec, render_histogram, render_horizontal_bars, render_line, render_stacked_bars,
    render_vertical_bars,
};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::models::{Condition, Encounter, FromTable, Patient};
use crate::reader::{ensure_inputs_exist, read_csv_table};
use crate::schema;
use crate::utils::logging::{
    TableSummary, create_report_progress_bar, finish_progress_bar, log_chart_written,
    log_warning, print_table_summary,
};

/// The charts of the report, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportChart {
    AgeDistribution,
    GenderDistribution,
    EncountersPerYear,
    EncounterTypes,
    CommonConditions,
    ConditionsByGender,
}

impl ReportChart {
    pub const ALL: [Self; 6] = [
        Self::AgeDistribution,
        Self::GenderDistribution,
        Self::EncountersPerYear,
        Self::EncounterTypes,
        Self::CommonConditions,
        Self::ConditionsByGender,
    ];

    /// Output file name inside the output directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::AgeDistribution => "age_distribution.png",
            Self::GenderDistribution => "gender_distribution.png",
            Self::EncountersPerYear => "encounters_per_year.png",
            Self::EncounterTypes => "encounter_types.png",
            Self::CommonConditions => "common_conditions.png",
            Self::ConditionsByGender => "conditions_by_gender.png",
        }
    }

    #[must_use]
    pub fn spec(self) -> ChartSpec {
        match self {
            Self::AgeDistribution => ChartSpec::new(
                "Age Distribution of Patients",
                "Age",
                "Frequency",
                (1000, 600),
            ),
            Self::GenderDistribution => ChartSpec::new(
                "Gender Distribution of Patients",
                "Gender",
                "Count",
                (600, 400),
            ),
            Self::EncountersPerYear => ChartSpec::new(
                "Number of Encounters per Year",
                "Year",
                "Number of Encounters",
                (1000, 600),
            ),
            Self::EncounterTypes => ChartSpec::new(
                "Distribution of Encounter Types",
                "Count",
                "Encounter Class",
                (1200, 600),
            ),
            Self::CommonConditions => ChartSpec::new(
                "Top 10 Most Common Conditions",
                "Count",
                "Condition",
                (1200, 600),
            ),
            Self::ConditionsByGender => ChartSpec::new(
                "Top 10 Conditions by Gender",
                "Condition",
                "Count",
                (1200, 800),
            ),
        }
    }
}

/// Typed rows of the three input tables
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub patients: Vec<Patient>,
    pub encounters: Vec<Encounter>,
    pub conditions: Vec<Condition>,
}

/// What a report run read and wrote
#[derive(Debug, Clone, Default)]
pub struct ReportSummary {
    /// One summary per input table, in load order
    pub tables: Vec<TableSummary>,
    /// Written images, in render order
    pub charts: Vec<PathBuf>,
}

impl ReportSummary {
    /// Row count of the table with the given title
    #[must_use]
    pub fn rows(&self, title: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|table| table.title == title)
            .map(|table| table.rows)
    }
}

/// Generates the EDA report described by a [`ReportConfig`]
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    #[must_use]
    pub const fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Load, summarize and validate all inputs
    ///
    /// Fails before reading anything when one of the input files is absent.
    pub fn load(&self) -> Result<(ReportData, Vec<TableSummary>)> {
        ensure_inputs_exist(&self.config.input_paths())?;

        let patients = read_csv_table(
            "patients",
            &self.config.patients_path(),
            schema::patients::TEXT,
        )?;
        let encounters = read_csv_table(
            "encounters",
            &self.config.encounters_path(),
            schema::encounters::TEXT,
        )?;
        let conditions = read_csv_table(
            "conditions",
            &self.config.conditions_path(),
            schema::conditions::TEXT,
        )?;

        let summaries = vec![
            print_table_summary("Patients", &patients)?,
            print_table_summary("Encounters", &encounters)?,
            print_table_summary("Conditions", &conditions)?,
        ];

        let dates = &self.config.date_format_config;
        let data = ReportData {
            patients: Patient::from_table(&patients, dates)?,
            encounters: Encounter::from_table(&encounters, dates)?,
            conditions: Condition::from_table(&conditions, dates)?,
        };

        Ok((data, summaries))
    }

    /// Compute and render one chart, returning its path and data point count
    pub fn render_chart(&self, chart: ReportChart, data: &ReportData) -> Result<(PathBuf, usize)> {
        let path = self.config.output_path(chart.file_name());
        let spec = chart.spec();
        let top_n = self.config.top_n;

        let points = match chart {
            ReportChart::AgeDistribution => {
                let dist = age_distribution(&data.patients, self.config.today, self.config.age_bins);
                if dist.excluded > 0 {
                    log_warning(
                        &format!(
                            "{} patients without a birth date excluded from the age histogram",
                            dist.excluded
                        ),
                        None,
                    );
                }
                render_histogram(&dist, &spec, &path)?;
                dist.ages.len()
            }
            ReportChart::GenderDistribution => {
                let counts = gender_distribution(&data.patients);
                render_vertical_bars(&counts, &spec, &path)?;
                counts.len()
            }
            ReportChart::EncountersPerYear => {
                let per_year = encounters_per_year(&data.encounters);
                render_line(&per_year, &spec, &path)?;
                per_year.len()
            }
            ReportChart::EncounterTypes => {
                let counts = encounter_types(&data.encounters);
                render_horizontal_bars(&counts, &spec, &path)?;
                counts.len()
            }
            ReportChart::CommonConditions => {
                let counts = common_conditions(&data.conditions, top_n);
                render_horizontal_bars(&counts, &spec, &path)?;
                counts.len()
            }
            ReportChart::ConditionsByGender => {
                let table = conditions_by_gender(&data.conditions, &data.patients, top_n);
                render_stacked_bars(&table, &spec, &path)?;
                table.rows.len() * table.columns.len()
            }
        };

        Ok((path, points))
    }

    /// Run the whole report
    pub fn run(&self) -> Result<ReportSummary> {
        let (data, tables) = self.load()?;

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| ReportError::io(output_dir, e))?;

        let pb = create_report_progress_bar(ReportChart::ALL.len() as u64, self.config.show_progress);
        let mut charts = Vec::with_capacity(ReportChart::ALL.len());

        for chart in ReportChart::ALL {
            pb.set_message(chart.file_name());
            let start = Instant::now();
            let (path, points) = self.render_chart(chart, &data)?;
            log_chart_written(&path, points, start.elapsed());
            charts.push(path);
            pb.inc(1);
        }

        finish_progress_bar(&pb, Some("Report complete"));
        Ok(ReportSummary { tables, charts })
    }
}
