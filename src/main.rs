use anyhow::Context;
use log::info;
use synthea_eda::{ReportConfig, ReportGenerator};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let generator = ReportGenerator::new(ReportConfig::default());
    let summary = generator
        .run()
        .context("Failed to generate the Synthea EDA report")?;

    for table in &summary.tables {
        info!("{} ({}): {} rows", table.title, table.file_name, table.rows);
    }
    info!(
        "Wrote {} charts to {}",
        summary.charts.len(),
        generator.config().output_dir.display()
    );

    Ok(())
}
