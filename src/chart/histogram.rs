//! Histogram with a density overlay

use std::path::Path;

use plotters::prelude::*;

use crate::algorithm::AgeDistribution;
use crate::chart::{ChartSpec, FONT_FAMILY, PRIMARY, render_png};
use crate::error::Result;

/// Render binned counts as adjacent bars with the density curve on top
///
/// Without any binned values an empty frame with the title and axes is
/// written.
pub fn render_histogram(dist: &AgeDistribution, spec: &ChartSpec, path: &Path) -> Result<()> {
    let (x_range, y_max) = match &dist.histogram {
        Some(hist) => {
            let density_max = dist
                .density
                .iter()
                .flatten()
                .map(|(_, y)| *y)
                .fold(0.0, f64::max);
            let y_max = (hist.max_count() as f64).max(density_max);
            (hist.range(), y_max * 1.1)
        }
        None => ((0.0, 1.0), 1.0),
    };
    let y_max = y_max.max(1.0);

    render_png(path, spec.size, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, (FONT_FAMILY, 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.0..x_range.1, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.0}"))
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()?;

        if let Some(hist) = &dist.histogram {
            chart.draw_series(hist.bins().map(|(left, right, count)| {
                Rectangle::new(
                    [(left, 0.0), (right, count as f64)],
                    PRIMARY.mix(0.5).filled(),
                )
            }))?;
            chart.draw_series(hist.bins().map(|(left, right, count)| {
                Rectangle::new([(left, 0.0), (right, count as f64)], PRIMARY.stroke_width(1))
            }))?;
        }

        if let Some(density) = &dist.density {
            chart.draw_series(LineSeries::new(
                density.iter().copied(),
                PRIMARY.stroke_width(2),
            ))?;
        }

        Ok(())
    })
}
