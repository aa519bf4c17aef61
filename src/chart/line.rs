//! Line chart over an integer axis

use std::path::Path;

use plotters::prelude::*;

use crate::chart::{ChartSpec, FONT_FAMILY, PRIMARY, headroom, render_png};
use crate::error::Result;

/// Render `(x, count)` points joined by a line, in the given order
pub fn render_line(points: &[(i32, usize)], spec: &ChartSpec, path: &Path) -> Result<()> {
    let (x_min, x_max) = match (points.first(), points.last()) {
        (Some((first, _)), Some((last, _))) if first < last => (*first, *last),
        (Some((only, _)), _) => (only - 1, only + 1),
        _ => (0, 1),
    };
    let y_max = headroom(points.iter().map(|(_, count)| *count).max().unwrap_or(0));
    let series: Vec<(i32, u32)> = points
        .iter()
        .map(|(x, count)| (*x, u32::try_from(*count).unwrap_or(u32::MAX)))
        .collect();

    render_png(path, spec.size, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, (FONT_FAMILY, 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, 0u32..y_max)?;

        chart
            .configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .x_label_formatter(&|x| x.to_string())
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()?;

        chart.draw_series(LineSeries::new(
            series.iter().copied(),
            PRIMARY.stroke_width(2),
        ))?;
        chart.draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, PRIMARY.filled())),
        )?;

        Ok(())
    })
}
