//! Single-series categorical bar charts

use std::path::Path;

use plotters::prelude::*;

use crate::algorithm::CategoryCounts;
use crate::chart::{
    ChartSpec, FONT_FAMILY, PRIMARY, category_bound, headroom, render_png, segment_label,
};
use crate::error::Result;

/// Render counts as vertical bars, categories left to right in given order
pub fn render_vertical_bars(counts: &CategoryCounts, spec: &ChartSpec, path: &Path) -> Result<()> {
    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let y_max = headroom(counts.iter().map(|(_, count)| *count).max().unwrap_or(0));
    let n = category_bound(labels.len());

    render_png(path, spec.size, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, (FONT_FAMILY, 20))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..n).into_segmented(), 0u32..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len() + 1)
            .x_label_formatter(&|v| segment_label(v, &labels))
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(PRIMARY.filled())
                .margin(12)
                .data(counts.iter().enumerate().map(|(idx, (_, count))| {
                    (idx as u32, u32::try_from(*count).unwrap_or(u32::MAX))
                })),
        )?;

        Ok(())
    })
}

/// Render counts as horizontal bars, first category at the top
pub fn render_horizontal_bars(
    counts: &CategoryCounts,
    spec: &ChartSpec,
    path: &Path,
) -> Result<()> {
    // Plotters counts y upwards, so the first category gets the highest slot
    let labels: Vec<String> = counts.iter().rev().map(|(label, _)| label.clone()).collect();
    let x_max = headroom(counts.iter().map(|(_, count)| *count).max().unwrap_or(0));
    let n = category_bound(labels.len());
    let label_width = labels
        .iter()
        .map(|label| label.chars().count().min(crate::chart::MAX_LABEL_CHARS))
        .max()
        .unwrap_or(0);
    let y_label_area = u32::try_from(label_width * 7 + 30).unwrap_or(400).min(420);

    render_png(path, spec.size, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, (FONT_FAMILY, 20))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(y_label_area)
            .build_cartesian_2d(0u32..x_max, (0u32..n).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(labels.len() + 1)
            .y_label_formatter(&|v| segment_label(v, &labels))
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()?;

        let last = labels.len().saturating_sub(1);
        chart.draw_series(
            Histogram::horizontal(&chart)
                .style(PRIMARY.filled())
                .margin(6)
                .data(counts.iter().enumerate().map(|(idx, (_, count))| {
                    ((last - idx) as u32, u32::try_from(*count).unwrap_or(u32::MAX))
                })),
        )?;

        Ok(())
    })
}
