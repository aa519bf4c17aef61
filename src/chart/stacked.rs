//! Stacked bar chart over a cross tabulation

use std::path::Path;

use plotters::prelude::*;

use crate::algorithm::CrossTab;
use crate::chart::{
    ChartSpec, FONT_FAMILY, SERIES_COLORS, category_bound, headroom, render_png, segment_label,
};
use crate::error::Result;

/// Render one bar per row, stacking one segment per column
///
/// Rows run left to right in table order; columns stack bottom-up and get
/// a legend entry each.
pub fn render_stacked_bars(table: &CrossTab, spec: &ChartSpec, path: &Path) -> Result<()> {
    let labels = table.rows.clone();
    let y_max = headroom(
        (0..table.rows.len())
            .map(|idx| table.row_total(idx))
            .max()
            .unwrap_or(0),
    );
    let n = category_bound(labels.len());

    // (bottom, top) of every segment, per column then row
    let mut bottoms = vec![0u32; table.rows.len()];
    let segments: Vec<Vec<(u32, u32)>> = (0..table.columns.len())
        .map(|col| {
            table
                .counts
                .iter()
                .zip(bottoms.iter_mut())
                .map(|(row, bottom)| {
                    let count = u32::try_from(row[col]).unwrap_or(u32::MAX);
                    let segment = (*bottom, bottom.saturating_add(count));
                    *bottom = segment.1;
                    segment
                })
                .collect()
        })
        .collect();

    render_png(path, spec.size, |root| {
        let rotated = (FONT_FAMILY, 11)
            .into_font()
            .transform(FontTransform::Rotate90);

        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, (FONT_FAMILY, 22))
            .margin(15)
            .x_label_area_size(280)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..n).into_segmented(), 0u32..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len() + 1)
            .x_label_formatter(&|v| segment_label(v, &labels))
            .x_label_style(rotated)
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()?;

        for (col, (name, column_segments)) in table.columns.iter().zip(&segments).enumerate() {
            let color = SERIES_COLORS[col % SERIES_COLORS.len()];
            chart
                .draw_series(column_segments.iter().enumerate().map(
                    |(row, &(bottom, top))| {
                        let row = row as u32;
                        let mut bar = Rectangle::new(
                            [
                                (SegmentValue::Exact(row), bottom),
                                (SegmentValue::Exact(row + 1), top),
                            ],
                            color.filled(),
                        );
                        bar.set_margin(0, 0, 10, 10);
                        bar
                    },
                ))?
                .label(name.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
        }

        if !table.columns.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font((FONT_FAMILY, 14))
                .draw()?;
        }

        Ok(())
    })
}

