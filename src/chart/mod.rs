//! PNG chart rendering
//!
//! Each chart kind has its own module with a `render_*` function taking
//! the analysis output, a [`ChartSpec`] and the output path. Drawing goes
//! through [`render_png`], which registers the bundled font, paints the
//! background and maps plotters errors into [`ReportError::Render`].

pub mod bar;
pub mod histogram;
pub mod line;
pub mod stacked;

pub use bar::{render_horizontal_bars, render_vertical_bars};
pub use histogram::render_histogram;
pub use line::render_line;
pub use stacked::render_stacked_bars;

use std::path::Path;
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};

use crate::error::{ReportError, Result};

/// Font family name every chart asks for
pub const FONT_FAMILY: &str = "sans-serif";

static FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static FONT_REGISTERED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Primary bar and line color
pub const PRIMARY: RGBColor = RGBColor(31, 119, 180);

/// Series colors for multi-series charts, cycled by index
pub const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Longest category label drawn before truncation
pub const MAX_LABEL_CHARS: usize = 48;

pub(crate) type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Title, axis labels and pixel size of a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: (u32, u32),
}

impl ChartSpec {
    #[must_use]
    pub fn new(title: &str, x_label: &str, y_label: &str, size: (u32, u32)) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            size,
        }
    }
}

/// Register the bundled font under [`FONT_FAMILY`], once per process
pub fn register_fonts() -> Result<()> {
    FONT_REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| "bundled DejaVu Sans could not be loaded".to_string())
        })
        .clone()
        .map_err(ReportError::Font)
}

/// Draw onto a white PNG canvas and write it to `path`
///
/// An existing file at `path` is replaced.
pub(crate) fn render_png<F>(path: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> DrawResult,
{
    register_fonts()?;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    let draw_all = || -> DrawResult {
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
        Ok(())
    };
    draw_all().map_err(|e| ReportError::render(path, e))
}

/// Upper axis bound leaving headroom above the largest value
#[must_use]
pub fn headroom(max: usize) -> u32 {
    let max = u32::try_from(max).unwrap_or(u32::MAX);
    max.saturating_add((max / 10).max(1))
}

/// Shorten a category label to [`MAX_LABEL_CHARS`]
#[must_use]
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        short.push('…');
        short
    }
}

/// Label for a segment of a categorical axis
pub(crate) fn segment_label(value: &SegmentValue<u32>, labels: &[String]) -> String {
    match value {
        SegmentValue::CenterOf(idx) => labels
            .get(*idx as usize)
            .map(|label| truncate_label(label))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Number of categories as an axis bound, at least 1 so the axis is valid
pub(crate) fn category_bound(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX).max(1)
}
