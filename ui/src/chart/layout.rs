//! Pixel geometry for the series chart.
//!
//! Everything is expressed in the logical viewport of [`ChartConfig`]; the
//! SVG `viewBox` matches it, so the browser handles physical scaling.

use time::Date;

use crate::core::config::{ChartConfig, ChartVariant};
use crate::series::SeriesPoint;

use super::highlight::is_highlighted;
use super::scale::LinearScale;

/// A series point placed in the viewport.
///
/// Bars span `x..x + width` horizontally and `y..y + height` vertically. Line
/// vertices have zero width and height and sit at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPoint {
    pub point: SeriesPoint,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub highlighted: bool,
}

impl PlacedPoint {
    /// Where a tooltip for this point is pinned: top-centre of a bar, or the vertex.
    pub fn anchor(&self) -> Anchor {
        Anchor {
            x: self.x + self.width / 2.0,
            y: self.y,
        }
    }
}

/// A position in chart-local logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub variant: ChartVariant,
    pub width: f64,
    pub height: f64,
    pub scale: LinearScale,
    pub placed: Vec<PlacedPoint>,
    /// SVG path data through every vertex; only set for the line variant.
    pub line_path: Option<String>,
    pub first_label: Option<AxisLabel>,
    pub last_label: Option<AxisLabel>,
}

impl ChartLayout {
    pub fn compute(points: &[SeriesPoint], config: &ChartConfig, today: Date) -> Self {
        let visible = visible_window(points, config.max_visible_points);
        let scale = LinearScale::fit(visible, config);

        let placed = match config.variant {
            ChartVariant::Bar => place_bars(visible, config, &scale, today),
            ChartVariant::Line => place_vertices(visible, config, &scale, today),
        };

        let line_path = match config.variant {
            ChartVariant::Line if !placed.is_empty() => Some(line_path(&placed)),
            _ => None,
        };

        let first_label = visible.first().map(|point| AxisLabel {
            text: point.date_key(),
            x: config.padding,
            y: config.height,
        });
        let last_label = visible.last().map(|point| AxisLabel {
            text: point.date_key(),
            x: config.width - config.padding,
            y: config.height,
        });

        Self {
            variant: config.variant,
            width: config.width,
            height: config.height,
            scale,
            placed,
            line_path,
            first_label,
            last_label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Anchor as CSS percentages of the viewport, for HTML overlays.
    pub fn anchor_percent(&self, anchor: Anchor) -> (f64, f64) {
        let pct = |value: f64, extent: f64| {
            if extent > 0.0 {
                value / extent * 100.0
            } else {
                0.0
            }
        };
        (pct(anchor.x, self.width), pct(anchor.y, self.height))
    }
}

/// The most recent `max_visible` points. Older history is dropped.
pub fn visible_window(points: &[SeriesPoint], max_visible: usize) -> &[SeriesPoint] {
    let start = points.len().saturating_sub(max_visible);
    &points[start..]
}

fn place_bars(
    visible: &[SeriesPoint],
    config: &ChartConfig,
    scale: &LinearScale,
    today: Date,
) -> Vec<PlacedPoint> {
    if visible.is_empty() {
        return Vec::new();
    }

    let count = visible.len() as f64;
    let bar_width = (config.plot_width() / count - config.bar_gap).max(0.0);
    let baseline = config.baseline();

    visible
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let y = scale.y(point.value);
            PlacedPoint {
                point: point.clone(),
                x: config.padding + index as f64 * (bar_width + config.bar_gap),
                y,
                width: bar_width,
                height: (baseline - y).max(0.0),
                highlighted: is_highlighted(point.date, today),
            }
        })
        .collect()
}

fn place_vertices(
    visible: &[SeriesPoint],
    config: &ChartConfig,
    scale: &LinearScale,
    today: Date,
) -> Vec<PlacedPoint> {
    let step = if visible.len() > 1 {
        config.plot_width() / (visible.len() - 1) as f64
    } else {
        0.0
    };
    // A lone point sits in the middle of the plot.
    let offset = if visible.len() == 1 {
        config.plot_width() / 2.0
    } else {
        0.0
    };

    visible
        .iter()
        .enumerate()
        .map(|(index, point)| PlacedPoint {
            point: point.clone(),
            x: config.padding + offset + index as f64 * step,
            y: scale.y(point.value),
            width: 0.0,
            height: 0.0,
            highlighted: is_highlighted(point.date, today),
        })
        .collect()
}

fn line_path(placed: &[PlacedPoint]) -> String {
    placed
        .iter()
        .enumerate()
        .map(|(index, vertex)| {
            let command = if index == 0 { 'M' } else { 'L' };
            format!("{command} {:.2} {:.2}", vertex.x, vertex.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
