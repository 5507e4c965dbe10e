// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, MAIN_TITLE_MARGIN_PX, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// X-axis domain spanning the data exactly, widened only when it collapses to a point.
pub fn calculate_domain(min_val: f64, max_val: f64) -> (f64, f64) {
    if (max_val - min_val).abs() < 1e-9 {
        (min_val - 0.5, max_val + 0.5)
    } else {
        (min_val.min(max_val), min_val.max(max_val))
    }
}

/// Y-axis tick formatting: k/M notation for large magnitudes,
/// one decimal for small fractional values.
pub fn format_y_axis_label(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub opacity: f64, // 0.0 to 1.0
}

/// One chart inside a figure.
#[derive(Clone)]
pub struct PanelConfig {
    pub title: String, // Empty for no caption.
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
}

/// A vertical slot of a figure. `panel == None` renders a "Data Unavailable" placeholder.
#[derive(Clone)]
pub struct PanelSlot {
    pub name: String,
    pub row_span: u32,
    pub panel: Option<PanelConfig>,
}

/// Explicit description of one output image: a title and panels stacked top to bottom.
#[derive(Clone)]
pub struct FigureConfig {
    pub title: String,
    pub plot_type_name: String,
    pub slots: Vec<PanelSlot>,
}

/// Bounds `(x_min, x_max, y_min, y_max)` over all finite points of `series`.
pub fn series_bounds(series: &[PlotSeries]) -> Option<(f64, f64, f64, f64)> {
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for &(x, y) in series.iter().flat_map(|s| s.data.iter()) {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, x, y, y),
            Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
        });
    }
    bounds
}

/// Splits a polyline into runs of consecutive finite points.
/// Non-finite samples break the line instead of being joined across.
pub fn finite_segments(data: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Builds a panel whose y range covers every finite point of `series`.
///
/// `x_domain` pins the x axis so panels stacked in one figure line up; with `None`
/// the domain is taken from the finite points themselves.
/// Returns `None` when there is nothing finite to draw.
pub fn build_panel(
    title: &str,
    series: Vec<PlotSeries>,
    x_domain: Option<(f64, f64)>,
    x_label: &str,
    y_label: &str,
    show_legend: bool,
) -> Option<PanelConfig> {
    let (x_min, x_max, y_min, y_max) = series_bounds(&series)?;
    let (x_start, x_end) = x_domain.unwrap_or_else(|| calculate_domain(x_min, x_max));
    let (y_start, y_end) = calculate_range(y_min, y_max);
    Some(PanelConfig {
        title: title.to_string(),
        x_range: x_start..x_end,
        y_range: y_start..y_end,
        series,
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        show_legend,
    })
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    slot_name: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (width, height) = area.dim_in_pixel();
    let message = format!("{slot_name} {plot_type} Data Unavailable:\n{reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;
    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &PanelConfig,
) -> Result<(), Box<dyn Error>> {
    let mut builder = ChartBuilder::on(area);
    builder.margin(5).x_label_area_size(50).y_label_area_size(70);
    if !panel.title.is_empty() {
        builder.caption(&panel.title, FONT_TUPLE_CHART_TITLE);
    }
    let mut chart = builder.build_cartesian_2d(panel.x_range.clone(), panel.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .x_labels(20)
        .y_labels(8)
        .y_label_formatter(&|y| format_y_axis_label(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in &panel.series {
        let color = s.color.mix(s.opacity);
        let mut labelled = false;
        for segment in finite_segments(&s.data) {
            let drawn = chart.draw_series(LineSeries::new(
                segment,
                color.stroke_width(s.stroke_width),
            ))?;
            if panel.show_legend && !labelled && !s.label.is_empty() {
                drawn.label(&s.label).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
                labelled = true;
                legend_series_count += 1;
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }
    Ok(())
}

/// Pixel height of each slot, proportional to its row span.
/// The last slot takes the rounding remainder.
pub fn slot_heights(total_height: u32, row_spans: &[u32]) -> Vec<u32> {
    let total_span: u32 = row_spans.iter().map(|&s| s.max(1)).sum();
    if total_span == 0 {
        return Vec::new();
    }
    let mut heights: Vec<u32> = row_spans
        .iter()
        .map(|&s| total_height * s.max(1) / total_span)
        .collect();
    let assigned: u32 = heights.iter().sum();
    if let Some(last) = heights.last_mut() {
        *last += total_height - assigned;
    }
    heights
}

/// Renders a figure to a PNG file.
///
/// Returns `true` when at least one panel had data to draw.
pub fn draw_figure(output_path: &Path, figure: &FigureConfig) -> Result<bool, Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        figure.title.as_str(),
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;

    let margined_root_area = root_area.margin(MAIN_TITLE_MARGIN_PX, 5, 5, 5);
    let (_, plot_height) = margined_root_area.dim_in_pixel();
    let row_spans: Vec<u32> = figure.slots.iter().map(|slot| slot.row_span).collect();
    let heights = slot_heights(plot_height, &row_spans);

    let mut any_panel_plotted = false;
    let mut remaining = margined_root_area;
    for (slot, height) in figure.slots.iter().zip(heights) {
        let (area, rest) = remaining.split_vertically(height as i32);
        remaining = rest;

        match &slot.panel {
            Some(panel) => {
                let has_data = panel.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = panel.x_range.end > panel.x_range.start
                    && panel.y_range.end > panel.y_range.start;
                if has_data && valid_ranges {
                    draw_panel(&area, panel)?;
                    any_panel_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(&area, &slot.name, &figure.plot_type_name, reason)?;
                }
            }
            None => {
                draw_unavailable_message(
                    &area,
                    &slot.name,
                    &figure.plot_type_name,
                    "No valid samples",
                )?;
            }
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        println!("  Plot saved as '{}'.", output_path.display());
    } else {
        println!(
            "  '{}' holds only placeholder messages: no data available for any panel.",
            output_path.display()
        );
    }
    Ok(any_panel_plotted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(data: Vec<(f64, f64)>) -> PlotSeries {
        PlotSeries {
            data,
            label: "s".to_string(),
            color: RED,
            stroke_width: 1,
            opacity: 1.0,
        }
    }

    #[test]
    fn test_calculate_range_pads_fifteen_percent() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo + 1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_degenerate_and_reversed() {
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
        assert_eq!(calculate_range(10.0, 0.0), calculate_range(0.0, 10.0));
    }

    #[test]
    fn test_calculate_domain() {
        assert_eq!(calculate_domain(1.0, 50.0), (1.0, 50.0));
        assert_eq!(calculate_domain(7.0, 7.0), (6.5, 7.5));
    }

    #[test]
    fn test_series_bounds_ignores_non_finite() {
        let s = vec![
            series(vec![(1.0, 2.0), (2.0, f64::NAN), (3.0, -4.0)]),
            series(vec![(4.0, f64::INFINITY), (5.0, 8.0)]),
        ];
        assert_eq!(series_bounds(&s), Some((1.0, 5.0, -4.0, 8.0)));
        assert_eq!(series_bounds(&[series(vec![(1.0, f64::NAN)])]), None);
        assert_eq!(series_bounds(&[]), None);
    }

    #[test]
    fn test_finite_segments_break_at_nan() {
        let data = vec![(0.0, 1.0), (1.0, 2.0), (2.0, f64::NAN), (3.0, 4.0)];
        assert_eq!(
            finite_segments(&data),
            vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(3.0, 4.0)]]
        );
        assert!(finite_segments(&[(0.0, f64::NAN)]).is_empty());
    }

    #[test]
    fn test_build_panel_ranges() {
        let data = vec![(1.0, 0.0), (3.0, 10.0)];
        let panel = build_panel("", vec![series(data)], None, "x", "y", false).unwrap();
        assert_eq!(panel.x_range, 1.0..3.0);
        assert_eq!(panel.y_range, -1.5..11.5);
        assert!(build_panel("", vec![series(vec![])], None, "x", "y", false).is_none());
    }

    #[test]
    fn test_build_panel_keeps_fixed_domain() {
        let data = vec![(1.0, 2.0), (2.0, f64::NAN), (3.0, f64::NAN)];
        let panel = build_panel("", vec![series(data)], Some((1.0, 5.0)), "x", "y", false).unwrap();
        assert_eq!(panel.x_range, 1.0..5.0);
        assert_eq!(panel.y_range, 1.5..2.5);
    }

    #[test]
    fn test_slot_heights_follow_row_spans() {
        assert_eq!(slot_heights(1000, &[1, 1, 1, 2]), vec![200, 200, 200, 400]);
        assert_eq!(slot_heights(100, &[1, 1, 1]), vec![33, 33, 34]);
        assert!(slot_heights(100, &[]).is_empty());
    }

    #[test]
    fn test_format_y_axis_label() {
        assert_eq!(format_y_axis_label(0.0), "0");
        assert_eq!(format_y_axis_label(9.81), "9.8");
        assert_eq!(format_y_axis_label(-0.5), "-0.5");
        assert_eq!(format_y_axis_label(360.0), "360");
        assert_eq!(format_y_axis_label(2000.0), "2k");
        assert_eq!(format_y_axis_label(2_500_000.0), "2.5M");
    }
}
