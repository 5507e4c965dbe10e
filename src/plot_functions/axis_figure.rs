// src/plot_functions/axis_figure.rs

use ndarray::ArrayView1;

use crate::axis_names::AXIS_COUNT;
use crate::constants::{
    COLOR_AXIS, COMPARATIVE_OVERLAY_OPACITY, LEVELS_COMPARATIVE_ROW_SPAN, LINE_WIDTH_PLOT,
};
use crate::data_input::log_data::channel_extent;
use crate::plot_framework::{build_panel, calculate_domain, FigureConfig, PanelSlot, PlotSeries};
use crate::types::{AllAxisPlotData, AllNamedChannels, AxisPlotData};

pub const SAMPLE_AXIS_LABEL: &str = "Sample Number";

/// Placement and styling knobs for the "three axes + comparative" figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFigureLayout {
    pub separate_title: &'static str,
    pub comparative_title: &'static str,
    pub comparative_row_span: u32,
    pub comparative_opacity: f64,
}

impl AxisFigureLayout {
    /// Four equal rows, no panel captions.
    pub const STACKED: Self = Self {
        separate_title: "",
        comparative_title: "",
        comparative_row_span: 1,
        comparative_opacity: 1.0,
    };

    /// Three single rows and a double-height comparative chart, each section captioned.
    pub const LEVELS: Self = Self {
        separate_title: "Separate Axes",
        comparative_title: "Comparative Chart",
        comparative_row_span: LEVELS_COMPARATIVE_ROW_SPAN,
        comparative_opacity: COMPARATIVE_OVERLAY_OPACITY,
    };
}

/// Pairs each value with its sample number. Extra values on either side are dropped.
pub fn channel_points(sample: ArrayView1<f64>, values: ArrayView1<f64>) -> AxisPlotData {
    sample
        .iter()
        .zip(values.iter())
        .map(|(&x, &y)| (x, y))
        .collect()
}

/// X domain covering every finite sample number. Shared by all panels of a figure.
pub fn sample_domain(sample: ArrayView1<f64>) -> Option<(f64, f64)> {
    channel_extent(sample)
        .filter(|(min, max)| min.is_finite() && max.is_finite())
        .map(|(min, max)| calculate_domain(min, max))
}

fn axis_series(name: &str, data: AxisPlotData, axis_index: usize, opacity: f64) -> PlotSeries {
    PlotSeries {
        data,
        label: name.to_string(),
        color: *COLOR_AXIS[axis_index],
        stroke_width: LINE_WIDTH_PLOT,
        opacity,
    }
}

/// Builds a figure with one panel per axis followed by a comparative overlay of all three.
///
/// Per-axis panels are labelled `"<name> (<unit>)"`. Only the comparative panel
/// carries a legend and the sample-number axis label. Every panel spans the same
/// sample range, even when a channel turns non-finite part way through.
pub fn build_axis_figure(
    title: String,
    plot_type_name: &str,
    sample: ArrayView1<f64>,
    channels: &AllNamedChannels,
    unit: &str,
    comparative_y_label: &str,
    layout: AxisFigureLayout,
) -> FigureConfig {
    let x_domain = sample_domain(sample);
    let mut axis_plot_data: AllAxisPlotData = Default::default();
    for (axis_index, (_, values)) in channels.iter().enumerate() {
        axis_plot_data[axis_index] = channel_points(sample, *values);
    }

    let mut slots = Vec::with_capacity(AXIS_COUNT + 1);
    for (axis_index, (name, _)) in channels.iter().enumerate() {
        let data = axis_plot_data[axis_index].clone();
        let series = vec![axis_series(name, data, axis_index, 1.0)];
        let panel_title = if axis_index == 0 { layout.separate_title } else { "" };
        let y_label = format!("{name} ({unit})");
        slots.push(PanelSlot {
            name: name.clone(),
            row_span: 1,
            panel: build_panel(panel_title, series, x_domain, "", &y_label, false),
        });
    }

    let comparative_series: Vec<PlotSeries> = channels
        .iter()
        .zip(axis_plot_data)
        .enumerate()
        .map(|(axis_index, ((name, _), data))| {
            axis_series(name, data, axis_index, layout.comparative_opacity)
        })
        .collect();
    slots.push(PanelSlot {
        name: "Comparative".to_string(),
        row_span: layout.comparative_row_span,
        panel: build_panel(
            layout.comparative_title,
            comparative_series,
            x_domain,
            SAMPLE_AXIS_LABEL,
            comparative_y_label,
            true,
        ),
    });

    FigureConfig {
        title,
        plot_type_name: plot_type_name.to_string(),
        slots,
    }
}
