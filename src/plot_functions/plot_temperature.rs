// src/plot_functions/plot_temperature.rs

use std::error::Error;
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::constants::{COLOR_TEMPERATURE, LINE_WIDTH_PLOT};
use crate::data_input::log_data::SensorLog;
use crate::plot_framework::{build_panel, draw_figure, FigureConfig, PanelSlot, PlotSeries};
use crate::plot_functions::axis_figure::{channel_points, sample_domain, SAMPLE_AXIS_LABEL};

/// Describes the temperature figure, or `None` when the log has no temperature column.
pub fn temperature_figure(log: &SensorLog, config: &RenderConfig) -> Option<FigureConfig> {
    let temperature = log.temperature.as_ref()?;
    let series = vec![PlotSeries {
        data: channel_points(log.sample.view(), temperature.view()),
        label: "Temp".to_string(),
        color: *COLOR_TEMPERATURE,
        stroke_width: LINE_WIDTH_PLOT,
        opacity: 1.0,
    }];
    let x_domain = sample_domain(log.sample.view());
    Some(FigureConfig {
        title: format!("MPU Data - Temperature ({})", config.display_name()),
        plot_type_name: "Temperature".to_string(),
        slots: vec![PanelSlot {
            name: "Temp".to_string(),
            row_span: 1,
            panel: build_panel("", series, x_domain, SAMPLE_AXIS_LABEL, "Temp (C)", false),
        }],
    })
}

/// Generates the temperature plot.
/// Returns `Ok(None)` without writing anything when no temperature was logged.
pub fn plot_temperature(
    log: &SensorLog,
    config: &RenderConfig,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let Some(figure) = temperature_figure(log, config) else {
        return Ok(None);
    };
    let output_path = config.output_path("Temperature");
    draw_figure(&output_path, &figure)?;
    Ok(Some(output_path))
}
