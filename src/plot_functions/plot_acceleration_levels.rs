// src/plot_functions/plot_acceleration_levels.rs

use std::error::Error;
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::data_input::log_data::SensorLog;
use crate::plot_framework::{draw_figure, FigureConfig};
use crate::plot_functions::axis_figure::{build_axis_figure, AxisFigureLayout};
use crate::plot_functions::plot_acceleration::{accel_channels, ACCEL_UNIT};

/// Describes the acceleration "levels" figure: separate axes on top and a
/// double-height comparison below.
pub fn acceleration_levels_figure(log: &SensorLog, config: &RenderConfig) -> FigureConfig {
    build_axis_figure(
        format!("Complete Accelerometer Analysis - {}", config.display_name()),
        "Accel",
        log.sample.view(),
        &accel_channels(log),
        ACCEL_UNIT,
        &format!("Acceleration ({ACCEL_UNIT})"),
        AxisFigureLayout::LEVELS,
    )
}

pub fn plot_acceleration_levels(
    log: &SensorLog,
    config: &RenderConfig,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = config.output_path("AccelLevels");
    draw_figure(&output_path, &acceleration_levels_figure(log, config))?;
    Ok(output_path)
}
