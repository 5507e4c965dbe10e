// src/plot_functions/plot_acceleration.rs

use std::error::Error;
use std::path::PathBuf;

use crate::axis_names::{AXIS_COUNT, AXIS_NAMES};
use crate::config::RenderConfig;
use crate::data_input::log_data::SensorLog;
use crate::plot_framework::{draw_figure, FigureConfig};
use crate::plot_functions::axis_figure::{build_axis_figure, AxisFigureLayout};
use crate::types::AllNamedChannels;

pub const ACCEL_UNIT: &str = "m/s^2";

pub(crate) fn accel_channels(log: &SensorLog) -> AllNamedChannels<'_> {
    std::array::from_fn::<_, AXIS_COUNT, _>(|axis_index| {
        (
            format!("Acel_{}", AXIS_NAMES[axis_index]),
            log.accel[axis_index].view(),
        )
    })
}

/// Describes the stacked acceleration figure: X, Y, Z and a comparative overlay.
pub fn acceleration_figure(log: &SensorLog, config: &RenderConfig) -> FigureConfig {
    build_axis_figure(
        format!("MPU Data - Collected Acceleration ({})", config.display_name()),
        "Accel",
        log.sample.view(),
        &accel_channels(log),
        ACCEL_UNIT,
        &format!("Comparative ({ACCEL_UNIT})"),
        AxisFigureLayout::STACKED,
    )
}

/// Generates the Stacked Acceleration Plot (X red, Y green, Z blue, then all three overlaid)
pub fn plot_acceleration(
    log: &SensorLog,
    config: &RenderConfig,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = config.output_path("Accel_stacked");
    draw_figure(&output_path, &acceleration_figure(log, config))?;
    Ok(output_path)
}
