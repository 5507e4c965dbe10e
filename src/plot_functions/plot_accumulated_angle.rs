// src/plot_functions/plot_accumulated_angle.rs

use ndarray::ArrayView1;
use std::error::Error;
use std::path::PathBuf;

use crate::axis_names::{AXIS_COUNT, AXIS_NAMES};
use crate::config::RenderConfig;
use crate::data_analysis::angle_integration::AngleSeries;
use crate::data_input::log_data::SensorLog;
use crate::plot_framework::{draw_figure, FigureConfig};
use crate::plot_functions::axis_figure::{build_axis_figure, AxisFigureLayout};
use crate::types::AllNamedChannels;

// The gyro unit is whatever the sensor was calibrated to; the label follows the
// logger's convention and no conversion is applied.
pub const ANGLE_UNIT: &str = "Degrees";

/// Describes the accumulated gyro angle figure.
pub fn accumulated_angle_figure(
    log: &SensorLog,
    angles: &AngleSeries,
    config: &RenderConfig,
) -> FigureConfig {
    let channels: AllNamedChannels = std::array::from_fn::<_, AXIS_COUNT, _>(|axis_index| {
        (
            format!("Angle {}", AXIS_NAMES[axis_index]),
            ArrayView1::from(angles.axes[axis_index].as_slice()),
        )
    });
    build_axis_figure(
        format!(
            "MPU Data - Gyroscope (Accumulated Angle) ({})",
            config.display_name()
        ),
        "Gyro Angle",
        log.sample.view(),
        &channels,
        ANGLE_UNIT,
        &format!("Comparative ({ANGLE_UNIT})"),
        AxisFigureLayout::STACKED,
    )
}

/// Generates the Stacked Accumulated Angle Plot from integrated gyro rates
pub fn plot_accumulated_angle(
    log: &SensorLog,
    angles: &AngleSeries,
    config: &RenderConfig,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = config.output_path("GyroAngle_stacked");
    draw_figure(&output_path, &accumulated_angle_figure(log, angles, config))?;
    Ok(output_path)
}
