// src/render.rs

use log::{info, warn};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::config::{PlotMode, RenderConfig};
use crate::data_analysis::angle_integration::integrate_axes;
use crate::data_input::log_data::SensorLog;
use crate::error::SensorLogError;
use crate::plot_functions::plot_acceleration::plot_acceleration;
use crate::plot_functions::plot_acceleration_levels::plot_acceleration_levels;
use crate::plot_functions::plot_accumulated_angle::plot_accumulated_angle;
use crate::plot_functions::plot_temperature::plot_temperature;

/// Acceleration, accumulated angle and (when logged) temperature.
/// The sample rate is validated here; levels mode never reads it.
fn render_full(log: &SensorLog, config: &RenderConfig) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let dt = config.sample_interval()?;
    info!(
        "Sample rate {:.3} Hz -> sample interval {:.6} s",
        config.sample_rate_hz, dt
    );

    let mut written = Vec::new();

    println!("\n--- Generating Acceleration Plot ---");
    written.push(plot_acceleration(log, config)?);

    println!("\n--- Generating Accumulated Angle Plot ---");
    match integrate_axes(log, dt) {
        Ok(angles) => written.push(plot_accumulated_angle(log, &angles, config)?),
        Err(SensorLogError::MissingColumn(what)) => {
            warn!("Skipping accumulated angle plot: no {what} in log");
        }
        Err(e) => return Err(e.into()),
    }

    if log.temperature.is_some() {
        println!("\n--- Generating Temperature Plot ---");
    }
    if let Some(path) = plot_temperature(log, config)? {
        written.push(path);
    }

    Ok(written)
}

/// Writes every figure of `config.mode` into `config.output_dir` and returns their paths.
pub fn render(log: &SensorLog, config: &RenderConfig) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    fs::create_dir_all(&config.output_dir)?;

    match config.mode {
        PlotMode::Full => render_full(log, config),
        PlotMode::Levels => {
            println!("\n--- Generating Acceleration Levels Plot ---");
            Ok(vec![plot_acceleration_levels(log, config)?])
        }
    }
}
