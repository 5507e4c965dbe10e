// src/cli.rs

use std::path::PathBuf;

use clap::Parser;

use crate::config::{PlotMode, RenderConfig};
use crate::constants::DEFAULT_SAMPLE_RATE_HZ;

/// Render accelerometer and gyroscope charts from an MPU sensor log CSV.
///
/// Without arguments the default log for the selected mode is read from the
/// current directory.
#[derive(Debug, Parser)]
#[command(name = "MPU_CSV_Render", version = crate::crate_version())]
pub struct Cli {
    /// Sensor log CSV (defaults to dados_MPU.csv, or nivel3.csv in levels mode)
    pub input_file: Option<PathBuf>,

    /// Sampling rate the log was recorded at, in Hz
    #[arg(short = 's', long, default_value_t = DEFAULT_SAMPLE_RATE_HZ)]
    pub sample_rate: f64,

    /// Directory the PNG files are written to
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Figures to render
    #[arg(short = 'm', long, value_enum, default_value_t = PlotMode::Full)]
    pub mode: PlotMode,
}

impl Cli {
    pub fn into_config(self) -> RenderConfig {
        let input_file = self
            .input_file
            .unwrap_or_else(|| PathBuf::from(self.mode.default_input_file()));
        RenderConfig {
            input_file,
            sample_rate_hz: self.sample_rate,
            output_dir: self.output_dir,
            mode: self.mode,
        }
    }
}
