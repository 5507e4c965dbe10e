// src/config.rs

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_LEVELS_INPUT_FILE, DEFAULT_SAMPLE_RATE_HZ};
use crate::data_analysis::angle_integration::sample_interval;
use crate::error::SensorLogResult;

/// Which set of figures to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlotMode {
    /// Acceleration and accumulated gyro angle figures (plus temperature when logged).
    Full,
    /// Acceleration only, with a double-height comparative chart.
    Levels,
}

impl PlotMode {
    pub fn default_input_file(self) -> &'static str {
        match self {
            PlotMode::Full => DEFAULT_INPUT_FILE,
            PlotMode::Levels => DEFAULT_LEVELS_INPUT_FILE,
        }
    }
}

/// Everything a run needs, passed explicitly into loading and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub input_file: PathBuf,
    pub sample_rate_hz: f64,
    pub output_dir: PathBuf,
    pub mode: PlotMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            output_dir: PathBuf::from("."),
            mode: PlotMode::Full,
        }
    }
}

impl RenderConfig {
    /// Seconds between consecutive samples.
    pub fn sample_interval(&self) -> SensorLogResult<f64> {
        sample_interval(self.sample_rate_hz)
    }

    /// Input file name without directory or extension, used to name output files.
    pub fn root_name(&self) -> String {
        self.input_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sensor_log".to_string())
    }

    /// Input file name as shown in figure titles.
    pub fn display_name(&self) -> String {
        self.input_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_file.display().to_string())
    }

    pub fn output_path(&self, suffix: &str) -> PathBuf {
        self.output_dir.join(format!("{}_{}.png", self.root_name(), suffix))
    }

    pub fn input_path(&self) -> &Path {
        &self.input_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_logger_setup() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.input_file, PathBuf::from("dados_MPU.csv"));
        assert_eq!(cfg.mode, PlotMode::Full);
        assert!((cfg.sample_interval().unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_output_naming() {
        let cfg = RenderConfig {
            input_file: PathBuf::from("logs/nivel3.csv"),
            output_dir: PathBuf::from("out"),
            ..RenderConfig::default()
        };
        assert_eq!(cfg.root_name(), "nivel3");
        assert_eq!(cfg.display_name(), "nivel3.csv");
        assert_eq!(cfg.output_path("AccelLevels"), PathBuf::from("out/nivel3_AccelLevels.png"));
    }

    #[test]
    fn test_invalid_sample_rate() {
        let cfg = RenderConfig {
            sample_rate_hz: 0.0,
            ..RenderConfig::default()
        };
        assert!(cfg.sample_interval().is_err());
    }

    #[test]
    fn test_mode_default_inputs() {
        assert_eq!(PlotMode::Full.default_input_file(), "dados_MPU.csv");
        assert_eq!(PlotMode::Levels.default_input_file(), "nivel3.csv");
    }
}
