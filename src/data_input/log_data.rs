// src/data_input/log_data.rs

use ndarray::{Array1, ArrayView1};
use ndarray_stats::QuantileExt;

use crate::axis_names::AXIS_COUNT;

/// Column-wise contents of one MPU sensor log.
/// Built once by the parser and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SensorLog {
    pub sample: Array1<f64>,                       // Sample number as written by the logger.
    pub accel: [Array1<f64>; AXIS_COUNT],          // Acceleration [X, Y, Z] in m/s^2.
    pub gyro: Option<[Array1<f64>; AXIS_COUNT]>,   // Angular rate [X, Y, Z], calibrated unit.
    pub temperature: Option<Array1<f64>>,          // Die temperature in degrees C, when logged.
}

impl SensorLog {
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    pub fn has_gyro(&self) -> bool {
        self.gyro.is_some()
    }
}

/// Smallest and largest non-NaN value of a channel, or `None` when there is none.
pub fn channel_extent(channel: ArrayView1<f64>) -> Option<(f64, f64)> {
    if channel.is_empty() {
        return None;
    }
    let min = *channel.min_skipnan();
    let max = *channel.max_skipnan();
    if min.is_nan() || max.is_nan() {
        None
    } else {
        Some((min, max))
    }
}
