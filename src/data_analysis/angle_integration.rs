// src/data_analysis/angle_integration.rs

use std::borrow::Cow;

use crate::axis_names::AXIS_COUNT;
use crate::data_input::log_data::SensorLog;
use crate::error::{SensorLogError, SensorLogResult};

/// Accumulated angle per gyro axis [X, Y, Z], one value per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSeries {
    pub axes: [Vec<f64>; AXIS_COUNT],
}

/// Converts a sampling rate in Hz to the interval between samples in seconds.
pub fn sample_interval(sample_rate_hz: f64) -> SensorLogResult<f64> {
    if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
        return Err(SensorLogError::InvalidArgument(format!(
            "sample rate must be a positive finite number of Hz, got {sample_rate_hz}"
        )));
    }
    Ok(1.0 / sample_rate_hz)
}

/// Integrates angular rate into accumulated angle with a fixed sample interval.
///
/// `angle[i] = angle[i - 1] + rate[i] * dt`, summed strictly left to right so the
/// result matches a plain sequential prefix sum. The angle is not wrapped into
/// any range. NaN or infinite rates propagate into every later element.
///
/// No unit conversion happens here: the angle carries whatever unit the rate
/// channel was logged in, multiplied by seconds.
///
/// # Errors
/// Returns `SensorLogError::InvalidArgument` when `dt` is not a positive finite number.
pub fn integrate_angle(rate: &[f64], dt: f64) -> SensorLogResult<Vec<f64>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SensorLogError::InvalidArgument(format!(
            "sample interval must be positive and finite, got {dt}"
        )));
    }

    let mut accumulated = 0.0;
    let mut angle = Vec::with_capacity(rate.len());
    for &r in rate {
        accumulated += r * dt;
        angle.push(accumulated);
    }
    Ok(angle)
}

/// Integrates every gyro axis of `log`.
pub fn integrate_axes(log: &SensorLog, dt: f64) -> SensorLogResult<AngleSeries> {
    let gyro = log.gyro.as_ref().ok_or_else(|| {
        SensorLogError::MissingColumn("gyroscope channels (Giro_X, Giro_Y, Giro_Z)".to_string())
    })?;

    let mut axes: [Vec<f64>; AXIS_COUNT] = Default::default();
    for (axis_index, channel) in gyro.iter().enumerate() {
        // Parser-built columns are contiguous; only strided views get copied.
        let rate: Cow<[f64]> = match channel.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(channel.to_vec()),
        };
        axes[axis_index] = integrate_angle(&rate, dt)?;
    }
    Ok(AngleSeries { axes })
}
