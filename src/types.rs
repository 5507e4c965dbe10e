// src/types.rs
// Type aliases shared by the plot functions

use crate::axis_names::AXIS_COUNT;
use ndarray::ArrayView1;

/// (sample number, value) points of one channel.
pub type AxisPlotData = Vec<(f64, f64)>;
pub type AllAxisPlotData = [AxisPlotData; AXIS_COUNT];

/// A named channel borrowed from a sensor log or a derived series.
pub type NamedChannel<'a> = (String, ArrayView1<'a, f64>);
pub type AllNamedChannels<'a> = [NamedChannel<'a>; AXIS_COUNT];
