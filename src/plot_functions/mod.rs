// src/plot_functions/mod.rs

pub mod axis_figure;
pub mod plot_acceleration;
pub mod plot_acceleration_levels;
pub mod plot_accumulated_angle;
pub mod plot_temperature;
