// src/lib.rs - Library interface for internal module access

pub mod axis_names;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod logging;
pub mod plot_framework;
pub mod plot_functions;
pub mod render;
pub mod types;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
