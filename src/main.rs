// src/main.rs

use clap::Parser;
use log::info;
use std::error::Error;

use mpu_csv_render::cli::Cli;
use mpu_csv_render::crate_version;
use mpu_csv_render::data_input::log_parser::parse_sensor_log;
use mpu_csv_render::error::SensorLogError;
use mpu_csv_render::logging::init_logger;
use mpu_csv_render::render::render;

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();
    let config = Cli::parse().into_config();
    info!("MPU_CSV_Render v{}", crate_version());

    let log = match parse_sensor_log(config.input_path()) {
        Ok(log) => log,
        Err(SensorLogError::InputNotFound { path }) => {
            println!("\nERROR: File '{}' not found.", path.display());
            println!("Check that the CSV file is in the current directory or pass its path.");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let written = render(&log, &config)?;

    info!(
        "{} plot(s) written to '{}'.",
        written.len(),
        config.output_dir.display()
    );
    Ok(())
}
