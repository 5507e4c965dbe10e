// src/logging.rs

use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

/// Initializes the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let level_color = match record.level() {
                Level::Error => "\x1b[31m\x1b[1m",
                Level::Warn => "\x1b[33m\x1b[1m",
                Level::Info => "\x1b[32m",
                Level::Debug => "\x1b[36m",
                Level::Trace => "\x1b[90m",
            };
            writeln!(
                buf,
                "{}{:<5}\x1b[0m [{}] {}",
                level_color,
                record.level(),
                record.target(),
                record.args(),
            )
        })
        .init();
}
