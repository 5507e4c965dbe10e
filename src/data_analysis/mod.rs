// src/data_analysis/mod.rs

pub mod angle_integration;
