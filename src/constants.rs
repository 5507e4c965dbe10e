// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, ORANGE, RED};
use plotters::style::RGBColor;

// Defaults used when the command line does not override them.
pub const DEFAULT_INPUT_FILE: &str = "dados_MPU.csv";
pub const DEFAULT_LEVELS_INPUT_FILE: &str = "nivel3.csv";
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 5.0; // Logger firmware writes one row per collection tick.

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 28;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Space above the subplots reserved for the figure title.
pub const MAIN_TITLE_MARGIN_PX: i32 = 50;

// --- Plot Color Assignments ---
// One color per axis, shared by per-axis panels and the comparative overlay.
pub const COLOR_AXIS: [&RGBColor; 3] = [&RED, &GREEN, &BLUE];
pub const COLOR_TEMPERATURE: &RGBColor = &ORANGE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Opacity of overlaid lines on the comparative chart of the levels layout.
pub const COMPARATIVE_OVERLAY_OPACITY: f64 = 0.9;

// Row weight of the comparative panel in the levels layout (per-axis panels weigh 1).
pub const LEVELS_COMPARATIVE_ROW_SPAN: u32 = 2;
