//! Data model shared by the engine, the calculator and the output layer.

pub mod inputs;
pub mod metrics;
pub mod parse;

pub use inputs::{InputField, ROIInputs};
pub use metrics::{BreakEven, ROIMetrics, LEGACY_NEVER_SENTINEL};
pub use parse::{parse_fraction, parse_input_value};
