//! CLI command implementations.
//!
//! Available commands:
//! - **calculate**: Compute metrics for one set of inputs
//! - **report**: Write the printable export document
//! - **session**: Drive a live calculator from stdin
//! - **ranges**: Show the effective input ranges
//! - **init**: Create a `.copilot-roi.toml` configuration file
//!
//! Every command that accepts inputs layers them the same way: command line
//! over config `[inputs]` over the built-in defaults, then through the input
//! ranges.

pub mod calculate;
pub mod init;
pub mod ranges;
pub mod report;
pub mod session;

pub use calculate::{run_calculate, CalculateConfig};
pub use init::{init_config, init_config_at, DEFAULT_CONFIG};
pub use ranges::show_ranges;
pub use report::{run_report, ReportConfig};
pub use session::{run_session, Session};

use crate::cli::InputArgs;
use crate::config::{load_config, validate_inputs, CalculatorConfig};
use crate::core::ROIInputs;
use crate::effects::run_input_validation;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{create_writer, open_destination, OutputFormat};
use crate::report::ROIReport;
use anyhow::{Context, Result};
use std::path::Path;

/// Settings every command runs with.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: CalculatorConfig,
    pub formatting: FormattingConfig,
}

impl AppContext {
    /// Load configuration and resolve colors: flag, then config file, then
    /// environment.
    pub fn load(config_path: Option<&Path>, color: Option<ColorMode>) -> Result<Self> {
        let config = load_config(config_path).context("Failed to load configuration")?;
        Ok(Self::new(config, color))
    }

    pub fn new(config: CalculatorConfig, color: Option<ColorMode>) -> Self {
        let explicit = color.or_else(|| config.display_config().color);
        Self {
            formatting: FormattingConfig::resolve(explicit),
            config,
        }
    }
}

/// Layer command-line values over the configured starting inputs, then
/// clamp them to the ranges (or reject them all when `strict`).
pub fn prepare_inputs(config: &CalculatorConfig, args: &InputArgs) -> Result<ROIInputs> {
    let ranges = config.range_config();
    let mut inputs = config.starting_inputs();
    for (field, value) in args.overrides() {
        inputs.set(field, value);
    }

    if args.strict {
        run_input_validation(validate_inputs(&inputs, &ranges))?;
    } else {
        for (field, original, clamped) in ranges.clamp_inputs(&mut inputs) {
            tracing::warn!("{field} = {original} is out of range; using {clamped}");
        }
    }
    Ok(inputs)
}

/// Render `report` as `format` to `output`, or stdout.
///
/// Terminal output written to a file is never colored.
pub fn write_report(
    report: &ROIReport,
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> Result<()> {
    let formatting = if output.is_some() {
        FormattingConfig::plain()
    } else {
        formatting
    };
    let destination = open_destination(output)?;
    let mut writer = create_writer(format, destination, formatting);
    writer.write_report(report)
}
