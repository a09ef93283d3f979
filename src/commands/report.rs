use super::{prepare_inputs, write_report, AppContext};
use crate::calculator::ROICalculator;
use crate::cli::InputArgs;
use crate::formatting::formatter_for;
use crate::io::OutputFormat;
use crate::observability::set_command;
use crate::report::ROIReport;
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub inputs: InputArgs,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Write the export document and return where it went.
pub fn run_report(ctx: &AppContext, config: ReportConfig) -> Result<PathBuf> {
    let _command = set_command("report");

    let inputs = prepare_inputs(&ctx.config, &config.inputs)?;
    let calculator = ROICalculator::new(inputs);
    let report = ROIReport::new(
        calculator.snapshot(),
        Utc::now(),
        &ctx.config.display_config(),
    );

    let path = config
        .output
        .unwrap_or_else(|| PathBuf::from(report.suggested_file_name(config.format.extension())));
    write_report(&report, config.format, Some(&path), ctx.formatting)?;

    let formatter = formatter_for(ctx.formatting);
    println!(
        "{}",
        formatter.success(&format!("Report written to {}", path.display()))
    );
    Ok(path)
}
