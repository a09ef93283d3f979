use super::{prepare_inputs, write_report, AppContext};
use crate::calculator::ROICalculator;
use crate::cli::InputArgs;
use crate::io::OutputFormat;
use crate::observability::set_command;
use crate::report::ROIReport;
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct CalculateConfig {
    pub inputs: InputArgs,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn run_calculate(ctx: &AppContext, config: CalculateConfig) -> Result<()> {
    let _command = set_command("calculate");

    let inputs = prepare_inputs(&ctx.config, &config.inputs)?;
    let calculator = ROICalculator::new(inputs);
    tracing::info!("{}", calculator.metrics().summary());

    let format = config
        .format
        .or_else(|| ctx.config.default_format())
        .unwrap_or(OutputFormat::Terminal);
    let report = ROIReport::new(
        calculator.snapshot(),
        Utc::now(),
        &ctx.config.display_config(),
    );

    write_report(&report, format, config.output.as_deref(), ctx.formatting)
}
