//! Validation with error accumulation for configuration.
//!
//! Every problem in a config file is collected before reporting, so one run
//! shows the user all of them.

use super::core::{CalculatorConfig, DisplayConfig, InputOverrides};
use super::ranges::RangeConfig;
use crate::core::InputField;
use crate::effects::{combine_validations, validation_from_errors, ConfigValidation};
use crate::errors::ConfigIssue;
use stillwater::Validation;

/// Validate the entire config, accumulating ALL issues.
///
/// ```rust
/// use copilot_roi::config::{validate_config, CalculatorConfig};
///
/// let validation = validate_config(&CalculatorConfig::default());
/// assert!(matches!(validation, stillwater::Validation::Success(())));
/// ```
pub fn validate_config(config: &CalculatorConfig) -> ConfigValidation<()> {
    let validations = vec![
        validate_input_overrides(config.inputs.as_ref()),
        validate_ranges(&config.range_config()),
        validate_display(config.display.as_ref()),
    ];

    match combine_validations(validations) {
        Validation::Success(_) => Validation::Success(()),
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

pub fn validate_input_overrides(inputs: Option<&InputOverrides>) -> ConfigValidation<()> {
    let Some(inputs) = inputs else {
        return Validation::Success(());
    };

    let issues = InputField::ALL
        .iter()
        .filter_map(|field| {
            let value = inputs.get(*field)?;
            (!value.is_finite())
                .then(|| ConfigIssue::new(format!("inputs.{field}"), "must be a finite number"))
        })
        .collect();

    validation_from_errors(issues)
}

pub fn validate_ranges(ranges: &RangeConfig) -> ConfigValidation<()> {
    let mut issues = Vec::new();

    for (field, range) in ranges.iter() {
        let prefix = format!("ranges.{field}");
        if !range.min.is_finite() || !range.max.is_finite() {
            issues.push(ConfigIssue::new(&prefix, "bounds must be finite"));
        } else if range.min > range.max {
            issues.push(ConfigIssue::new(
                &prefix,
                format!("min ({}) is greater than max ({})", range.min, range.max),
            ));
        }
        if range.step.is_nan() || range.step <= 0.0 {
            issues.push(ConfigIssue::new(format!("{prefix}.step"), "must be positive"));
        }
    }

    validation_from_errors(issues)
}

pub fn validate_display(display: Option<&DisplayConfig>) -> ConfigValidation<()> {
    match display {
        Some(d) if !d.hours_per_fte.is_finite() || d.hours_per_fte <= 0.0 => {
            validation_from_errors(vec![ConfigIssue::new(
                "display.hours_per_fte",
                "must be a positive number",
            )])
        }
        _ => Validation::Success(()),
    }
}
