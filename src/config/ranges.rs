//! Slider ranges for the adjustable inputs.
//!
//! Range restriction is the input layer's job. The engine accepts any number;
//! everything that collects values from a person (CLI flags, the interactive
//! session) passes them through [`RangeConfig`] first, either clamping or
//! rejecting with every violation listed.

use crate::core::{InputField, ROIInputs};
use crate::effects::{validation_from_errors, InputValidation};
use crate::errors::InputError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Restrict `value` to the range. NaN falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }
}

/// Partial override of one range, as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeOverride {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl RangeOverride {
    fn apply(&self, base: FieldRange) -> FieldRange {
        FieldRange {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            step: self.step.unwrap_or(base.step),
        }
    }
}

/// `[ranges.<field>]` tables from the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeOverrides {
    pub agent_count: Option<RangeOverride>,
    pub monthly_tickets: Option<RangeOverride>,
    pub avg_handle_time: Option<RangeOverride>,
    pub hourly_wage: Option<RangeOverride>,
    pub ai_cost_per_ticket: Option<RangeOverride>,
    pub time_reduction: Option<RangeOverride>,
    pub fcr_improvement: Option<RangeOverride>,
    pub escalation_cost: Option<RangeOverride>,
}

impl RangeOverrides {
    pub fn get(&self, field: InputField) -> Option<&RangeOverride> {
        match field {
            InputField::AgentCount => self.agent_count.as_ref(),
            InputField::MonthlyTickets => self.monthly_tickets.as_ref(),
            InputField::AvgHandleTime => self.avg_handle_time.as_ref(),
            InputField::HourlyWage => self.hourly_wage.as_ref(),
            InputField::AiCostPerTicket => self.ai_cost_per_ticket.as_ref(),
            InputField::TimeReduction => self.time_reduction.as_ref(),
            InputField::FcrImprovement => self.fcr_improvement.as_ref(),
            InputField::EscalationCost => self.escalation_cost.as_ref(),
            InputField::ImplementationCost => None,
        }
    }
}

/// Effective range for every adjustable field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeConfig {
    ranges: BTreeMap<InputField, FieldRange>,
}

impl Default for RangeConfig {
    fn default() -> Self {
        let ranges = InputField::ALL
            .iter()
            .filter_map(|field| default_range(*field).map(|range| (*field, range)))
            .collect();
        Self { ranges }
    }
}

/// Built-in slider range for an adjustable input; `None` for fixed inputs.
pub fn default_range(field: InputField) -> Option<FieldRange> {
    let range = match field {
        InputField::AgentCount => FieldRange::new(10.0, 500.0, 5.0),
        InputField::MonthlyTickets => FieldRange::new(1_000.0, 100_000.0, 1_000.0),
        InputField::AvgHandleTime => FieldRange::new(5.0, 60.0, 1.0),
        InputField::HourlyWage => FieldRange::new(15.0, 50.0, 1.0),
        InputField::AiCostPerTicket => FieldRange::new(0.01, 0.10, 0.01),
        InputField::TimeReduction => FieldRange::new(0.20, 0.80, 0.05),
        InputField::FcrImprovement => FieldRange::new(0.05, 0.30, 0.01),
        InputField::EscalationCost => FieldRange::new(30.0, 150.0, 5.0),
        InputField::ImplementationCost => return None,
    };
    Some(range)
}

impl RangeConfig {
    pub fn with_overrides(overrides: &RangeOverrides) -> Self {
        let mut config = Self::default();
        for (field, range) in config.ranges.iter_mut() {
            if let Some(o) = overrides.get(*field) {
                *range = o.apply(*range);
            }
        }
        config
    }

    /// `None` for fields that are not user adjustable.
    pub fn get(&self, field: InputField) -> Option<FieldRange> {
        self.ranges.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InputField, FieldRange)> + '_ {
        self.ranges.iter().map(|(f, r)| (*f, *r))
    }

    /// Clamp a value for `field`. Fields without a range pass through.
    pub fn clamp(&self, field: InputField, value: f64) -> f64 {
        match self.get(field) {
            Some(range) => range.clamp(value),
            None => value,
        }
    }

    /// Accept `value` for `field` as-is, or explain why not.
    pub fn check(&self, field: InputField, value: f64) -> Result<f64, InputError> {
        if !field.is_user_adjustable() {
            return Err(InputError::read_only(field, value));
        }
        if !value.is_finite() {
            return Err(InputError::non_finite(field, value));
        }
        match self.get(field) {
            Some(range) if !range.contains(value) => Err(InputError::out_of_range(
                field, value, range.min, range.max,
            )),
            _ => Ok(value),
        }
    }

    /// Clamp every adjustable field of `inputs`, returning the fields that moved.
    pub fn clamp_inputs(&self, inputs: &mut ROIInputs) -> Vec<(InputField, f64, f64)> {
        let mut adjusted = Vec::new();
        for (field, range) in self.iter() {
            let original = inputs.get(field);
            let clamped = range.clamp(original);
            if clamped != original {
                inputs.set(field, clamped);
                adjusted.push((field, original, clamped));
            }
        }
        adjusted
    }
}

/// Check every field of `inputs`, accumulating all violations.
///
/// The fixed implementation cost is only required to be finite.
pub fn validate_inputs(inputs: &ROIInputs, ranges: &RangeConfig) -> InputValidation<()> {
    let errors = InputField::ALL
        .iter()
        .filter_map(|field| {
            let value = inputs.get(*field);
            if !field.is_user_adjustable() {
                return (!value.is_finite()).then(|| InputError::non_finite(*field, value));
            }
            ranges.check(*field, value).err()
        })
        .collect();

    validation_from_errors(errors)
}
