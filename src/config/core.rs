use serde::{Deserialize, Serialize};

use super::ranges::{RangeConfig, RangeOverrides};
use crate::core::{InputField, ROIInputs};
use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;
use crate::roi::DEFAULT_HOURS_PER_FTE;

/// Root configuration structure (`.copilot-roi.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Starting values that replace the built-in session defaults
    #[serde(default)]
    pub inputs: Option<InputOverrides>,

    /// Slider range overrides
    #[serde(default)]
    pub ranges: Option<RangeOverrides>,

    /// Display configuration for output formatting
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl CalculatorConfig {
    /// Session defaults with any `[inputs]` overrides applied.
    pub fn starting_inputs(&self) -> ROIInputs {
        self.inputs
            .as_ref()
            .map(|o| o.apply(ROIInputs::default()))
            .unwrap_or_default()
    }

    pub fn range_config(&self) -> RangeConfig {
        self.ranges
            .as_ref()
            .map(RangeConfig::with_overrides)
            .unwrap_or_default()
    }

    pub fn display_config(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }
}

/// `[inputs]`: any subset of the input fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputOverrides {
    pub agent_count: Option<u32>,
    pub monthly_tickets: Option<f64>,
    pub avg_handle_time: Option<f64>,
    pub hourly_wage: Option<f64>,
    pub ai_cost_per_ticket: Option<f64>,
    pub time_reduction: Option<f64>,
    pub fcr_improvement: Option<f64>,
    pub escalation_cost: Option<f64>,
    pub implementation_cost: Option<f64>,
}

impl InputOverrides {
    pub fn get(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::AgentCount => self.agent_count.map(f64::from),
            InputField::MonthlyTickets => self.monthly_tickets,
            InputField::AvgHandleTime => self.avg_handle_time,
            InputField::HourlyWage => self.hourly_wage,
            InputField::AiCostPerTicket => self.ai_cost_per_ticket,
            InputField::TimeReduction => self.time_reduction,
            InputField::FcrImprovement => self.fcr_improvement,
            InputField::EscalationCost => self.escalation_cost,
            InputField::ImplementationCost => self.implementation_cost,
        }
    }

    pub fn apply(&self, base: ROIInputs) -> ROIInputs {
        InputField::ALL
            .iter()
            .fold(base, |inputs, field| match self.get(*field) {
                Some(value) => inputs.with(*field, value),
                None => inputs,
            })
    }
}

/// `[display]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Working hours per full-time employee per year
    #[serde(default = "default_hours_per_fte")]
    pub hours_per_fte: f64,

    #[serde(default)]
    pub color: Option<ColorMode>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hours_per_fte: default_hours_per_fte(),
            color: None,
        }
    }
}

pub fn default_hours_per_fte() -> f64 {
    DEFAULT_HOURS_PER_FTE
}

/// `[output]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}
