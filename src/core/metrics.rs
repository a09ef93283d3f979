use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric encoding older consumers used for "never breaks even".
pub const LEGACY_NEVER_SENTINEL: i64 = 999;

/// Months needed to recover the implementation cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum BreakEven {
    Months(i64),
    /// Net savings are zero or negative; the investment is never recovered.
    Never,
}

impl BreakEven {
    pub fn months(&self) -> Option<i64> {
        match self {
            Self::Months(n) => Some(*n),
            Self::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    pub fn legacy_value(&self) -> i64 {
        self.months().unwrap_or(LEGACY_NEVER_SENTINEL)
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(n) => write!(f, "{n} mo"),
            Self::Never => f.write_str("N/A"),
        }
    }
}

/// Everything derived from one [`ROIInputs`](super::ROIInputs).
///
/// Values are unrounded. A new value replaces the old one on every input
/// change; nothing patches an existing `ROIMetrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ROIMetrics {
    pub current_annual_cost: f64,
    /// `current_annual_cost - annual_savings`. Not clamped; may go negative.
    pub ai_enabled_cost: f64,
    pub labor_savings: f64,
    pub escalation_savings: f64,
    pub total_ai_cost: f64,
    /// Net of AI operating cost. May be negative.
    pub annual_savings: f64,
    pub hours_saved: f64,
    pub break_even: BreakEven,
    pub year1_net_value: f64,
    pub year2_net_value: f64,
    pub year3_net_value: f64,
    /// Implementation cost these figures were computed against.
    pub implementation_cost: f64,
}

impl ROIMetrics {
    pub fn total_value_created(&self) -> f64 {
        self.labor_savings + self.escalation_savings
    }

    pub fn monthly_savings(&self) -> f64 {
        self.annual_savings / 12.0
    }

    pub fn is_positive_roi(&self) -> bool {
        self.annual_savings > 0.0
    }

    /// Cumulative net values for years 1 through 3.
    pub fn yearly_net_values(&self) -> [f64; 3] {
        [
            self.year1_net_value,
            self.year2_net_value,
            self.year3_net_value,
        ]
    }

    pub fn summary(&self) -> String {
        format!(
            "Annual savings: {:.0} | Break-even: {} | 3-year net value: {:.0}",
            self.annual_savings, self.break_even, self.year3_net_value
        )
    }
}
