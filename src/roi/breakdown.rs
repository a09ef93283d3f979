use crate::core::ROIMetrics;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueDirection {
    /// Adds to net value.
    Gain,
    /// Recurring cost.
    Cost,
    /// One-time cost.
    OneTime,
}

impl ValueDirection {
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Gain => "+",
            Self::Cost | Self::OneTime => "-",
        }
    }
}

/// One line of the "show your work" breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueComponent {
    pub name: &'static str,
    pub amount: f64,
    pub direction: ValueDirection,
    pub explanation: &'static str,
}

pub fn value_breakdown(metrics: &ROIMetrics) -> Vec<ValueComponent> {
    vec![
        ValueComponent {
            name: "Labor Savings",
            amount: metrics.labor_savings,
            direction: ValueDirection::Gain,
            explanation: "Reduced handle time × hourly wage",
        },
        ValueComponent {
            name: "Escalation Savings",
            amount: metrics.escalation_savings,
            direction: ValueDirection::Gain,
            explanation: "Improved FCR reduces costly escalations",
        },
        ValueComponent {
            name: "AI Operational Cost",
            amount: metrics.total_ai_cost,
            direction: ValueDirection::Cost,
            explanation: "Annual token/compute costs",
        },
        ValueComponent {
            name: "Implementation Cost",
            amount: metrics.implementation_cost,
            direction: ValueDirection::OneTime,
            explanation: "One-time setup (amortized over 3 years)",
        },
    ]
}
