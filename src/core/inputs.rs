use serde::{Deserialize, Serialize};
use std::fmt;

/// Business parameters the ROI model is computed from.
///
/// Fractional fields (`time_reduction`, `fcr_improvement`) are stored as
/// fractions, never as percentages. Nothing here is validated; range
/// restriction belongs to whatever collects the values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ROIInputs {
    /// Support agents on the team. Stored for display only.
    pub agent_count: u32,
    pub monthly_tickets: f64,
    /// Minutes spent on one ticket today.
    pub avg_handle_time: f64,
    /// Fully loaded cost per agent hour.
    pub hourly_wage: f64,
    pub ai_cost_per_ticket: f64,
    pub time_reduction: f64,
    pub fcr_improvement: f64,
    pub escalation_cost: f64,
    /// One-time setup cost. Fixed for a session.
    pub implementation_cost: f64,
}

impl Default for ROIInputs {
    fn default() -> Self {
        Self {
            agent_count: 50,
            monthly_tickets: 10_000.0,
            avg_handle_time: 15.0,
            hourly_wage: 28.0,
            ai_cost_per_ticket: 0.04,
            time_reduction: 0.50,
            fcr_improvement: 0.15,
            escalation_cost: 75.0,
            implementation_cost: 50_000.0,
        }
    }
}

impl ROIInputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::AgentCount => f64::from(self.agent_count),
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

    /// Replace a single field.
    ///
    /// `agent_count` is rounded and saturates into `u32` (negative and NaN
    /// become 0); every other field is stored as given.
    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::AgentCount => self.agent_count = value.round() as u32,
            InputField::MonthlyTickets => self.monthly_tickets = value,
            InputField::AvgHandleTime => self.avg_handle_time = value,
            InputField::HourlyWage => self.hourly_wage = value,
            InputField::AiCostPerTicket => self.ai_cost_per_ticket = value,
            InputField::TimeReduction => self.time_reduction = value,
            InputField::FcrImprovement => self.fcr_improvement = value,
            InputField::EscalationCost => self.escalation_cost = value,
            InputField::ImplementationCost => self.implementation_cost = value,
        }
    }

    /// Builder-style variant of [`ROIInputs::set`].
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

/// Names one field of [`ROIInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    AgentCount,
    MonthlyTickets,
    AvgHandleTime,
    HourlyWage,
    AiCostPerTicket,
    TimeReduction,
    FcrImprovement,
    EscalationCost,
    ImplementationCost,
}

impl InputField {
    /// Every field, in form order.
    pub const ALL: [InputField; 9] = [
        InputField::AgentCount,
        InputField::MonthlyTickets,
        InputField::AvgHandleTime,
        InputField::HourlyWage,
        InputField::TimeReduction,
        InputField::AiCostPerTicket,
        InputField::FcrImprovement,
        InputField::EscalationCost,
        InputField::ImplementationCost,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AgentCount => "agent_count",
            Self::MonthlyTickets => "monthly_tickets",
            Self::AvgHandleTime => "avg_handle_time",
            Self::HourlyWage => "hourly_wage",
            Self::AiCostPerTicket => "ai_cost_per_ticket",
            Self::TimeReduction => "time_reduction",
            Self::FcrImprovement => "fcr_improvement",
            Self::EscalationCost => "escalation_cost",
            Self::ImplementationCost => "implementation_cost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AgentCount => "Agent Count",
            Self::MonthlyTickets => "Monthly Tickets",
            Self::AvgHandleTime => "Avg Handle Time",
            Self::HourlyWage => "Hourly Wage",
            Self::AiCostPerTicket => "AI Cost per Ticket",
            Self::TimeReduction => "Expected Time Reduction",
            Self::FcrImprovement => "FCR Improvement",
            Self::EscalationCost => "Escalation Cost",
            Self::ImplementationCost => "Implementation Cost",
        }
    }

    /// Parse a field key. Accepts `snake_case`, `kebab-case` and `camelCase`.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL.iter().copied().find(|field| {
            field.name().replace('_', "") == normalized
        })
    }

    /// Implementation cost is a fixed constant; everything else is a slider.
    pub fn is_user_adjustable(&self) -> bool {
        !matches!(self, Self::ImplementationCost)
    }

    pub fn is_fraction(&self) -> bool {
        matches!(self, Self::TimeReduction | Self::FcrImprovement)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for InputField {
    type Err = crate::errors::ROIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::errors::ROIError::UnknownField(s.to_string()))
    }
}
