pub mod breakdown;
pub mod derived;
pub mod projection;

#[cfg(test)]
mod tests;

use crate::core::{BreakEven, ROIInputs, ROIMetrics};

pub use breakdown::{value_breakdown, ValueComponent, ValueDirection};
pub use derived::{ai_cost_ratio, cost_reduction_percent, fte_equivalent, DEFAULT_HOURS_PER_FTE};
pub use projection::{Projection, ProjectionPoint, Trend};

const MONTHS_PER_YEAR: f64 = 12.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Anything that can turn inputs into metrics.
///
/// Implementations must be pure: the same inputs always give the same
/// metrics, and computing never fails.
pub trait ROIModel {
    fn compute(&self, inputs: &ROIInputs) -> ROIMetrics;
}

/// The labor + escalation savings model.
#[derive(Debug, Clone, Copy, Default)]
pub struct ROIEngine;

impl ROIModel for ROIEngine {
    fn compute(&self, inputs: &ROIInputs) -> ROIMetrics {
        compute(inputs)
    }
}

/// Derive every financial metric from `inputs`.
///
/// Total over all numeric inputs: no validation, no clamping, no rounding.
/// Out-of-domain inputs (negative volumes, fractions above 1) produce a
/// consistent if meaningless result.
pub fn compute(inputs: &ROIInputs) -> ROIMetrics {
    // Baseline
    let annual_tickets = inputs.monthly_tickets * MONTHS_PER_YEAR;
    let avg_time_hours = inputs.avg_handle_time / MINUTES_PER_HOUR;
    let total_hours_per_year = annual_tickets * avg_time_hours;
    let current_annual_cost = total_hours_per_year * inputs.hourly_wage;

    // Labor
    let time_saved_per_ticket = avg_time_hours * inputs.time_reduction;
    let hours_saved = annual_tickets * time_saved_per_ticket;
    let labor_savings = hours_saved * inputs.hourly_wage;

    // Quality
    let escalations_saved_per_year = annual_tickets * inputs.fcr_improvement;
    let escalation_savings = escalations_saved_per_year * inputs.escalation_cost;

    let total_ai_cost = annual_tickets * inputs.ai_cost_per_ticket;

    let total_value_created = labor_savings + escalation_savings;
    let annual_savings = total_value_created - total_ai_cost;
    let ai_enabled_cost = current_annual_cost - annual_savings;

    let monthly_savings = annual_savings / MONTHS_PER_YEAR;
    let break_even = break_even_months(inputs.implementation_cost, monthly_savings);

    let year1_net_value = annual_savings - inputs.implementation_cost;
    let year2_net_value = year1_net_value + annual_savings;
    let year3_net_value = year2_net_value + annual_savings;

    tracing::trace!(
        annual_savings,
        %break_even,
        year3_net_value,
        "computed ROI metrics"
    );

    ROIMetrics {
        current_annual_cost,
        ai_enabled_cost,
        labor_savings,
        escalation_savings,
        total_ai_cost,
        annual_savings,
        hours_saved,
        break_even,
        year1_net_value,
        year2_net_value,
        year3_net_value,
        implementation_cost: inputs.implementation_cost,
    }
}

/// Whole months of `monthly_savings` needed to cover `implementation_cost`.
///
/// Only divides when savings are strictly positive, so zero, negative and NaN
/// savings all mean [`BreakEven::Never`].
pub fn break_even_months(implementation_cost: f64, monthly_savings: f64) -> BreakEven {
    if monthly_savings > 0.0 {
        BreakEven::Months((implementation_cost / monthly_savings).ceil() as i64)
    } else {
        BreakEven::Never
    }
}
