//! Ratios shown next to the metrics.
//!
//! These divide by quantities that can legitimately be zero, so each one
//! branches before dividing instead of letting NaN or infinity through.

use crate::core::ROIMetrics;

/// Working hours in one full-time year (40h × 52 weeks).
pub const DEFAULT_HOURS_PER_FTE: f64 = 2080.0;

/// Full-time equivalents freed up by `hours_saved`, rounded to a whole person.
pub fn fte_equivalent(hours_saved: f64, hours_per_fte: f64) -> f64 {
    if hours_per_fte > 0.0 && hours_saved.is_finite() {
        (hours_saved / hours_per_fte).round()
    } else {
        0.0
    }
}

/// Net savings as a percentage of today's annual cost.
pub fn cost_reduction_percent(metrics: &ROIMetrics) -> Option<f64> {
    ratio(metrics.annual_savings, metrics.current_annual_cost).map(|r| r * 100.0)
}

/// AI-enabled cost relative to today's annual cost (1.0 = unchanged).
pub fn ai_cost_ratio(metrics: &ROIMetrics) -> Option<f64> {
    ratio(metrics.ai_enabled_cost, metrics.current_annual_cost)
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}
