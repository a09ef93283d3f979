use super::*;
use crate::core::InputField;

const EPSILON: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_default_scenario_matches_worked_example() {
    let metrics = compute(&ROIInputs::default());

    assert_close(metrics.current_annual_cost, 840_000.0);
    assert_close(metrics.hours_saved, 15_000.0);
    assert_close(metrics.labor_savings, 420_000.0);
    assert_close(metrics.escalation_savings, 1_350_000.0);
    assert_close(metrics.total_ai_cost, 4_800.0);
    assert_close(metrics.annual_savings, 1_765_200.0);
    assert_close(metrics.ai_enabled_cost, -925_200.0);
    assert_eq!(metrics.break_even, BreakEven::Months(1));
    assert_close(metrics.year1_net_value, 1_715_200.0);
    assert_close(metrics.year2_net_value, 3_480_400.0);
    assert_close(metrics.year3_net_value, 5_245_600.0);
    assert_close(metrics.implementation_cost, 50_000.0);
}

#[test]
fn test_zero_tickets_yields_zeros_and_never() {
    let inputs = ROIInputs::default().with(InputField::MonthlyTickets, 0.0);
    let metrics = compute(&inputs);

    assert_eq!(metrics.current_annual_cost, 0.0);
    assert_eq!(metrics.labor_savings, 0.0);
    assert_eq!(metrics.escalation_savings, 0.0);
    assert_eq!(metrics.total_ai_cost, 0.0);
    assert_eq!(metrics.annual_savings, 0.0);
    assert_eq!(metrics.hours_saved, 0.0);
    assert_eq!(metrics.break_even, BreakEven::Never);
    assert_eq!(metrics.year1_net_value, -50_000.0);
}

#[test]
fn test_negative_savings_never_break_even() {
    // AI costs more per ticket than it saves.
    let inputs = ROIInputs {
        time_reduction: 0.0,
        fcr_improvement: 0.0,
        ai_cost_per_ticket: 1.0,
        ..ROIInputs::default()
    };
    let metrics = compute(&inputs);

    assert_close(metrics.annual_savings, -120_000.0);
    assert_eq!(metrics.break_even, BreakEven::Never);
    // Not clamped: the AI-enabled cost exceeds today's cost.
    assert!(metrics.ai_enabled_cost > metrics.current_annual_cost);
    assert_close(metrics.year3_net_value, -50_000.0 - 3.0 * 120_000.0);
}

#[test]
fn test_break_even_rounds_up_partial_months() {
    // 1,000/month net against a 2,500 setup cost → 3 months.
    assert_eq!(break_even_months(2_500.0, 1_000.0), BreakEven::Months(3));
    assert_eq!(break_even_months(3_000.0, 1_000.0), BreakEven::Months(3));
    assert_eq!(break_even_months(50_000.0, 0.0), BreakEven::Never);
    assert_eq!(break_even_months(50_000.0, -10.0), BreakEven::Never);
    assert_eq!(break_even_months(50_000.0, f64::NAN), BreakEven::Never);
}

#[test]
fn test_zero_implementation_cost_breaks_even_immediately() {
    let inputs = ROIInputs::default().with(InputField::ImplementationCost, 0.0);
    let metrics = compute(&inputs);
    assert_eq!(metrics.break_even, BreakEven::Months(0));
    assert_close(metrics.year1_net_value, metrics.annual_savings);
}

#[test]
fn test_agent_count_does_not_affect_metrics() {
    let small = compute(&ROIInputs::default().with(InputField::AgentCount, 10.0));
    let large = compute(&ROIInputs::default().with(InputField::AgentCount, 500.0));
    assert_eq!(small, large);
}

#[test]
fn test_out_of_domain_inputs_still_compute() {
    let inputs = ROIInputs {
        monthly_tickets: -1_000.0,
        time_reduction: 1.5,
        fcr_improvement: 2.0,
        ..ROIInputs::default()
    };
    let metrics = compute(&inputs);

    assert!(metrics.annual_savings.is_finite());
    assert_close(
        metrics.annual_savings,
        metrics.labor_savings + metrics.escalation_savings - metrics.total_ai_cost,
    );
    assert_eq!(metrics.break_even, BreakEven::Never);
}

#[test]
fn test_engine_trait_matches_free_function() {
    let inputs = ROIInputs::default().with(InputField::HourlyWage, 33.0);
    assert_eq!(ROIEngine.compute(&inputs), compute(&inputs));
}

#[test]
fn test_time_reduction_drives_labor_savings() {
    let low = compute(&ROIInputs::default().with(InputField::TimeReduction, 0.2));
    let high = compute(&ROIInputs::default().with(InputField::TimeReduction, 0.8));

    assert!(high.labor_savings > low.labor_savings);
    assert_eq!(high.escalation_savings, low.escalation_savings);
    assert_eq!(high.current_annual_cost, low.current_annual_cost);
}
