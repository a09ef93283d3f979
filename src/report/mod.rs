//! The export document: an immutable, fully formatted view of one snapshot.
//!
//! Every writer renders the same [`ROIReport`], so the terminal summary, the
//! Markdown file and the printable HTML page always agree on the numbers. The
//! generation timestamp is injected by the caller; nothing in here reads the
//! clock.

pub mod benchmarks;

pub use benchmarks::{
    assumption_benchmark, helper_text, Benchmark, BENCHMARK_DISCLAIMER, INDUSTRY_BENCHMARKS,
    METHODOLOGY,
};

use crate::calculator::ROISnapshot;
use crate::config::DisplayConfig;
use crate::core::{BreakEven, InputField, ROIInputs, ROIMetrics};
use crate::formatting::{format_currency, format_input_value, format_number};
use crate::roi::{
    cost_reduction_percent, fte_equivalent, value_breakdown, Projection, ValueComponent,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const REPORT_TITLE: &str = "AI Copilot ROI Analysis";

/// A labelled value in one of the report tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
}

impl ReportRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssumptionRow {
    pub input: &'static str,
    pub value: String,
    pub benchmark: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub year: String,
    pub annual_savings: String,
    pub cumulative_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ROIReport {
    pub generated_at: DateTime<Utc>,
    pub inputs: ROIInputs,
    pub metrics: ROIMetrics,
    pub hours_per_fte: f64,
    pub fte_equivalent: f64,
    /// Net savings as a share of today's cost; `None` when today's cost is zero.
    pub cost_reduction_percent: Option<f64>,
    pub projection: Projection,
    pub breakdown: Vec<ValueComponent>,
}

impl ROIReport {
    pub fn new(snapshot: ROISnapshot, generated_at: DateTime<Utc>, display: &DisplayConfig) -> Self {
        let ROISnapshot { inputs, metrics } = snapshot;
        Self {
            generated_at,
            hours_per_fte: display.hours_per_fte,
            fte_equivalent: fte_equivalent(metrics.hours_saved, display.hours_per_fte),
            cost_reduction_percent: cost_reduction_percent(&metrics),
            projection: Projection::from_metrics(&metrics),
            breakdown: value_breakdown(&metrics),
            inputs,
            metrics,
        }
    }

    /// `roi-calculator-50-agents-2024-03-01.md`
    pub fn suggested_file_name(&self, extension: &str) -> String {
        format!(
            "roi-calculator-{}-agents-{}.{}",
            self.inputs.agent_count,
            self.generated_date(),
            extension
        )
    }

    pub fn generated_date(&self) -> String {
        self.generated_at.format("%Y-%m-%d").to_string()
    }

    /// `3 months`, or `N/A` when the investment is never recovered.
    pub fn break_even_label(&self) -> String {
        match self.metrics.break_even {
            BreakEven::Months(n) => months_label(n),
            BreakEven::Never => "N/A".to_string(),
        }
    }

    pub fn break_even_context(&self) -> String {
        match self.metrics.break_even {
            BreakEven::Months(n) => format!("Investment recovered in {}", months_label(n)),
            BreakEven::Never => "Adjust inputs to achieve positive ROI".to_string(),
        }
    }

    /// Shown only when the three-year horizon ends in positive territory.
    pub fn key_insight(&self) -> Option<String> {
        if self.metrics.year3_net_value <= 0.0 {
            return None;
        }
        let payback = match self.metrics.break_even {
            BreakEven::Months(n) => months_label(n),
            BreakEven::Never => "under 1 year".to_string(),
        };
        Some(format!(
            "Your investment pays back in {payback}. By Year 3, you've created {} in cumulative value.",
            format_currency(self.metrics.year3_net_value)
        ))
    }

    pub fn executive_summary(&self) -> Vec<ReportRow> {
        vec![
            ReportRow::new("Annual Savings", format_currency(self.metrics.annual_savings)),
            ReportRow::new("Break-Even", self.break_even_label()),
            ReportRow::new("3-Year Net Value", format_currency(self.metrics.year3_net_value)),
        ]
    }

    pub fn key_metrics(&self) -> Vec<ReportRow> {
        let m = &self.metrics;
        vec![
            ReportRow::new("Annual Labor Savings", format_currency(m.labor_savings)),
            ReportRow::new("Escalation Cost Savings", format_currency(m.escalation_savings)),
            ReportRow::new("Annual AI Operational Cost", format_currency(m.total_ai_cost)),
            ReportRow::new("Net Annual Savings", format_currency(m.annual_savings)),
            ReportRow::new(
                "Hours Saved Per Year",
                format!("{} hrs", format_number(m.hours_saved)),
            ),
            ReportRow::new(
                "FTE Equivalent",
                format!("{} FTE", format_number(self.fte_equivalent)),
            ),
        ]
    }

    pub fn cost_comparison(&self) -> Vec<ReportRow> {
        vec![
            ReportRow::new("Current State", format_currency(self.metrics.current_annual_cost)),
            ReportRow::new("With AI Copilot", format_currency(self.metrics.ai_enabled_cost)),
        ]
    }

    /// `210.1% reduction in annual support costs`
    pub fn cost_reduction_label(&self) -> Option<String> {
        self.cost_reduction_percent
            .map(|pct| format!("{pct:.1}% reduction in annual support costs"))
    }

    pub fn assumptions(&self) -> Vec<AssumptionRow> {
        InputField::ALL
            .iter()
            .map(|field| AssumptionRow {
                input: field.label(),
                value: format_input_value(*field, self.inputs.get(*field)),
                benchmark: assumption_benchmark(*field),
            })
            .collect()
    }

    pub fn projection_rows(&self) -> Vec<ProjectionRow> {
        self.projection
            .points
            .iter()
            .map(|point| ProjectionRow {
                year: point.label.clone(),
                annual_savings: point
                    .annual_savings
                    .map(format_currency)
                    .unwrap_or_else(|| "-".to_string()),
                cumulative_value: format_currency(point.cumulative_value),
            })
            .collect()
    }
}

fn months_label(n: i64) -> String {
    if n == 1 {
        "1 month".to_string()
    } else {
        format!("{n} months")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ROICalculator;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn report_for(calc: &ROICalculator) -> ROIReport {
        ROIReport::new(calc.snapshot(), fixed_time(), &DisplayConfig::default())
    }

    #[test]
    fn test_default_report_summary() {
        let report = report_for(&ROICalculator::default());

        assert_eq!(
            report.executive_summary(),
            vec![
                ReportRow::new("Annual Savings", "$1,765,200".into()),
                ReportRow::new("Break-Even", "1 month".into()),
                ReportRow::new("3-Year Net Value", "$5,245,600".into()),
            ]
        );
        assert_eq!(
            report.key_metrics(),
            vec![
                ReportRow::new("Annual Labor Savings", "$420,000".into()),
                ReportRow::new("Escalation Cost Savings", "$1,350,000".into()),
                ReportRow::new("Annual AI Operational Cost", "$4,800".into()),
                ReportRow::new("Net Annual Savings", "$1,765,200".into()),
                ReportRow::new("Hours Saved Per Year", "15,000 hrs".into()),
                ReportRow::new("FTE Equivalent", "7 FTE".into()),
            ]
        );
    }

    #[test]
    fn test_suggested_file_name() {
        let report = report_for(&ROICalculator::default());
        assert_eq!(
            report.suggested_file_name("md"),
            "roi-calculator-50-agents-2024-03-01.md"
        );
    }

    #[test]
    fn test_key_insight_only_for_positive_horizon() {
        let report = report_for(&ROICalculator::default());
        assert_eq!(
            report.key_insight().as_deref(),
            Some(
                "Your investment pays back in 1 month. By Year 3, you've created $5,245,600 in cumulative value."
            )
        );

        let mut calc = ROICalculator::default();
        calc.update(InputField::MonthlyTickets, 0.0);
        let report = report_for(&calc);
        assert_eq!(report.key_insight(), None);
        assert_eq!(report.break_even_label(), "N/A");
        assert_eq!(
            report.break_even_context(),
            "Adjust inputs to achieve positive ROI"
        );
        assert_eq!(report.cost_reduction_label(), None);
    }

    #[test]
    fn test_projection_rows() {
        let report = report_for(&ROICalculator::default());
        let rows = report.projection_rows();

        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            ProjectionRow {
                year: "Year 0".into(),
                annual_savings: "-".into(),
                cumulative_value: "-$50,000".into(),
            }
        );
        assert_eq!(rows[3].annual_savings, "$1,765,200");
        assert_eq!(rows[3].cumulative_value, "$5,245,600");
    }

    #[test]
    fn test_assumptions_follow_form_order() {
        let report = report_for(&ROICalculator::default());
        let inputs: Vec<_> = report.assumptions().iter().map(|row| row.input).collect();
        assert_eq!(inputs[0], "Agent Count");
        assert_eq!(inputs[8], "Implementation Cost");

        let wage = &report.assumptions()[3];
        assert_eq!(wage.value, "$28/hr");
        assert_eq!(wage.benchmark, "Fully loaded cost");
    }

    #[test]
    fn test_snapshot_isolation() {
        let mut calc = ROICalculator::default();
        let report = report_for(&calc);
        calc.update(InputField::HourlyWage, 50.0);

        assert_eq!(report.inputs.hourly_wage, 28.0);
        assert_eq!(report.metrics.labor_savings.round(), 420_000.0);
    }

    #[test]
    fn test_custom_hours_per_fte() {
        let display = DisplayConfig {
            hours_per_fte: 1_500.0,
            color: None,
        };
        let report = ROIReport::new(ROICalculator::default().snapshot(), fixed_time(), &display);
        assert_eq!(report.fte_equivalent, 10.0);
    }
}
