//! Cumulative net value over the three-year horizon.
//!
//! Year 0 is the implementation cost paid up front; each following year adds
//! one year of net savings. The chart and the report both read this series.

use crate::core::ROIMetrics;
use serde::Serialize;

pub const PROJECTION_YEARS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub label: String,
    pub cumulative_value: f64,
    /// Savings accrued during this year; `None` for year 0.
    pub annual_savings: Option<f64>,
}

impl ProjectionPoint {
    pub fn description(&self) -> &'static str {
        if self.cumulative_value < 0.0 {
            "Implementation Cost"
        } else {
            "Cumulative Net Value"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub points: Vec<ProjectionPoint>,
}

impl Projection {
    pub fn from_metrics(metrics: &ROIMetrics) -> Self {
        let initial = ProjectionPoint {
            year: 0,
            label: "Year 0".to_string(),
            cumulative_value: -metrics.implementation_cost,
            annual_savings: None,
        };

        let yearly = metrics
            .yearly_net_values()
            .into_iter()
            .zip(1..=PROJECTION_YEARS)
            .map(|(value, year)| ProjectionPoint {
                year,
                label: format!("Year {year}"),
                cumulative_value: value,
                annual_savings: Some(metrics.annual_savings),
            });

        Self {
            points: std::iter::once(initial).chain(yearly).collect(),
        }
    }

    pub fn final_value(&self) -> f64 {
        self.points
            .last()
            .map(|p| p.cumulative_value)
            .unwrap_or_default()
    }

    /// Direction of the line: positive when the horizon ends above zero.
    pub fn trend(&self) -> Trend {
        if self.final_value() > 0.0 {
            Trend::Positive
        } else {
            Trend::Negative
        }
    }

    /// Smallest and largest cumulative values, for axis scaling.
    pub fn bounds(&self) -> (f64, f64) {
        self.points.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), p| {
            (lo.min(p.cumulative_value), hi.max(p.cumulative_value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ROIInputs;
    use crate::roi::compute;

    #[test]
    fn test_default_projection_points() {
        let metrics = compute(&ROIInputs::default());
        let projection = Projection::from_metrics(&metrics);

        let labels: Vec<_> = projection.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Year 0", "Year 1", "Year 2", "Year 3"]);

        let values: Vec<_> = projection
            .points
            .iter()
            .map(|p| p.cumulative_value.round())
            .collect();
        assert_eq!(values, [-50_000.0, 1_715_200.0, 3_480_400.0, 5_245_600.0]);

        assert_eq!(projection.points[0].annual_savings, None);
        assert_eq!(projection.points[0].description(), "Implementation Cost");
        assert_eq!(projection.points[3].description(), "Cumulative Net Value");
        assert_eq!(projection.trend(), Trend::Positive);
    }

    #[test]
    fn test_negative_trend_when_savings_never_cover_cost() {
        let inputs = ROIInputs {
            monthly_tickets: 0.0,
            ..ROIInputs::default()
        };
        let projection = Projection::from_metrics(&compute(&inputs));

        assert_eq!(projection.trend(), Trend::Negative);
        assert!(projection
            .points
            .iter()
            .all(|p| p.cumulative_value == -50_000.0));
        assert_eq!(projection.bounds(), (-50_000.0, 0.0));
    }
}
