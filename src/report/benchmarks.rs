//! Industry references quoted next to the inputs and in the methodology note.

use crate::core::InputField;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Benchmark {
    pub metric: &'static str,
    pub range: &'static str,
    pub source: &'static str,
}

pub const INDUSTRY_BENCHMARKS: [Benchmark; 4] = [
    Benchmark {
        metric: "Handle Time Reduction",
        range: "35-60%",
        source: "Forrester 2024",
    },
    Benchmark {
        metric: "FCR Improvement",
        range: "10-20%",
        source: "Forrester 2024",
    },
    Benchmark {
        metric: "Average Handle Time",
        range: "12-18 min",
        source: "Zendesk 2024",
    },
    Benchmark {
        metric: "AI Cost",
        range: "$0.039",
        source: "Pilot deployment: 2,500 tokens avg",
    },
];

pub const BENCHMARK_DISCLAIMER: &str =
    "Defaults are conservative estimates. Adjust to match your metrics.";

pub const METHODOLOGY: [&str; 6] = [
    "This ROI analysis uses conservative industry benchmarks from:",
    "• Forrester 2024 Customer Service Report (AI performance metrics)",
    "• Zendesk 2024 Benchmark Data (handle time averages)",
    "",
    "Assumptions are configurable and should be adjusted to match your",
    "specific team metrics. Results are estimates, not guarantees.",
];

/// Benchmark column of the input assumptions table.
pub fn assumption_benchmark(field: InputField) -> &'static str {
    match field {
        InputField::AgentCount => "-",
        InputField::MonthlyTickets => "~200/agent/month",
        InputField::AvgHandleTime => "12-18 min (Zendesk 2024)",
        InputField::HourlyWage => "Fully loaded cost",
        InputField::TimeReduction => "35-60% (Forrester 2024)",
        InputField::AiCostPerTicket => "Pilot deployment (~2,500 tokens avg)",
        InputField::FcrImprovement => "10-20% (Forrester 2024)",
        InputField::EscalationCost => "L2 agent cost × 45 min",
        InputField::ImplementationCost => "One-time",
    }
}

/// One-line guidance shown under each input.
pub fn helper_text(field: InputField) -> &'static str {
    match field {
        InputField::AgentCount => "How many support agents are on your team?",
        InputField::MonthlyTickets => "Industry average: ~200 tickets per agent per month",
        InputField::AvgHandleTime => "SaaS benchmark: 12-18 minutes (Zendesk 2024)",
        InputField::HourlyWage => "Fully loaded cost (includes benefits: base × 1.4)",
        InputField::TimeReduction => "Industry range: 35-60% (Forrester 2024 CS Report)",
        InputField::AiCostPerTicket => "Based on a pilot deployment (2,500 tokens avg)",
        InputField::FcrImprovement => {
            "AI improves FCR by reducing need for escalations (Forrester: 10-20%)"
        }
        InputField::EscalationCost => "L2 agent cost × avg 45 min handling (3× base handle time)",
        InputField::ImplementationCost => "One-time setup cost, fixed for the session",
    }
}
