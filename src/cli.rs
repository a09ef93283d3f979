use crate::core::{parse_fraction, InputField};
use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "copilot-roi")]
#[command(about = "ROI calculator for an AI support copilot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (skips discovery of .copilot-roi.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// When to use colors (overrides config and NO_COLOR)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute ROI metrics for one set of inputs
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format (defaults to config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the printable ROI report
    Report {
        #[command(flatten)]
        inputs: InputArgs,

        /// Report format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Output file (defaults to roi-calculator-<agents>-agents-<date>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Adjust inputs interactively and watch the metrics update
    Session {
        /// Reject out-of-range values instead of clamping them
        #[arg(long)]
        strict: bool,
    },

    /// Show the allowed range of every adjustable input
    Ranges,

    /// Create a .copilot-roi.toml configuration file
    Init {
        /// Overwrite existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

/// Input overrides shared by `calculate` and `report`.
///
/// Anything left unset comes from the config file, then the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Support agents on the team
    #[arg(long)]
    pub agent_count: Option<f64>,

    /// Tickets handled per month
    #[arg(long)]
    pub monthly_tickets: Option<f64>,

    /// Minutes per ticket today
    #[arg(long)]
    pub avg_handle_time: Option<f64>,

    /// Fully loaded cost per agent hour
    #[arg(long)]
    pub hourly_wage: Option<f64>,

    /// AI cost per ticket
    #[arg(long)]
    pub ai_cost_per_ticket: Option<f64>,

    /// Expected handle time reduction (0.5, 50 or 50%)
    #[arg(long, value_parser = parse_fraction)]
    pub time_reduction: Option<f64>,

    /// First contact resolution improvement (0.15, 15 or 15%)
    #[arg(long, value_parser = parse_fraction)]
    pub fcr_improvement: Option<f64>,

    /// Cost of one escalation
    #[arg(long)]
    pub escalation_cost: Option<f64>,

    /// Reject out-of-range values instead of clamping them
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    /// Values given on the command line, in form order.
    pub fn overrides(&self) -> Vec<(InputField, f64)> {
        [
            (InputField::AgentCount, self.agent_count),
            (InputField::MonthlyTickets, self.monthly_tickets),
            (InputField::AvgHandleTime, self.avg_handle_time),
            (InputField::HourlyWage, self.hourly_wage),
            (InputField::TimeReduction, self.time_reduction),
            (InputField::AiCostPerTicket, self.ai_cost_per_ticket),
            (InputField::FcrImprovement, self.fcr_improvement),
            (InputField::EscalationCost, self.escalation_cost),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}
