//! ROI calculator for an AI support copilot.
//!
//! The engine ([`roi::compute`]) turns nine business inputs into annual
//! savings, a break-even timeline and a three-year projection. It is pure
//! and total. [`calculator::ROICalculator`] keeps one set of inputs and its
//! metrics in step; the config, report and io modules sit around it.
//!
//! ```rust
//! use copilot_roi::{compute, BreakEven, ROIInputs};
//!
//! let metrics = compute(&ROIInputs::default());
//! assert_eq!(metrics.annual_savings.round(), 1_765_200.0);
//! assert_eq!(metrics.break_even, BreakEven::Months(1));
//! ```

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod effects;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod report;
pub mod roi;

pub use crate::calculator::{ROICalculator, ROISnapshot};
pub use crate::core::{BreakEven, InputField, ROIInputs, ROIMetrics};
pub use crate::errors::{ROIError, ROIResult};
pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
pub use crate::report::ROIReport;
pub use crate::roi::{compute, ROIEngine, ROIModel};
