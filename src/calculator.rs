//! Live calculator state: the current inputs and the metrics derived from them.
//!
//! [`ROICalculator`] owns exactly one [`ROIInputs`] and one [`ROIMetrics`].
//! Every write recomputes the metrics in full before returning, so a reader can
//! never observe metrics that lag behind the inputs. There is no incremental
//! update path and no background work.
//!
//! ```rust
//! use copilot_roi::calculator::ROICalculator;
//! use copilot_roi::core::{BreakEven, InputField};
//!
//! let mut calc = ROICalculator::default();
//! assert_eq!(calc.metrics().break_even, BreakEven::Months(1));
//!
//! calc.update(InputField::MonthlyTickets, 0.0);
//! assert_eq!(calc.metrics().break_even, BreakEven::Never);
//! ```

use crate::core::{InputField, ROIInputs, ROIMetrics};
use crate::roi::{ROIEngine, ROIModel};
use serde::Serialize;

/// Owned copy of the calculator state at one point in time.
///
/// Exports take a snapshot so later edits cannot change a document that is
/// already being produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ROISnapshot {
    pub inputs: ROIInputs,
    pub metrics: ROIMetrics,
}

pub struct ROICalculator {
    model: Box<dyn ROIModel>,
    inputs: ROIInputs,
    metrics: ROIMetrics,
    revision: u64,
}

impl Default for ROICalculator {
    fn default() -> Self {
        Self::new(ROIInputs::default())
    }
}

impl std::fmt::Debug for ROICalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ROICalculator")
            .field("inputs", &self.inputs)
            .field("metrics", &self.metrics)
            .field("revision", &self.revision)
            .finish()
    }
}

impl ROICalculator {
    pub fn new(inputs: ROIInputs) -> Self {
        Self::with_model(Box::new(ROIEngine), inputs)
    }

    pub fn with_model(model: Box<dyn ROIModel>, inputs: ROIInputs) -> Self {
        let metrics = model.compute(&inputs);
        Self {
            model,
            inputs,
            metrics,
            revision: 1,
        }
    }

    pub fn inputs(&self) -> &ROIInputs {
        &self.inputs
    }

    pub fn metrics(&self) -> &ROIMetrics {
        &self.metrics
    }

    /// Number of recomputations so far, including the initial one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> ROISnapshot {
        ROISnapshot {
            inputs: self.inputs,
            metrics: self.metrics.clone(),
        }
    }

    /// Replace one field and recompute everything.
    pub fn update(&mut self, field: InputField, value: f64) -> &ROIMetrics {
        tracing::debug!(field = field.name(), value, "input updated");
        self.inputs.set(field, value);
        self.recompute()
    }

    /// Apply updates in order, recomputing after each one.
    pub fn update_many<I>(&mut self, updates: I) -> &ROIMetrics
    where
        I: IntoIterator<Item = (InputField, f64)>,
    {
        for (field, value) in updates {
            self.update(field, value);
        }
        &self.metrics
    }

    pub fn replace_inputs(&mut self, inputs: ROIInputs) -> &ROIMetrics {
        tracing::debug!("inputs replaced");
        self.inputs = inputs;
        self.recompute()
    }

    fn recompute(&mut self) -> &ROIMetrics {
        self.metrics = self.model.compute(&self.inputs);
        self.revision += 1;
        &self.metrics
    }
}
