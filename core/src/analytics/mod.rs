//! Analytics engine — current stats, forecast projection, what-if simulation.
//!
//! RULE: Analytics functions own no mutable state.
//! They read the AnalyticsContext built at startup and whatever RNG
//! stream the caller hands them. Nothing here touches the staff store.

use crate::dataset::{Dataset, DatasetSummary};
use std::sync::Arc;

pub mod forecast;
pub mod simulation;
pub mod stats;

pub use forecast::{forecast_graph, ForecastGraph};
pub use simulation::{run_simulation, CapacityProjection, SimulationInput, SimulationReport, SimulationStatus};
pub use stats::{current_stats, CurrentStats};

/// Startup-time view of the case history. Cheap to clone and share.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsContext {
    dataset: Option<Arc<Dataset>>,
}

impl AnalyticsContext {
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset: Some(Arc::new(dataset)) }
    }

    /// No historical data: stats use the fallback constants.
    pub fn fallback() -> Self {
        Self::default()
    }

    pub fn data_ready(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn summary(&self) -> Option<DatasetSummary> {
        self.dataset.as_ref().map(|d| d.summary())
    }
}

/// Round to one decimal place from the exact binary value, so 0.15
/// (stored just below) rounds down to 0.1 and true ties go to even.
pub fn round1(x: f64) -> f64 {
    format!("{x:.1}").parse().unwrap_or(x)
}
