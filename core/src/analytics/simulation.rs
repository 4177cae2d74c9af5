//! What-if staffing simulation.
//!
//! Every constant below is part of the dashboard contract:
//!   capacity  = staff × 5 per hour
//!   load      = 50 × (1 + spike% / 100)
//!   risk      = min(99, utilization² × 60)
//!   > 1.0 danger, > 0.85 warning, else success.
//! Zero capacity reads as utilization 10, which always lands in danger.

use super::round1;
use serde::{Deserialize, Serialize};

pub const THROUGHPUT_PER_STAFF: f64 = 5.0;
pub const BASE_LOAD: f64 = 50.0;
pub const NO_CAPACITY_UTILIZATION: f64 = 10.0;
pub const RISK_SCALE: f64 = 60.0;
pub const RISK_CEILING: f64 = 99.0;
pub const DANGER_THRESHOLD: f64 = 1.0;
pub const WARNING_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationInput {
    pub staff_count_intake: u32,
    pub staff_count_review: u32,
    pub incoming_spike_percent: i64,
}

impl SimulationInput {
    pub fn new(intake: u32, review: u32, spike_percent: i64) -> Self {
        Self {
            staff_count_intake: intake,
            staff_count_review: review,
            incoming_spike_percent: spike_percent,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SimulationStatus {
    Danger,
    Warning,
    Success,
}

impl SimulationStatus {
    pub fn classify(utilization: f64) -> Self {
        if utilization > DANGER_THRESHOLD {
            Self::Danger
        } else if utilization > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Success
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Danger  => "CRITICAL: Backlog will grow rapidly. Immediate staffing needed.",
            Self::Warning => "WARNING: Approaching capacity limits. Monitor closely.",
            Self::Success => "OPTIMAL: Resources are sufficient to handle volume.",
        }
    }
}

/// Unrounded intermediate figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityProjection {
    pub total_staff: u64,
    pub capacity_per_hour: f64,
    pub projected_load: f64,
    pub utilization: f64,
    pub risk_probability: f64,
}

impl CapacityProjection {
    pub fn project(input: &SimulationInput) -> Self {
        let total_staff = input.staff_count_intake as u64 + input.staff_count_review as u64;
        let capacity_per_hour = total_staff as f64 * THROUGHPUT_PER_STAFF;
        let projected_load = BASE_LOAD * (1.0 + input.incoming_spike_percent as f64 / 100.0);

        let utilization = if capacity_per_hour > 0.0 {
            projected_load / capacity_per_hour
        } else {
            NO_CAPACITY_UTILIZATION
        };
        let risk_probability = (utilization.powi(2) * RISK_SCALE).min(RISK_CEILING);

        Self {
            total_staff,
            capacity_per_hour,
            projected_load,
            utilization,
            risk_probability,
        }
    }

    pub fn status(&self) -> SimulationStatus {
        SimulationStatus::classify(self.utilization)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationReport {
    pub projected_risk: f64,
    pub utilization_rate: f64,
    pub prediction_message: String,
    pub status_code: SimulationStatus,
}

impl From<CapacityProjection> for SimulationReport {
    fn from(p: CapacityProjection) -> Self {
        let status = p.status();
        Self {
            projected_risk: round1(p.risk_probability),
            utilization_rate: round1(p.utilization * 100.0),
            prediction_message: status.message().to_string(),
            status_code: status,
        }
    }
}

/// Stateless projection of risk and utilization for hypothetical staffing.
/// Any spike is accepted; a drop past -100% projects negative load and
/// reads as success.
pub fn run_simulation(input: &SimulationInput) -> SimulationReport {
    let projection = CapacityProjection::project(input);
    log::debug!(
        "what-if: staff={} capacity={} load={} utilization={:.3}",
        projection.total_staff,
        projection.capacity_per_hour,
        projection.projected_load,
        projection.utilization,
    );
    projection.into()
}
