use crate::{analytics::SimulationInput, staff::StaffDraft, types::StaffId};
use serde::{Deserialize, Serialize};

/// Every request the desk answers.
/// Variants may be added, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DeskCommand {
    Status,

    // ── Staff registry ────────────────────────────
    ListStaff,
    GetStaff    { id: StaffId },
    CreateStaff { staff: StaffDraft },
    UpdateStaff { id: StaffId, staff: StaffDraft },
    DeleteStaff { id: StaffId },

    // ── Analytics ─────────────────────────────────
    CurrentStats,
    ForecastGraph,
    RunSimulation { params: SimulationInput },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteAck {
    pub status: String,
    pub id: StaffId,
}

impl DeleteAck {
    pub fn deleted(id: StaffId) -> Self {
        Self { status: "deleted".into(), id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: String,
    pub system: String,
}
