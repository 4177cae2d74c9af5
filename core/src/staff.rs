//! Staff roster records.
//!
//! A StaffRecord is what the store holds and what goes on disk.
//! A StaffDraft is what callers send on create/update; its id, if any,
//! is ignored because the store owns identifier assignment.

use crate::{
    error::{OpsError, OpsResult},
    types::StaffId,
};
use serde::{Deserialize, Serialize};

pub const MAX_EFFICIENCY: i64 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StaffStatus {
    Active,
    Break,
    Offline,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Shift {
    Morning,
    Evening,
    Night,
}

/// Field order matches the on-disk layout: id, name, role, status,
/// efficiency, skills, shift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffRecord {
    pub id:         StaffId,
    pub name:       String,
    pub role:       String,
    pub status:     StaffStatus,
    pub efficiency: i64,
    pub skills:     Vec<String>,
    pub shift:      Shift,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffDraft {
    #[serde(default)]
    pub id:         Option<StaffId>,
    pub name:       String,
    pub role:       String,
    pub status:     StaffStatus,
    pub efficiency: i64,
    #[serde(default)]
    pub skills:     Vec<String>,
    pub shift:      Shift,
}

impl StaffDraft {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        status: StaffStatus,
        efficiency: i64,
        skills: &[&str],
        shift: Shift,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.into(),
            status,
            efficiency,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            shift,
        }
    }

    /// Boundary checks. Status and shift are already closed by serde.
    pub fn validate(&self) -> OpsResult<()> {
        if self.name.trim().is_empty() {
            return Err(OpsError::validation("name", "must not be empty"));
        }
        if self.role.trim().is_empty() {
            return Err(OpsError::validation("role", "must not be empty"));
        }
        if !(0..=MAX_EFFICIENCY).contains(&self.efficiency) {
            return Err(OpsError::validation(
                "efficiency",
                format!("{} is outside 0..={MAX_EFFICIENCY}", self.efficiency),
            ));
        }
        Ok(())
    }

    /// Bind to a store-assigned id. Any client-supplied id is dropped.
    pub fn into_record(self, id: StaffId) -> StaffRecord {
        StaffRecord {
            id,
            name: self.name,
            role: self.role,
            status: self.status,
            efficiency: self.efficiency,
            skills: self.skills,
            shift: self.shift,
        }
    }
}

impl From<StaffRecord> for StaffDraft {
    fn from(r: StaffRecord) -> Self {
        Self {
            id: Some(r.id),
            name: r.name,
            role: r.role,
            status: r.status,
            efficiency: r.efficiency,
            skills: r.skills,
            shift: r.shift,
        }
    }
}

/// Roster written to a fresh backing file, and served whenever the file
/// cannot be read.
pub fn seed_roster() -> Vec<StaffRecord> {
    use Shift::*;
    use StaffStatus::*;
    let seed = [
        (1, "Alice Johnson", "Sr. Reviewer",      Active,  94, &["Audit", "Compliance"][..], Morning),
        (2, "Bob Smith",     "Intake Specialist", Break,   88, &["Data Entry"][..],          Evening),
        (3, "Charlie Davis", "Approver",          Active,  91, &["Legal", "Risk"][..],       Morning),
        (4, "Dana Lee",      "Auditor",           Offline,  0, &["Audit"][..],               Night),
        (5, "Ethan Hunt",    "Intake Specialist", Active,  98, &["Speed", "QC"][..],         Morning),
    ];
    seed.into_iter()
        .map(|(id, name, role, status, efficiency, skills, shift)| {
            StaffDraft::new(name, role, status, efficiency, skills, shift).into_record(id)
        })
        .collect()
}
