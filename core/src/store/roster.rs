use super::{
    disk::{write_roster, write_sequence, IdSequence},
    max_id, StaffStore,
};
use crate::{
    error::{OpsError, OpsResult},
    staff::{StaffDraft, StaffRecord},
    types::StaffId,
};

impl StaffStore {
    // ── Reads ──────────────────────────────────────────────────

    /// All records in file order.
    pub fn list(&self) -> Vec<StaffRecord> {
        self.lock().records.clone()
    }

    pub fn get(&self, id: StaffId) -> OpsResult<StaffRecord> {
        self.lock()
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(OpsError::NotFound { id })
    }

    // ── Mutations ──────────────────────────────────────────────
    //
    // Each mutation builds the next roster, persists it, and only then
    // swaps it in. A failed write leaves memory and disk in agreement.

    pub fn create(&self, draft: StaffDraft) -> OpsResult<StaffRecord> {
        draft.validate()?;
        let mut state = self.lock();

        let id = max_id(&state.records).max(state.high_water) + 1;
        let record = draft.into_record(id);

        let mut next = state.records.clone();
        next.push(record.clone());
        write_sequence(&self.seq_path, IdSequence { high_water: id })?;
        write_roster(&self.path, &next)?;

        state.records = next;
        state.high_water = id;
        log::debug!("Staff {id} created ({})", record.name);
        Ok(record)
    }

    pub fn update(&self, id: StaffId, draft: StaffDraft) -> OpsResult<StaffRecord> {
        draft.validate()?;
        let mut state = self.lock();

        let idx = state
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(OpsError::NotFound { id })?;
        let record = draft.into_record(id);

        let mut next = state.records.clone();
        next[idx] = record.clone();
        write_roster(&self.path, &next)?;

        state.records = next;
        log::debug!("Staff {id} updated");
        Ok(record)
    }

    /// Remove a record. A missing id leaves the file untouched.
    pub fn delete(&self, id: StaffId) -> OpsResult<()> {
        let mut state = self.lock();

        if !state.records.iter().any(|r| r.id == id) {
            return Err(OpsError::NotFound { id });
        }
        let next: Vec<StaffRecord> = state.records.iter().filter(|r| r.id != id).cloned().collect();
        // Pin the high-water mark before the deleted id leaves the roster.
        write_sequence(&self.seq_path, IdSequence { high_water: state.high_water })?;
        write_roster(&self.path, &next)?;

        state.records = next;
        log::debug!("Staff {id} deleted");
        Ok(())
    }
}
