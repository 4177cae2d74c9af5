//! Staff registry persistence.
//!
//! RULE: Only the store touches the backing file and its `.seq` sidecar.
//! The in-memory roster is the source of truth once opened. Every
//! mutation runs under the roster lock and rewrites the whole file
//! before the lock is released, so writers are serialized and readers
//! never observe a roster that is not on disk.
//!
//! The sidecar holds the highest id ever issued. It is written before
//! the roster, so a crash between the two can only skip an id, never
//! reissue one.

use crate::{
    error::OpsResult,
    staff::{seed_roster, StaffRecord},
    types::StaffId,
};
use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

mod disk;
mod roster;

pub use disk::{read_roster, read_sequence, sequence_path, write_roster, IdSequence};

pub struct StaffStore {
    path: PathBuf,
    seq_path: PathBuf,
    state: Mutex<RosterState>,
}

struct RosterState {
    records: Vec<StaffRecord>,
    /// Highest id ever issued or loaded. Deleted ids stay below it.
    high_water: StaffId,
}

impl StaffStore {
    /// Open (or create) the roster file at `path`.
    ///
    /// - Missing file: written with the seed roster.
    /// - Unreadable or corrupt file: logged, copied aside, and the seed
    ///   roster is served until the next mutation overwrites the file.
    pub fn open(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref().to_path_buf();

        let records = if !path.exists() {
            let seed = seed_roster();
            write_roster(&path, &seed)?;
            log::info!("Created staff store {} with {} seed records", path.display(), seed.len());
            seed
        } else {
            match read_roster(&path) {
                Ok(records) => {
                    log::info!("Staff store {} loaded: {} records", path.display(), records.len());
                    records
                }
                Err(e) => {
                    log::warn!("{e}; serving seed roster");
                    disk::quarantine(&path);
                    seed_roster()
                }
            }
        };

        let seq_path = sequence_path(&path);
        let stored_high_water = match read_sequence(&seq_path) {
            Ok(seq) => seq.map_or(0, |s| s.high_water),
            Err(e) => {
                log::warn!("{e}; id sequence rebuilt from roster");
                0
            }
        };
        let high_water = max_id(&records).max(stored_high_water);

        Ok(Self {
            path,
            seq_path,
            state: Mutex::new(RosterState { records, high_water }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, RosterState> {
        // A panic while holding the lock cannot leave a half-applied
        // mutation: the roster is only replaced after a successful write.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn max_id(records: &[StaffRecord]) -> StaffId {
    records.iter().map(|r| r.id).max().unwrap_or(0)
}
