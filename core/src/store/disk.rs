use crate::{
    error::{OpsError, OpsResult},
    staff::StaffRecord,
    types::StaffId,
};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

const INDENT: &[u8] = b"    ";

/// Read the full roster. Any failure is reported as StoreRead so the
/// caller can decide how to recover.
pub fn read_roster(path: &Path) -> OpsResult<Vec<StaffRecord>> {
    let store_read = |reason: String| OpsError::StoreRead {
        path: path.display().to_string(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| store_read(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| store_read(e.to_string()))
}

/// Replace the roster file in one step.
pub fn write_roster(path: &Path, records: &[StaffRecord]) -> OpsResult<()> {
    write_json(path, records)
}

/// Id sequence kept beside the roster so the roster stays a plain array.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdSequence {
    pub high_water: StaffId,
}

/// Sidecar path: `<roster file>.seq`.
pub fn sequence_path(roster: &Path) -> PathBuf {
    let mut seq = roster.as_os_str().to_owned();
    seq.push(".seq");
    PathBuf::from(seq)
}

/// Ok(None) when the sidecar does not exist yet.
pub fn read_sequence(path: &Path) -> OpsResult<Option<IdSequence>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| OpsError::StoreRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| OpsError::StoreRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

pub fn write_sequence(path: &Path, seq: IdSequence) -> OpsResult<()> {
    write_json(path, &seq)
}

/// Write a temp file in the same directory, fsync, then rename over
/// the target.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> OpsResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut ser = Serializer::with_formatter(&mut tmp, PrettyFormatter::with_indent(INDENT));
        value.serialize(&mut ser)?;
    }
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| OpsError::Io(e.error))?;
    Ok(())
}

/// Copy an unreadable roster aside so the next write cannot lose it.
pub(super) fn quarantine(path: &Path) {
    let mut aside = path.as_os_str().to_owned();
    aside.push(".corrupt");
    match std::fs::copy(path, &aside) {
        Ok(_) => log::warn!("Unreadable staff store copied to {}", Path::new(&aside).display()),
        Err(e) => log::warn!("Could not copy unreadable staff store aside: {e}"),
    }
}
