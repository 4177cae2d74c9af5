use crate::clock::DeskClock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STAFF_DB: &str = "staff_db.json";
pub const DEFAULT_DATASET: &str = "appian_historical_data.csv";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeskConfig {
    /// JSON array of staff records. Created with the seed roster if missing.
    pub staff_db_path: PathBuf,
    /// Optional case-history CSV. Missing means fallback-constants mode.
    pub dataset_path: PathBuf,
    /// Master seed for the analytics heuristics. None draws from OS entropy.
    pub seed: Option<u64>,
    pub clock: DeskClock,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            staff_db_path: PathBuf::from(DEFAULT_STAFF_DB),
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            seed: None,
            clock: DeskClock::System,
        }
    }
}

impl DeskConfig {
    /// Load from a JSON config file. Absent keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: DeskConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;
        config.clock.validate()?;
        Ok(config)
    }

    /// Default file names rooted in `dir`.
    pub fn for_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            staff_db_path: dir.join(DEFAULT_STAFF_DB),
            dataset_path: dir.join(DEFAULT_DATASET),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_clock(mut self, clock: DeskClock) -> Self {
        self.clock = clock;
        self
    }
}
