//! Historical case dataset — loaded once at startup, read-only afterwards.
//!
//! Expected columns: Arrival_Time, Completion_Time, Duration_Minutes,
//! SLA_Breached. Extra columns are ignored. A missing, unreadable or
//! empty source puts the desk in fallback mode; it is never fatal.

use crate::error::{OpsError, OpsResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalCaseRecord {
    #[serde(rename = "Arrival_Time", deserialize_with = "de_timestamp")]
    pub arrival_time: NaiveDateTime,
    #[serde(rename = "Completion_Time", deserialize_with = "de_timestamp")]
    pub completion_time: NaiveDateTime,
    #[serde(rename = "Duration_Minutes")]
    pub duration_minutes: f64,
    #[serde(rename = "SLA_Breached", deserialize_with = "de_flag")]
    pub sla_breached: bool,
}

/// Aggregates computed once over the full dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DatasetSummary {
    pub total_cases: usize,
    pub avg_duration: f64,
    /// Percentage, 0–100.
    pub sla_breach_rate: f64,
}

impl DatasetSummary {
    /// None for an empty slice: mean and rate are undefined.
    pub fn compute(cases: &[HistoricalCaseRecord]) -> Option<Self> {
        if cases.is_empty() {
            return None;
        }
        let total = cases.len() as f64;
        let duration_sum: f64 = cases.iter().map(|c| c.duration_minutes).sum();
        let breaches = cases.iter().filter(|c| c.sla_breached).count();
        Some(Self {
            total_cases: cases.len(),
            avg_duration: duration_sum / total,
            sla_breach_rate: breaches as f64 * 100.0 / total,
        })
    }
}

/// Immutable snapshot of the case history.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    cases: Vec<HistoricalCaseRecord>,
    summary: DatasetSummary,
}

impl Dataset {
    pub fn from_cases(cases: Vec<HistoricalCaseRecord>) -> OpsResult<Self> {
        let summary = DatasetSummary::compute(&cases).ok_or_else(|| {
            OpsError::Other(anyhow::anyhow!("dataset has no rows"))
        })?;
        Ok(Self { cases, summary })
    }

    /// Parse CSV text from any reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> OpsResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let cases = rdr
            .deserialize::<HistoricalCaseRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cases(cases)
    }

    pub fn cases(&self) -> &[HistoricalCaseRecord] {
        &self.cases
    }

    pub fn summary(&self) -> DatasetSummary {
        self.summary
    }
}

/// Load the case history at `path`.
///
/// Ok(None) when the file does not exist. Any read or parse failure is
/// reported as DatasetLoad; the whole source is rejected, never a
/// partial prefix.
pub fn load_dataset(path: &Path) -> OpsResult<Option<Dataset>> {
    if !path.exists() {
        return Ok(None);
    }
    let file = std::fs::File::open(path).map_err(|e| dataset_load(path, e))?;
    Dataset::from_reader(file)
        .map(Some)
        .map_err(|e| dataset_load(path, e))
}

fn dataset_load(path: &Path, e: impl std::fmt::Display) -> OpsError {
    OpsError::DatasetLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Timezone-naive timestamp in any of the accepted layouts.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn de_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(d)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("unparseable timestamp '{raw}'")))
}

fn de_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(d)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(de::Error::custom(format!("unrecognised breach flag '{other}'"))),
    }
}
