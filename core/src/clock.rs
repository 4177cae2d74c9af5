//! Desk clock — supplies the hour the forecast starts from.

use crate::{
    error::{OpsError, OpsResult},
    types::Hour,
};
use chrono::Timelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DeskClock {
    /// Local wall-clock hour.
    #[default]
    System,
    /// Pinned hour, for reproducible runs and tests.
    Fixed { hour: Hour },
}

impl DeskClock {
    pub fn fixed(hour: Hour) -> OpsResult<Self> {
        let clock = Self::Fixed { hour };
        clock.validate()?;
        Ok(clock)
    }

    pub fn validate(&self) -> OpsResult<()> {
        match self {
            Self::Fixed { hour } if *hour > 23 => Err(OpsError::validation(
                "clock.hour",
                format!("{hour} is outside 0..=23"),
            )),
            _ => Ok(()),
        }
    }

    pub fn current_hour(&self) -> Hour {
        match self {
            Self::System         => chrono::Local::now().hour(),
            Self::Fixed { hour } => *hour,
        }
    }
}
