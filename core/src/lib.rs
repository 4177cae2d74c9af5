//! opsdesk-core: staff registry and predictive analytics for the
//! operations dashboard.

pub mod analytics;
pub mod clock;
pub mod command;
pub mod config;
pub mod dataset;
pub mod desk;
pub mod error;
pub mod rng;
pub mod staff;
pub mod store;
pub mod types;
