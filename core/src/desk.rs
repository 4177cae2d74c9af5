//! The ops desk — one shared service object behind every request.
//!
//! STARTUP ORDER (fixed):
//!   1. Historical dataset  (fallback mode on any failure)
//!   2. Staff store         (seed roster on missing/corrupt file)
//!   3. RNG bank            (configured seed or OS entropy)
//!
//! RULES:
//!   - The analytics context is built once and never mutated.
//!   - Staff mutations go through StaffStore, which serializes them.
//!   - Every random figure is drawn from a fresh RngBank stream.

use crate::{
    analytics::{self, AnalyticsContext, CurrentStats, ForecastGraph, SimulationInput, SimulationReport},
    clock::DeskClock,
    command::{DeleteAck, DeskCommand, ServiceStatus},
    config::DeskConfig,
    dataset::load_dataset,
    error::OpsResult,
    rng::{RngBank, RngSlot},
    staff::{StaffDraft, StaffRecord},
    store::StaffStore,
    types::StaffId,
};
use serde::Serialize;
use serde_json::Value;

pub const SYSTEM_NAME: &str = "Predictive Operations Core v2.0";

pub struct OpsDesk {
    pub config: DeskConfig,
    analytics:  AnalyticsContext,
    store:      StaffStore,
    rng_bank:   RngBank,
    clock:      DeskClock,
}

impl OpsDesk {
    pub fn new(config: DeskConfig, analytics: AnalyticsContext, store: StaffStore) -> Self {
        let rng_bank = match config.seed {
            Some(seed) => RngBank::new(seed),
            None => RngBank::from_entropy(),
        };
        Self {
            clock: config.clock,
            config,
            analytics,
            store,
            rng_bank,
        }
    }

    /// Build a fully wired desk from configuration.
    pub fn build(config: DeskConfig) -> OpsResult<Self> {
        config.clock.validate()?;

        log::info!("Loading historical data from {}", config.dataset_path.display());
        let analytics = match load_dataset(&config.dataset_path) {
            Ok(Some(dataset)) => {
                log::info!("Historical data loaded: {} records", dataset.cases().len());
                AnalyticsContext::with_dataset(dataset)
            }
            Ok(None) => {
                log::warn!(
                    "{} not found; stats use fallback constants",
                    config.dataset_path.display()
                );
                AnalyticsContext::fallback()
            }
            Err(e) => {
                log::warn!("{e}; stats use fallback constants");
                AnalyticsContext::fallback()
            }
        };

        let store = StaffStore::open(&config.staff_db_path)?;
        let desk = Self::new(config, analytics, store);
        log::info!("Ops desk ready (rng seed {:#x})", desk.rng_bank.master_seed());
        Ok(desk)
    }

    pub fn analytics(&self) -> &AnalyticsContext {
        &self.analytics
    }

    pub fn store(&self) -> &StaffStore {
        &self.store
    }

    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            status: "Online".into(),
            system: SYSTEM_NAME.into(),
        }
    }

    // ── Staff registry ─────────────────────────────────────────

    pub fn list_staff(&self) -> Vec<StaffRecord> {
        self.store.list()
    }

    pub fn get_staff(&self, id: StaffId) -> OpsResult<StaffRecord> {
        self.store.get(id)
    }

    pub fn create_staff(&self, draft: StaffDraft) -> OpsResult<StaffRecord> {
        self.store.create(draft)
    }

    pub fn update_staff(&self, id: StaffId, draft: StaffDraft) -> OpsResult<StaffRecord> {
        self.store.update(id, draft)
    }

    pub fn delete_staff(&self, id: StaffId) -> OpsResult<DeleteAck> {
        self.store.delete(id)?;
        Ok(DeleteAck::deleted(id))
    }

    // ── Analytics ──────────────────────────────────────────────

    pub fn current_stats(&self) -> CurrentStats {
        let mut rng = self.rng_bank.for_slot(RngSlot::Backlog);
        analytics::current_stats(&self.analytics, &mut rng)
    }

    pub fn forecast_graph(&self) -> ForecastGraph {
        let mut rng = self.rng_bank.for_slot(RngSlot::Forecast);
        analytics::forecast_graph(self.clock.current_hour(), &mut rng)
    }

    pub fn run_simulation(&self, input: &SimulationInput) -> SimulationReport {
        analytics::run_simulation(input)
    }

    /// Route a command to its operation and serialize the reply.
    pub fn dispatch(&self, command: DeskCommand) -> OpsResult<Value> {
        match command {
            DeskCommand::Status                    => to_value(self.status()),
            DeskCommand::ListStaff                 => to_value(self.list_staff()),
            DeskCommand::GetStaff { id }           => to_value(self.get_staff(id)?),
            DeskCommand::CreateStaff { staff }     => to_value(self.create_staff(staff)?),
            DeskCommand::UpdateStaff { id, staff } => to_value(self.update_staff(id, staff)?),
            DeskCommand::DeleteStaff { id }        => to_value(self.delete_staff(id)?),
            DeskCommand::CurrentStats              => to_value(self.current_stats()),
            DeskCommand::ForecastGraph             => to_value(self.forecast_graph()),
            DeskCommand::RunSimulation { params }  => to_value(self.run_simulation(&params)),
        }
    }
}

fn to_value<T: Serialize>(reply: T) -> OpsResult<Value> {
    Ok(serde_json::to_value(reply)?)
}
