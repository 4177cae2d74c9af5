//! Seedable random number generation for the analytics heuristics.
//!
//! RULE: Analytics code never calls a platform RNG directly.
//! All randomness flows through AnalyticsRng instances handed out
//! by the RngBank, which holds the single master seed.
//!
//! Each call gets its own stream, seeded from
//! (master_seed, slot, draw index). This means:
//!   - Concurrent callers never share generator state.
//!   - A fixed seed and a fixed call order reproduce every figure.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::sync::atomic::{AtomicU64, Ordering};

/// A named, independent RNG stream for one analytics call.
pub struct AnalyticsRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl AnalyticsRng {
    /// Create a stream from the master seed, a stable slot index and
    /// the bank's draw counter.
    pub fn new(master_seed: u64, slot_index: u64, draw: u64) -> Self {
        let derived_seed = master_seed
            ^ slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ draw.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Uniform integer in [lo, hi], both ends inclusive.
    pub fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        self.inner.gen_range(lo..=hi)
    }
}

/// Hands out per-call RNG streams derived from one master seed.
pub struct RngBank {
    master_seed: u64,
    draws: AtomicU64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed, draws: AtomicU64::new(0) }
    }

    /// Seed from OS entropy. Used when no seed is configured.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_slot(&self, slot: RngSlot) -> AnalyticsRng {
        let draw = self.draws.fetch_add(1, Ordering::Relaxed);
        AnalyticsRng::new(self.master_seed, slot as u64, draw).with_name(slot.name())
    }
}

/// Stable slot assignments.
/// NEVER reorder or remove entries — only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngSlot {
    Backlog = 0,
    Forecast = 1,
}

impl RngSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Forecast => "forecast",
        }
    }
}
