use super::{round1, AnalyticsContext};
use crate::rng::AnalyticsRng;
use serde::{Deserialize, Serialize};

pub const FALLBACK_AVG_DURATION: f64 = 45.5;
pub const FALLBACK_SLA_BREACH_RATE: f64 = 12.5;
pub const EFFICIENCY_TREND: &str = "+4.5%";

/// Live backlog jitter: base draw plus offset draw.
pub const BACKLOG_BASE: (i64, i64) = (140, 160);
pub const BACKLOG_OFFSET: (i64, i64) = (-5, 15);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentStats {
    pub active_cases: i64,
    pub avg_completion_time: f64,
    pub sla_risk_score: f64,
    pub efficiency_trend: String,
}

/// Dashboard headline figures.
///
/// Duration and risk come from the dataset when loaded, else from the
/// fallback constants. The backlog is always a fresh random draw.
pub fn current_stats(ctx: &AnalyticsContext, rng: &mut AnalyticsRng) -> CurrentStats {
    let (avg_duration, sla_breach_rate) = match ctx.summary() {
        Some(s) => (s.avg_duration, s.sla_breach_rate),
        None => (FALLBACK_AVG_DURATION, FALLBACK_SLA_BREACH_RATE),
    };

    let backlog = rng.range_inclusive(BACKLOG_BASE.0, BACKLOG_BASE.1)
        + rng.range_inclusive(BACKLOG_OFFSET.0, BACKLOG_OFFSET.1);

    CurrentStats {
        active_cases: backlog,
        avg_completion_time: round1(avg_duration),
        sla_risk_score: round1(sla_breach_rate),
        efficiency_trend: EFFICIENCY_TREND.to_string(),
    }
}
