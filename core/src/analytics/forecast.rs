use crate::{rng::AnalyticsRng, types::Hour};
use serde::{Deserialize, Serialize};

pub const FORECAST_STEPS: u32 = 8;
pub const CAPACITY_LIMIT: i64 = 50;

/// Inclusive peak window, hours of day.
pub const PEAK_HOURS: (Hour, Hour) = (9, 17);
pub const PEAK_VOLUME: (i64, i64) = (45, 65);
pub const OFF_PEAK_VOLUME: (i64, i64) = (15, 35);

/// Three aligned series, one entry per projected hour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastGraph {
    pub labels: Vec<String>,
    pub incoming: Vec<i64>,
    pub capacity: Vec<i64>,
}

pub fn is_peak_hour(hour: Hour) -> bool {
    (PEAK_HOURS.0..=PEAK_HOURS.1).contains(&hour)
}

/// Hour-of-day for the label "H:00". None for anything else.
pub fn label_hour(label: &str) -> Option<Hour> {
    label.strip_suffix(":00")?.parse::<Hour>().ok().filter(|h| *h < 24)
}

/// Project incoming volume for the next FORECAST_STEPS hours starting at
/// `start_hour`. Volumes are heuristic draws, not fitted to history.
pub fn forecast_graph(start_hour: Hour, rng: &mut AnalyticsRng) -> ForecastGraph {
    let mut graph = ForecastGraph {
        labels: Vec::with_capacity(FORECAST_STEPS as usize),
        incoming: Vec::with_capacity(FORECAST_STEPS as usize),
        capacity: Vec::with_capacity(FORECAST_STEPS as usize),
    };

    for step in 0..FORECAST_STEPS {
        let hour = (start_hour + step) % 24;
        let (lo, hi) = if is_peak_hour(hour) { PEAK_VOLUME } else { OFF_PEAK_VOLUME };

        graph.labels.push(format!("{hour}:00"));
        graph.incoming.push(rng.range_inclusive(lo, hi));
        graph.capacity.push(CAPACITY_LIMIT);
    }
    graph
}
