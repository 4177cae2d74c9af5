//! Analytics engine tests — stats, forecast shape, what-if boundaries.

use opsdesk_core::{
    analytics::{
        forecast::{is_peak_hour, label_hour, CAPACITY_LIMIT, FORECAST_STEPS},
        current_stats, forecast_graph, run_simulation, AnalyticsContext, CapacityProjection,
        SimulationInput, SimulationStatus,
    },
    rng::{RngBank, RngSlot},
};

#[test]
fn fallback_stats_are_constant_and_backlog_bounded() {
    let ctx = AnalyticsContext::fallback();
    let bank = RngBank::new(42);

    for _ in 0..500 {
        let stats = current_stats(&ctx, &mut bank.for_slot(RngSlot::Backlog));
        assert_eq!(stats.avg_completion_time, 45.5);
        assert_eq!(stats.sla_risk_score, 12.5);
        assert_eq!(stats.efficiency_trend, "+4.5%");
        assert!(
            (135..=175).contains(&stats.active_cases),
            "Backlog {} outside [135, 175]",
            stats.active_cases
        );
    }
}

#[test]
fn backlog_actually_varies() {
    let ctx = AnalyticsContext::fallback();
    let bank = RngBank::new(7);
    let draws: std::collections::HashSet<i64> = (0..200)
        .map(|_| current_stats(&ctx, &mut bank.for_slot(RngSlot::Backlog)).active_cases)
        .collect();
    assert!(draws.len() > 10, "Backlog looks fixed: {draws:?}");
}

#[test]
fn forecast_has_eight_aligned_points() {
    let bank = RngBank::new(1);
    for start in 0..24 {
        let g = forecast_graph(start, &mut bank.for_slot(RngSlot::Forecast));
        assert_eq!(g.labels.len(), FORECAST_STEPS as usize);
        assert_eq!(g.incoming.len(), FORECAST_STEPS as usize);
        assert_eq!(g.capacity.len(), FORECAST_STEPS as usize);
        assert!(g.capacity.iter().all(|c| *c == CAPACITY_LIMIT));
    }
}

#[test]
fn forecast_volumes_follow_peak_split() {
    let bank = RngBank::new(2024);
    for start in 0..24 {
        for _ in 0..20 {
            let g = forecast_graph(start, &mut bank.for_slot(RngSlot::Forecast));
            for (label, volume) in g.labels.iter().zip(&g.incoming) {
                let hour = label_hour(label).expect("label is H:00");
                let range = if is_peak_hour(hour) { 45..=65 } else { 15..=35 };
                assert!(range.contains(volume), "{label} -> {volume} outside {range:?}");
            }
        }
    }
}

#[test]
fn forecast_labels_wrap_past_midnight() {
    let bank = RngBank::new(3);
    let g = forecast_graph(20, &mut bank.for_slot(RngSlot::Forecast));
    assert_eq!(g.labels, ["20:00", "21:00", "22:00", "23:00", "0:00", "1:00", "2:00", "3:00"]);
}

#[test]
fn peak_window_is_inclusive() {
    assert!(!is_peak_hour(8));
    assert!(is_peak_hour(9));
    assert!(is_peak_hour(17));
    assert!(!is_peak_hour(18));
}

#[test]
fn simulation_comfortable_staffing_is_success() {
    let input = SimulationInput::new(10, 10, 0);
    let p = CapacityProjection::project(&input);
    assert_eq!(p.capacity_per_hour, 100.0);
    assert_eq!(p.projected_load, 50.0);
    assert_eq!(p.utilization, 0.5);

    let r = run_simulation(&input);
    assert_eq!(r.status_code, SimulationStatus::Success);
    assert_eq!(r.utilization_rate, 50.0);
    assert_eq!(r.projected_risk, 15.0);
    assert_eq!(r.prediction_message, "OPTIMAL: Resources are sufficient to handle volume.");
}

#[test]
fn simulation_overload_clamps_risk() {
    let input = SimulationInput::new(2, 2, 50);
    let p = CapacityProjection::project(&input);
    assert_eq!(p.capacity_per_hour, 20.0);
    assert_eq!(p.projected_load, 75.0);
    assert_eq!(p.utilization, 3.75);

    let r = run_simulation(&input);
    assert_eq!(r.status_code, SimulationStatus::Danger);
    assert_eq!(r.utilization_rate, 375.0);
    assert_eq!(r.projected_risk, 99.0);
    assert_eq!(r.prediction_message, "CRITICAL: Backlog will grow rapidly. Immediate staffing needed.");
}

#[test]
fn simulation_without_staff_uses_sentinel() {
    let input = SimulationInput::new(0, 0, 0);
    assert_eq!(CapacityProjection::project(&input).utilization, 10.0);

    let r = run_simulation(&input);
    assert_eq!(r.status_code, SimulationStatus::Danger);
    assert_eq!(r.projected_risk, 99.0);
    assert_eq!(r.utilization_rate, 1000.0);
}

#[test]
fn simulation_warning_band() {
    // 11 staff → 55/h; 50 load → utilization ≈ 0.909.
    let r = run_simulation(&SimulationInput::new(6, 5, 0));
    assert_eq!(r.status_code, SimulationStatus::Warning);
    assert_eq!(r.utilization_rate, 90.9);
    assert_eq!(r.projected_risk, 49.6);
    assert_eq!(r.prediction_message, "WARNING: Approaching capacity limits. Monitor closely.");
}

#[test]
fn threshold_edges_are_exclusive() {
    assert_eq!(SimulationStatus::classify(1.0), SimulationStatus::Warning);
    assert_eq!(SimulationStatus::classify(0.85), SimulationStatus::Success);
    assert_eq!(SimulationStatus::classify(1.0001), SimulationStatus::Danger);
    assert_eq!(SimulationStatus::classify(0.8501), SimulationStatus::Warning);

    // 10 staff, no spike: exactly 1.0 stays a warning.
    let r = run_simulation(&SimulationInput::new(5, 5, 0));
    assert_eq!(r.status_code, SimulationStatus::Warning);
    assert_eq!(r.projected_risk, 60.0);
}

#[test]
fn any_spike_is_accepted() {
    // -100% leaves no load at all.
    let none = run_simulation(&SimulationInput::new(3, 3, -100));
    assert_eq!(none.status_code, SimulationStatus::Success);
    assert_eq!(none.utilization_rate, 0.0);
    assert_eq!(none.projected_risk, 0.0);

    // -150% projects negative load: 30/h capacity, load -25.
    let negative = CapacityProjection::project(&SimulationInput::new(3, 3, -150));
    assert_eq!(negative.projected_load, -25.0);
    let r = run_simulation(&SimulationInput::new(3, 3, -150));
    assert_eq!(r.status_code, SimulationStatus::Success);
    assert_eq!(r.utilization_rate, -83.3);
    assert_eq!(r.projected_risk, 41.7);
}

#[test]
fn report_serializes_with_dashboard_field_names() {
    let r = run_simulation(&SimulationInput::new(10, 10, 0));
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "projected_risk": 15.0,
            "utilization_rate": 50.0,
            "prediction_message": "OPTIMAL: Resources are sufficient to handle volume.",
            "status_code": "success",
        })
    );
}
