//! Ops desk facade tests — wiring, dispatch, determinism, concurrency.

use opsdesk_core::{
    clock::DeskClock,
    command::DeskCommand,
    config::DeskConfig,
    desk::OpsDesk,
    error::OpsError,
    staff::{Shift, StaffDraft, StaffStatus},
};
use serde_json::json;
use std::{collections::HashSet, fs, sync::Arc, thread};
use tempfile::TempDir;

fn build_desk(seed: u64) -> (TempDir, OpsDesk) {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().expect("tempdir");
    let config = DeskConfig::for_dir(dir.path())
        .with_seed(seed)
        .with_clock(DeskClock::fixed(9).unwrap());
    let desk = OpsDesk::build(config).expect("build desk");
    (dir, desk)
}

fn command(v: serde_json::Value) -> DeskCommand {
    serde_json::from_value(v).expect("valid command")
}

#[test]
fn builds_in_fallback_mode_without_dataset() {
    let (dir, desk) = build_desk(1);
    assert!(!desk.analytics().data_ready());
    assert!(dir.path().join("staff_db.json").exists());
    assert_eq!(desk.list_staff().len(), 5);

    let stats = desk.current_stats();
    assert_eq!(stats.avg_completion_time, 45.5);
    assert_eq!(stats.sla_risk_score, 12.5);
}

#[test]
fn corrupt_dataset_does_not_block_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = DeskConfig::for_dir(dir.path()).with_seed(3);
    fs::write(&config.dataset_path, "Arrival_Time,Completion_Time\nfoo,bar\n").unwrap();

    let desk = OpsDesk::build(config).unwrap();
    assert!(!desk.analytics().data_ready());
    assert_eq!(desk.current_stats().sla_risk_score, 12.5);
}

#[test]
fn loads_dataset_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let config = DeskConfig::for_dir(dir.path()).with_seed(3);
    fs::write(
        &config.dataset_path,
        "Arrival_Time,Completion_Time,Duration_Minutes,SLA_Breached\n\
         2024-05-01 08:00:00,2024-05-01 08:20:00,20,True\n\
         2024-05-01 08:10:00,2024-05-01 08:40:00,30,False\n",
    )
    .unwrap();

    let desk = OpsDesk::build(config).unwrap();
    assert!(desk.analytics().data_ready());
    let stats = desk.current_stats();
    assert_eq!(stats.avg_completion_time, 25.0);
    assert_eq!(stats.sla_risk_score, 50.0);
}

#[test]
fn fixed_clock_drives_forecast_start() {
    let (_dir, desk) = build_desk(11);
    let g = desk.forecast_graph();
    assert_eq!(g.labels[0], "9:00");
    assert_eq!(g.labels[7], "16:00");
    assert!(g.incoming.iter().all(|v| (45..=65).contains(v)));
}

#[test]
fn same_seed_reproduces_random_figures() {
    let (_a_dir, a) = build_desk(0xDEAD_BEEF);
    let (_b_dir, b) = build_desk(0xDEAD_BEEF);

    for _ in 0..10 {
        assert_eq!(a.current_stats(), b.current_stats());
        assert_eq!(a.forecast_graph(), b.forecast_graph());
    }
}

#[test]
fn dispatch_round_trips_staff_crud() {
    let (_dir, desk) = build_desk(5);

    let created = desk
        .dispatch(command(json!({
            "cmd": "create_staff",
            "staff": {"name": "Fay Wong", "role": "Approver", "status": "Active",
                      "efficiency": 85, "skills": ["Legal"], "shift": "Evening"}
        })))
        .unwrap();
    assert_eq!(created["id"], 6);
    assert_eq!(created["shift"], "Evening");

    let updated = desk
        .dispatch(command(json!({
            "cmd": "update_staff", "id": 6,
            "staff": {"id": 1, "name": "Fay Wong", "role": "Approver", "status": "Break",
                      "efficiency": 86, "shift": "Evening"}
        })))
        .unwrap();
    assert_eq!(updated["id"], 6);
    assert_eq!(updated["status"], "Break");
    assert_eq!(updated["skills"], json!([]));

    let ack = desk.dispatch(command(json!({"cmd": "delete_staff", "id": 6}))).unwrap();
    assert_eq!(ack, json!({"status": "deleted", "id": 6}));

    let err = desk.dispatch(command(json!({"cmd": "delete_staff", "id": 6}))).unwrap_err();
    assert!(matches!(err, OpsError::NotFound { id: 6 }));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn dispatch_analytics_shapes() {
    let (_dir, desk) = build_desk(8);

    let status = desk.dispatch(command(json!({"cmd": "status"}))).unwrap();
    assert_eq!(status["status"], "Online");

    let stats = desk.dispatch(command(json!({"cmd": "current_stats"}))).unwrap();
    let keys: HashSet<&str> = stats.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        HashSet::from(["active_cases", "avg_completion_time", "sla_risk_score", "efficiency_trend"])
    );

    let graph = desk.dispatch(command(json!({"cmd": "forecast_graph"}))).unwrap();
    assert_eq!(graph["capacity"], json!([50, 50, 50, 50, 50, 50, 50, 50]));

    let sim = desk
        .dispatch(command(json!({
            "cmd": "run_simulation",
            "params": {"staff_count_intake": 2, "staff_count_review": 2, "incoming_spike_percent": 50}
        })))
        .unwrap();
    assert_eq!(sim["status_code"], "danger");
    assert_eq!(sim["projected_risk"], 99.0);
    assert_eq!(sim["utilization_rate"], 375.0);
}

#[test]
fn validation_errors_are_client_errors() {
    let (_dir, desk) = build_desk(9);
    let err = desk
        .create_staff(StaffDraft::new("Bad Eff", "QA", StaffStatus::Active, -1, &[], Shift::Night))
        .unwrap_err();
    assert_eq!(err.status_code(), 422);
}

#[test]
fn concurrent_creates_never_lose_updates() {
    let (dir, desk) = build_desk(13);
    let desk = Arc::new(desk);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let desk = Arc::clone(&desk);
            thread::spawn(move || {
                (0..10)
                    .map(|i| {
                        let name = format!("Worker {t}-{i}");
                        desk.create_staff(StaffDraft::new(name, "Intake", StaffStatus::Active, 70, &[], Shift::Morning))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 80, "Duplicate ids issued under contention");
    assert_eq!(unique, (6..=85).collect::<HashSet<u64>>());

    let listed = desk.list_staff();
    assert_eq!(listed.len(), 85);

    let reopened = OpsDesk::build(DeskConfig::for_dir(dir.path()).with_seed(13)).unwrap();
    assert_eq!(reopened.list_staff(), listed);
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("desk.json");
    fs::write(&path, r#"{"seed": 77, "clock": {"mode": "fixed", "hour": 22}}"#).unwrap();

    let config = DeskConfig::load(&path).unwrap();
    assert_eq!(config.seed, Some(77));
    assert_eq!(config.clock, DeskClock::Fixed { hour: 22 });
    assert_eq!(config.staff_db_path, DeskConfig::default().staff_db_path);

    fs::write(&path, r#"{"clock": {"mode": "fixed", "hour": 24}}"#).unwrap();
    assert!(DeskConfig::load(&path).is_err());
}
