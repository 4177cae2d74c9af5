//! desk-runner: headless front end for the ops desk.
//!
//! Usage:
//!   desk-runner --db staff_db.json --dataset appian_historical_data.csv
//!   desk-runner --config desk.json --seed 42 --hour 9 --ipc-mode
//!
//! In IPC mode each stdin line is a JSON command, e.g.
//!   {"cmd":"list_staff"}
//!   {"cmd":"delete_staff","id":3}
//!   {"cmd":"run_simulation","params":{"staff_count_intake":2,"staff_count_review":2,"incoming_spike_percent":50}}
//! and each reply is one JSON line on stdout.

use anyhow::Result;
use opsdesk_core::{
    clock::DeskClock, command::DeskCommand, config::DeskConfig, desk::OpsDesk, error::OpsError,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Serialize)]
struct ErrorReply {
    error: String,
    status: u16,
}

impl From<&OpsError> for ErrorReply {
    fn from(e: &OpsError) -> Self {
        Self { error: e.to_string(), status: e.status_code() }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let config = build_config(&args)?;

    if !ipc_mode {
        println!("Ops Desk — desk-runner");
        println!("  staff db:  {}", config.staff_db_path.display());
        println!("  dataset:   {}", config.dataset_path.display());
        println!();
    }

    let desk = OpsDesk::build(config)?;

    if ipc_mode {
        run_ipc_loop(&desk)?;
    } else {
        print_summary(&desk);
    }
    Ok(())
}

fn build_config(args: &[String]) -> Result<DeskConfig> {
    let mut config = match string_arg(args, "--config") {
        Some(path) => DeskConfig::load(path)?,
        None => DeskConfig::default(),
    };
    if let Some(db) = string_arg(args, "--db") {
        config.staff_db_path = db.into();
    }
    if let Some(dataset) = string_arg(args, "--dataset") {
        config.dataset_path = dataset.into();
    }
    if let Some(seed) = parse_arg::<u64>(args, "--seed") {
        config.seed = Some(seed);
    }
    if let Some(hour) = parse_arg::<u32>(args, "--hour") {
        config.clock = DeskClock::fixed(hour)?;
    }
    Ok(config)
}

fn run_ipc_loop(desk: &OpsDesk) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<DeskCommand>(&buffer) {
            Ok(cmd) => match desk.dispatch(cmd) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("Command rejected: {e}");
                    serde_json::to_value(ErrorReply::from(&e))?
                }
            },
            Err(e) => serde_json::to_value(ErrorReply { error: e.to_string(), status: 400 })?,
        };
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(desk: &OpsDesk) {
    let staff = desk.list_staff();
    let stats = desk.current_stats();
    let forecast = desk.forecast_graph();

    println!("=== STAFF ({}) ===", staff.len());
    for s in &staff {
        println!(
            "  #{:<3} {:<16} {:<18} {:?}/{:?} eff={}",
            s.id, s.name, s.role, s.status, s.shift, s.efficiency
        );
    }

    println!();
    println!("=== CURRENT STATS ===");
    println!("  data ready:      {}", desk.analytics().data_ready());
    println!("  active cases:    {}", stats.active_cases);
    println!("  avg completion:  {}", stats.avg_completion_time);
    println!("  sla risk score:  {}", stats.sla_risk_score);
    println!("  trend:           {}", stats.efficiency_trend);

    println!();
    println!("=== FORECAST ===");
    for ((label, incoming), capacity) in forecast
        .labels
        .iter()
        .zip(&forecast.incoming)
        .zip(&forecast.capacity)
    {
        let flag = if incoming > capacity { " !" } else { "" };
        println!("  {label:>5}  incoming={incoming:<3} capacity={capacity}{flag}");
    }
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    string_arg(args, flag).and_then(|v| v.parse().ok())
}
