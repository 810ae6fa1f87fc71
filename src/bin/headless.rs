use anyhow::Result;
use chrono::Utc;
use log::info;
use serde::Serialize;

use nusantara_fishing_rs::config::{Config, CONFIG_ENV_VAR};
use nusantara_fishing_rs::engine::autoplay::{run_session, SessionSummary};
use nusantara_fishing_rs::engine::game::Game;
use nusantara_fishing_rs::logging;

#[derive(Serialize)]
struct Report {
    started_at: String,
    elapsed_ms: i64,
    seed: Option<u64>,
    #[serde(flatten)]
    summary: SessionSummary,
}

fn main() -> Result<()> {
    // Load config
    let args: Vec<String> = std::env::args().collect();
    let config = Config::resolve(&args, std::env::var(CONFIG_ENV_VAR).ok())?;

    logging::init(&config.system, "info");

    let started = Utc::now();
    let seed = config.system.seed;
    let automation = config.automation.clone();
    info!(
        "Starting headless session: {} casts, upgrade every {}",
        automation.casts, automation.upgrade_every
    );

    let mut game = Game::new(config);
    let summary = run_session(&mut game, &automation);

    let report = Report {
        started_at: started.to_rfc3339(),
        elapsed_ms: (Utc::now() - started).num_milliseconds(),
        seed,
        summary,
    };
    info!("Session finished in {} ms", report.elapsed_ms);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
