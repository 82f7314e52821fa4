//! city-runner: line-oriented front end for the city simulation.
//!
//! Reads one command per line from stdin:
//!   {"cmd":"add_park"}          JSON command, answered with a JSON status line
//!   place 3 4 residential       verb form, answered with plain text
//!   q / quit / {"quit":true}    ends the session (so does EOF)
//!
//! An optional city_config.json in the working directory overrides the
//! default tunables. Set RUST_LOG=debug to watch every ledger mutation.

use anyhow::Result;
use citysim_core::{
    command::PlayerCommand,
    config::CityConfig,
    game_state::GameState,
    session::{CommandOutcome, GameSession},
    types::Resource,
};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

const CONFIG_FILE: &str = "city_config.json";

/// What the loop should do with one input line.
#[derive(Debug, PartialEq)]
enum LineResult {
    Skip,
    Quit,
    Reply(String),
}

#[derive(serde::Serialize)]
struct UiState {
    city_id: String,
    resources: BTreeMap<Resource, i64>,
    happiness: i64,
    happiness_low: bool,
    balance: i64,
    parks: u32,
    public_transport: u32,
    education: u32,
    active_crisis: Option<String>,
    routes: Vec<String>,
    placements: usize,
}

#[derive(serde::Serialize)]
struct Response<'a> {
    #[serde(flatten)]
    outcome: &'a CommandOutcome,
    state: UiState,
}

fn main() -> Result<()> {
    env_logger::init();

    let config = if Path::new(CONFIG_FILE).exists() {
        CityConfig::load(Path::new(CONFIG_FILE))?
    } else {
        CityConfig::default()
    };

    let seed = chrono::Utc::now().timestamp_micros() as u64;
    log::info!("city-runner starting: save_path={} seed={seed}", config.save_path);
    let mut session = GameSession::new(config, seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "City Simulation Game: type 'new' to start, 'q' to quit.")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        match handle_line(&mut session, &line?)? {
            LineResult::Skip => continue,
            LineResult::Quit => break,
            LineResult::Reply(reply) => writeln!(stdout, "{reply}")?,
        }
        stdout.flush()?;
    }

    log::info!("city-runner exiting");
    Ok(())
}

/// Dispatch one input line: JSON commands get a JSON reply, verbs get
/// the plain status text.
fn handle_line(session: &mut GameSession, line: &str) -> Result<LineResult> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(LineResult::Skip);
    }

    if line.starts_with('{') {
        return handle_json(session, line);
    }

    if matches!(line.to_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(LineResult::Quit);
    }

    let reply = match line.parse::<PlayerCommand>() {
        Ok(cmd) => session.execute(cmd).status,
        Err(e) => e.to_string(),
    };
    Ok(LineResult::Reply(reply))
}

fn handle_json(session: &mut GameSession, line: &str) -> Result<LineResult> {
    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => return Ok(LineResult::Reply(json_error(&e))),
    };

    if let Some(quit) = value.get("quit") {
        return Ok(match quit.as_bool() {
            Some(true) => LineResult::Quit,
            _ => LineResult::Skip,
        });
    }

    let cmd = match serde_json::from_value::<PlayerCommand>(value) {
        Ok(cmd) => cmd,
        Err(e) => return Ok(LineResult::Reply(json_error(&e))),
    };
    let outcome = session.execute(cmd);
    let response = Response {
        outcome: &outcome,
        state:   build_ui_state(session.state()),
    };
    Ok(LineResult::Reply(serde_json::to_string(&response)?))
}

fn json_error(e: &serde_json::Error) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}

fn build_ui_state(state: &GameState) -> UiState {
    UiState {
        city_id: state.city_id.clone(),
        resources: state.resources.amounts().clone(),
        happiness: state.morale.happiness,
        happiness_low: state.morale.is_low(),
        balance: state.economy.balance(),
        parks: state.customization.parks,
        public_transport: state.customization.public_transport,
        education: state.customization.education,
        active_crisis: state.crisis.active().map(str::to_string),
        routes: state.routes.routes().to_vec(),
        placements: state.grid.placements().len(),
    }
}
