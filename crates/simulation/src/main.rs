//! Headless demo: plays a short scripted game and prints every record as JSON
//!
//! Environment:
//! - `KEYO_SEED`   fixed market seed (default: entropy)
//! - `KEYO_TURNS`  turns to simulate (default: 3)
//! - `RUST_LOG`    log filter

use keyo_simulation::{Simulation, SimulationConfig, SortKey};
use serde::Serialize;

fn print_json<T: Serialize>(label: &str, value: &T) -> Result<(), serde_json::Error> {
    println!("--- {} ---", label);
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn env_number(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.trim().parse().ok()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config = SimulationConfig::default();
    if let Some(seed) = env_number("KEYO_SEED") {
        config = config.with_seed(seed);
    }
    let turns = env_number("KEYO_TURNS").unwrap_or(3);

    let mut sim = Simulation::with_config(config)?;
    println!("=== Keyo session {} ===\n", sim.session_id());

    print_json("market", &sim.list_resources(None, SortKey::Price))?;
    print_json(
        "market @ Montaña",
        &sim.list_resources(Some("Montaña"), SortKey::Price),
    )?;

    print_json("optimizer", &sim.optimize_inventory())?;

    print_json("buy", &sim.buy("Crypto Keys", 3))?;
    print_json("buy", &sim.buy("Bug Residue", 2))?;
    print_json("buy (too heavy)", &sim.buy("CPU Shards", 20))?;

    for _ in 0..turns {
        print_json("turn", &sim.advance_turn())?;
    }

    match sim.route("Torre Keio", "Refinería de Códigos") {
        Ok(report) => print_json("route", &report)?,
        Err(err) => eprintln!("route failed: {} ({})", err, err.code()),
    }

    print_json("sell", &sim.sell("Crypto Keys", 3))?;
    print_json("player", &sim.player_state())?;
    print_json("statistics", &sim.market_statistics())?;

    Ok(())
}
