/**
 * Binary entry point: loads configuration, wires a `RequestGenerator`
 * thread into the hall-call queue, and drives the `Orchestrator` tick
 * loop. Mirrors the shape of the teacher's `main.rs` (channel wiring,
 * `spawn`), with the teacher's UDP/hardware wiring replaced by this
 * crate's own scheduling core and demo generator.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::Parser;
use crossbeam_channel as cbc;
use std::thread;
use std::time::{Duration, Instant};

/***************************************/
/*               Modules               */
/***************************************/
mod config;
mod direction;
mod elevator;
mod error;
mod fleet;
mod generator;
mod hall_call;
mod orchestrator;
mod scheduling;

use config::Config;
use elevator::Elevator;
use fleet::Fleet;
use generator::RequestGenerator;
use orchestrator::Orchestrator;
use scheduling::DefaultStrategy;

/// Direction-aware hall-call dispatch simulator.
#[derive(Parser, Debug)]
#[command(name = "elevator-dispatch", about = "Direction-aware hall-call dispatch simulator")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = config::load_config(&cli.config).unwrap_or_else(|err| {
        log::warn!("could not load {}: {err}; falling back to defaults", cli.config);
        Config::default()
    });

    let elevators: Vec<Elevator> = (0..config.elevator_count)
        .map(|id| Elevator::new(id, config.max_floors, config.door_open_ticks, config.elevator_movement_ticks))
        .collect();
    let fleet = Fleet::new(elevators);

    // Bounded per spec §5: at most one outstanding Up and one outstanding
    // Down call per floor is ever meaningful, so twice the floor count is
    // generous headroom without being unbounded.
    let (hall_call_tx, hall_call_rx) = cbc::bounded(2 * config.max_floors as usize);

    let generator = RequestGenerator::new(config.max_floors, config.request_interval_seconds);
    let generator_tx = hall_call_tx.clone();
    thread::spawn(move || generator.run(generator_tx));

    let mut orchestrator = Orchestrator::new(fleet, DefaultStrategy::new());
    let tick_interval = Duration::from_millis(config.tick_interval_ms);

    log::info!(
        "starting dispatch loop: {} elevators, {} floors, {}ms/tick",
        config.elevator_count,
        config.max_floors,
        config.tick_interval_ms
    );

    loop {
        orchestrator.tick(&hall_call_rx, Instant::now());
        if orchestrator.pending_count() > 0 {
            log::debug!("{} hall call(s) still pending", orchestrator.pending_count());
        }
        thread::sleep(tick_interval);
    }
}
