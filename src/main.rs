//! Trampoline headless runner
//!
//! Usage: `trampoline-sim [frames] [seed] [config.json]`
//!
//! Runs the simulation with the autopilot driving input, logs contacts
//! (`RUST_LOG=debug` for every event) and prints the final state as JSON.

#[cfg(not(target_arch = "wasm32"))]
use std::error::Error;

#[cfg(not(target_arch = "wasm32"))]
use trampoline_sim::{Runner, SimConfig};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 600;
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 12345;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `Runner::advance` from its own frame callback
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };
    let seed = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => DEFAULT_SEED,
    };
    let config = match args.next() {
        Some(path) => SimConfig::load(&path)?,
        None => SimConfig::default(),
    };

    log::info!(
        "Trampoline starting: surface={}, frames={}, seed={}",
        config.surface.as_str(),
        frames,
        seed
    );

    let mut runner = Runner::new(config)?.with_autopilot(seed);
    runner.run_frames(frames);

    let player = &runner.state.player;
    log::info!(
        "Finished after {} ticks: {} contacts, player at ({:.1}, {:.1})",
        runner.state.time_ticks,
        runner.contacts(),
        player.pos.x,
        player.pos.y
    );

    println!("{}", serde_json::to_string_pretty(&runner.state)?);
    Ok(())
}
