//! Demo mode input source
//!
//! Wanders between random spots on the trampoline and jumps now and then.
//! Seeded, so a headless run with the same seed replays exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::SimConfig;
use crate::sim::{SimState, TickInput};

/// Chance per tick of pressing jump
const JUMP_CHANCE: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    target_x: f32,
    hold_ticks: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            target_x: 0.0,
            hold_ticks: 0,
        }
    }

    /// Where the autopilot is currently heading
    pub fn target_x(&self) -> f32 {
        self.target_x
    }

    /// Pick the flags for the next tick
    pub fn next_input(&mut self, state: &SimState, config: &SimConfig) -> TickInput {
        if self.hold_ticks == 0 {
            self.target_x = self
                .rng
                .random_range(config.trampoline_x1..=config.trampoline_x2);
            self.hold_ticks = self.rng.random_range(60..180);
        }
        self.hold_ticks -= 1;

        // Stop once within one step of the target to avoid dithering
        let dx = self.target_x - state.player.pos.x;
        let step = state.player.speed;
        TickInput {
            move_left: dx < -step,
            move_right: dx > step,
            jump: self.rng.random_bool(JUMP_CHANCE),
        }
    }
}
