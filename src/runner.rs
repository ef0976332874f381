//! Frame clock driver
//!
//! Turns elapsed wall-clock time into whole simulation steps. The host calls
//! [`Runner::advance`] once per display refresh; leftover time carries over.

use crate::autopilot::Autopilot;
use crate::config::{ConfigError, SimConfig};
use crate::consts::*;
use crate::sim::{SimEvent, SimState, TickInput, tick};

/// Owns a simulation and steps it from a frame callback
#[derive(Debug, Clone)]
pub struct Runner {
    pub state: SimState,
    pub config: SimConfig,
    /// Held input flags, updated by the input layer between frames
    pub input: TickInput,
    /// When set, overrides `input` every step
    pub autopilot: Option<Autopilot>,
    accumulator: f32,
    contacts: u64,
}

impl Runner {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let state = SimState::new(&config)?;
        Ok(Self {
            state,
            config,
            input: TickInput::default(),
            autopilot: None,
            accumulator: 0.0,
            contacts: 0,
        })
    }

    pub fn with_autopilot(mut self, seed: u64) -> Self {
        self.autopilot = Some(Autopilot::new(seed));
        self
    }

    /// Trampoline and floor contacts seen so far
    pub fn contacts(&self) -> u64 {
        self.contacts
    }

    /// Run one simulation step with the current input
    pub fn step_once(&mut self) {
        let input = match self.autopilot.as_mut() {
            Some(pilot) => pilot.next_input(&self.state, &self.config),
            None => self.input,
        };
        tick(&mut self.state, &input, &self.config, FRAME_DT);
        self.contacts += self
            .state
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::Trampoline { .. } | SimEvent::Floor { .. }))
            .count() as u64;
    }

    /// Feed `elapsed` seconds of wall-clock time; returns steps taken
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_SECS);

        let mut substeps = 0;
        while self.accumulator >= REFRESH_SECS && substeps < MAX_SUBSTEPS {
            self.step_once();
            self.accumulator -= REFRESH_SECS;
            substeps += 1;
        }
        substeps
    }

    /// Run a fixed number of steps back to back
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step_once();
        }
    }
}
