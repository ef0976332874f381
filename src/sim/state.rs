//! Simulation state and core types
//!
//! Everything the step function reads or writes lives in [`SimState`], so a
//! run can be replayed or snapshotted without any rendering surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::ArcTrampoline;
use super::spring::SpringTrampoline;
use crate::config::{ConfigError, SimConfig, SurfaceKind};

/// The bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Horizontal speed while a direction is held
    pub speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_force: f32,
    pub mass: f32,
}

impl Player {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_start_x, config.player_start_y),
            vel: Vec2::ZERO,
            radius: config.player_radius,
            speed: config.player_speed,
            jump_force: config.jump_force,
            mass: config.player_mass,
        }
    }

    /// Lowest point of the ball (screen y grows downward)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Rest the ball on a surface at height `y`
    #[inline]
    pub fn sit_on(&mut self, y: f32) {
        self.pos.y = y - self.radius;
    }
}

/// The trampoline, in one of its two models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    Arc(ArcTrampoline),
    Springs(SpringTrampoline),
}

impl Surface {
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        Ok(match config.surface {
            SurfaceKind::Arc => Surface::Arc(ArcTrampoline::new(
                config.trampoline_x1,
                config.trampoline_rest_y,
                config.trampoline_x2,
                config.trampoline_rest_y,
                config.arc_bulge,
            )?),
            SurfaceKind::Springs => Surface::Springs(SpringTrampoline::new(config)?),
        })
    }

    pub fn kind(&self) -> SurfaceKind {
        match self {
            Surface::Arc(_) => SurfaceKind::Arc,
            Surface::Springs(_) => SurfaceKind::Springs,
        }
    }

    /// Height the player can land on or jump from at `x`, if `x` is over
    /// the trampoline
    pub fn contact_height(&self, x: f32) -> Option<f32> {
        match self {
            Surface::Arc(arc) => arc.spans(x).then(|| arc.height_at(x)),
            Surface::Springs(springs) => springs.height_at(x),
        }
    }

    /// Points to draw the surface through
    pub fn outline(&self, samples: usize) -> Vec<Vec2> {
        match self {
            Surface::Arc(arc) => arc.sample(samples),
            Surface::Springs(springs) => springs.outline(),
        }
    }
}

/// Which side wall the player touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    Jump,
    Wall { side: WallSide },
    /// Landed on the trampoline (`segment` is `None` for the arc model)
    Trampoline {
        segment: Option<usize>,
        impact_vy: f32,
        rebound_vy: f32,
    },
    Floor { impact_vy: f32, rebound_vy: f32 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub player: Player,
    pub surface: Surface,
    /// Steps taken since start
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl SimState {
    /// Fresh state: player at its start position, surface at rest
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            player: Player::new(config),
            surface: Surface::new(config)?,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Springs surface, if that's the active model
    pub fn springs(&self) -> Option<&SpringTrampoline> {
        match &self.surface {
            Surface::Springs(s) => Some(s),
            Surface::Arc(_) => None,
        }
    }
}
