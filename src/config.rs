//! Simulation configuration
//!
//! Defaults come from [`crate::consts`]. A config can also be loaded from a
//! JSON file; missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Which trampoline model the simulation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Closed-form arc (static shape)
    Arc,
    /// Chain of spring-damped anchor points
    #[default]
    Springs,
}

impl SurfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceKind::Arc => "arc",
            SurfaceKind::Springs => "springs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arc" | "static" => Some(SurfaceKind::Arc),
            "springs" | "spring" | "sprung" => Some(SurfaceKind::Springs),
            _ => None,
        }
    }
}

/// Why a configuration was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("trampoline span must be positive (x1 = {x1}, x2 = {x2})")]
    DegenerateSpan { x1: f32, x2: f32 },
    #[error("sprung trampoline needs at least 2 anchor points, got {0}")]
    TooFewAnchors(usize),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("damping must be within [0, 1], got {0}")]
    DampingOutOfRange(f32),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// All tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub surface: SurfaceKind,

    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub gravity: f32,
    /// Floor and arc bounce (signed)
    pub bounce: f32,
    /// Sprung contact bounce (signed, applied to relative velocity)
    pub surface_bounce: f32,
    pub wall_restitution: f32,

    // === Player ===
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_radius: f32,
    pub player_speed: f32,
    pub jump_force: f32,
    pub player_mass: f32,

    // === Trampoline ===
    pub trampoline_x1: f32,
    pub trampoline_x2: f32,
    pub trampoline_rest_y: f32,
    pub arc_bulge: f32,
    pub anchor_count: usize,
    pub spring_constant: f32,
    pub damping: f32,
    pub anchor_mass: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceKind::Springs,

            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            gravity: GRAVITY,
            bounce: BOUNCE,
            surface_bounce: SURFACE_BOUNCE,
            wall_restitution: WALL_RESTITUTION,

            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            jump_force: JUMP_FORCE,
            player_mass: PLAYER_MASS,

            trampoline_x1: TRAMPOLINE_X1,
            trampoline_x2: TRAMPOLINE_X2,
            trampoline_rest_y: TRAMPOLINE_REST_Y,
            arc_bulge: ARC_BULGE,
            anchor_count: ANCHOR_COUNT,
            spring_constant: SPRING_CONSTANT,
            damping: SPRING_DAMPING,
            anchor_mass: ANCHOR_MASS,
        }
    }
}

impl SimConfig {
    /// Default config with the given surface model
    pub fn with_surface(surface: SurfaceKind) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trampoline_x2 <= self.trampoline_x1 {
            return Err(ConfigError::DegenerateSpan {
                x1: self.trampoline_x1,
                x2: self.trampoline_x2,
            });
        }
        if self.anchor_count < 2 {
            return Err(ConfigError::TooFewAnchors(self.anchor_count));
        }
        for (name, value) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_radius", self.player_radius),
            ("player_mass", self.player_mass),
            ("anchor_mass", self.anchor_mass),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::DampingOutOfRange(self.damping));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults if it can't be used
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config ({}): {}", path.as_ref().display(), e);
                Self::default()
            }
        }
    }

    /// Horizontal distance between neighbouring anchor points
    ///
    /// Fewer than two anchors is treated as a single segment.
    pub fn anchor_spacing(&self) -> f32 {
        let segments = self.anchor_count.saturating_sub(1).max(1);
        (self.trampoline_x2 - self.trampoline_x1) / segments as f32
    }
}
