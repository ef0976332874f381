//! Trampoline - a ball bouncing on a trampoline
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, surface models, collisions)
//! - `config`: Tunable constants, loadable from JSON
//! - `autopilot`: Seeded input source for demo/headless runs
//! - `runner`: Fixed-step frame clock driver

pub mod autopilot;
pub mod config;
pub mod runner;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::{ConfigError, SimConfig, SurfaceKind};
pub use runner::Runner;

/// Simulation constants (all units are pixels and frames)
pub mod consts {
    /// One simulation step advances exactly one display frame
    pub const FRAME_DT: f32 = 1.0;
    /// Display refresh period the frame clock targets (60 Hz)
    pub const REFRESH_SECS: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock gap fed to the accumulator (tab switches, stalls)
    pub const MAX_FRAME_SECS: f32 = 0.1;

    /// World (canvas) dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.5;
    /// Floor/arc bounce (sign flip + 30% energy loss)
    pub const BOUNCE: f32 = -0.7;
    /// Sprung contact coefficient, applied to the relative velocity
    pub const SURFACE_BOUNCE: f32 = 0.7;
    /// Horizontal velocity kept (and reversed) on wall contact
    pub const WALL_RESTITUTION: f32 = 0.5;

    /// Player defaults
    pub const PLAYER_START_X: f32 = WORLD_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Upward (negative y) velocity set by a jump
    pub const JUMP_FORCE: f32 = -15.0;
    pub const PLAYER_MASS: f32 = 1.0;

    /// Trampoline span and rest height
    pub const TRAMPOLINE_X1: f32 = 100.0;
    pub const TRAMPOLINE_X2: f32 = WORLD_WIDTH - 100.0;
    pub const TRAMPOLINE_REST_Y: f32 = WORLD_HEIGHT - 100.0;
    /// Peak sag of the closed-form arc at mid-span
    pub const ARC_BULGE: f32 = 50.0;

    /// Sprung surface defaults
    pub const ANCHOR_COUNT: usize = 21;
    pub const SPRING_CONSTANT: f32 = 0.1;
    pub const SPRING_DAMPING: f32 = 0.95;
    pub const ANCHOR_MASS: f32 = 4.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
