//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Explicit state passed in, no globals
//! - No rendering or platform dependencies

pub mod arc;
pub mod collision;
pub mod spring;
pub mod state;
pub mod tick;

pub use arc::ArcTrampoline;
pub use collision::{arc_collision, floor_collision, spring_collision, wall_collision};
pub use spring::{AnchorPoint, SpringTrampoline};
pub use state::{Player, SimEvent, SimState, Surface, WallSide};
pub use tick::{TickInput, step, tick};
