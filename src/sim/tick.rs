//! Fixed timestep simulation tick
//!
//! Advances the player and trampoline by one step. `dt` is measured in
//! frames; at `dt = 1.0` every update is exactly the per-frame arithmetic.

use serde::{Deserialize, Serialize};

use super::collision::{arc_collision, floor_collision, spring_collision, wall_collision};
use super::state::{SimEvent, SimState, Surface};
use crate::config::SimConfig;

/// Input flags for a single tick, read once per step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump if standing on the trampoline
    pub jump: bool,
}

/// Advance the simulation state by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput, config: &SimConfig, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    let player = &mut state.player;

    // Horizontal movement is direct, not accelerated
    player.vel.x = if input.move_left {
        -player.speed
    } else if input.move_right {
        player.speed
    } else {
        0.0
    };

    player.vel.y += config.gravity * dt;

    if input.jump {
        let standing = state
            .surface
            .contact_height(player.pos.x)
            .is_some_and(|surface_y| player.bottom() >= surface_y);
        if standing {
            player.vel.y = player.jump_force;
            state.events.push(SimEvent::Jump);
        }
    }

    player.pos += player.vel * dt;

    if let Some(event) = wall_collision(player, config.world_width, config.wall_restitution) {
        state.events.push(event);
    }

    let contact = match &mut state.surface {
        Surface::Arc(arc) => arc_collision(player, arc, config.bounce),
        Surface::Springs(springs) => {
            springs.relax(dt);
            spring_collision(player, springs, config.surface_bounce)
        }
    };
    if let Some(event) = contact {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
        state.events.push(event);
    }

    if let Some(event) = floor_collision(player, config.world_height, config.bounce) {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
        state.events.push(event);
    }
}

/// Pure form of [`tick`]: returns the next state, leaving `state` untouched
pub fn step(state: &SimState, input: &TickInput, config: &SimConfig, dt: f32) -> SimState {
    let mut next = state.clone();
    tick(&mut next, input, config, dt);
    next
}
