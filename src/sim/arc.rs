//! Closed-form arc trampoline
//!
//! The surface is the straight line between the two endpoints plus a
//! half-sine sag:
//! - progress p = (x - x1) / (x2 - x1)
//! - height = y1 + (y2 - y1) * p + sin(p * π) * bulge
//!
//! Screen coordinates: y grows downward, so a positive bulge sags toward the
//! floor and peaks at mid-span.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::lerp;

/// A static trampoline whose shape is a closed-form curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcTrampoline {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Sag at mid-span (pixels)
    pub bulge: f32,
}

impl ArcTrampoline {
    /// Build an arc, rejecting a zero or inverted span
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, bulge: f32) -> Result<Self, ConfigError> {
        if x2 <= x1 {
            return Err(ConfigError::DegenerateSpan { x1, x2 });
        }
        Ok(Self {
            x1,
            y1,
            x2,
            y2,
            bulge,
        })
    }

    /// Normalized horizontal progress across the span (unclamped)
    #[inline]
    pub fn progress(&self, x: f32) -> f32 {
        (x - self.x1) / (self.x2 - self.x1)
    }

    /// Surface height at `x`
    ///
    /// Defined for any `x`; outside the span the sine term changes sign and
    /// the curve lifts above the endpoint line.
    pub fn height_at(&self, x: f32) -> f32 {
        let p = self.progress(x);
        lerp(self.y1, self.y2, p) + (p * std::f32::consts::PI).sin() * self.bulge
    }

    /// Whether `x` lies within the trampoline span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x >= self.x1 && x <= self.x2
    }

    /// Mid-span x coordinate
    pub fn midpoint(&self) -> f32 {
        (self.x1 + self.x2) / 2.0
    }

    /// Sample points along the curve (for rendering)
    pub fn sample(&self, num_points: usize) -> Vec<Vec2> {
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                let x = lerp(self.x1, self.x2, t);
                Vec2::new(x, self.height_at(x))
            })
            .collect()
    }
}
