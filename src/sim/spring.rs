//! Spring-damped trampoline surface
//!
//! The surface is a chain of anchor points evenly spaced across the span.
//! Each point is pulled back to the rest height by its own spring; adjacency
//! is implicit by index (segment `i` joins points `i` and `i + 1`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::ArcTrampoline;
use crate::config::{ConfigError, SimConfig};
use crate::lerp;

/// One mass point of the trampoline surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    /// Fixed after construction
    pub x: f32,
    pub y: f32,
    pub vy: f32,
}

/// A trampoline made of spring-damped anchor points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringTrampoline {
    /// Sorted by x, evenly spaced
    pub points: Vec<AnchorPoint>,
    pub rest_y: f32,
    pub spring_constant: f32,
    /// Per-frame velocity multiplier (< 1 loses energy)
    pub damping: f32,
    pub anchor_mass: f32,
    /// Sag used by the closed-form height query
    pub bulge: f32,
}

impl SpringTrampoline {
    /// Build a flat surface at rest from the config
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let spacing = config.anchor_spacing();
        let points = (0..config.anchor_count)
            .map(|i| {
                // Pin the last point exactly on x2
                let x = if i + 1 == config.anchor_count {
                    config.trampoline_x2
                } else {
                    config.trampoline_x1 + spacing * i as f32
                };
                AnchorPoint {
                    x,
                    y: config.trampoline_rest_y,
                    vy: 0.0,
                }
            })
            .collect();

        Ok(Self {
            points,
            rest_y: config.trampoline_rest_y,
            spring_constant: config.spring_constant,
            damping: config.damping,
            anchor_mass: config.anchor_mass,
            bulge: config.arc_bulge,
        })
    }

    pub fn x1(&self) -> f32 {
        self.points[0].x
    }

    pub fn x2(&self) -> f32 {
        self.points[self.points.len() - 1].x
    }

    /// Advance every anchor's spring by `dt` frames
    ///
    /// Hooke restoring force, then damping, then position update. Runs
    /// whether or not the player is touching the surface.
    pub fn relax(&mut self, dt: f32) {
        let damping = self.damping.powf(dt);
        for p in &mut self.points {
            let displacement = p.y - self.rest_y;
            p.vy += -self.spring_constant * displacement * dt;
            p.vy *= damping;
            p.y += p.vy * dt;
        }
    }

    /// Index of the segment whose x-range contains `x`
    pub fn segment_at(&self, x: f32) -> Option<usize> {
        if x < self.x1() || x > self.x2() {
            return None;
        }
        self.points.windows(2).position(|w| x >= w[0].x && x <= w[1].x)
    }

    /// Live surface height at `x`, interpolated within its segment
    pub fn height_at(&self, x: f32) -> Option<f32> {
        let i = self.segment_at(x)?;
        let (a, b) = (self.points[i], self.points[i + 1]);
        let t = (x - a.x) / (b.x - a.x);
        Some(lerp(a.y, b.y, t))
    }

    /// Mean vertical velocity of a segment's two anchors
    pub fn segment_velocity(&self, segment: usize) -> f32 {
        (self.points[segment].vy + self.points[segment + 1].vy) / 2.0
    }

    /// Push both anchors of a segment by `impulse` (momentum units)
    pub fn apply_impulse(&mut self, segment: usize, impulse: f32) {
        let dv = impulse / self.anchor_mass;
        self.points[segment].vy += dv;
        self.points[segment + 1].vy += dv;
    }

    /// Closed-form arc over the same span, kept for reference drawing
    pub fn rest_arc_height_at(&self, x: f32) -> f32 {
        let arc = ArcTrampoline {
            x1: self.x1(),
            y1: self.rest_y,
            x2: self.x2(),
            y2: self.rest_y,
            bulge: self.bulge,
        };
        arc.height_at(x)
    }

    /// Largest distance of any anchor from the rest height
    pub fn max_displacement(&self) -> f32 {
        self.points
            .iter()
            .map(|p| (p.y - self.rest_y).abs())
            .fold(0.0, f32::max)
    }

    /// Anchor positions in order (for rendering)
    pub fn outline(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| Vec2::new(p.x, p.y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn surface() -> SpringTrampoline {
        SpringTrampoline::new(&SimConfig::default()).unwrap()
    }

    #[test]
    fn test_points_evenly_spaced() {
        let s = surface();
        assert_eq!(s.points.len(), 21);
        assert_eq!(s.x1(), 100.0);
        assert_eq!(s.x2(), 700.0);
        for w in s.points.windows(2) {
            assert!((w[1].x - w[0].x - 30.0).abs() < 0.001);
        }
        assert!(s.points.iter().all(|p| p.y == 500.0 && p.vy == 0.0));
    }

    #[test]
    fn test_rejects_degenerate_config() {
        let config = SimConfig {
            trampoline_x2: 100.0,
            ..Default::default()
        };
        assert!(SpringTrampoline::new(&config).is_err());
    }

    #[test]
    fn test_segment_lookup() {
        let s = surface();
        assert_eq!(s.segment_at(100.0), Some(0));
        assert_eq!(s.segment_at(145.0), Some(1));
        assert_eq!(s.segment_at(700.0), Some(19));
        assert_eq!(s.segment_at(99.9), None);
        assert_eq!(s.segment_at(700.1), None);
    }

    #[test]
    fn test_height_interpolates_segment() {
        let mut s = surface();
        s.points[1].y = 520.0;
        // Segment 1 spans x = 130..160, from 520 down to rest 500
        assert!((s.height_at(130.0).unwrap() - 520.0).abs() < 0.001);
        assert!((s.height_at(145.0).unwrap() - 510.0).abs() < 0.001);
        assert!((s.height_at(115.0).unwrap() - 510.0).abs() < 0.001);
        assert_eq!(s.height_at(50.0), None);
    }

    #[test]
    fn test_impulse_hits_only_segment() {
        let mut s = surface();
        s.apply_impulse(3, 8.0);
        for (i, p) in s.points.iter().enumerate() {
            let expected = if i == 3 || i == 4 { 2.0 } else { 0.0 };
            assert_eq!(p.vy, expected, "anchor {}", i);
        }
        assert_eq!(s.segment_velocity(3), 2.0);
        assert_eq!(s.segment_velocity(4), 1.0);
    }

    #[test]
    fn test_relax_at_rest_is_still() {
        let mut s = surface();
        let before = s.clone();
        for _ in 0..100 {
            s.relax(1.0);
        }
        assert_eq!(s, before);
    }

    #[test]
    fn test_relax_single_step() {
        let mut s = surface();
        s.points[0].y = 510.0;
        s.relax(1.0);
        // vy = (0 - 0.1 * 10) * 0.95
        assert!((s.points[0].vy - -0.95).abs() < 1e-6);
        assert!((s.points[0].y - 509.05).abs() < 1e-4);
    }

    #[test]
    fn test_relax_never_moves_x() {
        let mut s = surface();
        s.apply_impulse(10, 40.0);
        let xs: Vec<f32> = s.points.iter().map(|p| p.x).collect();
        for _ in 0..200 {
            s.relax(1.0);
        }
        let after: Vec<f32> = s.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, after);
    }

    #[test]
    fn test_rest_arc_reference() {
        let s = surface();
        assert!((s.rest_arc_height_at(400.0) - 550.0).abs() < 0.001);
    }

    proptest! {
        /// With damping < 1 and no player, the surface settles back to rest:
        /// the peak displacement over each ~one-period window never grows.
        #[test]
        fn prop_relaxation_decays(
            displacements in proptest::collection::vec(-40.0f32..40.0, 21),
            velocities in proptest::collection::vec(-5.0f32..5.0, 21),
        ) {
            let mut s = surface();
            for (p, (d, v)) in s.points.iter_mut().zip(displacements.iter().zip(&velocities)) {
                p.y = s.rest_y + d;
                p.vy = *v;
            }

            let mut previous_peak = f32::INFINITY;
            for _ in 0..30 {
                let mut peak: f32 = 0.0;
                for _ in 0..20 {
                    s.relax(1.0);
                    peak = peak.max(s.max_displacement());
                }
                prop_assert!(peak <= previous_peak + 1e-3, "peak grew: {} > {}", peak, previous_peak);
                previous_peak = peak;
            }
            prop_assert!(s.max_displacement() < 0.01);
        }
    }
}
