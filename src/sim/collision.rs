//! Collision detection and response
//!
//! Every contact snaps the player back onto the surface it crossed, so no
//! penetration survives into the next tick's checks.

use super::arc::ArcTrampoline;
use super::spring::SpringTrampoline;
use super::state::{Player, SimEvent, WallSide};

/// Keep the player between the side walls, reflecting with energy loss
pub fn wall_collision(player: &mut Player, world_width: f32, restitution: f32) -> Option<SimEvent> {
    let side = if player.pos.x - player.radius < 0.0 {
        player.pos.x = player.radius;
        WallSide::Left
    } else if player.pos.x + player.radius > world_width {
        player.pos.x = world_width - player.radius;
        WallSide::Right
    } else {
        return None;
    };
    player.vel.x *= -restitution;
    Some(SimEvent::Wall { side })
}

/// Bounce off the bottom of the world (plain multiplicative reflection)
pub fn floor_collision(player: &mut Player, world_height: f32, bounce: f32) -> Option<SimEvent> {
    if player.bottom() <= world_height {
        return None;
    }
    let impact_vy = player.vel.y;
    player.sit_on(world_height);
    player.vel.y *= bounce;
    Some(SimEvent::Floor {
        impact_vy,
        rebound_vy: player.vel.y,
    })
}

/// Bounce off a static arc trampoline
///
/// The curve is only checked once the ball has dropped past the left
/// endpoint's height.
pub fn arc_collision(player: &mut Player, arc: &ArcTrampoline, bounce: f32) -> Option<SimEvent> {
    if !arc.spans(player.pos.x) || player.bottom() <= arc.y1 {
        return None;
    }
    let surface_y = arc.height_at(player.pos.x);
    if player.bottom() <= surface_y {
        return None;
    }
    let impact_vy = player.vel.y;
    player.sit_on(surface_y);
    player.vel.y *= bounce;
    Some(SimEvent::Trampoline {
        segment: None,
        impact_vy,
        rebound_vy: player.vel.y,
    })
}

/// Bounce off the sprung surface and push the touched segment back
///
/// The rebound is taken relative to the segment's own motion:
/// `rebound = avg_vy * bounce - vy * bounce`. The momentum the player gains
/// is removed from both anchors of the segment.
pub fn spring_collision(
    player: &mut Player,
    springs: &mut SpringTrampoline,
    bounce: f32,
) -> Option<SimEvent> {
    let segment = springs.segment_at(player.pos.x)?;
    let surface_y = springs.height_at(player.pos.x)?;
    if player.bottom() <= surface_y {
        return None;
    }

    let impact_vy = player.vel.y;
    let avg_vy = springs.segment_velocity(segment);
    let rebound_vy = avg_vy * bounce - impact_vy * bounce;

    player.sit_on(surface_y);
    player.vel.y = rebound_vy;

    let impulse = player.mass * (rebound_vy - impact_vy);
    springs.apply_impulse(segment, -impulse);

    Some(SimEvent::Trampoline {
        segment: Some(segment),
        impact_vy,
        rebound_vy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use glam::Vec2;

    fn player_at(x: f32, y: f32, vel: Vec2) -> Player {
        let mut player = Player::new(&SimConfig::default());
        player.pos = Vec2::new(x, y);
        player.vel = vel;
        player
    }

    #[test]
    fn test_right_wall_reflection() {
        let mut player = player_at(783.0, 100.0, Vec2::new(5.0, 0.0));
        let event = wall_collision(&mut player, 800.0, 0.5);
        assert_eq!(event, Some(SimEvent::Wall { side: WallSide::Right }));
        assert_eq!(player.pos.x, 780.0);
        assert_eq!(player.vel.x, -2.5);
    }

    #[test]
    fn test_left_wall_reflection() {
        let mut player = player_at(12.0, 100.0, Vec2::new(-5.0, 0.0));
        let event = wall_collision(&mut player, 800.0, 0.5);
        assert_eq!(event, Some(SimEvent::Wall { side: WallSide::Left }));
        assert_eq!(player.pos.x, 20.0);
        assert_eq!(player.vel.x, 2.5);
    }

    #[test]
    fn test_no_wall_contact() {
        let mut player = player_at(400.0, 100.0, Vec2::new(5.0, 0.0));
        assert_eq!(wall_collision(&mut player, 800.0, 0.5), None);
        assert_eq!(player.vel.x, 5.0);
    }

    #[test]
    fn test_floor_bounce() {
        let mut player = player_at(40.0, 590.0, Vec2::new(0.0, 10.0));
        let event = floor_collision(&mut player, 600.0, -0.7);
        assert_eq!(player.bottom(), 600.0);
        assert!((player.vel.y - -7.0).abs() < 1e-5);
        assert!(matches!(event, Some(SimEvent::Floor { impact_vy, .. }) if impact_vy == 10.0));
    }

    #[test]
    fn test_arc_bounce_snaps_to_curve() {
        let arc = ArcTrampoline::new(100.0, 500.0, 700.0, 500.0, 50.0).unwrap();
        let mut player = player_at(400.0, 540.0, Vec2::new(0.0, 8.0));
        let event = arc_collision(&mut player, &arc, -0.7);
        assert!(event.is_some());
        assert!((player.bottom() - 550.0).abs() < 1e-3);
        assert!((player.vel.y - -5.6).abs() < 1e-5);
    }

    #[test]
    fn test_arc_ignores_off_span() {
        let arc = ArcTrampoline::new(100.0, 500.0, 700.0, 500.0, 50.0).unwrap();
        let mut player = player_at(50.0, 560.0, Vec2::new(0.0, 8.0));
        assert_eq!(arc_collision(&mut player, &arc, -0.7), None);
        assert_eq!(player.pos.y, 560.0);
    }

    #[test]
    fn test_arc_waits_for_left_endpoint_height() {
        // Rising to the right: at x = 650 the curve sits near y = 421
        let arc = ArcTrampoline::new(100.0, 500.0, 700.0, 400.0, 50.0).unwrap();
        let mut player = player_at(650.0, 430.0, Vec2::new(0.0, 6.0));
        assert!(player.bottom() > arc.height_at(650.0));
        assert_eq!(arc_collision(&mut player, &arc, -0.7), None);
        assert_eq!(player.pos.y, 430.0);

        // Past y1 the curve applies
        player.pos.y = 485.0;
        assert!(arc_collision(&mut player, &arc, -0.7).is_some());
        assert!((player.bottom() - arc.height_at(650.0)).abs() < 1e-3);
    }

    #[test]
    fn test_spring_bounce_couples_segment() {
        let mut springs = SpringTrampoline::new(&SimConfig::default()).unwrap();
        // x = 415 is in segment 10 (400..430)
        let mut player = player_at(415.0, 485.0, Vec2::new(0.0, 10.0));
        let event = spring_collision(&mut player, &mut springs, 0.7).unwrap();

        match event {
            SimEvent::Trampoline {
                segment,
                impact_vy,
                rebound_vy,
            } => {
                assert_eq!(segment, Some(10));
                assert_eq!(impact_vy, 10.0);
                assert!((rebound_vy - -7.0).abs() < 1e-5);
            }
            other => panic!("expected trampoline contact, got {:?}", other),
        }
        assert_eq!(player.bottom(), 500.0);
        assert!((player.vel.y - -7.0).abs() < 1e-5);

        // impulse = 1 * (-7 - 10) = -17; anchors get +17 / 4 downward
        assert!((springs.points[10].vy - 4.25).abs() < 1e-5);
        assert!((springs.points[11].vy - 4.25).abs() < 1e-5);
        assert_eq!(springs.points[9].vy, 0.0);
        assert_eq!(springs.points[12].vy, 0.0);
    }

    #[test]
    fn test_spring_rebound_uses_surface_velocity() {
        let mut springs = SpringTrampoline::new(&SimConfig::default()).unwrap();
        springs.points[10].vy = -2.0;
        springs.points[11].vy = -4.0;
        let mut player = player_at(415.0, 485.0, Vec2::new(0.0, 10.0));
        spring_collision(&mut player, &mut springs, 0.7);
        // -3 * 0.7 - 10 * 0.7
        assert!((player.vel.y - -9.1).abs() < 1e-5);
    }

    #[test]
    fn test_spring_no_contact_above_surface() {
        let mut springs = SpringTrampoline::new(&SimConfig::default()).unwrap();
        let mut player = player_at(415.0, 470.0, Vec2::new(0.0, 3.0));
        assert_eq!(spring_collision(&mut player, &mut springs, 0.7), None);
        assert_eq!(springs.max_displacement(), 0.0);
    }
}
