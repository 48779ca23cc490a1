//! Per-frame motion for the player, enemies and bullets
//!
//! Pure position updates only. Contact handling lives in `collision`.

use glam::Vec2;

use super::state::{Bullet, Enemy, Player};
use crate::direction_to;

/// Slack on the arrival check so float drift cannot cost a bullet an extra tick
const ARRIVAL_EPSILON: f32 = 1e-3;

/// Move the player by a movement intent and keep them inside the arena.
///
/// Any nonzero intent is normalized before scaling by speed, so a diagonal
/// or a partial analog tilt moves exactly as far as a full axis press.
pub fn move_player(player: &mut Player, intent: Vec2, arena: Vec2) {
    let intent = if intent.is_finite() { intent } else { Vec2::ZERO };
    player.moving = intent != Vec2::ZERO;
    if !player.moving {
        return;
    }

    let step = intent.normalize_or_zero() * player.speed;
    let min = Vec2::splat(player.radius);
    let max = (arena - min).max(min);
    player.pos = (player.pos + step).clamp(min, max);
}

/// Step an enemy straight toward a point; no movement when already on it
pub fn step_enemy(enemy: &mut Enemy, toward: Vec2) {
    enemy.pos += direction_to(enemy.pos, toward) * enemy.speed;
}

/// Where a bullet is after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletStep {
    /// Still travelling
    InFlight,
    /// Snapped onto its target point this step
    Arrived,
}

/// Advance a bullet toward its captured target point.
///
/// Within one speed step of the target it snaps onto the point.
pub fn step_bullet(bullet: &mut Bullet) -> BulletStep {
    let remaining = bullet.pos.distance(bullet.target);
    if remaining <= bullet.speed + ARRIVAL_EPSILON {
        bullet.pos = bullet.target;
        return BulletStep::Arrived;
    }
    bullet.pos += direction_to(bullet.pos, bullet.target) * bullet.speed;
    BulletStep::InFlight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    const ARENA: Vec2 = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);

    #[test]
    fn test_player_axis_move() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        move_player(&mut player, Vec2::new(1.0, 0.0), ARENA);
        assert!(player.moving);
        assert_eq!(player.pos, Vec2::new(405.0, 300.0));
    }

    #[test]
    fn test_player_diagonal_matches_axis_speed() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        move_player(&mut player, Vec2::new(-1.0, -1.0), ARENA);
        let moved = player.pos.distance(Vec2::new(400.0, 300.0));
        assert!((moved - PLAYER_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_player_partial_tilt_moves_full_speed() {
        let start = Vec2::new(400.0, 300.0);
        let mut player = Player::new(start);
        move_player(&mut player, Vec2::new(0.3, 0.0), ARENA);
        assert!(player.moving);
        assert!(player.pos.abs_diff_eq(start + Vec2::new(PLAYER_SPEED, 0.0), 1e-4));

        let mut player = Player::new(start);
        move_player(&mut player, Vec2::new(0.2, -0.4), ARENA);
        assert!((player.pos.distance(start) - PLAYER_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_player_idle_clears_moving() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.moving = true;
        move_player(&mut player, Vec2::ZERO, ARENA);
        assert!(!player.moving);
        assert_eq!(player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_player_clamped_to_arena() {
        let mut player = Player::new(Vec2::new(22.0, 578.0));
        move_player(&mut player, Vec2::new(-1.0, 1.0), ARENA);
        assert_eq!(player.pos, Vec2::new(PLAYER_RADIUS, ARENA_HEIGHT - PLAYER_RADIUS));
    }

    #[test]
    fn test_player_ignores_nan_intent() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        move_player(&mut player, Vec2::new(f32::NAN, 0.0), ARENA);
        assert!(!player.moving);
        assert_eq!(player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_enemy_seeks_point() {
        let mut enemy = Enemy::new(Vec2::new(0.0, 300.0), 2.5);
        step_enemy(&mut enemy, Vec2::new(400.0, 300.0));
        assert!(enemy.pos.abs_diff_eq(Vec2::new(2.5, 300.0), 1e-4));
    }

    #[test]
    fn test_enemy_on_player_does_not_move() {
        let target = Vec2::new(400.0, 300.0);
        let mut enemy = Enemy::new(target, 2.5);
        step_enemy(&mut enemy, target);
        assert_eq!(enemy.pos, target);
        assert!(enemy.pos.is_finite());
    }

    #[test]
    fn test_bullet_snaps_on_arrival() {
        let mut bullet = Bullet::new(Vec2::new(400.0, 300.0), Vec2::new(385.0, 300.0));
        assert_eq!(step_bullet(&mut bullet), BulletStep::InFlight);
        assert!(bullet.pos.abs_diff_eq(Vec2::new(390.0, 300.0), 1e-3));
        assert_eq!(step_bullet(&mut bullet), BulletStep::Arrived);
        assert_eq!(bullet.pos, bullet.target);
    }

    #[test]
    fn test_bullet_on_target_arrives_immediately() {
        let p = Vec2::new(10.0, 10.0);
        let mut bullet = Bullet::new(p, p);
        assert_eq!(step_bullet(&mut bullet), BulletStep::Arrived);
        assert!(bullet.pos.is_finite());
    }

    #[test]
    fn test_bullet_travel_time() {
        // 300px at 10px per tick
        let mut bullet = Bullet::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 300.0));
        let mut ticks = 1;
        while step_bullet(&mut bullet) == BulletStep::InFlight {
            ticks += 1;
        }
        assert_eq!(ticks, 30);
    }
}
