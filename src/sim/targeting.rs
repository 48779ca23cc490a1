//! Nearest-enemy targeting and auto-fire

use glam::Vec2;

use super::state::{Bullet, Enemy, GameEvent, GameState};

/// Index of the enemy closest to `from`, skipping `exclude`.
///
/// Ties go to the earlier enemy in the collection.
pub fn find_nearest_enemy(enemies: &[Enemy], from: Vec2, exclude: Option<usize>) -> Option<usize> {
    let mut min_dist = f32::MAX;
    let mut nearest = None;
    for (i, enemy) in enemies.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        let dist = enemy.pos.distance_squared(from);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(i);
        }
    }
    nearest
}

/// Fire at the nearest enemy (and the second nearest with double shot).
///
/// Only fires while the player stands still, the cooldown has run out and at
/// least one enemy exists. Returns the number of bullets fired.
pub fn shoot_bullet(state: &mut GameState) -> usize {
    let player = &state.player;
    if player.moving || player.attack_cooldown > 0 {
        return 0;
    }
    let Some(first) = find_nearest_enemy(&state.enemies, player.pos, None) else {
        return 0;
    };

    let mut targets = vec![state.enemies[first].pos];
    if player.double_shot {
        if let Some(second) = find_nearest_enemy(&state.enemies, player.pos, Some(first)) {
            targets.push(state.enemies[second].pos);
        }
    }

    let origin = player.pos;
    for &target in &targets {
        state.bullets.push(Bullet::new(origin, target));
        state.emit(GameEvent::BulletFired { target });
    }
    state.player.attack_cooldown = state.player.attack_speed;
    targets.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    fn playing_state() -> GameState {
        let mut state = GameState::new(5);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_nearest_enemy_tie_breaks_by_order() {
        let enemies = vec![
            Enemy::new(Vec2::new(110.0, 100.0), 1.0),
            Enemy::new(Vec2::new(90.0, 100.0), 1.0),
        ];
        assert_eq!(find_nearest_enemy(&enemies, Vec2::new(100.0, 100.0), None), Some(0));
        assert_eq!(find_nearest_enemy(&enemies, Vec2::new(100.0, 100.0), Some(0)), Some(1));
        assert_eq!(find_nearest_enemy(&[], Vec2::ZERO, None), None);
    }

    #[test]
    fn test_no_enemies_no_shot() {
        let mut state = playing_state();
        assert_eq!(shoot_bullet(&mut state), 0);
        assert!(state.bullets.is_empty());
        assert_eq!(state.player.attack_cooldown, 0);
    }

    #[test]
    fn test_moving_player_does_not_fire() {
        let mut state = playing_state();
        state.enemies.push(Enemy::new(Vec2::new(100.0, 300.0), 1.0));
        state.player.moving = true;
        assert_eq!(shoot_bullet(&mut state), 0);
    }

    #[test]
    fn test_fire_sets_cooldown() {
        let mut state = playing_state();
        state.enemies.push(Enemy::new(Vec2::new(100.0, 300.0), 1.0));
        assert_eq!(shoot_bullet(&mut state), 1);
        assert_eq!(state.player.attack_cooldown, state.player.attack_speed);
        assert_eq!(state.bullets[0].target, Vec2::new(100.0, 300.0));
        assert_eq!(state.bullets[0].pos, state.player.pos);

        // Cooling down
        assert_eq!(shoot_bullet(&mut state), 0);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_double_shot_targets_two_nearest() {
        let mut state = playing_state();
        state.player.double_shot = true;
        state.enemies.push(Enemy::new(Vec2::new(700.0, 300.0), 1.0)); // far
        state.enemies.push(Enemy::new(Vec2::new(350.0, 300.0), 1.0)); // nearest
        state.enemies.push(Enemy::new(Vec2::new(400.0, 200.0), 1.0)); // second

        assert_eq!(shoot_bullet(&mut state), 2);
        assert_eq!(state.bullets[0].target, Vec2::new(350.0, 300.0));
        assert_eq!(state.bullets[1].target, Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_double_shot_single_enemy() {
        let mut state = playing_state();
        state.player.double_shot = true;
        state.enemies.push(Enemy::new(Vec2::new(350.0, 300.0), 1.0));
        assert_eq!(shoot_bullet(&mut state), 1);
    }
}
