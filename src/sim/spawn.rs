//! Enemy spawning at the arena edges

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameEvent, GameState};
use crate::consts::*;

/// Enemy speed for a floor: `base * 0.5 * (1 + 0.03 * (floor - 1))`
pub fn enemy_speed_for_floor(base_speed: f32, floor: u32) -> f32 {
    let steps = floor.saturating_sub(1) as f32;
    base_speed * 0.5 * (1.0 + ENEMY_SPEED_GROWTH * steps)
}

/// Frames between spawns on a floor, shrinking 3% per floor down to a floor value
pub fn spawn_interval_for_floor(floor: u32) -> f32 {
    let steps = floor.saturating_sub(1) as f32;
    (BASE_SPAWN_FRAMES * (1.0 - SPAWN_SHRINK_PER_FLOOR * steps)).max(MIN_SPAWN_FRAMES)
}

/// Place one enemy at a random point on a random edge
pub fn spawn_enemy(state: &mut GameState) {
    let Vec2 { x: w, y: h } = state.arena;
    let edge = state.rng.random_range(0..4u32);
    let pos = match edge {
        0 => Vec2::new(0.0, state.rng.random::<f32>() * h),
        1 => Vec2::new(w, state.rng.random::<f32>() * h),
        2 => Vec2::new(state.rng.random::<f32>() * w, 0.0),
        _ => Vec2::new(state.rng.random::<f32>() * w, h),
    };
    let speed = enemy_speed_for_floor(ENEMY_BASE_SPEED, state.floor);
    state.enemies.push(Enemy::new(pos, speed));
    state.emit(GameEvent::EnemySpawned { pos });
}

/// Advance the spawn timer; spawns and resets it once the floor's interval is reached
pub fn update_spawner(state: &mut GameState) {
    state.spawn_timer += 1;
    if state.spawn_timer as f32 >= spawn_interval_for_floor(state.floor) {
        spawn_enemy(state);
        state.spawn_timer = 0;
    }
}
