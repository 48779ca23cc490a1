//! Floor Survivor - A single-screen survive-the-floor arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `platform`: Input/renderer boundary and the frame driver
//! - `settings`: Arena size, seed and run length for the headless runner

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Movement per frame at full deflection
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_HEARTS: u32 = 3;
    /// Frames of invincibility after taking a hit (3 seconds at 60 Hz)
    pub const INVINCIBILITY_FRAMES: u32 = 180;
    /// Frames between shots at the start of a run
    pub const ATTACK_INTERVAL: i32 = 30;
    /// Weapon rewards never push the attack interval below this
    pub const MIN_ATTACK_INTERVAL: i32 = 8;
    pub const DEFAULT_WEAPON: &str = "Pistol";
    pub const DOUBLE_PISTOL_WEAPON: &str = "Double Pistol";

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 15.0;
    /// Base enemy speed before the 0.5 factor and floor scaling
    pub const ENEMY_BASE_SPEED: f32 = 2.5;
    /// Per-floor growth of enemy speed (3%)
    pub const ENEMY_SPEED_GROWTH: f32 = 0.03;
    /// Enemies placed at the start of every floor
    pub const INITIAL_ENEMIES: usize = 2;

    /// Spawner timing (frames)
    pub const BASE_SPAWN_FRAMES: f32 = 48.0;
    /// Per-floor shrink of the spawn interval (3%)
    pub const SPAWN_SHRINK_PER_FLOOR: f32 = 0.03;
    /// Spawn interval never drops below this
    pub const MIN_SPAWN_FRAMES: f32 = 12.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_RADIUS: f32 = 5.0;

    /// Floor pickups
    pub const PICKUP_RADIUS: f32 = 10.0;
    pub const PICKUP_DROP_CHANCE: f64 = 0.05;

    /// Kills needed to clear floor 1; each floor adds one
    pub const BASE_KILL_QUOTA: u32 = 10;

    /// Stage reward weights (weapon, speed, heart)
    pub const REWARD_WEIGHTS: [f32; 3] = [45.0, 45.0, 10.0];
    /// Number of stage rewards on the clear screen
    pub const REWARD_SLOTS: usize = 3;
    /// Number of drop items offered on pickup
    pub const DROP_OFFERS: usize = 2;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector pointing from `from` to `to`, or zero when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// True when two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) < ra + rb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_to_zero_length() {
        let p = Vec2::new(100.0, 100.0);
        assert_eq!(direction_to(p, p), Vec2::ZERO);
    }

    #[test]
    fn test_direction_to_is_unit() {
        let dir = direction_to(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(19.0, 0.0), 10.0));
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
    }
}
