//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (collection order, order-preserving removal)
//! - No rendering or platform dependencies

pub mod collision;
pub mod movement;
pub mod progression;
pub mod random;
pub mod spawn;
pub mod state;
pub mod targeting;
pub mod tick;

pub use collision::{collect_pickups, move_bullets, move_enemies};
pub use movement::{BulletStep, move_player, step_bullet, step_enemy};
pub use progression::{
    advance_floor, apply_drop, apply_reward, check_floor_clear, kill_quota, reset_floor,
    reset_game, select_drop, select_reward,
};
pub use random::weighted_choice;
pub use spawn::{enemy_speed_for_floor, spawn_enemy, spawn_interval_for_floor};
pub use state::{
    Bullet, DropKind, Enemy, GameEvent, GamePhase, GameState, Pickup, Player, RewardKind,
    StageReward,
};
pub use targeting::{find_nearest_enemy, shoot_bullet};
pub use tick::{TickInput, tick};
