//! Floor progression, rewards and drop items
//!
//! Owns every phase transition except the ones input drives directly in
//! `tick`: floor resets, the stage clear reward screen, item selection and
//! game over.

use glam::Vec2;
use rand::Rng;

use super::random::{choose_distinct, weighted_choice};
use super::spawn::spawn_enemy;
use super::state::{DropKind, GameEvent, GamePhase, GameState, Player, RewardKind, StageReward};
use crate::consts::*;

/// Kills needed to clear a floor: `10 + (floor - 1)`
pub fn kill_quota(floor: u32) -> u32 {
    BASE_KILL_QUOTA + floor.saturating_sub(1)
}

/// Put the current floor back to its opening layout.
///
/// Keeps the player's stats and the run's total kills.
pub fn reset_floor(state: &mut GameState) {
    let center = state.center();
    let player = &mut state.player;
    player.pos = center;
    player.moving = false;
    player.invincible = false;
    player.invincible_ticks = 0;
    player.attack_cooldown = 0;

    state.enemies.clear();
    state.bullets.clear();
    state.pickups.clear();
    state.rewards.clear();
    state.drop_offers.clear();
    state.floor_kills = 0;
    state.spawn_timer = 0;
    state.reward_chosen = false;
    state.floor_started_tick = state.time_ticks;

    for _ in 0..INITIAL_ENEMIES {
        spawn_enemy(state);
    }

    log::info!("Floor {} started (quota {})", state.floor, kill_quota(state.floor));
    state.emit(GameEvent::FloorStarted { floor: state.floor });
}

/// Start a fresh run on floor 1
pub fn reset_game(state: &mut GameState) {
    state.player = Player::new(state.center());
    state.floor = 1;
    state.total_kills = 0;
    reset_floor(state);
    state.phase = GamePhase::Playing;
}

/// Go down one floor and resume play
pub fn advance_floor(state: &mut GameState) {
    state.floor += 1;
    reset_floor(state);
    state.phase = GamePhase::Playing;
}

/// Enter stage clear if the floor's quota is met; returns true on transition
pub fn check_floor_clear(state: &mut GameState) -> bool {
    if state.floor_kills < kill_quota(state.floor) {
        return false;
    }
    generate_rewards(state);
    state.reward_chosen = false;
    state.phase = GamePhase::StageClear;
    log::info!(
        "Floor {} cleared after {} ticks ({} total kills)",
        state.floor,
        state.time_ticks.saturating_sub(state.floor_started_tick),
        state.total_kills
    );
    state.emit(GameEvent::StageCleared { floor: state.floor });
    true
}

/// Fixed on-floor spots for the reward choices
pub fn reward_positions(arena: Vec2) -> [Vec2; REWARD_SLOTS] {
    let y = arena.y / 2.0;
    [
        Vec2::new(arena.x * 0.25, y),
        Vec2::new(arena.x * 0.5, y),
        Vec2::new(arena.x * 0.75, y),
    ]
}

/// Draw one reward: category by weight, then a fresh magnitude
pub fn roll_reward<R: Rng + ?Sized>(rng: &mut R) -> RewardKind {
    match weighted_choice(rng, &REWARD_WEIGHTS) {
        Some(0) => RewardKind::Weapon {
            interval_cut: rng.random_range(2..=5),
        },
        Some(1) => RewardKind::Speed {
            bonus: rng.random_range(0.3..0.8),
        },
        _ => RewardKind::Heart {
            hearts: rng.random_range(1..=2),
        },
    }
}

/// Fill the stage clear screen with one reward per slot
pub fn generate_rewards(state: &mut GameState) {
    let positions = reward_positions(state.arena);
    state.rewards = positions
        .into_iter()
        .map(|pos| StageReward {
            kind: roll_reward(&mut state.rng),
            pos,
        })
        .collect();
}

/// Make a reward's effect permanent on the player
pub fn apply_reward(player: &mut Player, kind: RewardKind) {
    match kind {
        RewardKind::Weapon { interval_cut } => {
            player.attack_speed = (player.attack_speed - interval_cut).max(MIN_ATTACK_INTERVAL);
            if !player.weapon.starts_with("Rapid ") {
                player.weapon = format!("Rapid {}", player.weapon);
            }
        }
        RewardKind::Speed { bonus } => {
            player.base_speed += bonus;
            player.speed += bonus;
        }
        RewardKind::Heart { hearts } => {
            player.max_hearts += hearts;
            player.hearts += hearts;
        }
    }
}

/// Take the reward in `index` on the stage clear screen.
///
/// One pick per screen; later picks and bad indices are ignored. Returns
/// true if a reward was applied.
pub fn select_reward(state: &mut GameState, index: usize) -> bool {
    if state.phase != GamePhase::StageClear || state.reward_chosen {
        return false;
    }
    let Some(reward) = state.rewards.get(index) else {
        log::warn!("Ignoring reward pick {} (only {} offered)", index, state.rewards.len());
        return false;
    };
    let kind = reward.kind;
    apply_reward(&mut state.player, kind);
    state.reward_chosen = true;
    state.rewards.clear();
    log::info!("Reward chosen: {:?}", kind);
    state.emit(GameEvent::RewardChosen(kind));
    true
}

/// Pause play and offer two distinct drop items
pub fn enter_item_selection(state: &mut GameState) {
    let picks = choose_distinct(&mut state.rng, DropKind::ALL.len(), DROP_OFFERS);
    state.drop_offers = picks.into_iter().map(|i| DropKind::ALL[i]).collect();
    state.phase = GamePhase::ItemSelection;
    log::debug!("Item selection: {:?}", state.drop_offers);
}

/// Apply a drop item's one-shot effect
pub fn apply_drop(state: &mut GameState, kind: DropKind) {
    match kind {
        DropKind::Bomb => {
            state.enemies.clear();
            state.bullets.clear();
        }
        DropKind::DoublePistol => {
            state.player.double_shot = true;
            state.player.weapon = DOUBLE_PISTOL_WEAPON.to_string();
        }
        DropKind::Heal => state.player.heal(1),
        DropKind::Portal => {}
    }
}

/// Take the offer in `index` on the item selection screen.
///
/// Returns to play, or to the portal screen for a portal. Returns true if an
/// offer was applied.
pub fn select_drop(state: &mut GameState, index: usize) -> bool {
    if state.phase != GamePhase::ItemSelection {
        return false;
    }
    let Some(&kind) = state.drop_offers.get(index) else {
        log::warn!("Ignoring item pick {} (only {} offered)", index, state.drop_offers.len());
        return false;
    };
    apply_drop(state, kind);
    state.drop_offers.clear();
    state.phase = if kind == DropKind::Portal {
        log::info!("Portal opened on floor {}", state.floor);
        GamePhase::Portal
    } else {
        GamePhase::Playing
    };
    state.emit(GameEvent::DropApplied(kind));
    true
}

/// Out of hearts
pub fn enter_game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over on floor {} with {} total kills",
        state.floor,
        state.total_kills
    );
    state.emit(GameEvent::GameOver {
        floor: state.floor,
        total_kills: state.total_kills,
    });
}
