//! Frame update
//!
//! Core game loop that advances the simulation one frame at a time.

use glam::Vec2;

use super::collision::{collect_pickups, move_bullets, move_enemies};
use super::movement::move_player;
use super::progression::{
    advance_floor, check_floor_clear, reset_game, select_drop, select_reward,
};
use super::spawn::update_spawner;
use super::state::{GamePhase, GameState};
use super::targeting::shoot_bullet;

/// Input commands for a single frame (sampled once, before the update)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Movement intent, each axis in [-1, 1]
    pub move_dir: Vec2,
    /// Confirm/advance (Enter, or a tap on a non-playing screen)
    pub confirm: bool,
    /// Pick the offer at this index (reward or drop item)
    pub select: Option<usize>,
}

impl TickInput {
    /// Build a movement intent from four direction keys
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Self {
            move_dir: Vec2::new(axis(left, right), axis(up, down)),
            ..Default::default()
        }
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Default::default()
        }
    }

    pub fn select(index: usize) -> Self {
        Self {
            select: Some(index),
            ..Default::default()
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            if input.confirm {
                reset_game(state);
            }
        }

        GamePhase::Playing => tick_playing(state, input),

        GamePhase::StageClear => {
            if let Some(index) = input.select {
                select_reward(state, index);
            }
            if input.confirm {
                if !state.reward_chosen {
                    log::info!("Leaving floor {} without a reward", state.floor);
                }
                advance_floor(state);
            }
        }

        GamePhase::ItemSelection => {
            if let Some(index) = input.select {
                select_drop(state, index);
            }
        }

        GamePhase::Portal => {
            if input.confirm {
                advance_floor(state);
            }
        }
    }
}

/// One frame of active play, in fixed phase order
fn tick_playing(state: &mut GameState, input: &TickInput) {
    update_spawner(state);
    move_player(&mut state.player, input.move_dir, state.arena);

    move_enemies(state);
    if state.phase != GamePhase::Playing {
        return;
    }

    shoot_bullet(state);
    move_bullets(state);

    // Quota first: a cleared floor leaves its pickups uncollected
    if !check_floor_clear(state) {
        collect_pickups(state);
    }

    state.player.tick_timers();
}
