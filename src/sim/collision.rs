//! Contact resolution between circles
//!
//! Each pass moves one kind of entity and resolves the contacts it causes.
//! Removals go through `retain`/`retain_mut` or a dead-index mask applied
//! after the scan, so no element is skipped or visited twice.

use glam::Vec2;
use rand::Rng;

use super::movement::{BulletStep, step_bullet, step_enemy};
use super::progression::{enter_game_over, enter_item_selection};
use super::state::{GameEvent, GameState, Pickup};
use crate::circles_overlap;
use crate::consts::PICKUP_DROP_CHANCE;

/// Move every enemy toward the player and resolve enemy/player contact.
///
/// Contacts are checked right after each enemy steps, against the player's
/// invincibility as it stands at that moment: the first contact of a frame
/// costs a heart and removes the enemy, later ones bounce off the fresh
/// invincibility and leave their enemy in place. Running out of hearts ends
/// the game before this call returns.
pub fn move_enemies(state: &mut GameState) {
    let player = &mut state.player;
    let target = player.pos;
    let mut hits: Vec<u32> = Vec::new();

    state.enemies.retain_mut(|enemy| {
        step_enemy(enemy, target);
        let touching = circles_overlap(enemy.pos, enemy.radius, player.pos, player.radius);
        if touching && player.take_hit() {
            hits.push(player.hearts);
            return false;
        }
        true
    });

    for hearts in hits {
        log::debug!("Player hit, {} hearts left", hearts);
        state.emit(GameEvent::PlayerHit { hearts });
    }
    if state.player.is_dead() {
        enter_game_over(state);
    }
}

/// Move every bullet and resolve bullet/enemy contact.
///
/// A bullet overlapping any living enemy (en route or at its target point)
/// kills the first such enemy and is consumed. A bullet that reaches its
/// point with nothing there is discarded. Each kill rolls for a pickup.
pub fn move_bullets(state: &mut GameState) {
    let enemies = &state.enemies;
    let mut dead = vec![false; enemies.len()];
    let mut kills: Vec<Vec2> = Vec::new();

    state.bullets.retain_mut(|bullet| {
        let step = step_bullet(bullet);
        let hit = (0..enemies.len()).find(|&i| {
            !dead[i]
                && circles_overlap(bullet.pos, bullet.radius, enemies[i].pos, enemies[i].radius)
        });
        match hit {
            Some(i) => {
                dead[i] = true;
                kills.push(enemies[i].pos);
                false
            }
            None => step == BulletStep::InFlight,
        }
    });

    if kills.is_empty() {
        return;
    }

    let mut index = 0;
    state.enemies.retain(|_| {
        let keep = !dead[index];
        index += 1;
        keep
    });

    for pos in kills {
        state.floor_kills += 1;
        state.total_kills += 1;
        state.emit(GameEvent::EnemyKilled { pos });
        if state.rng.random_bool(PICKUP_DROP_CHANCE) {
            state.pickups.push(Pickup::new(pos));
            state.emit(GameEvent::ItemDropped { pos });
        }
    }
}

/// Collect the first pickup the player overlaps, opening item selection.
///
/// Returns true if a pickup was collected.
pub fn collect_pickups(state: &mut GameState) -> bool {
    let player = &state.player;
    let Some(index) = state
        .pickups
        .iter()
        .position(|p| circles_overlap(p.pos, p.radius, player.pos, player.radius))
    else {
        return false;
    };

    state.pickups.remove(index);
    state.emit(GameEvent::ItemPicked);
    enter_item_selection(state);
    true
}
