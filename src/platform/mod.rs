//! Platform abstraction layer
//!
//! The simulation never talks to a window, keyboard or canvas. A host
//! supplies:
//! - an [`InputSource`], polled once per frame for a [`TickInput`] snapshot
//! - a [`Renderer`], handed the state after every update
//!
//! Headless implementations of both live here, along with the frame driver.

use glam::Vec2;

use crate::direction_to;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Where frame input comes from
pub trait InputSource {
    /// Sample input for the next frame
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Where frames go after the update
pub trait Renderer {
    /// Draw the current state; nothing returned feeds back into the simulation
    fn render(&mut self, state: &GameState);
}

/// Run `frames` updates: poll input, tick, render
pub fn run_frames<I, R>(state: &mut GameState, input: &mut I, renderer: &mut R, frames: u64)
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    for _ in 0..frames {
        let frame_input = input.poll(state);
        tick(state, &frame_input);
        renderer.render(state);
    }
}

/// Replays a fixed list of inputs, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<TickInput>) -> Self {
        Self { inputs, cursor: 0 }
    }

    /// True once every scripted input has been handed out
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.inputs.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        let input = self.inputs.get(self.cursor).cloned().unwrap_or_default();
        self.cursor += 1;
        input
    }
}

/// Demo player: stands still to shoot, steps away from close enemies,
/// confirms every screen and takes the first offer
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Gap (beyond touching) at which an enemy counts as a threat
    pub danger_gap: f32,
    /// Gap at which it is safe to walk over to a pickup
    pub pickup_gap: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            danger_gap: 60.0,
            pickup_gap: 150.0,
        }
    }
}

impl Autopilot {
    fn steer(&self, state: &GameState) -> Vec2 {
        let player = &state.player;

        // Closest gap between the player's edge and an enemy's edge
        let threat = state
            .enemies
            .iter()
            .map(|e| (e, e.pos.distance(player.pos) - e.radius - player.radius))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((enemy, gap)) = threat {
            if gap < self.danger_gap && !player.invincible {
                let away = direction_to(enemy.pos, player.pos);
                // Pinned on the enemy or against a wall: head for the middle
                let toward_center = direction_to(player.pos, state.center());
                if away == Vec2::ZERO {
                    return toward_center;
                }
                return (away + toward_center * 0.3).normalize_or_zero();
            }
        }

        let safe = threat.is_none_or(|(_, gap)| gap > self.pickup_gap);
        if safe {
            if let Some(pickup) = state.pickups.first() {
                return direction_to(player.pos, pickup.pos);
            }
        }

        // Stand still so the auto-fire can shoot
        Vec2::ZERO
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::Start | GamePhase::Portal | GamePhase::GameOver => TickInput::confirm(),
            GamePhase::StageClear => TickInput {
                select: (!state.reward_chosen).then_some(0),
                confirm: true,
                ..Default::default()
            },
            GamePhase::ItemSelection => TickInput::select(0),
            GamePhase::Playing => TickInput {
                move_dir: self.steer(state),
                ..Default::default()
            },
        }
    }
}

/// Draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) {}
}

/// Logs phase-level events at `info`; spawns, shots and a periodic summary
/// at `debug`
#[derive(Debug, Clone)]
pub struct LogRenderer {
    /// Frames between summaries (0 disables them)
    pub summary_every: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(summary_every: u64) -> Self {
        Self {
            summary_every,
            frames: 0,
        }
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Per-entity events are frame noise; everything else is a game beat
fn event_level(event: &GameEvent) -> log::Level {
    match event {
        GameEvent::EnemySpawned { .. } | GameEvent::BulletFired { .. } => log::Level::Debug,
        _ => log::Level::Info,
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, state: &GameState) {
        self.frames += 1;
        for event in &state.events {
            log::log!(event_level(event), "[tick {}] {:?}", state.time_ticks, event);
        }
        if self.summary_every > 0 && self.frames.is_multiple_of(self.summary_every) {
            log::debug!(
                "[tick {}] {:?} floor={} kills={}/{} hearts={}/{} enemies={} bullets={}",
                state.time_ticks,
                state.phase,
                state.floor,
                state.floor_kills,
                crate::sim::kill_quota(state.floor),
                state.player.hearts,
                state.player.max_hearts,
                state.enemies.len(),
                state.bullets.len()
            );
        }
    }
}
