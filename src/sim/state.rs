//! Game state and core simulation types
//!
//! Everything a frame update reads or writes lives in [`GameState`], including
//! the seeded RNG, so a snapshot taken between ticks resumes identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Start,
    /// Active gameplay
    Playing,
    /// Floor quota met, choosing a permanent reward
    StageClear,
    /// Picked up a drop, choosing one of two offers
    ItemSelection,
    /// Portal taken, waiting for confirm to drop to the next floor
    Portal,
    /// Out of hearts
    GameOver,
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Speed before any temporary modifiers
    pub base_speed: f32,
    /// Speed applied to movement this frame
    pub speed: f32,
    pub hearts: u32,
    pub max_hearts: u32,
    pub invincible: bool,
    /// Frames of invincibility left
    pub invincible_ticks: u32,
    /// Frames until the next shot; fires at <= 0
    pub attack_cooldown: i32,
    /// Frames between shots
    pub attack_speed: i32,
    /// True iff the player issued nonzero movement this frame
    pub moving: bool,
    pub double_shot: bool,
    /// Display name of the current weapon
    pub weapon: String,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            base_speed: PLAYER_SPEED,
            speed: PLAYER_SPEED,
            hearts: PLAYER_HEARTS,
            max_hearts: PLAYER_HEARTS,
            invincible: false,
            invincible_ticks: 0,
            attack_cooldown: 0,
            attack_speed: ATTACK_INTERVAL,
            moving: false,
            double_shot: false,
            weapon: DEFAULT_WEAPON.to_string(),
        }
    }

    /// Lose a heart and start the invincibility window.
    ///
    /// Returns false (and changes nothing) while already invincible.
    pub fn take_hit(&mut self) -> bool {
        if self.invincible {
            return false;
        }
        self.hearts = self.hearts.saturating_sub(1);
        self.invincible = true;
        self.invincible_ticks = INVINCIBILITY_FRAMES;
        true
    }

    /// Restore hearts, capped at max_hearts
    pub fn heal(&mut self, amount: u32) {
        self.hearts = (self.hearts + amount).min(self.max_hearts);
    }

    pub fn is_dead(&self) -> bool {
        self.hearts == 0
    }

    /// Per-frame countdowns (invincibility and attack cooldown)
    pub fn tick_timers(&mut self) {
        self.attack_cooldown = (self.attack_cooldown - 1).max(0);
        if self.invincible {
            self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
            if self.invincible_ticks == 0 {
                self.invincible = false;
            }
        }
    }
}

/// A chasing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            radius: ENEMY_RADIUS,
            speed,
        }
    }
}

/// A bullet flying toward the point its target occupied when fired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Captured at fire time; never follows the enemy
    pub target: Vec2,
    pub speed: f32,
    pub radius: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, target: Vec2) -> Self {
        Self {
            pos,
            target,
            speed: BULLET_SPEED,
            radius: BULLET_RADIUS,
        }
    }
}

/// A dropped item lying on the floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub radius: f32,
}

impl Pickup {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PICKUP_RADIUS,
        }
    }
}

/// One-shot effects offered when a pickup is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropKind {
    Bomb,
    DoublePistol,
    Heal,
    Portal,
}

impl DropKind {
    pub const ALL: [DropKind; 4] = [
        DropKind::Bomb,
        DropKind::DoublePistol,
        DropKind::Heal,
        DropKind::Portal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DropKind::Bomb => "Bomb",
            DropKind::DoublePistol => "Double Pistol",
            DropKind::Heal => "Heal",
            DropKind::Portal => "Portal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DropKind::Bomb => "Destroys every enemy and bullet on the floor",
            DropKind::DoublePistol => "Fire two bullets at the two nearest enemies",
            DropKind::Heal => "Restore one heart",
            DropKind::Portal => "Skip straight to the next floor",
        }
    }
}

/// Permanent upgrade categories on the stage clear screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RewardKind {
    /// Shorter attack interval (frames)
    Weapon { interval_cut: i32 },
    /// Faster movement (pixels per frame)
    Speed { bonus: f32 },
    /// More hearts, both max and current
    Heart { hearts: u32 },
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::Weapon { .. } => "Weapon",
            RewardKind::Speed { .. } => "Speed",
            RewardKind::Heart { .. } => "Heart",
        }
    }
}

/// A reward placed on the floor of the stage clear screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReward {
    pub kind: RewardKind,
    pub pos: Vec2,
}

/// Things that happened during a tick, for renderers and logs
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    FloorStarted { floor: u32 },
    EnemySpawned { pos: Vec2 },
    PlayerHit { hearts: u32 },
    BulletFired { target: Vec2 },
    EnemyKilled { pos: Vec2 },
    ItemDropped { pos: Vec2 },
    ItemPicked,
    DropApplied(DropKind),
    StageCleared { floor: u32 },
    RewardChosen(RewardKind),
    GameOver { floor: u32, total_kills: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG, advanced only inside the tick
    pub rng: Pcg32,
    /// Playfield size in pixels
    pub arena: Vec2,
    pub phase: GamePhase,
    /// Current floor (1-based)
    pub floor: u32,
    /// Kills on the current floor
    pub floor_kills: u32,
    /// Kills across the whole run (survives floor resets)
    pub total_kills: u32,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    /// A stage reward has been taken on this clear screen
    pub reward_chosen: bool,
    /// Tick at which the current floor began
    pub floor_started_tick: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub pickups: Vec<Pickup>,
    /// Offered on the stage clear screen
    pub rewards: Vec<StageReward>,
    /// Offered on the item selection screen
    pub drop_offers: Vec<DropKind>,
    /// Events from the most recent tick (not gameplay-affecting)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on the default arena, sitting on the start screen
    pub fn new(seed: u64) -> Self {
        Self::with_arena(seed, ARENA_WIDTH, ARENA_HEIGHT)
    }

    pub fn with_arena(seed: u64, width: f32, height: f32) -> Self {
        let arena = Vec2::new(width, height);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            phase: GamePhase::Start,
            floor: 1,
            floor_kills: 0,
            total_kills: 0,
            spawn_timer: 0,
            reward_chosen: false,
            floor_started_tick: 0,
            time_ticks: 0,
            player: Player::new(arena / 2.0),
            enemies: Vec::new(),
            bullets: Vec::new(),
            pickups: Vec::new(),
            rewards: Vec::new(),
            drop_offers: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Center of the arena
    pub fn center(&self) -> Vec2 {
        self.arena / 2.0
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
