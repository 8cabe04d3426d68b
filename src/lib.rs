//! Connection Defender - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, tick order)
//! - `game`: Session lifecycle (idle, running, ended) and score recording
//! - `renderer`: Read-only projection of state into drawable primitives
//! - `platform`: Input capture and the browser host binding
//! - `persistence`: Key-value storage for scores and settings

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScores;
pub use settings::{AimMode, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (height is 80% of width)
    pub const PLAYFIELD_WIDTH: f32 = 720.0;
    pub const PLAYFIELD_HEIGHT: f32 = 576.0;

    /// Velocity multiplier applied to the ship every tick
    pub const FRICTION: f32 = 0.96;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_STRENGTH: f32 = 4.0;
    /// Strength lost per tick while touching a live boss
    pub const BOSS_CONTACT_DRAIN: f32 = 0.1;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 6.0;
    pub const BULLET_RADIUS: f32 = 5.0;

    /// Enemy defaults (speed is sampled per enemy in [MIN, MAX))
    pub const ENEMY_RADIUS: f32 = 18.0;
    pub const ENEMY_MIN_SPEED: f32 = 1.5;
    pub const ENEMY_MAX_SPEED: f32 = 3.0;
    pub const MAX_ENEMIES: usize = 8;
    /// Ticks that are an exact multiple of this skip the enemy spawn
    pub const ENEMY_SPAWN_SKIP_PERIOD: u64 = 999;

    /// Boss defaults
    pub const BOSS_HEALTH: i32 = 18;
    pub const BOSS_SPEED: f32 = 1.8;
    pub const BOSS_RADIUS: f32 = 32.0;
    /// Score that summons the first boss
    pub const FIRST_BOSS_SCORE: u64 = 1200;
    /// Later bosses arrive on every multiple of this above it
    pub const BOSS_SCORE_INTERVAL: u64 = 1600;

    /// Scoring
    pub const ENEMY_POINTS: u64 = 50;
    pub const BOSS_POINTS: u64 = 400;

    /// Explosion defaults
    pub const EXPLOSION_FADE: f32 = 0.03;
    pub const EXPLOSION_EMBERS: usize = 8;
    pub const EXPLOSION_EMBER_RADIUS: f32 = 3.0;
    pub const BOSS_EXPLOSION_RADIUS: f32 = 3.0;
    pub const BOSS_EXPLOSION_EMBERS: usize = 10;
    pub const BOSS_EXPLOSION_EMBER_RADIUS: f32 = 6.0;

    /// Canvas hue rotation per level (degrees), cycled on each boss kill
    pub const HUE_LEVELS: [f32; 5] = [300.0, 240.0, 170.0, 60.0, 0.0];
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Unit vector for (dx, dy) given its precomputed length.
///
/// Returns zero when `dist` is zero so coincident points never produce NaN.
#[inline]
pub fn normalize(dx: f32, dy: f32, dist: f32) -> Vec2 {
    if dist == 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(dx / dist, dy / dist)
}
