//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (collection insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Circle, intersects};
pub use motion::home_toward;
pub use spawn::{boss_due, enemy_due, off_screen_position};
pub use state::{
    Body, Boss, Bullet, BulletAim, Ember, Enemy, Explosion, GamePhase, Player, Playfield, Session,
};
pub use tick::{TickInput, TickOutcome, tick};
