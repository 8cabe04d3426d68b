//! Game state and core simulation types
//!
//! Everything one run needs lives in [`Session`]; nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::AimMode;

/// Current phase of the game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Splash screen, no session running
    Idle,
    /// Tick loop active
    Running,
    /// Signal lost, end screen shown
    Ended,
}

/// Rectangular play area with its origin in the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `pos` lies inside or on the edge of the play area
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

/// Position, velocity, collision radius and facing shared by every entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Facing angle in radians
    pub rotation: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            rotation: 0.0,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub speed: f32,
    pub score: u64,
    /// Signal strength; the run ends once this reaches zero
    pub strength: f32,
    /// Set by the resolver when an enemy lands, consumed by the next update
    pub is_hit: bool,
    /// Presentation only: the ship took a hit during the last update
    pub hit_flash: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, PLAYER_RADIUS),
            speed: PLAYER_SPEED,
            score: 0,
            strength: PLAYER_STRENGTH,
            is_hit: false,
            hit_flash: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.strength > 0.0
    }
}

/// Where a bullet is heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BulletAim {
    /// Follows the pointer every tick
    Pointer,
    /// Frozen at the pointer position when fired
    Fixed(Vec2),
}

impl BulletAim {
    pub fn for_mode(mode: AimMode, pointer: Vec2) -> Self {
        match mode {
            AimMode::TrackPointer => BulletAim::Pointer,
            AimMode::Fixed => BulletAim::Fixed(pointer),
        }
    }

    /// Resolve the aim point against this tick's pointer
    pub fn resolve(&self, pointer: Vec2) -> Vec2 {
        match *self {
            BulletAim::Pointer => pointer,
            BulletAim::Fixed(point) => point,
        }
    }
}

/// A player shot
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    pub speed: f32,
    pub aim: BulletAim,
    /// Reached its aim point or struck the boss; swept on the next bullet pass
    pub hit_target: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, aim: BulletAim) -> Self {
        Self {
            body: Body::new(pos, BULLET_RADIUS),
            speed: BULLET_SPEED,
            aim,
            hit_target: false,
        }
    }
}

/// A homing drone that dives at the player
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    pub speed: f32,
    /// Struck by a bullet; explodes on the next enemy pass
    pub is_hit: bool,
    /// Reached the player; vanishes without an explosion
    pub hit_target: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            body: Body::new(pos, ENEMY_RADIUS),
            speed,
            is_hit: false,
            hit_target: false,
        }
    }
}

/// The large periodic enemy
#[derive(Debug, Clone)]
pub struct Boss {
    pub body: Body,
    pub speed: f32,
    pub health: i32,
    pub is_hit: bool,
    pub hit_target: bool,
    /// Presentation only: damage was applied during the last update
    pub hit_flash: bool,
}

impl Boss {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, BOSS_RADIUS),
            speed: BOSS_SPEED,
            health: BOSS_HEALTH,
            is_hit: false,
            hit_target: false,
            hit_flash: false,
        }
    }

    pub fn alive(&self) -> bool {
        self.health >= 1
    }
}

/// One particle of an explosion
#[derive(Debug, Clone, Copy)]
pub struct Ember {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// A fading ring of embers
#[derive(Debug, Clone)]
pub struct Explosion {
    pub body: Body,
    /// Fade driver, 1.0 down to below zero
    pub alpha: f32,
    /// Number of embers to emit
    pub count: usize,
    pub ember_radius: f32,
    /// Generated on the first update
    pub embers: Vec<Ember>,
    pub ended: bool,
}

impl Explosion {
    /// Small burst left by a destroyed enemy
    pub fn small(pos: Vec2) -> Self {
        Self::new(pos, 1.0, EXPLOSION_EMBERS, EXPLOSION_EMBER_RADIUS)
    }

    /// Large burst left by a destroyed boss
    pub fn large(pos: Vec2) -> Self {
        Self::new(
            pos,
            BOSS_EXPLOSION_RADIUS,
            BOSS_EXPLOSION_EMBERS,
            BOSS_EXPLOSION_EMBER_RADIUS,
        )
    }

    pub fn new(pos: Vec2, radius: f32, count: usize, ember_radius: f32) -> Self {
        Self {
            body: Body::new(pos, radius),
            alpha: 1.0,
            count,
            ember_radius,
            embers: Vec::new(),
            ended: false,
        }
    }
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub playfield: Playfield,
    pub player: Player,
    /// Creation order
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub explosions: Vec<Explosion>,
    /// Spawner cap, checked before each push
    pub max_enemies: usize,
    /// Tick counter
    pub count: u64,
    /// Index into `HUE_LEVELS`
    pub level: usize,
    /// How newly fired bullets pick their aim point
    pub aim_mode: AimMode,
}

impl Session {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_playfield(seed, Playfield::default())
    }

    pub fn with_playfield(seed: u64, playfield: Playfield) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            player: Player::new(playfield.center()),
            bullets: Vec::new(),
            enemies: Vec::new(),
            boss: None,
            explosions: Vec::new(),
            max_enemies: MAX_ENEMIES,
            count: 0,
            level: 0,
            aim_mode: AimMode::default(),
        }
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Canvas hue rotation (degrees) for the current level
    pub fn hue(&self) -> f32 {
        HUE_LEVELS[self.level % HUE_LEVELS.len()]
    }

    /// Move to the next hue, wrapping after the last
    pub fn advance_level(&mut self) {
        self.level = (self.level + 1) % HUE_LEVELS.len();
    }

    /// Queue a bullet from the ship toward `pointer`.
    ///
    /// Ignored once the signal is gone.
    pub fn fire(&mut self, pointer: Vec2) -> bool {
        if !self.player.is_alive() {
            return false;
        }
        let aim = BulletAim::for_mode(self.aim_mode, pointer);
        self.bullets.push(Bullet::new(self.player.body.pos, aim));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_centers_player() {
        let session = Session::new(7);
        assert_eq!(session.player.body.pos, Vec2::new(360.0, 288.0));
        assert_eq!(session.player.strength, PLAYER_STRENGTH);
        assert_eq!(session.player.score, 0);
        assert!(session.enemies.is_empty());
        assert!(session.boss.is_none());
        assert_eq!(session.max_enemies, 8);
        assert_eq!(session.hue(), 300.0);
    }

    #[test]
    fn test_level_wraps() {
        let mut session = Session::new(1);
        let hues: Vec<f32> = (0..6)
            .map(|_| {
                let hue = session.hue();
                session.advance_level();
                hue
            })
            .collect();
        assert_eq!(hues, vec![300.0, 240.0, 170.0, 60.0, 0.0, 300.0]);
    }

    #[test]
    fn test_fire_respects_strength() {
        let mut session = Session::new(1);
        assert!(session.fire(Vec2::new(10.0, 10.0)));
        assert_eq!(session.bullets.len(), 1);
        assert_eq!(session.bullets[0].body.pos, session.player.body.pos);

        session.player.strength = 0.0;
        assert!(!session.fire(Vec2::new(10.0, 10.0)));
        assert_eq!(session.bullets.len(), 1);
    }

    #[test]
    fn test_bullet_aim_modes() {
        let click = Vec2::new(5.0, 6.0);
        let later = Vec2::new(50.0, 60.0);
        assert_eq!(BulletAim::for_mode(AimMode::TrackPointer, click).resolve(later), later);
        assert_eq!(BulletAim::for_mode(AimMode::Fixed, click).resolve(later), click);
    }

    #[test]
    fn test_boss_alive_threshold() {
        let mut boss = Boss::new(Vec2::ZERO);
        assert!(boss.alive());
        boss.health = 1;
        assert!(boss.alive());
        boss.health = 0;
        assert!(!boss.alive());
    }
}
