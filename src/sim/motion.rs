//! Per-entity update step
//!
//! Homing entities (enemies, the boss, bullets) all share [`home_toward`]:
//! arrive when closer than their own radius, otherwise take one `speed`-long
//! step toward the target.

use std::f32::consts::TAU;

use glam::Vec2;

use super::state::{Body, Boss, Bullet, Ember, Enemy, Explosion, Player, Playfield};
use super::tick::TickInput;
use crate::consts::{EXPLOSION_FADE, FRICTION};
use crate::normalize;

/// Step `body` toward `target` by `speed`.
///
/// Returns true on arrival (distance below the body's radius), in which case
/// the body is left untouched.
pub fn home_toward(body: &mut Body, speed: f32, target: Vec2) -> bool {
    let dx = target.x - body.pos.x;
    let dy = target.y - body.pos.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < body.radius {
        return true;
    }

    let dir = normalize(dx, dy, dist);
    body.vel = dir * speed;
    body.pos += body.vel;
    body.rotation = dir.y.atan2(dir.x);
    false
}

impl Enemy {
    /// Chase the player's current position
    pub fn update(&mut self, target: Vec2) {
        if home_toward(&mut self.body, self.speed, target) {
            self.hit_target = true;
        }
    }
}

impl Bullet {
    /// Fly toward the aim point, resolved against this tick's pointer
    pub fn update(&mut self, pointer: Vec2) {
        let target = self.aim.resolve(pointer);
        if home_toward(&mut self.body, self.speed, target) {
            self.hit_target = true;
        }
    }
}

impl Boss {
    /// Apply pending damage, then chase the player.
    ///
    /// The hit flag is consumed here so damage lands exactly once per hit.
    pub fn update(&mut self, target: Vec2) {
        self.hit_flash = false;
        if self.is_hit {
            self.health -= 1;
            self.is_hit = false;
            self.hit_flash = true;
        }

        if home_toward(&mut self.body, self.speed, target) {
            self.hit_target = true;
        }
    }
}

impl Player {
    /// Steer from held keys, integrate, clamp to the walls and aim at the pointer
    pub fn update(&mut self, input: &TickInput, playfield: &Playfield) {
        // Opposing keys: the later assignment wins (down over up, right over left)
        if input.up {
            self.body.vel.y = -self.speed;
        }
        if input.down {
            self.body.vel.y = self.speed;
        }
        if input.left {
            self.body.vel.x = -self.speed;
        }
        if input.right {
            self.body.vel.x = self.speed;
        }

        self.body.pos += self.body.vel;
        self.body.vel *= FRICTION;

        let r = self.body.radius;
        let pos = &mut self.body.pos;
        if pos.x - r <= 0.0 {
            pos.x = r;
        }
        if pos.y - r <= 0.0 {
            pos.y = r;
        }
        if pos.x + r >= playfield.width {
            pos.x = playfield.width - r;
        }
        if pos.y + r >= playfield.height {
            pos.y = playfield.height - r;
        }

        let aim = input.pointer - self.body.pos;
        if aim != Vec2::ZERO {
            self.body.rotation = aim.y.atan2(aim.x);
        }

        self.hit_flash = false;
        if self.is_hit {
            self.is_hit = false;
            self.hit_flash = true;
            self.strength -= 1.0;
        }
    }
}

impl Explosion {
    /// Push embers outward and fade
    pub fn update(&mut self) {
        if self.embers.is_empty() {
            self.embers = self.generate_embers();
        }

        for ember in &mut self.embers {
            ember.pos += ember.vel;
        }

        self.alpha -= EXPLOSION_FADE;
        if self.alpha < 0.0 {
            self.ended = true;
        }
    }

    fn generate_embers(&self) -> Vec<Ember> {
        (0..self.count)
            .map(|i| {
                let theta = TAU * i as f32 / self.count as f32;
                Ember {
                    pos: self.body.pos,
                    vel: Vec2::new(theta.cos(), theta.sin()) * self.body.radius,
                    radius: self.ember_radius,
                }
            })
            .collect()
    }
}
