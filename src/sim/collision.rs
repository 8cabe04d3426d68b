//! Circle intersection and combat resolution
//!
//! Every scan here is first-match in collection order, never closest-match,
//! and tolerates empty collections.

use glam::Vec2;

use super::state::{Body, Boss, Bullet, Enemy, Explosion, Player};
use crate::consts::{BOSS_CONTACT_DRAIN, ENEMY_POINTS};
use crate::distance;

/// Anything with a collision circle
pub trait Circle {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
}

impl Circle for Body {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

macro_rules! impl_circle_via_body {
    ($($ty:ty),*) => {
        $(
            impl Circle for $ty {
                fn center(&self) -> Vec2 {
                    self.body.pos
                }

                fn radius(&self) -> f32 {
                    self.body.radius
                }
            }
        )*
    };
}

impl_circle_via_body!(Player, Bullet, Enemy, Boss, Explosion);

/// True if the two circles overlap. Exact tangency is not a hit.
pub fn intersects(a: &impl Circle, b: &impl Circle) -> bool {
    distance(a.center(), b.center()) < a.radius() + b.radius()
}

/// Flag every enemy touching the player, then sweep.
///
/// Enemies that landed on the player vanish quietly and mark the player hit.
/// Enemies struck by a bullet on an earlier tick leave an explosion.
/// Returns how many enemies landed.
pub fn resolve_enemy_contacts(
    enemies: &mut Vec<Enemy>,
    player: &mut Player,
    explosions: &mut Vec<Explosion>,
) -> usize {
    for enemy in enemies.iter_mut() {
        if intersects(&*enemy, &*player) {
            enemy.hit_target = true;
            player.is_hit = true;
        }
    }

    let before = enemies.len();
    enemies.retain(|e| !e.hit_target);
    let landed = before - enemies.len();

    enemies.retain(|e| {
        if e.is_hit {
            explosions.push(Explosion::small(e.body.pos));
        }
        !e.is_hit
    });

    landed
}

/// Index of the first enemy hit by the first bullet that hits anything
pub fn first_bullet_enemy_hit(bullets: &[Bullet], enemies: &[Enemy]) -> Option<usize> {
    bullets
        .iter()
        .find_map(|b| enemies.iter().position(|e| intersects(e, b)))
}

/// Credit at most one bullet hit on an enemy this tick.
///
/// The bullet is not consumed. Returns true if an enemy was struck.
pub fn resolve_bullet_enemy(bullets: &[Bullet], enemies: &mut [Enemy], player: &mut Player) -> bool {
    match first_bullet_enemy_hit(bullets, enemies) {
        Some(idx) => {
            enemies[idx].is_hit = true;
            player.score += ENEMY_POINTS;
            true
        }
        None => false,
    }
}

/// Mark the boss hit by the first bullet touching it.
///
/// That bullet is flagged and leaves on the next bullet sweep.
pub fn resolve_bullet_boss(bullets: &mut [Bullet], boss: &mut Boss) -> bool {
    match bullets.iter_mut().find(|b| intersects(&**b, &*boss)) {
        Some(bullet) => {
            boss.is_hit = true;
            bullet.hit_target = true;
            true
        }
        None => false,
    }
}

/// Drain strength while the ship overlaps the boss
pub fn resolve_boss_contact(player: &mut Player, boss: &Boss) -> bool {
    if intersects(&*player, boss) {
        player.strength -= BOSS_CONTACT_DRAIN;
        true
    } else {
        false
    }
}
