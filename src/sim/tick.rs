//! One simulation tick
//!
//! Advances a [`Session`] by one frame. The order of the steps below is part
//! of the game's behavior: enemies explode a tick after being struck, bullets
//! that hit the boss leave a tick later, and only one enemy kill is credited
//! per tick.

use glam::Vec2;

use super::collision::{
    resolve_boss_contact, resolve_bullet_boss, resolve_bullet_enemy, resolve_enemy_contacts,
};
use super::spawn::{spawn_boss, spawn_enemies};
use super::state::{Explosion, Session};
use crate::consts::BOSS_POINTS;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position relative to the playfield
    pub pointer: Vec2,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire events received since the last tick
    pub fire: u32,
}

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Signal still up, schedule the next tick
    Continue,
    /// Strength depleted, the run is over
    SignalLost,
}

/// Advance the session by one tick
pub fn tick(session: &mut Session, input: &TickInput) -> TickOutcome {
    for _ in 0..input.fire {
        session.fire(input.pointer);
    }

    spawn_enemies(session);
    spawn_boss(session);

    for explosion in &mut session.explosions {
        explosion.update();
    }
    session.explosions.retain(|e| !e.ended);

    let target = session.player.body.pos;
    for enemy in &mut session.enemies {
        enemy.update(target);
    }
    let landed = resolve_enemy_contacts(
        &mut session.enemies,
        &mut session.player,
        &mut session.explosions,
    );
    if landed > 0 {
        log::debug!("{} enemies reached the ship", landed);
    }

    for bullet in &mut session.bullets {
        bullet.update(input.pointer);
    }
    session.bullets.retain(|b| !b.hit_target);

    if resolve_bullet_enemy(&session.bullets, &mut session.enemies, &mut session.player) {
        log::debug!("Enemy hit, score {}", session.player.score);
    }

    session.player.update(input, &session.playfield);

    update_boss(session);

    if session.player.is_alive() {
        TickOutcome::Continue
    } else {
        log::info!(
            "Signal lost after {} ticks with {} pts",
            session.count,
            session.player.score
        );
        TickOutcome::SignalLost
    }
}

/// Boss combat, motion and defeat
fn update_boss(session: &mut Session) {
    let Some(boss) = session.boss.as_mut() else {
        return;
    };

    resolve_bullet_boss(&mut session.bullets, boss);
    boss.update(session.player.body.pos);
    resolve_boss_contact(&mut session.player, boss);

    if !boss.alive() {
        let pos = boss.body.pos;
        session.player.score += BOSS_POINTS;
        session.explosions.push(Explosion::large(pos));
        session.boss = None;
        session.advance_level();
        log::info!(
            "Boss destroyed, score {}, hue {}",
            session.player.score,
            session.hue()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Boss, Bullet, BulletAim, Enemy};
    use proptest::prelude::*;

    /// Session with the spawner parked so scenarios stay isolated
    fn quiet_session() -> Session {
        let mut session = Session::new(12345);
        session.max_enemies = 0;
        session
    }

    fn idle_input(session: &Session) -> TickInput {
        TickInput {
            pointer: session.player.body.pos + Vec2::new(100.0, 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_tick_spawns_enemy() {
        let mut session = Session::new(1);
        let input = idle_input(&session);
        assert_eq!(tick(&mut session, &input), TickOutcome::Continue);
        assert_eq!(session.count, 1);
        assert_eq!(session.enemies.len(), 1);
    }

    #[test]
    fn test_enemy_contact_costs_strength_without_explosion() {
        let mut session = quiet_session();
        let pos = session.player.body.pos + Vec2::new(25.0, 0.0);
        session.enemies.push(Enemy::new(pos, 2.0));
        let input = idle_input(&session);

        tick(&mut session, &input);
        assert_eq!(session.player.strength, 3.0);
        assert!(session.enemies.is_empty());
        assert!(session.explosions.is_empty());
    }

    #[test]
    fn test_bullet_travels_and_persists() {
        let mut session = quiet_session();
        let start = session.player.body.pos;
        session
            .bullets
            .push(Bullet::new(start, BulletAim::Fixed(start + Vec2::new(0.0, -200.0))));
        let input = idle_input(&session);

        tick(&mut session, &input);
        assert_eq!(session.bullets.len(), 1);
        let moved = session.bullets[0].body.pos - start;
        assert!((moved.length() - 6.0).abs() < 1e-4);
        assert!(moved.y < 0.0);
    }

    #[test]
    fn test_bullet_expires_at_aim_point() {
        let mut session = quiet_session();
        let aim = session.player.body.pos + Vec2::new(2.0, 0.0);
        session
            .bullets
            .push(Bullet::new(session.player.body.pos, BulletAim::Fixed(aim)));
        let input = idle_input(&session);

        tick(&mut session, &input);
        assert!(session.bullets.is_empty());
    }

    #[test]
    fn test_fire_event_queues_bullet() {
        let mut session = quiet_session();
        let mut input = idle_input(&session);
        input.fire = 2;
        tick(&mut session, &input);
        assert_eq!(session.bullets.len(), 2);
    }

    #[test]
    fn test_struck_enemy_explodes_next_tick() {
        let mut session = quiet_session();
        let enemy_pos = Vec2::new(100.0, 100.0);
        session.enemies.push(Enemy::new(enemy_pos, 0.0));
        session
            .bullets
            .push(Bullet::new(enemy_pos, BulletAim::Fixed(Vec2::new(100.0, 500.0))));
        let input = idle_input(&session);

        tick(&mut session, &input);
        assert_eq!(session.player.score, 50);
        assert_eq!(session.enemies.len(), 1);
        assert!(session.enemies[0].is_hit);
        assert!(session.explosions.is_empty());

        tick(&mut session, &input);
        assert!(session.enemies.is_empty());
        assert_eq!(session.explosions.len(), 1);
        // Bullets pass through enemies
        assert_eq!(session.bullets.len(), 1);
        assert_eq!(session.player.score, 50);
    }

    #[test]
    fn test_boss_killing_blow() {
        let mut session = quiet_session();
        let boss_pos = Vec2::new(100.0, 100.0);
        let mut boss = Boss::new(boss_pos);
        boss.health = 1;
        boss.is_hit = true;
        session.boss = Some(boss);
        session.player.score = 100;
        let input = idle_input(&session);

        tick(&mut session, &input);
        assert!(session.boss.is_none());
        assert_eq!(session.player.score, 500);
        assert_eq!(session.explosions.len(), 1);
        // Boss took one step toward the ship before dying
        let step = session.explosions[0].body.pos - boss_pos;
        assert!((step.length() - 1.8).abs() < 1e-4);
        assert_eq!(session.level, 1);
        assert_eq!(session.hue(), 240.0);
    }

    #[test]
    fn test_bullet_hitting_boss_leaves_next_tick() {
        let mut session = quiet_session();
        let boss_pos = Vec2::new(100.0, 100.0);
        session.boss = Some(Boss::new(boss_pos));
        session
            .bullets
            .push(Bullet::new(boss_pos, BulletAim::Fixed(Vec2::new(100.0, 500.0))));
        let input = idle_input(&session);

        tick(&mut session, &input);
        assert_eq!(session.bullets.len(), 1);
        assert!(session.bullets[0].hit_target);
        let boss = session.boss.as_ref().expect("boss alive");
        assert_eq!(boss.health, 17);
        assert!(boss.hit_flash);

        tick(&mut session, &input);
        assert!(session.bullets.is_empty());
        assert_eq!(session.boss.as_ref().map(|b| b.health), Some(17));
    }

    #[test]
    fn test_boss_contact_drains_each_tick() {
        let mut session = quiet_session();
        let near = session.player.body.pos + Vec2::new(40.0, 0.0);
        session.boss = Some(Boss::new(near));
        let input = idle_input(&session);

        tick(&mut session, &input);
        tick(&mut session, &input);
        assert!((session.player.strength - 3.8).abs() < 1e-5);
    }

    #[test]
    fn test_boss_arrives_at_score_threshold() {
        let mut session = quiet_session();
        session.player.score = 1200;
        let input = idle_input(&session);

        tick(&mut session, &input);
        assert!(session.boss.is_some());
    }

    #[test]
    fn test_signal_lost() {
        let mut session = quiet_session();
        session.player.strength = 1.0;
        let pos = session.player.body.pos;
        session.enemies.push(Enemy::new(pos, 2.0));
        let input = idle_input(&session);

        assert_eq!(tick(&mut session, &input), TickOutcome::SignalLost);
        assert_eq!(session.player.strength, 0.0);
    }

    proptest! {
        #[test]
        fn prop_score_never_decreases(
            seed in any::<u64>(),
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), 0u32..2, 0.0f32..720.0, 0.0f32..576.0), 1..200),
        ) {
            let mut session = Session::new(seed);
            let mut last = 0;
            for (up, left, fire, px, py) in moves {
                let input = TickInput {
                    pointer: Vec2::new(px, py),
                    up,
                    down: !up,
                    left,
                    right: !left,
                    fire,
                };
                let outcome = tick(&mut session, &input);
                prop_assert!(session.player.score >= last);
                prop_assert!(session.boss.iter().count() <= 1);
                last = session.player.score;
                if outcome == TickOutcome::SignalLost {
                    break;
                }
            }
        }
    }
}
