//! Enemy and boss spawning policy

use glam::Vec2;
use rand::Rng;

use super::state::{Boss, Enemy, Playfield, Session};
use crate::consts::*;

/// Pick a point beyond the visible area.
///
/// Each axis is a uniform playfield coordinate shifted a full width/height
/// to one side or the other, so the point is always strictly outside.
pub fn off_screen_position<R: Rng>(rng: &mut R, playfield: &Playfield) -> Vec2 {
    let rx = rng.random_range(0.0..playfield.width);
    let ry = rng.random_range(0.0..playfield.height);
    // [0, w) maps to (w, 2w] on the far side and [-w, 0) on the near side
    let x = if rng.random_bool(0.5) {
        2.0 * playfield.width - rx
    } else {
        rx - playfield.width
    };
    let y = if rng.random_bool(0.5) {
        2.0 * playfield.height - ry
    } else {
        ry - playfield.height
    };
    Vec2::new(x, y)
}

/// Whether the enemy spawner may act on tick `count` with `enemies` alive
pub fn enemy_due(count: u64, enemies: usize, max_enemies: usize) -> bool {
    count % ENEMY_SPAWN_SKIP_PERIOD != 0 && enemies < max_enemies
}

/// Whether a boss should appear at this score
pub fn boss_due(score: u64, boss_present: bool) -> bool {
    if boss_present {
        return false;
    }
    score == FIRST_BOSS_SCORE || (score > BOSS_SCORE_INTERVAL && score % BOSS_SCORE_INTERVAL == 0)
}

/// Advance the tick counter and add at most one enemy
pub fn spawn_enemies(session: &mut Session) -> bool {
    session.count += 1;
    if !enemy_due(session.count, session.enemies.len(), session.max_enemies) {
        return false;
    }

    let playfield = session.playfield;
    let rng = session.rng();
    let pos = off_screen_position(rng, &playfield);
    let speed = rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
    session.enemies.push(Enemy::new(pos, speed));
    true
}

/// Summon a boss when the score calls for one
pub fn spawn_boss(session: &mut Session) -> bool {
    if !boss_due(session.player.score, session.boss.is_some()) {
        return false;
    }

    let playfield = session.playfield;
    let pos = off_screen_position(session.rng(), &playfield);
    session.boss = Some(Boss::new(pos));
    log::info!(
        "Boss incoming at score {} from ({:.0}, {:.0})",
        session.player.score,
        pos.x,
        pos.y
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_enemy_due_skips_period_multiples() {
        assert!(enemy_due(1, 0, 8));
        assert!(enemy_due(998, 7, 8));
        assert!(!enemy_due(999, 0, 8));
        assert!(!enemy_due(1998, 0, 8));
        assert!(!enemy_due(5, 8, 8));
    }

    #[test]
    fn test_boss_due_thresholds() {
        assert!(!boss_due(0, false));
        assert!(!boss_due(1150, false));
        assert!(boss_due(1200, false));
        assert!(!boss_due(1200, true));
        assert!(!boss_due(1600, false));
        assert!(!boss_due(2400, false));
        assert!(boss_due(3200, false));
        assert!(!boss_due(3200, true));
        assert!(boss_due(4800, false));
    }

    #[test]
    fn test_spawner_fills_to_cap() {
        let mut session = Session::new(99);
        for _ in 0..20 {
            spawn_enemies(&mut session);
        }
        assert_eq!(session.count, 20);
        assert_eq!(session.enemies.len(), session.max_enemies);
        for enemy in &session.enemies {
            assert!(!session.playfield.contains(enemy.body.pos));
            assert!(enemy.speed >= ENEMY_MIN_SPEED && enemy.speed < ENEMY_MAX_SPEED);
        }
    }

    #[test]
    fn test_enemy_speeds_vary() {
        let mut session = Session::new(5);
        for _ in 0..8 {
            spawn_enemies(&mut session);
        }
        let first = session.enemies[0].speed;
        assert!(session.enemies.iter().any(|e| e.speed != first));
    }

    #[test]
    fn test_spawn_boss_at_first_threshold() {
        let mut session = Session::new(3);
        session.player.score = 1200;
        assert!(spawn_boss(&mut session));
        let boss = session.boss.as_ref().expect("boss spawned");
        assert!(!session.playfield.contains(boss.body.pos));
        assert_eq!(boss.health, BOSS_HEALTH);

        // Never a second one while the first lives
        assert!(!spawn_boss(&mut session));
    }

    proptest! {
        #[test]
        fn prop_off_screen_is_strictly_outside(seed in any::<u64>()) {
            let playfield = Playfield::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..16 {
                let pos = off_screen_position(&mut rng, &playfield);
                prop_assert!(pos.x < 0.0 || pos.x > playfield.width);
                prop_assert!(pos.y < 0.0 || pos.y > playfield.height);
                prop_assert!(pos.x >= -playfield.width && pos.x <= 2.0 * playfield.width);
            }
        }
    }
}
