//! Connection Defender entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless game with a scripted pilot and prints the
//! result, which is handy for soak-testing the simulation.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use connection_defender::Game;
    use connection_defender::persistence::FileStore;
    use connection_defender::sim::{Session, TickInput, TickOutcome};
    use glam::Vec2;

    /// Default tick budget (about five minutes at 60 fps)
    const DEFAULT_TICKS: u64 = 60 * 60 * 5;
    /// Ticks between shots
    const FIRE_INTERVAL: u64 = 8;
    /// Threats closer than this make the pilot back off
    const PANIC_RADIUS: f32 = 140.0;

    /// Scripted input: aim at the closest threat, back away from it, shoot
    pub fn autopilot(session: &Session) -> TickInput {
        let ship = session.player.body.pos;
        let threat = session
            .enemies
            .iter()
            .map(|e| e.body.pos)
            .chain(session.boss.iter().map(|b| b.body.pos))
            .filter(|p| session.playfield.contains(*p))
            .min_by(|a, b| {
                a.distance(ship)
                    .partial_cmp(&b.distance(ship))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let mut input = TickInput {
            pointer: threat.unwrap_or(session.playfield.center()),
            ..Default::default()
        };

        // Flee nearby threats, otherwise drift home to the middle
        let heading = match threat {
            Some(t) if t.distance(ship) < PANIC_RADIUS => ship - t,
            _ => session.playfield.center() - ship,
        };
        if heading.length() > 8.0 {
            input.left = heading.x < -4.0;
            input.right = heading.x > 4.0;
            input.up = heading.y < -4.0;
            input.down = heading.y > 4.0;
        }

        if threat.is_some() && session.count % FIRE_INTERVAL == 0 {
            input.fire = 1;
        }
        input
    }

    pub fn run() {
        env_logger::init();
        log::info!("Connection Defender (headless) starting...");

        let mut args = std::env::args().skip(1);
        let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
        let max_ticks = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TICKS);

        let store = FileStore::from_env();
        log::info!("Scores stored in {}", store.dir().display());
        let mut game = Game::new(store, seed);
        game.start();

        let mut ticks = 0;
        while ticks < max_ticks {
            let input = autopilot(game.session());
            ticks += 1;
            if game.step(&input) != Some(TickOutcome::Continue) {
                break;
            }
        }

        let session = game.session();
        println!(
            "seed {} | {} ticks | {} pts | strength {:.1} | level hue {}",
            seed,
            ticks,
            session.player.score,
            session.player.strength.max(0.0),
            session.hue()
        );
        if game.is_running() {
            println!("Tick budget exhausted before the signal was lost");
        } else if let Some(rank) = game.last_rank() {
            println!("New high score, rank #{rank}");
        }
        println!("High Scores:");
        for score in &game.scores().entries {
            println!("  {score} pts");
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use connection_defender::sim::Enemy;

        #[test]
        fn test_autopilot_flees_and_fires() {
            let mut session = Session::new(3);
            session.count = FIRE_INTERVAL;
            let ship = session.player.body.pos;
            session.enemies.push(Enemy::new(ship + Vec2::new(50.0, 0.0), 2.0));

            let input = autopilot(&session);
            assert!(input.left && !input.right);
            assert_eq!(input.fire, 1);
            assert_eq!(input.pointer, ship + Vec2::new(50.0, 0.0));
        }

        #[test]
        fn test_autopilot_holds_fire_without_targets() {
            let session = Session::new(3);
            let input = autopilot(&session);
            assert_eq!(input.fire, 0);
            assert!(!input.up && !input.down && !input.left && !input.right);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
