//! Game lifecycle
//!
//! Idle (splash) → Running (tick loop) → Ended (summary, score recorded).
//! Starting always throws away the previous session; there is no pause.

use crate::highscores::HighScores;
use crate::persistence::KeyValueStore;
use crate::renderer::{RenderSnapshot, build_snapshot};
use crate::settings::Settings;
use crate::sim::{GamePhase, Session, TickInput, TickOutcome, tick};

/// Owns the live session, the ledger and the store they persist to
#[derive(Debug)]
pub struct Game<S: KeyValueStore> {
    phase: GamePhase,
    session: Session,
    scores: HighScores,
    settings: Settings,
    store: S,
    /// Seed for the next session
    next_seed: u64,
    /// Ledger rank earned by the last finished run
    last_rank: Option<usize>,
}

impl<S: KeyValueStore> Game<S> {
    /// Load scores and settings from `store` and show the splash screen
    pub fn new(store: S, seed: u64) -> Self {
        let scores = HighScores::load(&store);
        let settings = Settings::load(&store);
        Self {
            phase: GamePhase::Idle,
            session: Session::new(seed),
            scores,
            settings,
            store,
            next_seed: seed,
            last_rank: None,
        }
    }

    /// Begin a fresh run, discarding whatever came before
    pub fn start(&mut self) {
        let seed = self.next_seed;
        self.next_seed = next_seed(seed);

        self.scores = HighScores::load(&self.store);
        self.session = Session::new(seed);
        self.session.aim_mode = self.settings.aim_mode;
        self.last_rank = None;
        self.phase = GamePhase::Running;
        log::info!("Started new game with seed: {}", seed);
    }

    /// Run one tick if a game is in progress.
    ///
    /// Returns the tick's outcome, or None when nothing is running.
    pub fn step(&mut self, input: &TickInput) -> Option<TickOutcome> {
        if self.phase != GamePhase::Running {
            return None;
        }

        let outcome = tick(&mut self.session, input);
        if outcome == TickOutcome::SignalLost {
            self.finish();
        }
        Some(outcome)
    }

    /// Tick (when running) and project the result
    pub fn frame(&mut self, input: &TickInput) -> RenderSnapshot {
        self.step(input);
        self.snapshot()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        build_snapshot(self.phase, &self.session, &self.scores, &self.settings)
    }

    fn finish(&mut self) {
        self.phase = GamePhase::Ended;
        let score = self.session.player.score;
        self.last_rank = self.scores.add_score(score);
        match self.last_rank {
            Some(rank) => log::info!("Game over: {} pts, rank #{}", score, rank),
            None => log::info!("Game over: {} pts", score),
        }
        self.scores.save(&mut self.store);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace and persist settings. Aim mode applies from the next run.
    pub fn set_settings(&mut self, settings: Settings) {
        settings.save(&mut self.store);
        self.settings = settings;
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// PCG-style LCG step so consecutive runs get distinct seeds
fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}
