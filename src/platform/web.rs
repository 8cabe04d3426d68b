//! Browser host binding
//!
//! JavaScript owns the canvas and the event listeners. It forwards pointer,
//! key and click events here, calls `frame()` from `requestAnimationFrame`
//! while `is_running()` is true, and draws the returned JSON snapshot.

use wasm_bindgen::prelude::*;

use super::input::{InputState, Key};
use crate::game::Game;
use crate::persistence::LocalStorage;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Connection Defender starting...");
}

/// A game handle owned by the page
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorage>,
    input: InputState,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game showing the splash screen, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let seed = js_sys::Date::now() as u64;
        WebGame {
            game: Game::new(LocalStorage::new(), seed),
            input: InputState::new(),
        }
    }

    /// Start or restart a run
    pub fn start(&mut self) {
        self.input.clear();
        self.game.start();
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.input.pointer_moved(x, y);
    }

    /// Accepts a legacy key code (`which`)
    pub fn key_down(&mut self, code: u32) {
        if let Some(key) = Key::from_code(code) {
            self.input.key_down(key);
        }
    }

    pub fn key_up(&mut self, code: u32) {
        if let Some(key) = Key::from_code(code) {
            self.input.key_up(key);
        }
    }

    /// Accepts a `KeyboardEvent.key` name
    pub fn key_down_named(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.input.key_down(key);
        }
    }

    pub fn key_up_named(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.input.key_up(key);
        }
    }

    /// Queue one shot for the next tick
    pub fn click(&mut self) {
        if self.game.is_running() {
            self.input.fire();
        }
    }

    /// Release held keys (window blur)
    pub fn blur(&mut self) {
        self.input.clear();
    }

    /// Advance one tick and return the snapshot as JSON
    pub fn frame(&mut self) -> String {
        let input = self.input.snapshot();
        match self.game.frame(&input).to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Snapshot encoding failed: {}", e);
                String::from("{}")
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.game.is_running()
    }

    pub fn score(&self) -> f64 {
        self.game.session().player.score as f64
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
