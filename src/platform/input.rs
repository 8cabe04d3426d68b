//! Host input capture
//!
//! The host mutates [`InputState`] between ticks; each tick reads one
//! [`TickInput`] snapshot from it and the queued fire events are drained.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Legacy `KeyboardEvent.which` code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            87 => Some(Key::W),
            65 => Some(Key::A),
            83 => Some(Key::S),
            68 => Some(Key::D),
            38 => Some(Key::Up),
            40 => Some(Key::Down),
            37 => Some(Key::Left),
            39 => Some(Key::Right),
            _ => None,
        }
    }

    /// `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Last known pointer, held keys and pending shots
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: Vec2,
    held: HashSet<Key>,
    fire_queue: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// A click or tap; becomes one shot on the next tick
    pub fn fire(&mut self) {
        self.fire_queue = self.fire_queue.saturating_add(1);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop held keys and queued shots (focus loss, restart)
    pub fn clear(&mut self) {
        self.held.clear();
        self.fire_queue = 0;
    }

    /// Snapshot for the next tick, draining queued shots
    pub fn snapshot(&mut self) -> TickInput {
        let fire = std::mem::take(&mut self.fire_queue);
        TickInput {
            pointer: self.pointer,
            up: self.is_held(Key::Up) || self.is_held(Key::W),
            down: self.is_held(Key::Down) || self.is_held(Key::S),
            left: self.is_held(Key::Left) || self.is_held(Key::A),
            right: self.is_held(Key::Right) || self.is_held(Key::D),
            fire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code(65), Some(Key::A));
        assert_eq!(Key::from_code(38), Some(Key::Up));
        assert_eq!(Key::from_code(32), None);
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("S"), Some(Key::S));
        assert_eq!(Key::from_name("Enter"), None);
    }

    #[test]
    fn test_either_binding_drives_axis() {
        let mut input = InputState::new();
        input.key_down(Key::W);
        input.key_down(Key::Right);
        let snap = input.snapshot();
        assert!(snap.up && snap.right);
        assert!(!snap.down && !snap.left);

        input.key_up(Key::W);
        assert!(!input.snapshot().up);
    }

    #[test]
    fn test_fire_events_consumed_once() {
        let mut input = InputState::new();
        input.pointer_moved(10.0, 20.0);
        input.fire();
        input.fire();
        let snap = input.snapshot();
        assert_eq!(snap.fire, 2);
        assert_eq!(snap.pointer, Vec2::new(10.0, 20.0));
        assert_eq!(input.snapshot().fire, 0);
    }

    #[test]
    fn test_clear_drops_keys_and_shots() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.fire();
        input.clear();
        let snap = input.snapshot();
        assert!(!snap.left);
        assert_eq!(snap.fire, 0);
    }
}
