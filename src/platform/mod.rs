//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (pointer, keys, clicks) collected between ticks
//! - The wasm host binding that drives a [`crate::Game`] from JavaScript

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputState, Key};
