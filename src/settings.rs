//! Game settings and preferences
//!
//! Persisted separately from the score ledger.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore};

/// How a bullet picks its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AimMode {
    /// Bullets keep steering toward wherever the pointer is now
    #[default]
    TrackPointer,
    /// Bullets fly to the point that was under the pointer when fired
    Fixed,
}

impl AimMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AimMode::TrackPointer => "Track pointer",
            AimMode::Fixed => "Fixed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "track" | "track-pointer" | "pointer" => Some(AimMode::TrackPointer),
            "fixed" | "point" => Some(AimMode::Fixed),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bullet steering
    pub aim_mode: AimMode,

    // === Visual Effects ===
    /// Fill the ship/boss outline on the tick it takes damage
    pub hit_flash: bool,
    /// Faint guide lines through the ship
    pub crosshair: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses hit flashes)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aim_mode: AimMode::TrackPointer,
            hit_flash: true,
            crosshair: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "connection_defender_settings";

    /// Effective hit flash (respects reduced_motion)
    pub fn effective_hit_flash(&self) -> bool {
        self.hit_flash && !self.reduced_motion
    }

    /// Load settings from a store
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let settings: Self = persistence::load_json(store, Self::STORAGE_KEY);
        log::info!("Settings: aim mode {}", settings.aim_mode.as_str());
        settings
    }

    /// Save settings to a store
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        if persistence::save_json(store, Self::STORAGE_KEY, self) {
            log::info!("Settings saved");
        }
    }
}
