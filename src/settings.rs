//! Game settings and preferences
//!
//! Persisted as JSON in LocalStorage on the web target.

use serde::{Deserialize, Serialize};

use crate::platform::KeyBindings;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed gap seed for reproducible runs (None = seed from the clock)
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
    /// Keys bound to jump and reset
    pub bindings: KeyBindings,
    /// Simulation constants
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            show_fps: false,
            bindings: KeyBindings::default(),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_clone_settings";

    /// Decode settings JSON, validating the tuning block
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.tuning = settings.tuning.or_default_if_invalid();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Seed to use for this session
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Resolve the stored entry, if any.
    ///
    /// Returns the settings to use and whether they should be written back.
    /// Only a missing entry is written back; a stored entry that failed to
    /// decode is left alone for the user to fix.
    pub fn from_stored(stored: Option<&str>) -> (Self, bool) {
        let Some(json) = stored else {
            log::info!("No stored settings, using defaults");
            return (Self::default(), true);
        };
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from LocalStorage");
                (settings, false)
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                (Self::default(), false)
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::info!("LocalStorage unavailable, using default settings");
            return Self::default();
        };

        let stored = storage.get_item(Self::STORAGE_KEY).ok().flatten();
        let (settings, write_back) = Self::from_stored(stored.as_deref());
        if write_back {
            settings.save();
        }
        settings
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Could not encode settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
