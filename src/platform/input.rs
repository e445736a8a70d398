//! Level-triggered input
//!
//! Key events only update which keys are held. The loop asks "is jump held
//! right now?" once per frame, so a held key keeps firing every frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Polled input queries consulted before each tick
pub trait InputSource {
    /// Jump input currently asserted
    fn jump_asserted(&self) -> bool;

    /// Reset input currently asserted
    fn reset_asserted(&self) -> bool;

    /// Snapshot both queries for one frame
    fn sample(&self) -> TickInput {
        TickInput {
            jump: self.jump_asserted(),
            reset: self.reset_asserted(),
        }
    }
}

/// Physical key codes (DOM `KeyboardEvent.code`) bound to each input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub jump: Vec<String>,
    pub reset: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: vec!["Space".to_string()],
            reset: vec!["KeyR".to_string()],
        }
    }
}

/// Tracks which keys are currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    bindings: KeyBindings,
    held: HashSet<String>,
}

impl KeyState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Record a key press; auto-repeat presses are harmless
    pub fn press(&mut self, code: &str) {
        if !self.held.contains(code) {
            self.held.insert(code.to_string());
        }
    }

    pub fn release(&mut self, code: &str) {
        self.held.remove(code);
    }

    /// Forget every held key (focus lost; releases will never arrive)
    pub fn release_all(&mut self) {
        if !self.held.is_empty() {
            log::debug!("Releasing {} held key(s)", self.held.len());
        }
        self.held.clear();
    }

    /// Whether the key is bound to any input (callers suppress browser defaults)
    pub fn is_bound(&self, code: &str) -> bool {
        self.bindings
            .jump
            .iter()
            .chain(&self.bindings.reset)
            .any(|k| k == code)
    }

    fn any_held(&self, keys: &[String]) -> bool {
        keys.iter().any(|k| self.held.contains(k))
    }
}

impl InputSource for KeyState {
    fn jump_asserted(&self) -> bool {
        self.any_held(&self.bindings.jump)
    }

    fn reset_asserted(&self) -> bool {
        self.any_held(&self.bindings.reset)
    }
}
