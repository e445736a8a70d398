//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no delta time
//! - Randomness only through an injected `GapSource`
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Boundary, bird_hits_pipe, clamp_to_field, pipe_offscreen, pipe_passed};
pub use rng::{FixedGaps, GapSource, SeededGaps};
pub use state::{GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
