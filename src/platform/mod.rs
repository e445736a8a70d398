//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input polling (held keys, sampled once per frame)
//! - Fixed-rate frame stepping

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::{InputSource, KeyBindings, KeyState};
