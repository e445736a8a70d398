//! Flappy Clone - A minimal side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, phases)
//! - `renderer`: Render surface boundary and WebGPU pipeline
//! - `platform`: Polled input and fixed-rate frame stepping
//! - `tuning`: Data-driven game constants
//! - `headless`: Autopilot runner for native builds

pub mod headless;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per nominal display frame)
    pub const TICKS_PER_SECOND: f64 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f64 = 1.0 / TICKS_PER_SECOND;
    /// Maximum ticks per display frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical playfield size, independent of the physical surface
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Bird defaults
    pub const BIRD_SIZE: f32 = 20.0;
    pub const GRAVITY: f32 = 0.5;
    /// Velocity override on jump (negative = upward)
    pub const JUMP_STRENGTH: f32 = -6.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Horizontal scroll per tick
    pub const PIPE_SPEED: f32 = 2.0;
    /// Scroll distance between consecutive spawns
    pub const PIPE_SPACING: f32 = 250.0;

    pub const WINDOW_TITLE: &str = "Flappy Clone";
}
