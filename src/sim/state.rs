//! Game state and core simulation types
//!
//! The whole session lives in one owned [`GameState`] that the loop driver
//! threads through `tick` and the renderer.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump input; no physics runs
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended, frozen until reset
    GameOver,
}

/// A pipe pair: a top block and a bottom block separated by a gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Leading (left) edge x
    pub x: f32,
    /// Y of the top of the gap, fixed at spawn
    pub gap_top: f32,
    /// Set once the bird's center has passed the trailing edge
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            scored: false,
        }
    }

    /// Trailing (right) edge x
    #[inline]
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    /// Y of the bottom of the gap
    #[inline]
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.pipe_gap
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Constants this session runs with
    pub tuning: Tuning,
    /// Bird top edge y, clamped to `[0, floor_y]`
    pub bird_y: f32,
    /// Vertical velocity (positive = downward)
    pub bird_vel: f32,
    /// Live pipes in spawn order (leftmost first)
    pub pipes: VecDeque<Pipe>,
    /// Pipes fully passed this session
    pub score: u32,
    pub phase: GamePhase,
    /// Scroll distance remaining until the next spawn
    pub next_pipe_spawn: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a fresh session waiting for the first jump
    pub fn new(tuning: Tuning) -> Self {
        let mut state = Self {
            tuning,
            bird_y: 0.0,
            bird_vel: 0.0,
            pipes: VecDeque::new(),
            score: 0,
            phase: GamePhase::NotStarted,
            next_pipe_spawn: 0.0,
        };
        state.reset();
        state
    }

    /// Re-initialize every session field to its start value.
    ///
    /// Lands in [`GamePhase::NotStarted`]: a new jump input is required
    /// before play resumes.
    pub fn reset(&mut self) {
        self.bird_y = self.tuning.field_height / 2.0;
        self.bird_vel = 0.0;
        self.pipes.clear();
        self.score = 0;
        self.phase = GamePhase::NotStarted;
        self.next_pipe_spawn = self.tuning.field_width;
    }

    /// Bird bottom edge y
    #[inline]
    pub fn bird_bottom(&self) -> f32 {
        self.bird_y + self.tuning.bird_size
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Nearest pipe whose trailing edge is still ahead of the bird's center
    pub fn next_pipe_ahead(&self) -> Option<&Pipe> {
        let center_x = self.tuning.center_x();
        self.pipes
            .iter()
            .find(|p| p.trailing_edge(&self.tuning) >= center_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.bird_y, 250.0);
        assert_eq!(state.bird_vel, 0.0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.next_pipe_spawn, 500.0);
    }

    #[test]
    fn test_reset_restores_start_values() {
        let mut state = GameState::default();
        state.phase = GamePhase::GameOver;
        state.score = 7;
        state.bird_y = 480.0;
        state.bird_vel = 9.5;
        state.next_pipe_spawn = 12.0;
        state.pipes.push_back(Pipe::new(120.0, 80.0));

        state.reset();

        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_reset_keeps_tuning() {
        let tuning = Tuning {
            gravity: 0.25,
            ..Default::default()
        };
        let mut state = GameState::new(tuning);
        state.reset();
        assert_eq!(state.tuning.gravity, 0.25);
    }

    #[test]
    fn test_pipe_edges() {
        let tuning = Tuning::default();
        let pipe = Pipe::new(100.0, 60.0);
        assert_eq!(pipe.trailing_edge(&tuning), 150.0);
        assert_eq!(pipe.gap_bottom(&tuning), 210.0);
    }

    #[test]
    fn test_next_pipe_ahead_skips_passed() {
        let mut state = GameState::default();
        state.pipes.push_back(Pipe::new(150.0, 50.0)); // trailing edge 200 < 250
        state.pipes.push_back(Pipe::new(300.0, 90.0));
        assert_eq!(state.next_pipe_ahead().map(|p| p.x), Some(300.0));
    }
}
