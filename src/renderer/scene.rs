//! Frame description for the current game state
//!
//! Reads the state, never mutates it. Draw order: background, bird, pipes,
//! score, then the phase prompt.

use glam::Vec2;

use super::RenderSurface;
use super::vertex::colors;
use crate::sim::{GamePhase, GameState};

/// On-screen text
pub mod messages {
    pub const START: &str = "Press SPACE to start and for jump";
    pub const GAME_OVER: &str = "Game Over! Press R to restart";
    pub const SCORE_PREFIX: &str = "Score: ";

    /// Offsets of the prompts from the field center
    pub const START_OFFSET: (f32, f32) = (-110.0, -30.0);
    pub const GAME_OVER_OFFSET: (f32, f32) = (-100.0, 0.0);
    pub const SCORE_POS: (f32, f32) = (10.0, 10.0);
}

/// Describe one frame of `state` on `surface`
pub fn draw_scene<S: RenderSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let tuning = &state.tuning;

    surface.clear(colors::BACKGROUND);

    // Bird, horizontally centered on the fixed column
    surface.fill_rect(
        Vec2::new(tuning.center_x() - tuning.bird_size / 2.0, state.bird_y),
        Vec2::splat(tuning.bird_size),
        colors::BIRD,
    );

    for pipe in &state.pipes {
        // Top block
        surface.fill_rect(
            Vec2::new(pipe.x, 0.0),
            Vec2::new(tuning.pipe_width, pipe.gap_top),
            colors::PIPE,
        );
        // Bottom block
        let gap_bottom = pipe.gap_bottom(tuning);
        surface.fill_rect(
            Vec2::new(pipe.x, gap_bottom),
            Vec2::new(tuning.pipe_width, tuning.field_height - gap_bottom),
            colors::PIPE,
        );
    }

    surface.text(
        &format!("{}{}", messages::SCORE_PREFIX, state.score),
        Vec2::from(messages::SCORE_POS),
    );

    let center = Vec2::new(tuning.center_x(), tuning.field_height / 2.0);
    match state.phase {
        GamePhase::NotStarted => {
            surface.text(messages::START, center + Vec2::from(messages::START_OFFSET));
        }
        GamePhase::GameOver => {
            surface.text(
                messages::GAME_OVER,
                center + Vec2::from(messages::GAME_OVER_OFFSET),
            );
        }
        GamePhase::Running => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::Pipe;

    fn record(state: &GameState) -> DrawList {
        let mut list = DrawList::new(state.tuning.field_width, state.tuning.field_height);
        draw_scene(state, &mut list);
        list
    }

    #[test]
    fn test_not_started_frame() {
        let state = GameState::default();
        let list = record(&state);
        let cmds = list.commands();

        assert_eq!(cmds[0], DrawCommand::Clear(colors::BACKGROUND));
        assert_eq!(
            cmds[1],
            DrawCommand::FillRect {
                origin: Vec2::new(240.0, 250.0),
                size: Vec2::new(20.0, 20.0),
                color: colors::BIRD,
            }
        );

        let texts: Vec<_> = list.texts().map(|t| (t.text.as_str(), t.pos)).collect();
        assert_eq!(
            texts,
            vec![
                ("Score: 0", Vec2::new(10.0, 10.0)),
                (messages::START, Vec2::new(140.0, 220.0)),
            ]
        );
    }

    #[test]
    fn test_running_frame_has_two_blocks_per_pipe() {
        let mut state = GameState::default();
        state.phase = GamePhase::Running;
        state.score = 3;
        state.pipes.push_back(Pipe::new(300.0, 100.0));
        state.pipes.push_back(Pipe::new(450.0, 40.0));
        let list = record(&state);

        // Background + bird + 2 blocks per pipe
        assert_eq!(list.rects().count(), 6);
        assert_eq!(
            list.commands()[2],
            DrawCommand::FillRect {
                origin: Vec2::new(300.0, 0.0),
                size: Vec2::new(50.0, 100.0),
                color: colors::PIPE,
            }
        );
        assert_eq!(
            list.commands()[3],
            DrawCommand::FillRect {
                origin: Vec2::new(300.0, 250.0),
                size: Vec2::new(50.0, 250.0),
                color: colors::PIPE,
            }
        );

        let texts: Vec<_> = list.texts().map(|t| t.text.clone()).collect();
        assert_eq!(texts, vec!["Score: 3".to_string()]);
    }

    #[test]
    fn test_game_over_frame() {
        let mut state = GameState::default();
        state.phase = GamePhase::GameOver;
        state.score = 12;
        let list = record(&state);

        let texts: Vec<_> = list.texts().map(|t| (t.text.as_str(), t.pos)).collect();
        assert_eq!(
            texts,
            vec![
                ("Score: 12", Vec2::new(10.0, 10.0)),
                (messages::GAME_OVER, Vec2::new(150.0, 250.0)),
            ]
        );
    }

    #[test]
    fn test_drawing_does_not_mutate_state() {
        let mut state = GameState::default();
        state.pipes.push_back(Pipe::new(300.0, 100.0));
        let before = state.clone();
        let _ = record(&state);
        assert_eq!(state, before);
    }
}
