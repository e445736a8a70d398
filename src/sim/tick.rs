//! Fixed-step simulation tick
//!
//! Core game loop that advances the session by exactly one frame.

use super::collision::{bird_hits_pipe, clamp_to_field, pipe_offscreen, pipe_passed};
use super::rng::GapSource;
use super::state::{GamePhase, GameState, Pipe};

/// Input sampled once per frame (level-triggered: true while held)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key currently held
    pub jump: bool,
    /// Reset key currently held
    pub reset: bool,
}

/// Advance the game state by one frame
pub fn tick<G: GapSource + ?Sized>(state: &mut GameState, input: &TickInput, gaps: &mut G) {
    match state.phase {
        GamePhase::NotStarted => {
            if input.jump {
                state.phase = GamePhase::Running;
                log::debug!("Run started");
            }
            return;
        }
        GamePhase::GameOver => {
            if input.reset {
                state.reset();
                log::info!("Session reset");
            }
            return;
        }
        GamePhase::Running => {}
    }

    step_bird(state, input.jump);
    step_pipes(state, gaps);

    if state.is_game_over() {
        log::info!("Game over (score {})", state.score);
    }
}

/// Jump override, gravity, integration and field clamp
fn step_bird(state: &mut GameState, jump: bool) {
    let tuning = state.tuning;

    // Jump overwrites velocity before gravity, so both apply this frame
    if jump {
        state.bird_vel = tuning.jump_strength;
    }
    state.bird_vel += tuning.gravity;
    state.bird_y += state.bird_vel;

    if let Some(boundary) = clamp_to_field(&mut state.bird_y, &tuning) {
        log::debug!("Bird hit {:?}", boundary);
        state.phase = GamePhase::GameOver;
    }
}

/// Spawn, scroll, score, collide and retire pipes
fn step_pipes<G: GapSource + ?Sized>(state: &mut GameState, gaps: &mut G) {
    let tuning = state.tuning;

    if state.next_pipe_spawn <= 0.0 {
        let gap_top = gaps.next_gap_top(tuning.gap_range());
        state.pipes.push_back(Pipe::new(tuning.field_width, gap_top));
        state.next_pipe_spawn = tuning.pipe_spacing;
        log::debug!("Spawned pipe (gap top {})", gap_top);
    }
    state.next_pipe_spawn -= tuning.pipe_speed;

    // Every pipe is checked; a hit on any of them is equivalent
    let mut hit = false;
    for pipe in &mut state.pipes {
        pipe.x -= tuning.pipe_speed;

        if !pipe.scored && pipe_passed(pipe, &tuning) {
            pipe.scored = true;
            state.score += 1;
        }

        if bird_hits_pipe(state.bird_y, pipe, &tuning) {
            hit = true;
        }
    }
    if hit {
        state.phase = GamePhase::GameOver;
    }

    // Spawn order is screen order, so only the front can be off screen
    if state
        .pipes
        .front()
        .is_some_and(|front| pipe_offscreen(front, &tuning))
    {
        state.pipes.pop_front();
    }
}
