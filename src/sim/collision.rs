//! Collision and scoring checks
//!
//! The bird is tested as a single column at its fixed horizontal center,
//! against the floor/ceiling and against each pipe's solid blocks.

use super::state::Pipe;
use crate::tuning::Tuning;

/// Which field boundary the bird touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Ceiling,
    Floor,
}

/// Clamp the bird's y into `[0, floor_y]`.
///
/// Returns the boundary that was crossed, if any. Both are fatal.
pub fn clamp_to_field(bird_y: &mut f32, tuning: &Tuning) -> Option<Boundary> {
    let floor_y = tuning.floor_y();
    if *bird_y > floor_y {
        *bird_y = floor_y;
        return Some(Boundary::Floor);
    }
    if *bird_y < 0.0 {
        *bird_y = 0.0;
        return Some(Boundary::Ceiling);
    }
    None
}

/// Whether the bird's center column lies within the pipe's horizontal span
/// (edges inclusive)
#[inline]
pub fn overlaps_horizontally(pipe: &Pipe, tuning: &Tuning) -> bool {
    let center_x = tuning.center_x();
    center_x >= pipe.x && center_x <= pipe.trailing_edge(tuning)
}

/// Check the bird against one pipe's solid blocks.
///
/// Touching the gap edge counts as a hit.
pub fn bird_hits_pipe(bird_y: f32, pipe: &Pipe, tuning: &Tuning) -> bool {
    if !overlaps_horizontally(pipe, tuning) {
        return false;
    }
    let bird_bottom = bird_y + tuning.bird_size;
    bird_y <= pipe.gap_top || bird_bottom >= pipe.gap_bottom(tuning)
}

/// Whether the pipe's trailing edge is strictly past the bird's center
#[inline]
pub fn pipe_passed(pipe: &Pipe, tuning: &Tuning) -> bool {
    pipe.trailing_edge(tuning) < tuning.center_x()
}

/// Whether the pipe is entirely left of the field
#[inline]
pub fn pipe_offscreen(pipe: &Pipe, tuning: &Tuning) -> bool {
    pipe.trailing_edge(tuning) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned_pipe(gap_top: f32) -> Pipe {
        // Leading edge exactly at the bird's center
        Pipe::new(250.0, gap_top)
    }

    #[test]
    fn test_clamp_inside_field() {
        let tuning = Tuning::default();
        let mut y = 250.5;
        assert_eq!(clamp_to_field(&mut y, &tuning), None);
        assert_eq!(y, 250.5);
    }

    #[test]
    fn test_clamp_floor() {
        let tuning = Tuning::default();
        let mut y = 483.0;
        assert_eq!(clamp_to_field(&mut y, &tuning), Some(Boundary::Floor));
        assert_eq!(y, 480.0);
    }

    #[test]
    fn test_clamp_ceiling() {
        let tuning = Tuning::default();
        let mut y = -2.5;
        assert_eq!(clamp_to_field(&mut y, &tuning), Some(Boundary::Ceiling));
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_resting_on_floor_is_not_a_hit() {
        let tuning = Tuning::default();
        let mut y = 480.0;
        assert_eq!(clamp_to_field(&mut y, &tuning), None);
    }

    #[test]
    fn test_bird_inside_gap_no_hit() {
        let tuning = Tuning::default();
        let pipe = aligned_pipe(100.0);
        // Top 120 below gap top 100, bottom 140 above gap bottom 250
        assert!(!bird_hits_pipe(120.0, &pipe, &tuning));
    }

    #[test]
    fn test_bird_above_gap_hits() {
        let tuning = Tuning::default();
        let pipe = aligned_pipe(100.0);
        assert!(bird_hits_pipe(5.0, &pipe, &tuning));
        assert!(bird_hits_pipe(50.0, &pipe, &tuning));
        assert!(bird_hits_pipe(90.0, &pipe, &tuning));
    }

    #[test]
    fn test_bird_below_gap_hits() {
        let tuning = Tuning::default();
        let pipe = aligned_pipe(100.0);
        // Bottom edge 255 past gap bottom 250
        assert!(bird_hits_pipe(235.0, &pipe, &tuning));
    }

    #[test]
    fn test_gap_edges_are_inclusive() {
        let tuning = Tuning::default();
        let pipe = aligned_pipe(100.0);
        assert!(bird_hits_pipe(100.0, &pipe, &tuning));
        assert!(bird_hits_pipe(230.0, &pipe, &tuning));
        assert!(!bird_hits_pipe(100.5, &pipe, &tuning));
        assert!(!bird_hits_pipe(229.5, &pipe, &tuning));
    }

    #[test]
    fn test_no_hit_outside_horizontal_span() {
        let tuning = Tuning::default();
        // Trailing edge 249 < center 250
        let pipe = Pipe::new(199.0, 100.0);
        assert!(!bird_hits_pipe(5.0, &pipe, &tuning));
        // Leading edge 251 > center 250
        let pipe = Pipe::new(251.0, 100.0);
        assert!(!bird_hits_pipe(5.0, &pipe, &tuning));
        // Trailing edge exactly at center still overlaps
        let pipe = Pipe::new(200.0, 100.0);
        assert!(bird_hits_pipe(5.0, &pipe, &tuning));
    }

    #[test]
    fn test_pipe_passed_is_strict() {
        let tuning = Tuning::default();
        assert!(!pipe_passed(&Pipe::new(200.0, 100.0), &tuning));
        assert!(pipe_passed(&Pipe::new(198.0, 100.0), &tuning));
    }

    #[test]
    fn test_pipe_offscreen() {
        let tuning = Tuning::default();
        assert!(!pipe_offscreen(&Pipe::new(-50.0, 100.0), &tuning));
        assert!(pipe_offscreen(&Pipe::new(-52.0, 100.0), &tuning));
    }
}
