//! Data-driven game balance
//!
//! Every simulation constant lives here so a run can be reproduced or
//! re-tuned from settings without touching the tick code.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation constants for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    pub bird_size: f32,
    /// Velocity added every running tick
    pub gravity: f32,
    /// Velocity the bird is set to while jump is held (negative = upward)
    pub jump_strength: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_spacing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_size: BIRD_SIZE,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_spacing: PIPE_SPACING,
        }
    }
}

/// Rejected tuning value
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// NaN or infinite
    NotFinite { field: &'static str, value: f32 },
    /// A size, speed or spacing that must be strictly positive
    NotPositive { field: &'static str, value: f32 },
    /// Gap plus margins does not fit inside the field
    GapDoesNotFit { field_height: f32, pipe_gap: f32, bird_size: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NotFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            TuningError::NotPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            TuningError::GapDoesNotFit {
                field_height,
                pipe_gap,
                bird_size,
            } => write!(
                f,
                "pipe gap {pipe_gap} with {bird_size} margins does not fit in field height {field_height}"
            ),
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Lowest allowed bird y (bird top edge resting on the floor)
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.field_height - self.bird_size
    }

    /// Fixed horizontal center of the bird
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.field_width / 2.0
    }

    /// Half-open range of whole-number gap tops that keep one bird size of
    /// margin above and below the gap
    pub fn gap_range(&self) -> Range<u32> {
        let min = self.bird_size.max(0.0).ceil() as u32;
        let max = (self.field_height - self.pipe_gap - self.bird_size).max(0.0) as u32;
        min..max
    }

    /// Check that the constants describe a playable field
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_size", self.bird_size),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("pipe_spacing", self.pipe_spacing),
        ];
        let signed = [
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
        ];
        for (field, value) in positive.iter().chain(&signed).copied() {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.gap_range().is_empty() {
            return Err(TuningError::GapDoesNotFit {
                field_height: self.field_height,
                pipe_gap: self.pipe_gap,
                bird_size: self.bird_size,
            });
        }

        Ok(())
    }

    /// Return self if valid, otherwise log and fall back to defaults
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Invalid tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.floor_y(), 480.0);
        assert_eq!(t.center_x(), 250.0);
        assert_eq!(t.gap_range(), 20..330);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_speed() {
        let t = Tuning {
            pipe_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(
            t.validate(),
            Err(TuningError::NotPositive {
                field: "pipe_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_nan() {
        let t = Tuning {
            bird_size: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(TuningError::NotFinite { field: "bird_size", .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_physics() {
        // 1e39 overflows f32 to infinity when decoded
        let t: Tuning =
            serde_json::from_str(r#"{ "gravity": 1e39, "jump_strength": -1e39 }"#).unwrap();
        assert_eq!(t.gravity, f32::INFINITY);
        assert!(matches!(
            t.validate(),
            Err(TuningError::NotFinite { field: "gravity", .. })
        ));
        assert_eq!(t.or_default_if_invalid(), Tuning::default());

        let t = Tuning {
            jump_strength: f32::NEG_INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(TuningError::NotFinite { field: "jump_strength", .. })
        ));
    }

    #[test]
    fn test_gap_range_keeps_full_margin() {
        let t = Tuning {
            bird_size: 20.5,
            ..Default::default()
        };
        // Lowest top 21 >= 20.5, highest top 328 + 150 + 20.5 <= 500
        assert_eq!(t.gap_range(), 21..329);
    }

    #[test]
    fn test_rejects_oversized_gap() {
        let t = Tuning {
            pipe_gap: 470.0,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(TuningError::GapDoesNotFit { .. })));
        assert_eq!(t.or_default_if_invalid(), Tuning::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let t: Tuning = serde_json::from_str(r#"{ "gravity": 0.25 }"#).unwrap();
        assert_eq!(t.gravity, 0.25);
        assert_eq!(t.pipe_gap, PIPE_GAP);
    }
}
