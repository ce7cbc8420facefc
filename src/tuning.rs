//! Data-driven game balance
//!
//! Every constant the rules engine uses can be overridden from a JSON file.
//! Missing fields fall back to the values in [`crate::consts`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating tuning data
#[derive(Debug)]
pub enum TuningError {
    /// File could not be read
    Io(std::io::Error),
    /// JSON did not match the tuning schema
    Parse(serde_json::Error),
    /// A field holds a value the engine cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            TuningError::Parse(e) => write!(f, "malformed tuning data: {e}"),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

/// Balance parameters for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Health when the session starts
    pub initial_health: f32,
    /// Ceiling every health write is clamped to
    pub max_health: f32,
    /// Health restored per resolved piece
    pub health_bonus: f32,
    /// Health lost per tick while playing
    pub health_decay: f32,
    /// Pieces stacked at session start
    pub initial_pieces: usize,
    /// Weight of a Left roll out of 100
    pub left_weight: u32,
    /// Weight of a Right roll out of 100 (None takes the remainder)
    pub right_weight: u32,
    /// Vertical distance between stacked pieces
    pub piece_spacing: f32,
    /// Resting y of the front piece
    pub tower_base_y: f32,
    /// Per-tick easing factor toward the resting position
    pub settle_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            health_bonus: HEALTH_BONUS,
            health_decay: HEALTH_DECAY,
            initial_pieces: INITIAL_PIECES,
            left_weight: LEFT_WEIGHT,
            right_weight: RIGHT_WEIGHT,
            piece_spacing: PIECE_SPACING,
            tower_base_y: TOWER_BASE_Y,
            settle_rate: SETTLE_RATE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(TuningError::Io)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let floats = [
            ("initial_health", self.initial_health),
            ("max_health", self.max_health),
            ("health_bonus", self.health_bonus),
            ("health_decay", self.health_decay),
            ("piece_spacing", self.piece_spacing),
            ("tower_base_y", self.tower_base_y),
            ("settle_rate", self.settle_rate),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        if self.initial_pieces == 0 {
            return Err(TuningError::Invalid {
                field: "initial_pieces",
                reason: "tower needs at least one piece",
            });
        }
        if self.max_health <= 0.0 {
            return Err(TuningError::Invalid {
                field: "max_health",
                reason: "must be positive",
            });
        }
        if self.health_bonus < 0.0 {
            return Err(TuningError::Invalid {
                field: "health_bonus",
                reason: "must not be negative",
            });
        }
        if self.health_decay < 0.0 {
            return Err(TuningError::Invalid {
                field: "health_decay",
                reason: "must not be negative",
            });
        }
        if self.left_weight.saturating_add(self.right_weight) > ROLL_RANGE {
            return Err(TuningError::Invalid {
                field: "right_weight",
                reason: "left and right weights must not exceed 100",
            });
        }
        if self.settle_rate <= 0.0 || self.settle_rate > 1.0 {
            return Err(TuningError::Invalid {
                field: "settle_rate",
                reason: "must be in (0, 1]",
            });
        }
        Ok(())
    }

    /// Weight of a None roll out of 100
    pub fn none_weight(&self) -> u32 {
        ROLL_RANGE.saturating_sub(self.left_weight.saturating_add(self.right_weight))
    }
}
