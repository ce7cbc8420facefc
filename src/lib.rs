//! Sushi Neko - a sushi-tower flipping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic rules engine (tower generation, judging, game state)
//! - `tuning`: Data-driven game balance
//! - `platform`: Host input mapping

pub mod platform;
pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GameJudge, GameState, Side, Tower, TowerPiece};
pub use tuning::Tuning;

/// Game balance defaults (overridable through [`Tuning`])
pub mod consts {
    /// Health at session start, also the clamp ceiling
    pub const MAX_HEALTH: f32 = 1.0;
    /// Health restored per resolved piece
    pub const HEALTH_BONUS: f32 = 0.065;
    /// Health lost per frame tick while playing (not time-scaled)
    pub const HEALTH_DECAY: f32 = 0.01;

    /// Pieces stacked when a session is created
    pub const INITIAL_PIECES: usize = 10;

    /// Generator roll range is [0, ROLL_RANGE)
    pub const ROLL_RANGE: u32 = 100;
    /// Rolls below this are Left
    pub const LEFT_WEIGHT: u32 = 45;
    /// Rolls in [LEFT_WEIGHT, LEFT_WEIGHT + RIGHT_WEIGHT) are Right, the rest None
    pub const RIGHT_WEIGHT: u32 = 45;

    /// Vertical distance between stacked pieces
    pub const PIECE_SPACING: f32 = 55.0;
    /// Resting y of the front piece
    pub const TOWER_BASE_Y: f32 = 215.0;
    /// Fraction of the remaining distance a piece covers per settle step
    pub const SETTLE_RATE: f32 = 0.5;
}
