//! Deterministic rules engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed per-tick decay
//! - No rendering or platform dependencies

pub mod judge;
pub mod state;
pub mod tower;

pub use judge::GameJudge;
pub use state::{GameEvent, GameState, Side, TowerPiece};
pub use tower::Tower;
