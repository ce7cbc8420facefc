//! Game state and core rules-engine types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which chopstick a piece exposes, or which side the cat stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    /// No chopstick (pieces only; the cat never stands here after an input)
    #[default]
    None,
}

impl Side {
    /// True for Left and Right
    pub fn is_directional(self) -> bool {
        self != Side::None
    }

    /// Mirror side (None stays None)
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::None => Side::None,
        }
    }

    /// Lowercase name for logs
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::None => "none",
        }
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the play button
    #[default]
    Title,
    /// Play pressed, waiting for the first input
    Ready,
    /// Health decays and inputs are judged
    Playing,
    /// Terminal; a new session must be constructed
    GameOver,
}

/// A single piece of the sushi tower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerPiece {
    /// Opaque handle, unique within a tower
    pub id: u32,
    pub side: Side,
    /// Render position (only the host cares)
    pub pos: Vec2,
    /// Draw order, increases up the tower
    pub z: u32,
}

impl TowerPiece {
    pub fn new(id: u32, side: Side, pos: Vec2, z: u32) -> Self {
        Self { id, side, pos, z }
    }
}

/// Change notifications queued for the host to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    StateChanged(GameState),
    /// New health value, already clamped
    HealthChanged(f32),
    ScoreChanged(u32),
    FacingChanged(Side),
    /// Front piece knocked off the tower, flying toward `toward`
    PieceFlipped { piece: TowerPiece, toward: Side },
    /// Fresh piece stacked on top
    PieceAdded(TowerPiece),
    /// Session ended; restart is armed
    GameOver { score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::None.opposite(), Side::None);
    }

    #[test]
    fn test_side_directional() {
        assert!(Side::Left.is_directional());
        assert!(Side::Right.is_directional());
        assert!(!Side::None.is_directional());
    }

    #[test]
    fn test_side_names() {
        let names: Vec<&str> = [Side::Left, Side::Right, Side::None]
            .into_iter()
            .map(Side::as_str)
            .collect();
        assert_eq!(names, vec!["left", "right", "none"]);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Side::default(), Side::None);
        assert_eq!(GameState::default(), GameState::Title);
    }

    #[test]
    fn test_event_serializes() {
        let event = GameEvent::GameOver { score: 7 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"GameOver":{"score":7}}"#);
    }
}
