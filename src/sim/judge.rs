//! Session state machine and the per-input judging rule
//!
//! One `GameJudge` is one playthrough. It owns the tower, health, score and
//! phase, and queues a [`GameEvent`] for every observable change so the host
//! can render without polling.

use super::state::{GameEvent, GameState, Side, TowerPiece};
use super::tower::Tower;
use crate::tuning::Tuning;

/// A single game session
///
/// Hosts should call [`GameJudge::drain_events`] once per frame. Consecutive
/// health writes collapse into one queued `HealthChanged`, but every other
/// change stays queued until drained.
#[derive(Debug, Clone)]
pub struct GameJudge {
    /// Seed the tower was generated from
    seed: u64,
    state: GameState,
    /// Side the cat currently stands on
    facing: Side,
    /// Clamped to `tuning.max_health` on every write; may go negative
    health: f32,
    score: u32,
    tower: Tower,
    tuning: Tuning,
    /// Set on game over; gates `next_session`
    restart_armed: bool,
    events: Vec<GameEvent>,
}

impl GameJudge {
    /// Start a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Start a session with a generated tower of `tuning.initial_pieces`
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut tower = Tower::new(seed, &tuning);
        tower.initialize(tuning.initial_pieces);
        log::info!("New session with seed {} ({} pieces)", seed, tower.len());
        Self::assemble(seed, tower, tuning)
    }

    /// Start a session around a prepared tower
    ///
    /// # Panics
    ///
    /// Panics if the tower is empty.
    pub fn with_tower(tower: Tower, tuning: Tuning) -> Self {
        Self::assemble(0, tower, tuning)
    }

    fn assemble(seed: u64, tower: Tower, tuning: Tuning) -> Self {
        assert!(!tower.is_empty(), "session needs a non-empty tower");
        Self {
            seed,
            state: GameState::Title,
            facing: Side::None,
            health: tuning.initial_health.min(tuning.max_health),
            score: 0,
            tower,
            tuning,
            restart_armed: false,
            events: Vec::new(),
        }
    }

    /// Play button pressed: Title -> Ready
    pub fn start(&mut self) {
        if self.state != GameState::Title {
            log::debug!("Start ignored in {:?}", self.state);
            return;
        }
        self.set_state(GameState::Ready);
    }

    /// Judge a tap on `side`
    ///
    /// Choosing the side the front chopstick is on ends the game. Any other
    /// choice knocks the front piece off, restores some health, scores a
    /// point and stacks a replacement on top.
    pub fn on_player_choice(&mut self, side: Side) {
        match self.state {
            GameState::Title => return,
            GameState::GameOver => {
                log::debug!("Input ignored after game over");
                return;
            }
            GameState::Ready | GameState::Playing => {}
        }
        if !side.is_directional() {
            log::warn!("Ignoring non-directional input");
            return;
        }

        if self.state == GameState::Ready {
            self.set_state(GameState::Playing);
        }

        self.set_facing(side);

        let Some(front) = self.tower.front_tag() else {
            return;
        };

        if self.facing == front {
            self.enter_game_over();
            return;
        }

        self.set_health(self.health + self.tuning.health_bonus);
        self.increment_score();

        if let Some((resolved, added)) = self.tower.advance() {
            log::debug!(
                "Resolved piece {} ({}) from the {}, score {}",
                resolved.id,
                resolved.side.as_str(),
                side.as_str(),
                self.score
            );
            self.events.push(GameEvent::PieceFlipped {
                piece: resolved,
                toward: side.opposite(),
            });
            self.events.push(GameEvent::PieceAdded(added));
        }
    }

    /// Advance one frame
    ///
    /// Decay is a fixed amount per call, not scaled by elapsed time, so the
    /// effective rate follows the host frame rate.
    pub fn on_tick(&mut self) {
        self.tower.settle();

        if self.state != GameState::Playing {
            return;
        }

        self.set_health(self.health - self.tuning.health_decay);
        if self.health < 0.0 {
            self.enter_game_over();
        }
    }

    /// End the session and arm the restart handoff (Playing only)
    fn enter_game_over(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        self.set_state(GameState::GameOver);
        self.restart_armed = true;
        log::info!("Game over with score {}", self.score);
        self.events.push(GameEvent::GameOver { score: self.score });
    }

    /// Build the next playthrough once this one has ended
    pub fn next_session(&self, seed: u64) -> Option<GameJudge> {
        if !self.restart_armed {
            return None;
        }
        Some(GameJudge::with_tuning(seed, self.tuning))
    }

    /// Write health (clamped to the maximum, no floor) and notify
    pub fn set_health(&mut self, health: f32) -> f32 {
        self.health = health.min(self.tuning.max_health);
        match self.events.last_mut() {
            Some(GameEvent::HealthChanged(queued)) => *queued = self.health,
            _ => self.events.push(GameEvent::HealthChanged(self.health)),
        }
        self.health
    }

    fn increment_score(&mut self) {
        self.score += 1;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("State {:?} -> {:?}", self.state, state);
        self.state = state;
        self.events.push(GameEvent::StateChanged(state));
    }

    fn set_facing(&mut self, side: Side) {
        self.facing = side;
        self.events.push(GameEvent::FacingChanged(side));
    }

    /// Take all queued change notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn facing(&self) -> Side {
        self.facing
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// Pieces front to back, for positioning
    pub fn pieces(&self) -> impl ExactSizeIterator<Item = &TowerPiece> {
        self.tower.pieces()
    }

    pub fn restart_armed(&self) -> bool {
        self.restart_armed
    }
}
