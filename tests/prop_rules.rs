//! Property-based tests for tower generation and judging.

use proptest::prelude::*;

use sushi_neko::sim::{GameJudge, GameState, Side, Tower};
use sushi_neko::Tuning;

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

/// Session that has just moved to Playing on a resolvable first input
fn playing_session(seed: u64) -> GameJudge {
    let mut judge = GameJudge::new(seed);
    judge.start();
    let side = match judge.tower().front_tag() {
        Some(Side::Left) => Side::Right,
        _ => Side::Left,
    };
    judge.on_player_choice(side);
    judge
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A directional piece is always immediately followed by a None piece.
    #[test]
    fn prop_directional_followed_by_none(seed in any::<u64>(), count in 1usize..300) {
        let mut tower = Tower::new(seed, &Tuning::default());
        tower.initialize(count);
        let sides = tower.sides();
        prop_assert_eq!(sides.len(), count);
        for pair in sides.windows(2) {
            if pair[0].is_directional() {
                prop_assert_eq!(pair[1], Side::None);
            }
        }
    }

    /// The rule still holds as the tower advances during play.
    #[test]
    fn prop_advance_preserves_rule(seed in any::<u64>(), steps in 1usize..200) {
        let mut tower = Tower::new(seed, &Tuning::default());
        tower.initialize(10);
        for _ in 0..steps {
            tower.advance();
            prop_assert_eq!(tower.len(), 10);
        }
        for pair in tower.sides().windows(2) {
            if pair[0].is_directional() {
                prop_assert_eq!(pair[1], Side::None);
            }
        }
    }

    /// Health after a bonus never exceeds the maximum.
    #[test]
    fn prop_bonus_clamped(seed in any::<u64>(), health in 0.0f32..=1.0) {
        let mut judge = playing_session(seed);
        prop_assume!(judge.state() == GameState::Playing);
        judge.set_health(health);
        let side = match judge.tower().front_tag() {
            Some(Side::Left) => Side::Right,
            _ => Side::Left,
        };
        judge.on_player_choice(side);
        prop_assert!(judge.health() <= 1.0);
        prop_assert!(judge.health() >= health);
    }

    /// Each tick removes exactly the decay, and game over lands on the
    /// first negative reading.
    #[test]
    fn prop_decay_until_negative(seed in any::<u64>(), health in 0.0f32..=1.0) {
        let mut judge = playing_session(seed);
        prop_assume!(judge.state() == GameState::Playing);
        judge.set_health(health);

        let mut ticks = 0;
        while judge.state() == GameState::Playing {
            let before = judge.health();
            prop_assert!(before >= 0.0);
            judge.on_tick();
            prop_assert!((before - judge.health() - 0.01).abs() < 1e-5);
            ticks += 1;
            prop_assert!(ticks < 1000);
        }
        prop_assert!(judge.health() < 0.0);
        prop_assert_eq!(judge.state(), GameState::GameOver);
    }

    /// Score never decreases and grows by one per resolved input.
    #[test]
    fn prop_score_monotonic(seed in any::<u64>(), inputs in prop::collection::vec(side_strategy(), 1..100)) {
        let mut judge = GameJudge::new(seed);
        judge.start();
        for side in inputs {
            let before = judge.score();
            let was_over = judge.state() == GameState::GameOver;
            let front = judge.tower().front_tag();
            judge.on_player_choice(side);

            if was_over || front == Some(side) {
                prop_assert_eq!(judge.score(), before);
            } else {
                prop_assert_eq!(judge.score(), before + 1);
            }
            if front == Some(side) {
                prop_assert_eq!(judge.state(), GameState::GameOver);
            }
        }
    }
}
