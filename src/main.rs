//! Sushi Neko entry point
//!
//! Runs a headless autoplay session against the rules engine and logs the
//! result.
//!
//! Usage: `sushi-neko [seed] [tuning.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use sushi_neko::Tuning;
use sushi_neko::sim::{GameEvent, GameJudge, GameState, Side};

/// Bot answers once every this many frames
const BOT_PACE_TICKS: u64 = 8;
/// Safety stop for the autoplay loop
const MAX_TICKS: u64 = 100_000;

fn main() {
    env_logger::init();
    log::info!("Sushi Neko (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                log::error!("Seed must be an unsigned integer, got {:?}", arg);
                std::process::exit(2);
            }
        },
        None => now_secs(),
    };
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(2);
            }
        },
        None => Tuning::default(),
    };

    let score = autoplay(GameJudge::with_tuning(seed, tuning));
    println!("Seed {}: score {}", seed, score);
}

/// Play until game over; returns the final score
fn autoplay(mut judge: GameJudge) -> u32 {
    judge.start();

    let mut ticks = 0;
    while judge.state() != GameState::GameOver && ticks < MAX_TICKS {
        if ticks % BOT_PACE_TICKS == 0 {
            judge.on_player_choice(bot_choice(judge.tower().front_tag(), ticks));
        }
        judge.on_tick();
        ticks += 1;

        for event in judge.drain_events() {
            if let GameEvent::GameOver { score } = event {
                log::info!("Run ended after {} ticks with score {}", ticks, score);
            }
        }
    }
    judge.score()
}

/// Stand opposite the chopstick; alternate when there is none
fn bot_choice(front: Option<Side>, ticks: u64) -> Side {
    match front {
        Some(Side::Left) => Side::Right,
        Some(Side::Right) => Side::Left,
        _ if (ticks / BOT_PACE_TICKS) % 2 == 0 => Side::Left,
        _ => Side::Right,
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
