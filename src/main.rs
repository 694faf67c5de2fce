//! Detective Gulls headless runner
//!
//! Plays a session with a simple autopilot at a fixed 60 Hz, logs audio
//! triggers, keeps the high score on disk and prints the final frame.
//!
//! Usage: `detective-gulls [settings.json] [highscore.json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use detective_gulls::audio::LogSink;
use detective_gulls::sim::{FrameClock, GameSession, TickInput, tick};
use detective_gulls::{AudioManager, HighScore, Settings};

const FRAME_RATE: f64 = 60.0;
const MAX_SIM_SECONDS: f64 = 600.0;

/// Steer above the nearest pedestrian and drop when lined up
fn autopilot(session: &GameSession) -> TickInput {
    let player = session.player.pos;
    let nearest = session
        .pedestrians
        .iter()
        .filter(|p| p.active)
        .min_by(|a, b| {
            let da = (a.pos.x - player.x).abs();
            let db = (b.pos.x - player.x).abs();
            da.total_cmp(&db)
        });

    match nearest {
        Some(ped) => {
            // Lead the target by the poop's rough fall time
            let fall = ((ped.pos.y - player.y).max(0.0) / 300.0).min(1.0);
            let aim_x = ped.pos.x + ped.vel_x * fall;
            TickInput {
                target: Some(Vec2::new(aim_x, session.field.height * 0.25)),
                fire: (aim_x - player.x).abs() < 12.0,
                ..TickInput::default()
            }
        }
        None => TickInput::default(),
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Detective Gulls (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = args
        .next()
        .map(|path| Settings::load(&PathBuf::from(path)))
        .unwrap_or_default();
    let score_path = PathBuf::from(args.next().unwrap_or_else(|| "highscore.json".to_string()));

    let mut best = HighScore::load(&score_path);
    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!("Game initialized with seed: {}", seed);

    let mut session = GameSession::new(settings.field(), best.score, seed);
    let mut audio = AudioManager::from_settings(LogSink, &settings);
    let mut clock = FrameClock::new(settings.frame_dt_cap());

    let first = TickInput {
        select_level: Some(settings.starting_level()),
        ..TickInput::default()
    };
    tick(&mut session, &first, clock.advance(0.0));

    let mut now = 0.0;
    while !session.is_finished() && now < MAX_SIM_SECONDS {
        now += 1.0 / FRAME_RATE;
        let input = autopilot(&session);
        tick(&mut session, &input, clock.advance(now));
        audio.dispatch(&session.drain_events());
    }

    log::info!(
        "Run ended in {:?} on level {} with score {} after {} frames",
        session.phase,
        session.level,
        session.score,
        session.frame_count
    );

    if best.submit(session.score, session.level) {
        if let Err(err) = best.save(&score_path) {
            log::error!("Could not save high score to {}: {err}", score_path.display());
        }
    }
    if audio.failures() > 0 {
        log::warn!("{} audio triggers failed", audio.failures());
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Could not serialize final frame: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The headless runner needs a filesystem and a native logger
}
