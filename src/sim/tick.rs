//! Per-frame simulation step
//!
//! One `tick` per rendered frame with a clamped variable delta. Order inside a
//! running frame:
//! player -> pedestrians -> projectiles -> spawner -> collisions -> compaction
//! -> lose check.

use glam::Vec2;

use super::collision::{CollisionReport, CollisionWorld, compact, resolve_collisions};
use super::pedestrian::PedestrianContext;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::*;

/// Input sampled once at the start of a tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position; `None` keeps the previous target
    pub target: Option<Vec2>,
    /// Fire button held
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart request
    pub restart: bool,
    /// Leave the idle screen
    pub start: bool,
    /// Jump to a level as a fresh run
    pub select_level: Option<u32>,
}

/// Clamp a raw frame delta into the range the physics accepts
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_finite() { dt.clamp(0.0, max_dt) } else { 0.0 }
}

/// Turns monotonic timestamps into clamped frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last: None,
            max_dt: max_dt.clamp(f32::EPSILON, MAX_FRAME_DT),
        }
    }

    /// Delta since the previous call (0 on the first frame)
    pub fn advance(&mut self, now_secs: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now_secs - last) as f32,
            None => 0.0,
        };
        self.last = Some(now_secs);
        clamp_dt(dt, self.max_dt)
    }

    /// Forget the last timestamp (e.g. when the host was suspended)
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    let dt = clamp_dt(dt, MAX_FRAME_DT);

    // Commands first; they may change the phase we simulate below
    if let Some(level) = input.select_level {
        session.select_level(level);
    }
    if input.restart {
        session.restart();
    }
    if input.start {
        session.start();
    }
    if input.pause {
        session.toggle_pause();
    }

    match session.phase {
        GamePhase::Running => step_running(session, input, dt),
        GamePhase::LevelComplete => {
            session.transition_timer -= dt;
            if session.transition_timer <= 0.0 {
                session.advance_level();
            }
        }
        GamePhase::Idle | GamePhase::Paused | GamePhase::GameOver | GamePhase::Victory => {}
    }
}

fn step_running(session: &mut GameSession, input: &TickInput, dt: f32) {
    session.time_remaining -= dt;
    if session.time_remaining <= 0.0 {
        session.complete_level();
        return;
    }

    session.frame_count += 1;

    // Player
    let flight_zone = session.field.flight_zone();
    if let Some(poop) = session
        .player
        .update(dt, input.target, input.fire, &flight_zone)
    {
        session.projectiles.push(poop);
        session.events.push(GameEvent::Fire);
    }

    // Pedestrians
    let ctx = PedestrianContext {
        field: &session.field,
        player_pos: session.player.pos,
        config: &session.config,
    };
    let mut thrown = Vec::new();
    for pedestrian in session.pedestrians.iter_mut().filter(|p| p.active) {
        if let Some(projectile) = pedestrian.update(dt, &ctx, &mut session.rng) {
            thrown.push(projectile);
        }
    }
    session.projectiles.extend(thrown);

    // Projectiles, including ones launched this frame
    for projectile in session.projectiles.iter_mut() {
        projectile.update(dt, &session.field);
    }

    // Spawner
    let population = session.pedestrians.iter().filter(|p| p.active).count();
    let spawns = session.spawner.update(
        dt,
        population,
        &session.field,
        &session.config,
        &mut session.rng,
    );
    if let Some(pedestrian) = spawns.pedestrian {
        session.pedestrians.push(pedestrian);
    }
    if let Some(pickup) = spawns.pickup {
        session.projectiles.push(pickup);
    }

    // Collisions, then one compaction pass
    let mut world = CollisionWorld {
        player: &mut session.player,
        pedestrians: &mut session.pedestrians,
        projectiles: &mut session.projectiles,
        score: &mut session.score,
        events: &mut session.events,
    };
    let report = resolve_collisions(&mut world, &mut session.rng);
    if report != CollisionReport::default() {
        log::debug!("Frame {} collisions: {:?}", session.frame_count, report);
    }
    compact(&mut session.pedestrians, &mut session.projectiles);

    if !session.player.is_alive() {
        session.end_game();
    }
}
