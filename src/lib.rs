//! Detective Gulls - simulation core for a 2D arcade game
//!
//! A seagull detective patrols the sky, dropping poop on pedestrians who throw
//! rocks and bottles back. The crate owns the per-frame simulation only;
//! drawing, sound synthesis and input wiring stay with the host.
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, spawner, collisions, level flow)
//! - `audio`: Audio trigger dispatch to a host-provided sink
//! - `settings`: Data-driven configuration
//! - `highscores`: High score persistence adapter

pub mod audio;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta the simulation accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play field defaults (16:9)
    pub const DEFAULT_FIELD_WIDTH: f32 = 1280.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 720.0;
    pub const MIN_FIELD_WIDTH: f32 = 800.0;
    pub const MIN_FIELD_HEIGHT: f32 = 450.0;

    /// Level progression
    pub const FIRST_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = 20;
    pub const LEVEL_DURATION: f32 = 60.0;
    /// Pause between a finished level and the next one
    pub const LEVEL_COMPLETE_DELAY: f32 = 2.5;

    /// Scoring
    pub const HIT_BONUS: u32 = 100;
    pub const LEVEL_COMPLETE_BONUS: u32 = 500;
    pub const ROCK_PENALTY: u32 = 20;
    pub const BOTTLE_PENALTY: u32 = 50;

    /// World gravity (pixels/s², positive is down)
    pub const GRAVITY: f32 = 600.0;

    /// Player
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 500.0;
    /// Targets closer than this do not move the player
    pub const PLAYER_DEAD_ZONE: f32 = 5.0;
    pub const PLAYER_SPAWN_HEIGHT: f32 = 0.4;
    pub const MAX_HEALTH: u32 = 3;
    pub const MAX_AMMO: u32 = 5;
    pub const FIRE_COOLDOWN: f32 = 0.6;
    pub const AMMO_RECHARGE: f32 = 0.6;
    pub const FULL_RECHARGE: f32 = 3.0;
    pub const INVULNERABLE_DURATION: f32 = 0.5;
    pub const WING_CYCLE: f32 = 0.3;

    /// Flight zone (upper half of the field)
    pub const FLIGHT_MARGIN_X: f32 = 20.0;
    pub const FLIGHT_MIN_Y: f32 = 30.0;
    pub const FLIGHT_ZONE_BOTTOM: f32 = 0.5;

    /// Street zone (bottom third of the field)
    pub const STREET_TOP: f32 = 2.0 / 3.0;
    pub const STREET_DEPTH: f32 = 0.3;
    pub const GROUND_OFFSET: f32 = 10.0;
    pub const STREET_WRAP_MARGIN: f32 = 50.0;

    /// Pedestrians
    pub const PEDESTRIAN_WIDTH: f32 = 20.0;
    pub const PEDESTRIAN_HEIGHT: f32 = 24.0;
    pub const PEDESTRIAN_BASE_SPEED: f32 = 50.0;
    pub const PEDESTRIAN_SPEED_JITTER: f32 = 30.0;
    pub const PEDESTRIAN_SPAWN_OFFSET: f32 = 30.0;
    pub const THROW_RANGE: f32 = 200.0;
    pub const THROW_FLIGHT_TIME: f32 = 0.6;
    pub const THROW_HEIGHT: f32 = 10.0;
    pub const THROW_LOCKOUT: f32 = 0.1;
    pub const THROW_POSE_DURATION: f32 = 0.3;
    pub const FIRST_THROW_DELAY: (f32, f32) = (0.5, 2.0);
    pub const RETHROW_DELAY: (f32, f32) = (1.0, 3.0);

    /// Projectiles
    pub const POOP_SIZE: f32 = 8.0;
    pub const POOP_DRAG: f32 = 0.95;
    pub const ROCK_SIZE: (f32, f32) = (10.0, 10.0);
    pub const ROCK_DAMAGE: u32 = 1;
    pub const ROCK_SPIN: f32 = 10.0;
    pub const BOTTLE_SIZE: (f32, f32) = (12.0, 16.0);
    pub const BOTTLE_DAMAGE: u32 = 1;
    pub const BOTTLE_SPIN: f32 = 6.0;
    pub const DESPAWN_MARGIN_X: f32 = 50.0;
    pub const DESPAWN_MARGIN_BOTTOM: f32 = 100.0;

    /// Cigarette pack pickup
    pub const PICKUP_SIZE: (f32, f32) = (12.0, 14.0);
    pub const PICKUP_RISE_SPEED: f32 = 50.0;
    pub const PICKUP_LIFT: f32 = 20.0;
    pub const PICKUP_MAX_RISE_SPEED: f32 = 100.0;
    pub const PICKUP_LIFESPAN: f32 = 5.0;
    pub const PICKUP_DESPAWN_TOP: f32 = 50.0;
    pub const PICKUP_BOB_AMPLITUDE: f32 = 15.0;
    pub const PICKUP_HEAL: (u32, u32) = (2, 3);

    /// Spawner
    pub const PEDESTRIAN_SPAWN_INTERVAL: f32 = 2.0;
    pub const PICKUP_CHECK_INTERVAL: f32 = 0.1;
}

/// Clamp a requested level number into the playable range
#[inline]
pub fn clamp_level(level: u32) -> u32 {
    level.clamp(consts::FIRST_LEVEL, consts::MAX_LEVEL)
}
