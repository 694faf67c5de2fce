//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Variable timestep, clamped per frame, no sub-stepping
//! - Seeded RNG only
//! - Stable iteration order (insertion order of the entity lists)
//! - Deferred effects are countdown timers checked inside `tick`

pub mod collision;
pub mod difficulty;
pub mod geometry;
pub mod pedestrian;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, CollisionWorld, compact, resolve_collisions};
pub use difficulty::LevelConfig;
pub use geometry::{Aabb, Field};
pub use pedestrian::{Pedestrian, PedestrianContext, ballistic_velocity};
pub use player::Player;
pub use projectile::{Projectile, ProjectileKind};
pub use snapshot::{FrameSnapshot, HudView, PedestrianView, PlayerView, ProjectileView};
pub use spawner::{Spawner, Spawns, spawn_pickup};
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{FrameClock, TickInput, clamp_dt, tick};
