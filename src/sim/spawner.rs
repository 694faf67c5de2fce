//! Spawner: keeps the street populated and drops in pickups
//!
//! Spawn helpers return new entities; the session decides where they go.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::LevelConfig;
use super::geometry::Field;
use super::pedestrian::Pedestrian;
use super::projectile::Projectile;
use crate::consts::*;

/// Entities produced by one spawner step
#[derive(Debug, Default)]
pub struct Spawns {
    pub pedestrian: Option<Pedestrian>,
    pub pickup: Option<Projectile>,
}

/// Spawn timers for the current level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds until the next pedestrian may appear
    pub pedestrian_timer: f32,
    /// Seconds until the next pickup roll
    pub pickup_timer: f32,
    /// Edge the next pedestrian enters from
    pub next_from_left: bool,
}

impl Spawner {
    /// Fresh timers for a level start; the first entry side is random
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pedestrian_timer = 0.0;
        self.pickup_timer = 0.0;
        self.next_from_left = rng.random::<bool>();
    }

    /// Advance timers and produce whatever is due this frame
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        population: usize,
        field: &Field,
        config: &LevelConfig,
        rng: &mut R,
    ) -> Spawns {
        let mut spawns = Spawns::default();

        // The timer only rearms after an actual spawn, so a gap is refilled
        // as soon as it opens once the interval has passed
        self.pedestrian_timer -= dt;
        if self.pedestrian_timer <= 0.0 && population < config.pedestrian_count {
            spawns.pedestrian = Some(self.spawn_pedestrian(field, config, rng));
            self.pedestrian_timer = PEDESTRIAN_SPAWN_INTERVAL;
        }

        self.pickup_timer -= dt;
        if self.pickup_timer <= 0.0 {
            if rng.random::<f32>() < config.pickup_chance {
                spawns.pickup = Some(spawn_pickup(field, rng));
            }
            self.pickup_timer = PICKUP_CHECK_INTERVAL;
        }

        spawns
    }

    /// Create a pedestrian just off one street edge, alternating sides
    pub fn spawn_pedestrian<R: Rng + ?Sized>(
        &mut self,
        field: &Field,
        config: &LevelConfig,
        rng: &mut R,
    ) -> Pedestrian {
        let from_left = self.next_from_left;
        self.next_from_left = !from_left;

        let x = if from_left {
            -PEDESTRIAN_SPAWN_OFFSET
        } else {
            field.width + PEDESTRIAN_SPAWN_OFFSET
        };
        let y = field.height * (STREET_TOP + rng.random::<f32>() * STREET_DEPTH);
        let speed = (PEDESTRIAN_BASE_SPEED + rng.random::<f32>() * PEDESTRIAN_SPEED_JITTER)
            * config.speed_multiplier;
        let direction = if from_left { 1.0 } else { -1.0 };

        Pedestrian::new(Vec2::new(x, y), direction * speed, rng)
    }
}

/// Cigarette pack at a random spot in the upper half of the field
pub fn spawn_pickup<R: Rng + ?Sized>(field: &Field, rng: &mut R) -> Projectile {
    let x = rng.random::<f32>() * field.width;
    let y = rng.random::<f32>() * field.height * 0.5;
    Projectile::cigarette_pack(Vec2::new(x, y))
}
