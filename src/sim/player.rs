//! The player: a seagull detective hovering in the flight zone

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::projectile::Projectile;
use crate::consts::*;

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Last known pointer position the bird flies toward
    pub target: Vec2,
    pub health: u32,
    pub ammo: u32,
    /// Seconds until the next ammo unit regenerates (0 when full)
    pub recharge_timer: f32,
    /// Seconds of damage immunity left
    pub invulnerable_timer: f32,
    /// Seconds until the next shot is allowed
    pub fire_cooldown: f32,
    /// Wing flap animation phase (visual only)
    #[serde(default)]
    pub wing_timer: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            target: pos,
            health: MAX_HEALTH,
            ammo: MAX_AMMO,
            recharge_timer: 0.0,
            invulnerable_timer: 0.0,
            fire_cooldown: 0.0,
            wing_timer: 0.0,
        }
    }

    /// Restore health, ammo and timers for a new level
    pub fn reset(&mut self, pos: Vec2) {
        *self = Self::new(pos);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(PLAYER_SIZE))
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_timer > 0.0
    }

    /// Blink state while invulnerable (hidden on even tenths)
    pub fn is_visible(&self) -> bool {
        !self.is_invulnerable() || (self.invulnerable_timer * 10.0).floor() as u32 % 2 != 0
    }

    /// Ammo regeneration progress toward the next unit, 0..=1
    pub fn recharge_progress(&self) -> f32 {
        if self.ammo >= MAX_AMMO {
            return 1.0;
        }
        let window = if self.recharge_timer > AMMO_RECHARGE {
            FULL_RECHARGE
        } else {
            AMMO_RECHARGE
        };
        (1.0 - self.recharge_timer / window).clamp(0.0, 1.0)
    }

    /// Advance one frame. Returns the poop dropped this frame, if any.
    pub fn update(
        &mut self,
        dt: f32,
        target: Option<Vec2>,
        fire: bool,
        flight_zone: &Aabb,
    ) -> Option<Projectile> {
        self.invulnerable_timer = (self.invulnerable_timer - dt).max(0.0);

        if let Some(target) = target {
            self.target = target;
        }
        self.seek(dt);
        self.pos = flight_zone.clamp_point(self.pos);

        self.recharge(dt);

        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        let shot = if fire { self.try_fire() } else { None };

        self.wing_timer += dt;
        if self.wing_timer > WING_CYCLE {
            self.wing_timer = 0.0;
        }

        shot
    }

    /// Fly toward the target at fixed speed without overshooting
    fn seek(&mut self, dt: f32) {
        let delta = self.target - self.pos;
        let distance = delta.length();
        if distance <= PLAYER_DEAD_ZONE {
            return;
        }

        let step = PLAYER_SPEED * dt;
        if distance <= step {
            self.pos = self.target;
        } else {
            self.pos += delta / distance * step;
        }
    }

    fn recharge(&mut self, dt: f32) {
        if self.ammo >= MAX_AMMO {
            self.recharge_timer = 0.0;
            return;
        }

        self.recharge_timer -= dt;
        if self.recharge_timer <= 0.0 {
            self.ammo += 1;
            self.recharge_timer = if self.ammo >= MAX_AMMO {
                0.0
            } else {
                AMMO_RECHARGE
            };
        }
    }

    /// Drop a poop if ammo and cooldown allow
    pub fn try_fire(&mut self) -> Option<Projectile> {
        if self.ammo == 0 || self.fire_cooldown > 0.0 {
            return None;
        }

        self.ammo -= 1;
        self.fire_cooldown = FIRE_COOLDOWN;
        // Emptying the crop triggers the long recharge
        self.recharge_timer = if self.ammo == 0 {
            FULL_RECHARGE
        } else {
            AMMO_RECHARGE
        };

        Some(Projectile::poop(self.pos))
    }

    /// Apply damage unless invulnerable. Returns true if health changed.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        self.invulnerable_timer = INVULNERABLE_DURATION;
        true
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
    }
}
