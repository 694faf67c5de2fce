//! Projectiles: everything that flies or floats
//!
//! One struct holds the shared kinematics; the per-kind behavior hangs off
//! the `ProjectileKind` tag.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, Field};
use crate::consts::*;

/// Projectile variants and their kind-specific state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Dropped by the player, falls with light drag
    Poop,
    /// Light pedestrian throw (spin is cosmetic)
    Rock { rotation: f32, spin: f32 },
    /// Heavy pedestrian throw
    Bottle { rotation: f32, spin: f32 },
    /// Health pickup that floats upward and expires
    CigarettePack { elapsed: f32 },
}

impl ProjectileKind {
    /// Stable name used by renderers and logs
    pub fn name(&self) -> &'static str {
        match self {
            ProjectileKind::Poop => "poop",
            ProjectileKind::Rock { .. } => "rock",
            ProjectileKind::Bottle { .. } => "bottle",
            ProjectileKind::CigarettePack { .. } => "cigarette",
        }
    }

    /// Hitbox size
    pub fn size(&self) -> Vec2 {
        match self {
            ProjectileKind::Poop => Vec2::splat(POOP_SIZE),
            ProjectileKind::Rock { .. } => Vec2::new(ROCK_SIZE.0, ROCK_SIZE.1),
            ProjectileKind::Bottle { .. } => Vec2::new(BOTTLE_SIZE.0, BOTTLE_SIZE.1),
            ProjectileKind::CigarettePack { .. } => Vec2::new(PICKUP_SIZE.0, PICKUP_SIZE.1),
        }
    }

    /// Lives taken from the player on a hit
    pub fn damage(&self) -> u32 {
        match self {
            ProjectileKind::Rock { .. } => ROCK_DAMAGE,
            ProjectileKind::Bottle { .. } => BOTTLE_DAMAGE,
            _ => 0,
        }
    }

    /// Points lost when this hits the player
    pub fn score_penalty(&self) -> u32 {
        match self {
            ProjectileKind::Rock { .. } => ROCK_PENALTY,
            ProjectileKind::Bottle { .. } => BOTTLE_PENALTY,
            _ => 0,
        }
    }

    pub fn is_poop(&self) -> bool {
        matches!(self, ProjectileKind::Poop)
    }

    /// Rock or bottle
    pub fn is_thrown(&self) -> bool {
        matches!(self, ProjectileKind::Rock { .. } | ProjectileKind::Bottle { .. })
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self, ProjectileKind::CigarettePack { .. })
    }
}

/// A projectile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Projectile {
    /// Poop released at the player's position with no initial velocity
    pub fn poop(pos: Vec2) -> Self {
        Self {
            kind: ProjectileKind::Poop,
            pos,
            vel: Vec2::ZERO,
            active: true,
        }
    }

    /// Rock or bottle with a random starting orientation and spin
    pub fn thrown<R: Rng + ?Sized>(bottle: bool, pos: Vec2, vel: Vec2, rng: &mut R) -> Self {
        let rotation = rng.random::<f32>() * std::f32::consts::TAU;
        let kind = if bottle {
            ProjectileKind::Bottle {
                rotation,
                spin: (rng.random::<f32>() - 0.5) * BOTTLE_SPIN,
            }
        } else {
            ProjectileKind::Rock {
                rotation,
                spin: (rng.random::<f32>() - 0.5) * ROCK_SPIN,
            }
        };
        Self {
            kind,
            pos,
            vel,
            active: true,
        }
    }

    /// Cigarette pack, starts drifting upward
    pub fn cigarette_pack(pos: Vec2) -> Self {
        Self {
            kind: ProjectileKind::CigarettePack { elapsed: 0.0 },
            pos,
            vel: Vec2::new(0.0, -PICKUP_RISE_SPEED),
            active: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.kind.size())
    }

    /// Mark for removal on the next compaction
    pub fn destroy(&mut self) {
        self.active = false;
    }

    /// Advance one frame. Inactive projectiles are left untouched.
    pub fn update(&mut self, dt: f32, field: &Field) {
        if !self.active {
            return;
        }

        match &mut self.kind {
            ProjectileKind::CigarettePack { elapsed } => {
                self.pos.x += self.vel.x * dt;
                // Lift accelerates upward until capped
                self.vel.y = (self.vel.y - PICKUP_LIFT * dt).max(-PICKUP_MAX_RISE_SPEED);
                self.pos.y += self.vel.y * dt;

                *elapsed += dt;
                if *elapsed > PICKUP_LIFESPAN || field.pickup_escaped(self.pos) {
                    self.active = false;
                }
            }
            kind => {
                // Semi-implicit Euler
                self.vel.y += GRAVITY * dt;
                self.pos += self.vel * dt;

                match kind {
                    ProjectileKind::Poop => self.vel.x *= POOP_DRAG,
                    ProjectileKind::Rock { rotation, spin }
                    | ProjectileKind::Bottle { rotation, spin } => *rotation += *spin * dt,
                    ProjectileKind::CigarettePack { .. } => {}
                }

                if field.projectile_escaped(self.pos) {
                    self.active = false;
                }
            }
        }
    }

    /// Decorative rotation for thrown objects
    pub fn rotation(&self) -> f32 {
        match self.kind {
            ProjectileKind::Rock { rotation, .. } | ProjectileKind::Bottle { rotation, .. } => {
                rotation
            }
            _ => 0.0,
        }
    }

    /// Render opacity; pickups fade out over their lifespan
    pub fn alpha(&self) -> f32 {
        match self.kind {
            ProjectileKind::CigarettePack { elapsed } => (1.0 - elapsed / PICKUP_LIFESPAN).max(0.0),
            _ => 1.0,
        }
    }

    /// Vertical render offset for the pickup bob animation
    pub fn bob_offset(&self) -> f32 {
        match self.kind {
            ProjectileKind::CigarettePack { elapsed } => (elapsed * 3.0).sin() * PICKUP_BOB_AMPLITUDE,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_poop_falls_with_drag() {
        let field = Field::default();
        let mut poop = Projectile::poop(Vec2::new(100.0, 100.0));
        poop.vel.x = 100.0;
        poop.update(DT, &field);
        assert!(poop.vel.y > 0.0);
        assert!(poop.pos.y > 100.0);
        assert!((poop.vel.x - 95.0).abs() < 1e-4);
    }

    #[test]
    fn test_poop_despawns_below_field() {
        let field = Field::default();
        let mut poop = Projectile::poop(Vec2::new(100.0, field.height + DESPAWN_MARGIN_BOTTOM - 0.01));
        poop.vel.y = 50.0;
        poop.update(DT, &field);
        assert!(!poop.active);
    }

    #[test]
    fn test_thrown_despawns_sideways() {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut rock = Projectile::thrown(false, Vec2::new(-45.0, 500.0), Vec2::new(-600.0, 0.0), &mut rng);
        rock.update(DT, &field);
        assert!(!rock.active);
    }

    #[test]
    fn test_thrown_variant_stats() {
        let mut rng = Pcg32::seed_from_u64(7);
        let rock = Projectile::thrown(false, Vec2::ZERO, Vec2::ZERO, &mut rng);
        let bottle = Projectile::thrown(true, Vec2::ZERO, Vec2::ZERO, &mut rng);
        assert_eq!(rock.kind.name(), "rock");
        assert_eq!(bottle.kind.name(), "bottle");
        assert!(bottle.kind.damage() > rock.kind.damage());
        assert!(bottle.kind.score_penalty() > rock.kind.score_penalty());
        assert_eq!(bottle.bounds().height(), BOTTLE_SIZE.1);
    }

    #[test]
    fn test_spin_does_not_move_hitbox() {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut bottle = Projectile::thrown(true, Vec2::new(300.0, 300.0), Vec2::ZERO, &mut rng);
        let before = bottle.rotation();
        bottle.update(DT, &field);
        assert_eq!(bottle.bounds().width(), BOTTLE_SIZE.0);
        assert_ne!(before, bottle.rotation());
    }

    #[test]
    fn test_pickup_floats_up_and_caps_speed() {
        let field = Field::default();
        let mut pack = Projectile::cigarette_pack(Vec2::new(400.0, 300.0));
        for _ in 0..60 {
            pack.update(DT, &field);
        }
        assert!(pack.active);
        assert!(pack.pos.y < 300.0);
        assert!(pack.vel.y >= -PICKUP_MAX_RISE_SPEED);
        assert!(pack.vel.y < -PICKUP_RISE_SPEED);
    }

    #[test]
    fn test_pickup_expires_after_lifespan() {
        let field = Field::default();
        // Low enough that it cannot float off the top first
        let mut pack = Projectile::cigarette_pack(Vec2::new(400.0, 700.0));
        let mut steps = 0;
        while pack.active && steps < 1000 {
            pack.update(0.1, &field);
            steps += 1;
        }
        assert!(!pack.active);
        assert!((50..=52).contains(&steps));
        assert_eq!(pack.alpha(), 0.0);
    }

    #[test]
    fn test_pickup_despawns_above_top() {
        let field = Field::default();
        let mut pack = Projectile::cigarette_pack(Vec2::new(400.0, -49.5));
        pack.update(0.1, &field);
        assert!(pack.pos.y < -PICKUP_DESPAWN_TOP);
        assert!(!pack.active);
    }

    #[test]
    fn test_pickup_just_below_top_stays() {
        let field = Field::default();
        let mut pack = Projectile::cigarette_pack(Vec2::new(400.0, -40.0));
        pack.update(DT, &field);
        assert!(pack.pos.y > -PICKUP_DESPAWN_TOP);
        assert!(pack.active);
    }

    #[test]
    fn test_inactive_projectile_is_frozen() {
        let field = Field::default();
        let mut poop = Projectile::poop(Vec2::new(10.0, 10.0));
        poop.destroy();
        poop.update(DT, &field);
        assert_eq!(poop.pos, Vec2::new(10.0, 10.0));
    }
}
