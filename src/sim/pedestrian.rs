//! Pedestrians: street-level NPCs that throw things at the player

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::LevelConfig;
use super::geometry::{Aabb, Field};
use super::projectile::Projectile;
use crate::consts::*;

/// Read-only view of the session a pedestrian needs to make decisions
#[derive(Debug, Clone, Copy)]
pub struct PedestrianContext<'a> {
    pub field: &'a Field,
    pub player_pos: Vec2,
    pub config: &'a LevelConfig,
}

/// A pedestrian walking the street
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pedestrian {
    pub pos: Vec2,
    /// Signed horizontal speed (pixels/s)
    pub vel_x: f32,
    /// +1 walking right, -1 walking left
    pub facing: f32,
    /// Seconds until the next throw attempt (only runs while the player is in range)
    pub throw_cooldown: f32,
    /// Blocks a second throw until the previous wind-up finishes
    pub throw_lockout: f32,
    /// Remaining throw pose time (visual)
    pub throw_pose: f32,
    /// Walk cycle phase (visual)
    pub walk_timer: f32,
    pub active: bool,
}

impl Pedestrian {
    pub fn new<R: Rng + ?Sized>(pos: Vec2, vel_x: f32, rng: &mut R) -> Self {
        Self {
            pos,
            vel_x,
            facing: if vel_x > 0.0 { 1.0 } else { -1.0 },
            throw_cooldown: rng.random_range(FIRST_THROW_DELAY.0..FIRST_THROW_DELAY.1),
            throw_lockout: 0.0,
            throw_pose: 0.0,
            walk_timer: 0.0,
            active: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(PEDESTRIAN_WIDTH, PEDESTRIAN_HEIGHT))
    }

    pub fn destroy(&mut self) {
        self.active = false;
    }

    /// True while the throw pose should be drawn
    pub fn is_throwing(&self) -> bool {
        self.throw_pose > 0.0
    }

    /// Whether the target is inside the detection radius
    pub fn can_see(&self, target: Vec2) -> bool {
        self.pos.distance(target) < THROW_RANGE
    }

    /// Advance one frame. Returns a rock or bottle if one was thrown.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        ctx: &PedestrianContext<'_>,
        rng: &mut R,
    ) -> Option<Projectile> {
        if !self.active {
            return None;
        }

        self.walk(dt, ctx.field);

        let mut thrown = None;
        if self.can_see(ctx.player_pos) {
            // Harder levels burn through the cooldown faster
            self.throw_cooldown -= dt * ctx.config.throw_rate;
            if self.throw_cooldown <= 0.0 {
                thrown = self.throw_at(ctx.player_pos, ctx.config, rng);
                self.throw_cooldown = rng.random_range(RETHROW_DELAY.0..RETHROW_DELAY.1);
                self.throw_pose = THROW_POSE_DURATION;
            }
        }

        self.walk_timer += dt;
        self.throw_pose = (self.throw_pose - dt).max(0.0);
        self.throw_lockout = (self.throw_lockout - dt).max(0.0);

        thrown
    }

    /// Walk horizontally, wrapping at the street ends
    fn walk(&mut self, dt: f32, field: &Field) {
        self.pos.x += self.vel_x * dt;

        if self.pos.x > field.width + STREET_WRAP_MARGIN {
            self.pos.x = -STREET_WRAP_MARGIN;
        } else if self.pos.x < -STREET_WRAP_MARGIN {
            self.pos.x = field.width + STREET_WRAP_MARGIN;
        }

        self.pos.y = self.pos.y.max(field.street_top()).min(field.ground());
    }

    fn throw_at<R: Rng + ?Sized>(
        &mut self,
        target: Vec2,
        config: &LevelConfig,
        rng: &mut R,
    ) -> Option<Projectile> {
        if self.throw_lockout > 0.0 {
            return None;
        }

        let origin = self.pos - Vec2::new(0.0, THROW_HEIGHT);
        let vel = ballistic_velocity(origin, target, THROW_FLIGHT_TIME, GRAVITY)?;
        let bottle = rng.random::<f32>() < config.bottle_ratio;

        self.throw_lockout = THROW_LOCKOUT;
        Some(Projectile::thrown(bottle, origin, vel, rng))
    }
}

/// Launch velocity that lands on `to` after `flight_time` seconds under
/// downward `gravity` (screen coordinates). `None` when there is nothing to aim
/// at or the flight time is degenerate.
///
/// Y grows downward here, so the gravity term is subtracted: `vy = dy / t - g * t / 2`.
/// The usual textbook `+ g * t / 2` form assumes y points up.
pub fn ballistic_velocity(from: Vec2, to: Vec2, flight_time: f32, gravity: f32) -> Option<Vec2> {
    let delta = to - from;
    if delta.length_squared() < f32::EPSILON || flight_time <= f32::EPSILON {
        return None;
    }

    Some(Vec2::new(
        delta.x / flight_time,
        delta.y / flight_time - gravity * flight_time / 2.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    fn walker(pos: Vec2, vel_x: f32) -> Pedestrian {
        let mut rng = Pcg32::seed_from_u64(11);
        Pedestrian::new(pos, vel_x, &mut rng)
    }

    #[test]
    fn test_first_throw_delay_range() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            let ped = Pedestrian::new(Vec2::new(0.0, 500.0), 80.0, &mut rng);
            assert!(ped.throw_cooldown >= FIRST_THROW_DELAY.0);
            assert!(ped.throw_cooldown < FIRST_THROW_DELAY.1);
        }
    }

    #[test]
    fn test_walks_and_wraps() {
        let field = Field::default();
        let config = LevelConfig::for_level(1);
        let ctx = PedestrianContext {
            field: &field,
            player_pos: Vec2::new(-1000.0, -1000.0),
            config: &config,
        };
        let mut rng = Pcg32::seed_from_u64(2);

        let mut right = walker(Vec2::new(field.width + 49.0, 500.0), 120.0);
        right.update(DT, &ctx, &mut rng);
        assert_eq!(right.pos.x, -STREET_WRAP_MARGIN);

        let mut left = walker(Vec2::new(-49.0, 500.0), -120.0);
        left.update(DT, &ctx, &mut rng);
        assert_eq!(left.pos.x, field.width + STREET_WRAP_MARGIN);
        assert_eq!(left.facing, -1.0);
    }

    #[test]
    fn test_clamped_to_street() {
        let field = Field::default();
        let config = LevelConfig::for_level(1);
        let ctx = PedestrianContext {
            field: &field,
            player_pos: Vec2::new(-1000.0, -1000.0),
            config: &config,
        };
        let mut rng = Pcg32::seed_from_u64(2);
        let mut ped = walker(Vec2::new(300.0, 100.0), 50.0);
        ped.update(DT, &ctx, &mut rng);
        assert_eq!(ped.pos.y, field.street_top());
    }

    #[test]
    fn test_ballistic_solution_lands_on_target() {
        let from = Vec2::new(400.0, 600.0);
        let to = Vec2::new(500.0, 300.0);
        let vel = ballistic_velocity(from, to, THROW_FLIGHT_TIME, GRAVITY).unwrap();
        let t = THROW_FLIGHT_TIME;
        let landed = from + vel * t + Vec2::new(0.0, 0.5 * GRAVITY * t * t);
        assert!(landed.distance(to) < 1e-2);
    }

    #[test]
    fn test_ballistic_degenerate_aim() {
        let p = Vec2::new(10.0, 10.0);
        assert!(ballistic_velocity(p, p, THROW_FLIGHT_TIME, GRAVITY).is_none());
        assert!(ballistic_velocity(p, p + Vec2::X, 0.0, GRAVITY).is_none());
    }

    #[test]
    fn test_throws_only_when_player_in_range() {
        let field = Field::default();
        let config = LevelConfig::for_level(20);
        let mut rng = Pcg32::seed_from_u64(9);
        let mut ped = walker(Vec2::new(600.0, 500.0), 0.0);
        ped.throw_cooldown = 0.01;

        let far = PedestrianContext {
            field: &field,
            player_pos: Vec2::new(600.0, 50.0),
            config: &config,
        };
        assert!(ped.update(DT, &far, &mut rng).is_none());
        assert_eq!(ped.throw_cooldown, 0.01);

        let near = PedestrianContext {
            player_pos: Vec2::new(620.0, 340.0),
            ..far
        };
        let thrown = ped.update(DT, &near, &mut rng).expect("should throw");
        assert!(thrown.kind.is_thrown());
        assert!(thrown.vel.y < 0.0);
        assert!(ped.is_throwing());
        assert!(ped.throw_cooldown >= RETHROW_DELAY.0);
    }

    #[test]
    fn test_lockout_blocks_rethrow() {
        let field = Field::default();
        let config = LevelConfig::for_level(20);
        let mut rng = Pcg32::seed_from_u64(9);
        let mut ped = walker(Vec2::new(600.0, 500.0), 0.0);
        let ctx = PedestrianContext {
            field: &field,
            player_pos: Vec2::new(620.0, 340.0),
            config: &config,
        };

        ped.throw_cooldown = 0.0;
        assert!(ped.update(DT, &ctx, &mut rng).is_some());
        ped.throw_cooldown = 0.0;
        assert!(ped.update(DT, &ctx, &mut rng).is_none());
        // The cooldown still resets after a blocked attempt
        assert!(ped.throw_cooldown >= RETHROW_DELAY.0);
    }

    #[test]
    fn test_bottle_ratio_zero_only_rocks() {
        let field = Field::default();
        let config = LevelConfig::for_level(1);
        let mut rng = Pcg32::seed_from_u64(21);
        let ctx = PedestrianContext {
            field: &field,
            player_pos: Vec2::new(620.0, 340.0),
            config: &config,
        };
        for _ in 0..50 {
            let mut ped = walker(Vec2::new(600.0, 500.0), 0.0);
            ped.throw_cooldown = 0.0;
            let thrown = ped.update(DT, &ctx, &mut rng).unwrap();
            assert_eq!(thrown.kind.name(), "rock");
        }
    }

    #[test]
    fn test_thrown_rock_reaches_player() {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let origin = Vec2::new(600.0, 490.0);
        let target = Vec2::new(650.0, 340.0);
        let vel = ballistic_velocity(origin, target, THROW_FLIGHT_TIME, GRAVITY).unwrap();
        let mut rock = Projectile::thrown(false, origin, vel, &mut rng);
        for _ in 0..36 {
            rock.update(DT, &field);
        }
        // Semi-implicit stepping drifts a few pixels from the closed form
        assert!(rock.pos.distance(target) < 8.0);
    }
}
