//! Collision detection and resolution
//!
//! Three independent AABB scans per frame, each over active entities only and
//! in list order:
//! 1. poop vs pedestrians
//! 2. rocks/bottles vs the player
//! 3. cigarette packs vs the player
//!
//! Anything destroyed in a scan is skipped for the rest of the frame. Removal
//! from the collections happens once, in `compact`, after all scans.

use rand::Rng;

use super::pedestrian::Pedestrian;
use super::player::Player;
use super::projectile::Projectile;
use super::state::GameEvent;
use crate::consts::*;

/// Counts of what the scans resolved this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub targets_hit: u32,
    pub player_hits: u32,
    pub pickups_collected: u32,
}

/// Everything a collision pass may mutate
pub struct CollisionWorld<'a> {
    pub player: &'a mut Player,
    pub pedestrians: &'a mut [Pedestrian],
    pub projectiles: &'a mut [Projectile],
    pub score: &'a mut u32,
    pub events: &'a mut Vec<GameEvent>,
}

/// Run all three scans and apply their effects
pub fn resolve_collisions<R: Rng + ?Sized>(world: &mut CollisionWorld<'_>, rng: &mut R) -> CollisionReport {
    CollisionReport {
        targets_hit: resolve_poop_hits(world),
        player_hits: resolve_player_hits(world),
        pickups_collected: resolve_pickups(world, rng),
    }
}

/// Poop vs pedestrians: each poop takes out at most one pedestrian
fn resolve_poop_hits(world: &mut CollisionWorld<'_>) -> u32 {
    let mut hits = 0;

    for projectile in world.projectiles.iter_mut() {
        if !projectile.active || !projectile.kind.is_poop() {
            continue;
        }
        let bounds = projectile.bounds();

        let victim = world
            .pedestrians
            .iter_mut()
            .find(|p| p.active && p.bounds().overlaps(&bounds));

        if let Some(pedestrian) = victim {
            pedestrian.destroy();
            projectile.destroy();
            *world.score = world.score.saturating_add(HIT_BONUS);
            world.events.push(GameEvent::HitTarget);
            hits += 1;
        }
    }

    hits
}

/// Rocks and bottles vs the player
fn resolve_player_hits(world: &mut CollisionWorld<'_>) -> u32 {
    let mut hits = 0;

    for projectile in world.projectiles.iter_mut() {
        if !projectile.active || !projectile.kind.is_thrown() {
            continue;
        }
        if !projectile.bounds().overlaps(&world.player.bounds()) {
            continue;
        }

        // Invulnerability only shields health; the penalty always applies
        world.player.take_damage(projectile.kind.damage());
        *world.score = world.score.saturating_sub(projectile.kind.score_penalty());
        projectile.destroy();
        world.events.push(GameEvent::TakeDamage);
        hits += 1;
    }

    hits
}

/// Cigarette packs vs the player
fn resolve_pickups<R: Rng + ?Sized>(world: &mut CollisionWorld<'_>, rng: &mut R) -> u32 {
    let mut collected = 0;

    for projectile in world.projectiles.iter_mut() {
        if !projectile.active || !projectile.kind.is_pickup() {
            continue;
        }
        if !projectile.bounds().overlaps(&world.player.bounds()) {
            continue;
        }

        let heal = rng.random_range(PICKUP_HEAL.0..=PICKUP_HEAL.1);
        world.player.heal(heal);
        projectile.destroy();
        world.events.push(GameEvent::CollectPickup);
        collected += 1;
    }

    collected
}

/// Drop inactive entities. Returns how many were removed.
pub fn compact(pedestrians: &mut Vec<Pedestrian>, projectiles: &mut Vec<Projectile>) -> usize {
    let before = pedestrians.len() + projectiles.len();
    pedestrians.retain(|p| p.active);
    projectiles.retain(|p| p.active);
    before - pedestrians.len() - projectiles.len()
}
