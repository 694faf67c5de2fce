//! Read-only per-frame view for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::state::{GamePhase, GameSession};
use crate::consts::*;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    /// False on the "off" beats of the invulnerability blink
    pub visible: bool,
    pub invulnerable: bool,
    pub wing_phase: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PedestrianView {
    pub pos: Vec2,
    pub facing: f32,
    pub throwing: bool,
    pub walk_phase: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileView {
    pub kind: &'static str,
    pub pos: Vec2,
    pub rotation: f32,
    pub alpha: f32,
    pub bob_offset: f32,
}

/// HUD values
#[derive(Debug, Clone, Serialize)]
pub struct HudView {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    /// Whole seconds, rounded up
    pub time_remaining: u32,
    pub health: u32,
    pub max_health: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub recharge_progress: f32,
}

/// Everything drawn for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub hud: HudView,
    /// Seconds until the next level starts (level-complete screen)
    pub transition_remaining: f32,
    pub new_high_score: bool,
    pub player: PlayerView,
    pub pedestrians: Vec<PedestrianView>,
    pub projectiles: Vec<ProjectileView>,
}

impl GameSession {
    /// Capture the active entities and HUD state
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            hud: HudView {
                score: self.score,
                high_score: self.high_score,
                level: self.level,
                time_remaining: self.time_remaining.max(0.0).ceil() as u32,
                health: self.player.health,
                max_health: MAX_HEALTH,
                ammo: self.player.ammo,
                max_ammo: MAX_AMMO,
                recharge_progress: self.player.recharge_progress(),
            },
            transition_remaining: if self.phase == GamePhase::LevelComplete {
                self.transition_timer.max(0.0)
            } else {
                0.0
            },
            new_high_score: self.new_high_score,
            player: PlayerView {
                pos: self.player.pos,
                visible: self.player.is_visible(),
                invulnerable: self.player.is_invulnerable(),
                wing_phase: self.player.wing_timer / WING_CYCLE,
            },
            pedestrians: self
                .pedestrians
                .iter()
                .filter(|p| p.active)
                .map(|p| PedestrianView {
                    pos: p.pos,
                    facing: p.facing,
                    throwing: p.is_throwing(),
                    walk_phase: p.walk_timer,
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .filter(|p| p.active)
                .map(|p| ProjectileView {
                    kind: p.kind.name(),
                    pos: p.pos,
                    rotation: p.rotation(),
                    alpha: p.alpha(),
                    bob_offset: p.bob_offset(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Field;
    use crate::sim::projectile::Projectile;

    #[test]
    fn test_snapshot_skips_inactive() {
        let mut session = GameSession::new(Field::default(), 0, 3);
        session.start();
        session.pedestrians[0].destroy();
        let mut dead = Projectile::poop(Vec2::new(1.0, 1.0));
        dead.destroy();
        session.projectiles.push(dead);
        session.projectiles.push(Projectile::cigarette_pack(Vec2::new(5.0, 5.0)));

        let snap = session.snapshot();
        assert_eq!(snap.pedestrians.len(), 1);
        assert_eq!(snap.projectiles.len(), 1);
        assert_eq!(snap.projectiles[0].kind, "cigarette");
    }

    #[test]
    fn test_hud_rounds_time_up() {
        let mut session = GameSession::new(Field::default(), 250, 3);
        session.start();
        session.time_remaining = 41.2;
        let snap = session.snapshot();
        assert_eq!(snap.hud.time_remaining, 42);
        assert_eq!(snap.hud.high_score, 250);
        assert_eq!(snap.hud.health, MAX_HEALTH);
        assert_eq!(snap.phase, GamePhase::Running);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = GameSession::new(Field::default(), 0, 3);
        session.start();
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
    }
}
