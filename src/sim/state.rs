//! Game session and level lifecycle
//!
//! The session owns every entity and is the only writer of the entity
//! collections. Per-frame stepping lives in `tick`; this file holds the
//! state and the phase transitions.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::LevelConfig;
use super::geometry::Field;
use super::pedestrian::Pedestrian;
use super::player::Player;
use super::projectile::Projectile;
use super::spawner::Spawner;
use crate::clamp_level;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, waiting for a start request
    Idle,
    /// Active gameplay
    Running,
    /// Frozen by the player
    Paused,
    /// Level timer ran out; waiting out the grace delay
    LevelComplete,
    /// Player ran out of health
    GameOver,
    /// Final level cleared
    Victory,
}

/// Discrete things that happened during a frame, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player dropped a poop
    Fire,
    /// Poop landed on a pedestrian
    HitTarget,
    /// Rock or bottle struck the player
    TakeDamage,
    /// Cigarette pack collected
    CollectPickup,
    /// Level cleared
    LevelUp,
    /// Health ran out
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub field: Field,
    /// Current level (1..=20)
    pub level: u32,
    pub score: u32,
    /// Best score seen, injected at creation and raised at session end
    pub high_score: u32,
    /// Set when the last finished run beat the previous high score
    pub new_high_score: bool,
    /// Seconds left in the current level
    pub time_remaining: f32,
    pub phase: GamePhase,
    /// Seconds left in the level-complete grace delay
    pub transition_timer: f32,
    pub config: LevelConfig,
    pub player: Player,
    pub pedestrians: Vec<Pedestrian>,
    pub projectiles: Vec<Projectile>,
    pub spawner: Spawner,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Frames simulated while running
    pub frame_count: u64,
}

impl GameSession {
    /// Create an idle session
    pub fn new(field: Field, high_score: u32, seed: u64) -> Self {
        let spawn = Self::player_spawn(&field);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            level: FIRST_LEVEL,
            score: 0,
            high_score,
            new_high_score: false,
            time_remaining: LEVEL_DURATION,
            phase: GamePhase::Idle,
            transition_timer: 0.0,
            config: LevelConfig::for_level(FIRST_LEVEL),
            player: Player::new(spawn),
            pedestrians: Vec::new(),
            projectiles: Vec::new(),
            spawner: Spawner::default(),
            events: Vec::new(),
            frame_count: 0,
        }
    }

    fn player_spawn(field: &Field) -> Vec2 {
        Vec2::new(field.center_x(), field.height * PLAYER_SPAWN_HEIGHT)
    }

    /// Begin a level: reset the player, clear entities, seed the street
    pub fn start_level(&mut self, level: u32) {
        self.level = clamp_level(level);
        self.time_remaining = LEVEL_DURATION;
        self.transition_timer = 0.0;
        self.config = LevelConfig::for_level(self.level);

        let spawn = Self::player_spawn(&self.field);
        self.player.reset(spawn);

        self.pedestrians.clear();
        self.projectiles.clear();

        self.spawner.reset(&mut self.rng);
        for _ in 0..self.config.pedestrian_count {
            let pedestrian = self
                .spawner
                .spawn_pedestrian(&self.field, &self.config, &mut self.rng);
            self.pedestrians.push(pedestrian);
        }

        self.phase = GamePhase::Running;
        log::info!("Started level {}: {:?}", self.level, self.config);
    }

    /// Fresh run from the given level with the score zeroed
    pub fn new_game(&mut self, level: u32) {
        self.score = 0;
        self.new_high_score = false;
        self.start_level(level);
    }

    /// Leave the idle phase
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.start_level(self.level);
        }
    }

    /// Toggle pause; only meaningful while running or paused
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                log::info!("Game paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                log::info!("Game resumed");
            }
            phase => log::debug!("Pause ignored in {:?}", phase),
        }
    }

    /// Restart request: a finished run starts over at level 1, otherwise the
    /// current level is replayed keeping the score
    pub fn restart(&mut self) {
        match self.phase {
            GamePhase::GameOver | GamePhase::Victory => self.new_game(FIRST_LEVEL),
            GamePhase::LevelComplete => log::debug!("Restart ignored during level transition"),
            GamePhase::Idle | GamePhase::Running | GamePhase::Paused => {
                self.start_level(self.level)
            }
        }
    }

    /// Jump to a level as a fresh run
    pub fn select_level(&mut self, level: u32) {
        if self.phase == GamePhase::LevelComplete {
            log::debug!("Level select ignored during level transition");
            return;
        }
        self.new_game(level);
    }

    /// Timer ran out: award the bonus and start the grace delay
    pub fn complete_level(&mut self) {
        self.time_remaining = 0.0;
        self.score = self.score.saturating_add(LEVEL_COMPLETE_BONUS);
        self.phase = GamePhase::LevelComplete;
        self.transition_timer = LEVEL_COMPLETE_DELAY;
        self.events.push(GameEvent::LevelUp);
        log::info!("Level {} complete, score {}", self.level, self.score);
    }

    /// Grace delay over: next level, or victory after the last one
    pub fn advance_level(&mut self) {
        if self.level < MAX_LEVEL {
            self.start_level(self.level + 1);
        } else {
            self.phase = GamePhase::Victory;
            self.transition_timer = 0.0;
            self.record_high_score();
            log::info!("All {} levels cleared! Final score {}", MAX_LEVEL, self.score);
        }
    }

    /// Health ran out
    pub fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.record_high_score();
        self.events.push(GameEvent::GameOver);
        log::info!("Game over on level {} with score {}", self.level, self.score);
    }

    /// Raise the high score if beaten. Returns true on a new record.
    pub fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_high_score = true;
            log::info!("New high score: {}", self.high_score);
            true
        } else {
            false
        }
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether entities are being simulated
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Whether the run has ended and waits for a restart
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Victory)
    }
}
