//! Difficulty curve
//!
//! Maps a level number to the tuned parameters used by the spawner and the
//! pedestrian AI. Everything is a linear ramp over `t = (level - 1) / 19`.

use serde::{Deserialize, Serialize};

use crate::clamp_level;
use crate::consts::MAX_LEVEL;

/// Per-level tuning, computed once at level start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Level this config was derived from (already clamped)
    pub level: u32,
    /// Pedestrian population the spawner maintains
    pub pedestrian_count: usize,
    /// Multiplier applied to base pedestrian walking speed
    pub speed_multiplier: f32,
    /// How fast throw cooldowns run down (1.0 = real time)
    pub throw_rate: f32,
    /// Probability a throw is a bottle instead of a rock
    pub bottle_ratio: f32,
    /// Probability per pickup check that a cigarette pack appears
    pub pickup_chance: f32,
}

impl LevelConfig {
    /// Derive the config for a level; out-of-range levels are clamped
    pub fn for_level(level: u32) -> Self {
        let level = clamp_level(level);
        let steps = level - 1;
        let span = MAX_LEVEL - 1;
        let t = steps as f32 / span as f32;

        Self {
            level,
            // Integer floor of t * 8, computed exactly
            pedestrian_count: 2 + (steps * 8 / span) as usize,
            speed_multiplier: 1.5 + t * 28.5,
            throw_rate: 0.3 + t * 0.7,
            bottle_ratio: t * 0.7,
            pickup_chance: (0.02 - t * 0.01).max(0.005),
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::for_level(1)
    }
}
