//! Audio trigger dispatch
//!
//! The simulation raises `GameEvent`s; this module turns them into sound
//! effect requests for a host-provided sink. Synthesis happens on the host
//! side. Sink failures are logged and dropped, never fed back into the game.

use std::fmt;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Poop dropped
    PoopFire,
    /// Pedestrian hit
    HitTarget,
    /// Player hit by a rock or bottle
    TakeDamage,
    /// Cigarette pack collected
    CollectPickup,
    /// Level cleared
    LevelUp,
    /// Game over
    GameOver,
}

impl SoundEffect {
    /// Trigger name the host audio layer keys on
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::PoopFire => "fire",
            SoundEffect::HitTarget => "hitTarget",
            SoundEffect::TakeDamage => "takeDamage",
            SoundEffect::CollectPickup => "collectPickup",
            SoundEffect::LevelUp => "levelUp",
            SoundEffect::GameOver => "gameOver",
        }
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Fire => SoundEffect::PoopFire,
            GameEvent::HitTarget => SoundEffect::HitTarget,
            GameEvent::TakeDamage => SoundEffect::TakeDamage,
            GameEvent::CollectPickup => SoundEffect::CollectPickup,
            GameEvent::LevelUp => SoundEffect::LevelUp,
            GameEvent::GameOver => SoundEffect::GameOver,
        }
    }
}

/// A sink refused or failed to play an effect
#[derive(Debug, Clone, PartialEq)]
pub struct SinkError {
    pub effect: SoundEffect,
    pub reason: String,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to play {}: {}", self.effect.name(), self.reason)
    }
}

impl std::error::Error for SinkError {}

/// Host audio backend
pub trait AudioSink {
    /// Play an effect at the given volume (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), SinkError>;
}

/// Discards everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Writes each trigger to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), SinkError> {
        log::debug!("sfx {} @ {:.2}", effect.name(), volume);
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    failures: u32,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            failures: 0,
        }
    }

    /// Manager with volumes taken from settings
    pub fn from_settings(sink: S, settings: &Settings) -> Self {
        let mut manager = Self::new(sink);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect; silent volume skips the sink entirely
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        if let Err(err) = self.sink.play(effect, vol) {
            self.failures += 1;
            log::warn!("{err}");
        }
    }

    /// Play one effect per event, in order
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for &event in events {
            self.play(event.into());
        }
    }

    /// Number of sink failures swallowed so far
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
