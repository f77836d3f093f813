use bevy::prelude::*;
use thiserror::Error;

use crate::game::resources::GameSettings;

/// Enemies in the first wave
pub const FIRST_WAVE_SIZE: usize = 5;
/// Quota multiplier applied after every wave (rounded down)
pub const WAVE_GROWTH: f32 = 1.5;
/// Seconds between two spawns of the same wave
pub const SPAWN_INTERVAL: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavePhase {
    #[default]
    Waiting,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaveError {
    #[error("wave still in progress")]
    InProgress,
    #[error("{0} enemies from the last wave are still alive")]
    EnemiesRemaining(usize),
}

/// What one spawner tick asks the world to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveTick {
    Idle,
    /// Spawn one enemy now
    Spawn,
    /// The wave is over; the quota already grew to `next_quota`
    Ended { wave: u32, next_quota: usize },
}

/// Sequential wave spawner.
///
/// A started wave spawns one enemy immediately and one more every
/// `interval` seconds until the quota is met, then waits one more interval
/// before ending and growing the quota.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WaveSpawner {
    quota: usize,
    spawned: usize,
    phase: WavePhase,
    growth: f32,
    interval: f32,
    countdown: f32,
    waves_completed: u32,
}

impl WaveSpawner {
    pub fn new(first_wave_size: usize, growth: f32, interval: f32) -> Self {
        Self {
            quota: first_wave_size,
            spawned: 0,
            phase: WavePhase::Waiting,
            growth,
            interval,
            countdown: 0.0,
            waves_completed: 0,
        }
    }

    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(
            settings.first_wave_size,
            settings.wave_growth,
            settings.spawn_interval,
        )
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn quota(&self) -> usize {
        self.quota
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }

    pub fn waves_completed(&self) -> u32 {
        self.waves_completed
    }

    /// A new wave may start only when idle and every enemy is gone
    pub fn can_spawn_wave(&self, active_enemies: usize) -> bool {
        self.phase == WavePhase::Waiting && active_enemies == 0
    }

    pub fn start_wave(&mut self, active_enemies: usize) -> Result<(), WaveError> {
        if self.phase == WavePhase::InProgress {
            return Err(WaveError::InProgress);
        }
        if active_enemies > 0 {
            return Err(WaveError::EnemiesRemaining(active_enemies));
        }
        self.phase = WavePhase::InProgress;
        self.spawned = 0;
        self.countdown = 0.0;
        Ok(())
    }

    pub fn tick(&mut self, dt: f32) -> WaveTick {
        if self.phase != WavePhase::InProgress {
            return WaveTick::Idle;
        }

        self.countdown -= dt;
        if self.countdown > 0.0 {
            return WaveTick::Idle;
        }

        if self.spawned < self.quota {
            self.spawned += 1;
            self.countdown = self.interval;
            return WaveTick::Spawn;
        }

        self.phase = WavePhase::Waiting;
        self.spawned = 0;
        self.quota = (self.quota as f32 * self.growth).floor() as usize;
        self.waves_completed += 1;
        WaveTick::Ended {
            wave: self.waves_completed,
            next_quota: self.quota,
        }
    }
}

impl Default for WaveSpawner {
    fn default() -> Self {
        Self::new(FIRST_WAVE_SIZE, WAVE_GROWTH, SPAWN_INTERVAL)
    }
}
