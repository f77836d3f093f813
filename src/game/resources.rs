use std::time::Duration;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::wave::resources::{FIRST_WAVE_SIZE, SPAWN_INTERVAL, WAVE_GROWTH};

/// Last known player position, written every fixed tick so enemy AI can
/// read it without querying the player.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerPosition(pub Vec2);

/// Pause between the last enemy leaving and the upgrade menu opening
pub const POST_WAVE_DELAY: f32 = 1.0;

/// Level gating between waves.
#[derive(Resource, Debug, Clone)]
pub struct LevelProgress {
    /// Number of levels started this run (0 before the first wave)
    pub level: u32,
    /// Set after an upgrade is chosen; cleared when a level starts
    pub can_start_level: bool,
    /// A wave finished spawning and the game is waiting for it to be cleared
    pub wave_ended: bool,
    upgrade_delay: Option<Timer>,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            level: 0,
            can_start_level: true,
            wave_ended: false,
            upgrade_delay: None,
        }
    }
}

impl LevelProgress {
    /// Level number shown on the HUD before and after the first wave starts
    pub fn display_level(&self) -> u32 {
        self.level.max(1)
    }

    /// Advance to the next level if allowed. Returns the new level.
    pub fn try_start_level(&mut self, can_spawn_wave: bool) -> Option<u32> {
        if self.can_start_level && can_spawn_wave {
            self.level += 1;
            self.can_start_level = false;
            Some(self.level)
        } else {
            None
        }
    }

    pub fn on_wave_ended(&mut self) {
        self.wave_ended = true;
    }

    /// Advance the post-wave countdown. Returns true once, when the upgrade
    /// menu should open.
    pub fn tick_post_wave(&mut self, delta: Duration, can_spawn_wave: bool) -> bool {
        if self.wave_ended && can_spawn_wave && self.upgrade_delay.is_none() {
            self.wave_ended = false;
            self.can_start_level = false;
            self.upgrade_delay = Some(Timer::from_seconds(POST_WAVE_DELAY, TimerMode::Once));
        }

        let Some(timer) = self.upgrade_delay.as_mut() else {
            return false;
        };
        timer.tick(delta);
        if timer.is_finished() {
            self.upgrade_delay = None;
            return true;
        }
        false
    }

    pub fn is_waiting_for_upgrade(&self) -> bool {
        self.upgrade_delay.is_some()
    }

    /// An upgrade was applied or skipped; the next level may start
    pub fn finish_upgrade(&mut self) {
        self.can_start_level = true;
    }
}

/// Seeded random source for all gameplay randomness
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_seed(None)
    }
}

/// Run configuration taken from the command line
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub seed: Option<u64>,
    pub first_wave_size: usize,
    pub wave_growth: f32,
    pub spawn_interval: f32,
    pub mute: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            first_wave_size: FIRST_WAVE_SIZE,
            wave_growth: WAVE_GROWTH,
            spawn_interval: SPAWN_INTERVAL,
            mute: false,
        }
    }
}
