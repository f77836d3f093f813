use std::time::Duration;

use bevy::prelude::*;

/// The 2D camera following the player. `anchor` is the smoothed follow
/// position before shake is added.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MainCamera {
    pub anchor: Vec2,
}

/// Request a camera shake
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ShakeEvent {
    pub duration: f32,
    pub magnitude: f32,
}

impl ShakeEvent {
    pub fn new(duration: f32, magnitude: f32) -> Self {
        Self {
            duration,
            magnitude,
        }
    }
}

/// Current shake. A new shake replaces the running one only if it is
/// stronger or outlasts it.
#[derive(Resource, Debug, Clone)]
pub struct CameraShake {
    timer: Timer,
    magnitude: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(0.0, TimerMode::Once);
        timer.tick(Duration::ZERO);
        Self {
            timer,
            magnitude: 0.0,
        }
    }
}

impl CameraShake {
    pub fn start(&mut self, shake: ShakeEvent) {
        if self.is_active()
            && shake.magnitude < self.magnitude
            && shake.duration < self.timer.remaining_secs()
        {
            return;
        }
        self.timer = Timer::from_seconds(shake.duration.max(0.0), TimerMode::Once);
        self.magnitude = shake.magnitude;
    }

    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    pub fn is_active(&self) -> bool {
        !self.timer.is_finished()
    }

    /// Jitter at `elapsed` seconds, fading out as the shake ends
    pub fn offset(&self, elapsed: f32) -> Vec2 {
        if !self.is_active() {
            return Vec2::ZERO;
        }
        let strength = self.magnitude * (1.0 - self.timer.fraction());
        Vec2::new((elapsed * 83.0).sin(), (elapsed * 61.0).cos()) * strength
    }
}
