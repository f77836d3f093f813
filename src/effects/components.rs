use bevy::prelude::*;

/// Seconds an explosion takes to grow to full size and fade out
pub const BLAST_DURATION: f32 = 0.3;
/// Diameter a blast starts at
pub const BLAST_START_SIZE: f32 = 8.0;

/// Expanding, fading disc left behind by a detonation
#[derive(Component, Debug, Clone)]
pub struct BlastVisual {
    pub timer: Timer,
    /// Diameter reached when the timer finishes
    pub max_size: f32,
    pub base_color: Color,
}

impl BlastVisual {
    pub fn new(max_size: f32, base_color: Color) -> Self {
        Self {
            timer: Timer::from_seconds(BLAST_DURATION, TimerMode::Once),
            max_size,
            base_color,
        }
    }

    /// Current diameter, growing linearly with the timer
    pub fn size(&self) -> f32 {
        BLAST_START_SIZE + (self.max_size - BLAST_START_SIZE) * self.timer.fraction()
    }

    /// Base color faded towards fully transparent
    pub fn color(&self) -> Color {
        let alpha = self.base_color.alpha() * (1.0 - self.timer.fraction());
        self.base_color.with_alpha(alpha)
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

/// One short-lived particle flying away from a burst origin
#[derive(Component, Debug, Clone)]
pub struct ParticleBurst {
    pub velocity: Vec2,
    pub timer: Timer,
    pub base_color: Color,
}

impl ParticleBurst {
    pub fn new(velocity: Vec2, lifetime: f32, base_color: Color) -> Self {
        Self {
            velocity,
            timer: Timer::from_seconds(lifetime, TimerMode::Once),
            base_color,
        }
    }

    pub fn color(&self) -> Color {
        let alpha = self.base_color.alpha() * (1.0 - self.timer.fraction());
        self.base_color.with_alpha(alpha)
    }
}
