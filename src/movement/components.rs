use bevy::prelude::*;

/// Current movement vector of a body, in world units per second.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(velocity: Vec2) -> Self {
        Self(velocity)
    }

    pub fn from_direction_and_speed(direction: Vec2, speed: f32) -> Self {
        Self(direction.normalize_or_zero() * speed)
    }

    pub fn value(&self) -> Vec2 {
        self.0
    }

    pub fn magnitude(&self) -> f32 {
        self.0.length()
    }

    pub fn direction(&self) -> Vec2 {
        self.0.normalize_or_zero()
    }
}

/// Collision radius of a moving body. Bodies are integrated by
/// `apply_velocity_system`, which keeps them out of terrain and inside the arena.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BodyRadius(pub f32);

impl Default for BodyRadius {
    fn default() -> Self {
        Self(12.0)
    }
}

/// Flip the sprite horizontally to face the direction of travel
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct FacesVelocity;

/// Exponential decay step: `speed -= speed * rate * dt`, never below zero.
#[inline]
pub fn decay_speed(speed: f32, rate: f32, dt: f32) -> f32 {
    (speed - speed * rate * dt).max(0.0)
}
