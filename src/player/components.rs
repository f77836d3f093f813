use bevy::prelude::*;

use crate::movement::components::decay_speed;

pub const PLAYER_RADIUS: f32 = 12.0;
/// Distance of the aim arrow from the player's center
pub const INDICATOR_DISTANCE: f32 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Normal,
    /// Cast key held; the player stands still and aims
    Casting,
    /// Knocked back after taking damage
    HitStun,
}

/// Player tuning
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub speed: f32,
    pub max_health: i32,
    pub knockback_speed: f32,
    /// Hit-stun ends once knockback slows to this
    pub knockback_min_speed: f32,
    pub knockback_drop: f32,
    pub invulnerability_time: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            speed: 150.0,
            max_health: 5,
            knockback_speed: 400.0,
            knockback_min_speed: 30.0,
            knockback_drop: 8.0,
            invulnerability_time: 1.0,
        }
    }
}

/// Player state machine.
///
/// `last_move_direction` is the last nonzero movement input; casts fire
/// along it and knockback overwrites it with the push direction.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Player {
    pub state: PlayerState,
    pub last_move_direction: Vec2,
    pub knockback_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            state: PlayerState::Normal,
            last_move_direction: Vec2::X,
            knockback_speed: 0.0,
        }
    }
}

impl Player {
    /// Applies movement input for one step and returns the velocity.
    ///
    /// Input still turns a casting player but does not move them. Hit-stun
    /// ignores input and slides along the knockback until it fades.
    pub fn step(&mut self, input: Vec2, dt: f32, stats: &PlayerStats) -> Vec2 {
        match self.state {
            PlayerState::Normal | PlayerState::Casting => {
                let direction = input.normalize_or_zero();
                if direction != Vec2::ZERO {
                    self.last_move_direction = direction;
                }
                if self.state == PlayerState::Normal {
                    direction * stats.speed
                } else {
                    Vec2::ZERO
                }
            }
            PlayerState::HitStun => {
                self.knockback_speed =
                    decay_speed(self.knockback_speed, stats.knockback_drop, dt);
                if self.knockback_speed <= stats.knockback_min_speed {
                    self.knockback_speed = 0.0;
                    self.state = PlayerState::Normal;
                    Vec2::ZERO
                } else {
                    self.last_move_direction * self.knockback_speed
                }
            }
        }
    }

    /// Cast key pressed. Only a player in `Normal` starts aiming.
    pub fn begin_cast(&mut self) -> bool {
        if self.state == PlayerState::Normal {
            self.state = PlayerState::Casting;
            true
        } else {
            false
        }
    }

    /// Cast key released. Returns the cast direction if a cast was armed.
    pub fn release_cast(&mut self) -> Option<Vec2> {
        if self.state == PlayerState::Casting {
            self.state = PlayerState::Normal;
            Some(self.last_move_direction)
        } else {
            None
        }
    }

    /// Knocks the player away from `source` into hit-stun.
    ///
    /// A hit while casting returns the aim direction so the buffered combo
    /// still gets resolved.
    pub fn knock_back(&mut self, position: Vec2, source: Vec2, stats: &PlayerStats) -> Option<Vec2> {
        let interrupted = (self.state == PlayerState::Casting).then_some(self.last_move_direction);
        if let Some(direction) = (position - source).try_normalize() {
            self.last_move_direction = direction;
        }
        self.state = PlayerState::HitStun;
        self.knockback_speed = stats.knockback_speed;
        interrupted
    }
}

/// Aim arrow child of the player
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DirectionIndicator;
