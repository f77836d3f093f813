use bevy::prelude::*;

use crate::movement::components::decay_speed;

pub const ENEMY_RADIUS: f32 = 12.0;
pub const ENEMY_HEALTH: i32 = 2;

/// Marker for enemy entities
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Enemy;

/// Tuning shared by every enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    /// Speed at the start of a hop
    pub hop_speed: f32,
    /// A hop ends once speed falls to this
    pub min_speed: f32,
    pub speed_drop: f32,
    /// Pause between hops
    pub wait_time: f32,
    /// Distance to the player that triggers the attack charge
    pub detection_range: f32,
    pub damage_range: f32,
    pub charge_time: f32,
    pub damage: i32,
    /// How long the exploded enemy lingers for its blast
    pub blast_time: f32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            hop_speed: 300.0,
            min_speed: 20.0,
            speed_drop: 4.0,
            wait_time: 0.6,
            detection_range: 60.0,
            damage_range: 70.0,
            charge_time: 1.0,
            damage: 1,
            blast_time: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    /// Sliding through a hop
    Moving,
    /// Between hops, tracking the player
    Waiting,
    /// Charging up to explode
    Attacking,
    /// Blew up; only the blast is left
    Exploding,
}

/// What happened during a brain tick that the world should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyCue {
    None,
    /// A hop ended
    Landed,
    /// A new hop started
    Hopped,
    /// The player came in range and the charge started
    StartedCharge,
    /// The charge completed and the enemy exploded
    Detonated,
    /// The blast finished; the entity can go
    Finished,
}

/// Hop, wait, charge, explode state machine. One `tick` per simulation step.
#[derive(Component, Debug, Clone)]
pub struct EnemyBrain {
    pub state: EnemyState,
    pub stats: EnemyStats,
    pub direction: Vec2,
    pub speed: f32,
    wait: f32,
    charge: f32,
    blast: f32,
}

impl EnemyBrain {
    /// Starts at rest facing `target`, so the first tick lands and waits
    pub fn new(position: Vec2, target: Vec2, stats: EnemyStats) -> Self {
        Self {
            state: EnemyState::Moving,
            stats,
            direction: (target - position).try_normalize().unwrap_or(Vec2::X),
            speed: 0.0,
            wait: 0.0,
            charge: 0.0,
            blast: 0.0,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        match self.state {
            EnemyState::Moving => self.direction * self.speed,
            _ => Vec2::ZERO,
        }
    }

    pub fn in_damage_range(&self, position: Vec2, target: Vec2) -> bool {
        position.distance(target) <= self.stats.damage_range
    }

    pub fn tick(&mut self, dt: f32, position: Vec2, target: Vec2) -> EnemyCue {
        match self.state {
            EnemyState::Moving => {
                self.speed = decay_speed(self.speed, self.stats.speed_drop, dt);
                if self.speed <= self.stats.min_speed {
                    self.speed = 0.0;
                    self.state = EnemyState::Waiting;
                    self.wait = self.stats.wait_time;
                    EnemyCue::Landed
                } else {
                    EnemyCue::None
                }
            }
            EnemyState::Waiting => {
                if let Some(direction) = (target - position).try_normalize() {
                    self.direction = direction;
                }
                if position.distance(target) <= self.stats.detection_range {
                    self.state = EnemyState::Attacking;
                    self.charge = self.stats.charge_time;
                    EnemyCue::StartedCharge
                } else if self.wait <= 0.0 {
                    self.state = EnemyState::Moving;
                    self.speed = self.stats.hop_speed;
                    EnemyCue::Hopped
                } else {
                    self.wait -= dt;
                    EnemyCue::None
                }
            }
            EnemyState::Attacking => {
                if self.charge <= 0.0 {
                    self.state = EnemyState::Exploding;
                    self.blast = self.stats.blast_time;
                    EnemyCue::Detonated
                } else {
                    self.charge -= dt;
                    EnemyCue::None
                }
            }
            EnemyState::Exploding => {
                if self.blast <= 0.0 {
                    EnemyCue::Finished
                } else {
                    self.blast -= dt;
                    EnemyCue::None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 64.0;

    fn far() -> Vec2 {
        Vec2::new(500.0, 0.0)
    }

    /// Ticks until `cue` shows up, returning how many ticks it took
    fn tick_until(brain: &mut EnemyBrain, position: Vec2, target: Vec2, cue: EnemyCue) -> usize {
        for i in 1..=10_000 {
            if brain.tick(DT, position, target) == cue {
                return i;
            }
        }
        panic!("never saw {cue:?}, stuck in {:?}", brain.state);
    }

    #[test]
    fn new_brain_faces_target_at_rest() {
        let brain = EnemyBrain::new(Vec2::ZERO, Vec2::new(0.0, 10.0), EnemyStats::default());
        assert_eq!(brain.state, EnemyState::Moving);
        assert_eq!(brain.direction, Vec2::Y);
        assert_eq!(brain.velocity(), Vec2::ZERO);
    }

    #[test]
    fn first_tick_lands() {
        let mut brain = EnemyBrain::new(Vec2::ZERO, far(), EnemyStats::default());
        assert_eq!(brain.tick(DT, Vec2::ZERO, far()), EnemyCue::Landed);
        assert_eq!(brain.state, EnemyState::Waiting);
    }

    #[test]
    fn waits_then_hops_at_full_speed() {
        let stats = EnemyStats::default();
        let mut brain = EnemyBrain::new(Vec2::ZERO, far(), stats);
        brain.tick(DT, Vec2::ZERO, far());

        let ticks = tick_until(&mut brain, Vec2::ZERO, far(), EnemyCue::Hopped);

        assert!(ticks as f32 * DT >= stats.wait_time);
        assert_eq!(brain.state, EnemyState::Moving);
        assert_eq!(brain.velocity(), Vec2::X * stats.hop_speed);
    }

    #[test]
    fn hop_speed_decays_until_landing() {
        let mut brain = EnemyBrain::new(Vec2::ZERO, far(), EnemyStats::default());
        brain.tick(DT, Vec2::ZERO, far());
        tick_until(&mut brain, Vec2::ZERO, far(), EnemyCue::Hopped);

        brain.tick(DT, Vec2::ZERO, far());
        let after_one = brain.speed;
        assert!(after_one < brain.stats.hop_speed);

        tick_until(&mut brain, Vec2::ZERO, far(), EnemyCue::Landed);
        assert_eq!(brain.speed, 0.0);
    }

    #[test]
    fn waiting_tracks_moving_target() {
        let mut brain = EnemyBrain::new(Vec2::ZERO, far(), EnemyStats::default());
        brain.tick(DT, Vec2::ZERO, far());
        brain.tick(DT, Vec2::ZERO, Vec2::new(0.0, -500.0));
        assert_eq!(brain.direction, Vec2::NEG_Y);
    }

    #[test]
    fn detection_beats_wait_expiry() {
        let mut brain = EnemyBrain::new(Vec2::ZERO, far(), EnemyStats::default());
        brain.tick(DT, Vec2::ZERO, far());
        // Run the wait timer out without hopping
        brain.wait = 0.0;

        let near = Vec2::new(30.0, 0.0);
        assert_eq!(brain.tick(DT, Vec2::ZERO, near), EnemyCue::StartedCharge);
        assert_eq!(brain.state, EnemyState::Attacking);
    }

    #[test]
    fn charge_then_detonate_then_finish() {
        let stats = EnemyStats::default();
        let near = Vec2::new(30.0, 0.0);
        let mut brain = EnemyBrain::new(Vec2::ZERO, near, stats);
        brain.tick(DT, Vec2::ZERO, near);
        assert_eq!(brain.tick(DT, Vec2::ZERO, near), EnemyCue::StartedCharge);

        let ticks = tick_until(&mut brain, Vec2::ZERO, near, EnemyCue::Detonated);
        assert!(ticks as f32 * DT >= stats.charge_time);
        assert_eq!(brain.state, EnemyState::Exploding);
        assert_eq!(brain.velocity(), Vec2::ZERO);

        tick_until(&mut brain, Vec2::ZERO, near, EnemyCue::Finished);
    }

    #[test]
    fn damage_range_is_inclusive() {
        let brain = EnemyBrain::new(Vec2::ZERO, far(), EnemyStats::default());
        assert!(brain.in_damage_range(Vec2::ZERO, Vec2::new(70.0, 0.0)));
        assert!(!brain.in_damage_range(Vec2::ZERO, Vec2::new(70.5, 0.0)));
    }
}
