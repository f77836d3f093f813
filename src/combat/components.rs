use bevy::prelude::*;

/// Integer hit points, always kept within `0..=max`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Create a new Health component with full health
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// Apply damage, clamping at zero
    pub fn damage(&mut self, amount: i32) {
        self.current = (self.current - amount.max(0)).max(0);
    }

    /// Heal, clamping at max
    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount.max(0)).min(self.max);
    }

    pub fn max_heal(&mut self) {
        self.current = self.max;
    }

    /// Change the maximum. Current health is refilled when `refill` is set,
    /// otherwise clamped to the new maximum.
    pub fn set_max(&mut self, max: i32, refill: bool) {
        self.max = max.max(0);
        if refill {
            self.current = self.max;
        } else {
            self.current = self.current.min(self.max);
        }
    }

    /// Get health as a fraction (0.0 to 1.0)
    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Damage immunity window granted after the player is hit.
/// Removed by `tick_invulnerability_system` once the timer finishes.
#[derive(Component, Debug, Clone)]
pub struct Invulnerable {
    pub timer: Timer,
}

impl Invulnerable {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
        }
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
    }

    pub fn is_expired(&self) -> bool {
        self.timer.is_finished()
    }
}

/// How long an enemy sprite stays white after a successful hit
pub const HIT_FLASH_DURATION: f32 = 0.1;

/// Short white flash on an enemy that just took elemental damage
#[derive(Component, Debug, Clone)]
pub struct HitFlash {
    pub timer: Timer,
}

impl HitFlash {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

impl Default for HitFlash {
    fn default() -> Self {
        Self::new(HIT_FLASH_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    mod health_tests {
        use super::*;

        #[test]
        fn test_health_new_is_full() {
            let health = Health::new(5);
            assert_eq!(health.current(), 5);
            assert_eq!(health.max(), 5);
            assert!(!health.is_dead());
        }

        #[test]
        fn test_health_damage() {
            let mut health = Health::new(5);
            health.damage(2);
            assert_eq!(health.current(), 3);
        }

        #[test]
        fn test_health_damage_clamps_to_zero() {
            let mut health = Health::new(2);
            health.damage(10);
            assert_eq!(health.current(), 0);
            assert!(health.is_dead());
        }

        #[test]
        fn test_health_negative_damage_is_ignored() {
            let mut health = Health::new(3);
            health.damage(-4);
            assert_eq!(health.current(), 3);
        }

        #[test]
        fn test_health_heal_clamps_to_max() {
            let mut health = Health::new(4);
            health.damage(3);
            health.heal(10);
            assert_eq!(health.current(), 4);
        }

        #[test]
        fn test_health_max_heal() {
            let mut health = Health::new(4);
            health.damage(4);
            health.max_heal();
            assert_eq!(health.current(), 4);
        }

        #[test]
        fn test_health_set_max_with_refill() {
            let mut health = Health::new(0);
            assert!(health.is_dead());
            health.set_max(2, true);
            assert_eq!(health.current(), 2);
            assert_eq!(health.max(), 2);
        }

        #[test]
        fn test_health_set_max_without_refill_clamps_current() {
            let mut health = Health::new(6);
            health.set_max(3, false);
            assert_eq!(health.current(), 3);

            health.damage(1);
            health.set_max(10, false);
            assert_eq!(health.current(), 2);
            assert_eq!(health.max(), 10);
        }

        #[test]
        fn test_health_fraction() {
            let mut health = Health::new(4);
            assert_eq!(health.fraction(), 1.0);
            health.damage(1);
            assert_eq!(health.fraction(), 0.75);
            assert_eq!(Health::new(0).fraction(), 0.0);
        }
    }

    mod invulnerable_tests {
        use super::*;

        #[test]
        fn test_invulnerable_tick_and_expire() {
            let mut inv = Invulnerable::new(1.0);
            assert!(!inv.is_expired());

            inv.tick(Duration::from_secs_f32(0.5));
            assert!(!inv.is_expired());

            inv.tick(Duration::from_secs_f32(0.6));
            assert!(inv.is_expired());
        }
    }

    #[test]
    fn test_hit_flash_default_duration() {
        let flash = HitFlash::default();
        assert_eq!(flash.timer.duration().as_secs_f32(), HIT_FLASH_DURATION);
        assert!(!flash.is_finished());
    }
}
