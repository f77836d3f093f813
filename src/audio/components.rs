use std::collections::HashMap;

use bevy::prelude::*;

/// Audio channel for one-shot sound effects
#[derive(Resource, Default)]
pub struct SfxChannel;

/// Every sound effect the game can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    BombExplosion,
    EnemyExplosion,
    EnemyHit,
    EnemyJump,
    FailedSpell,
    GameOver,
    PlayerHit,
    ShootProjectile,
    UpgradeSpell,
}

impl Sound {
    pub fn all() -> &'static [Sound] {
        &[
            Sound::BombExplosion,
            Sound::EnemyExplosion,
            Sound::EnemyHit,
            Sound::EnemyJump,
            Sound::FailedSpell,
            Sound::GameOver,
            Sound::PlayerHit,
            Sound::ShootProjectile,
            Sound::UpgradeSpell,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Sound::BombExplosion => "sounds/bomb_explosion.ogg",
            Sound::EnemyExplosion => "sounds/enemy_explosion.ogg",
            Sound::EnemyHit => "sounds/enemy_hit.ogg",
            Sound::EnemyJump => "sounds/enemy_jump.ogg",
            Sound::FailedSpell => "sounds/failed_spell.ogg",
            Sound::GameOver => "sounds/game_over.ogg",
            Sound::PlayerHit => "sounds/player_hit.ogg",
            Sound::ShootProjectile => "sounds/shoot_projectile.ogg",
            Sound::UpgradeSpell => "sounds/upgrade_spell.ogg",
        }
    }

    /// Playback gain in decibels relative to the channel
    pub fn volume_db(&self) -> f32 {
        match self {
            Sound::EnemyJump => -8.0,
            Sound::EnemyHit | Sound::FailedSpell => -3.0,
            _ => 0.0,
        }
    }
}

/// Fire-and-forget request to play a sound effect
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundEvent(pub Sound);

/// Minimum time between two plays of the same sound
pub const SOUND_REPEAT_INTERVAL: f32 = 0.05;

/// Throttles repeats of the same sound, e.g. an area spell hitting a crowd.
#[derive(Resource, Debug, Default)]
pub struct SoundLimiter {
    last_played: HashMap<Sound, f32>,
}

impl SoundLimiter {
    /// Returns true and records the play if `sound` may play at `now` seconds
    pub fn try_play(&mut self, sound: Sound, now: f32) -> bool {
        match self.last_played.get(&sound) {
            Some(last) if now - *last < SOUND_REPEAT_INTERVAL => false,
            _ => {
                self.last_played.insert(sound, now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_sound_has_a_distinct_path() {
        let paths: HashSet<_> = Sound::all().iter().map(|s| s.path()).collect();
        assert_eq!(paths.len(), Sound::all().len());
        assert!(paths.iter().all(|p| p.starts_with("sounds/")));
    }

    #[test]
    fn volumes_never_boost() {
        for sound in Sound::all() {
            assert!(sound.volume_db() <= 0.0);
        }
        assert!(Sound::EnemyJump.volume_db() < Sound::BombExplosion.volume_db());
    }

    mod sound_limiter_tests {
        use super::*;

        #[test]
        fn first_play_is_allowed() {
            let mut limiter = SoundLimiter::default();
            assert!(limiter.try_play(Sound::EnemyHit, 0.0));
        }

        #[test]
        fn immediate_repeat_is_blocked() {
            let mut limiter = SoundLimiter::default();
            assert!(limiter.try_play(Sound::EnemyHit, 1.0));
            assert!(!limiter.try_play(Sound::EnemyHit, 1.01));
            assert!(limiter.try_play(Sound::EnemyHit, 1.1));
        }

        #[test]
        fn different_sounds_do_not_block_each_other() {
            let mut limiter = SoundLimiter::default();
            assert!(limiter.try_play(Sound::EnemyHit, 1.0));
            assert!(limiter.try_play(Sound::EnemyExplosion, 1.0));
        }
    }
}
