use bevy::prelude::*;

use crate::arena::components::{overlaps_terrain, TerrainBlock};
use crate::audio::{Sound, SoundEvent};
use crate::camera::ShakeEvent;
use crate::combat::events::SpellHitEvent;
use crate::combat::resources::ActiveEnemies;
use crate::effects::{spawn_blast_visual, spawn_particle_burst};
use crate::element::Element;
use crate::enemies::components::Enemy;
use crate::movement::components::decay_speed;
use crate::spells::{SpellEffect, SpellEffectKind, SPELL_Z};

pub const BOMB_SPEED: f32 = 300.0;
/// Below this the bomb stops rolling
pub const BOMB_MIN_SPEED: f32 = 20.0;
pub const BOMB_SPEED_DROP: f32 = 3.0;
pub const BOMB_DETONATION_TIME: f32 = 1.2;
pub const BOMB_DAMAGE_RANGE: f32 = 80.0;
pub const BOMB_RADIUS: f32 = 10.0;
pub const BOMB_SHAKE_DURATION: f32 = 0.25;
pub const BOMB_SHAKE_MAGNITUDE: f32 = 6.0;

/// Level 2 spell: rolls out, slows down and explodes after a fixed delay
#[derive(Component, Debug, Clone)]
pub struct Bomb {
    pub direction: Vec2,
    pub speed: f32,
    pub damage: i32,
    pub element: Element,
    pub detonation: Timer,
    /// Set once the bomb touched terrain; it never moves again
    pub halted: bool,
}

impl Bomb {
    /// Decays the speed and returns this tick's displacement
    pub fn roll(&mut self, dt: f32) -> Vec2 {
        if self.halted {
            return Vec2::ZERO;
        }
        self.speed = decay_speed(self.speed, BOMB_SPEED_DROP, dt);
        if self.speed < BOMB_MIN_SPEED {
            self.speed = 0.0;
        }
        self.direction * self.speed * dt
    }

    pub fn halt(&mut self) {
        self.halted = true;
        self.speed = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.detonation.is_finished()
    }

    /// True if `point` is caught by a blast centered at `center`
    pub fn in_blast(center: Vec2, point: Vec2) -> bool {
        center.distance(point) <= BOMB_DAMAGE_RANGE
    }
}

impl SpellEffect for Bomb {
    const KIND: SpellEffectKind = SpellEffectKind::Bomb;

    fn init(_origin: Vec2, direction: Vec2, damage: i32, element: Element) -> Self {
        Self {
            direction,
            speed: BOMB_SPEED,
            damage,
            element,
            detonation: Timer::from_seconds(BOMB_DETONATION_TIME, TimerMode::Once),
            halted: false,
        }
    }

    fn transform(&self, origin: Vec2) -> Transform {
        Transform::from_translation(origin.extend(SPELL_Z))
    }

    fn sprite(&self) -> Sprite {
        Sprite::from_color(self.element.color(), Vec2::splat(BOMB_RADIUS * 2.0))
    }
}

/// Rolls bombs and detonates those whose fuse ran out.
///
/// A detonation damages every active enemy within `BOMB_DAMAGE_RANGE`,
/// leaves a blast twice the damage range wide and shakes the camera.
#[allow(clippy::too_many_arguments)]
pub fn bomb_system(
    mut commands: Commands,
    time: Res<Time>,
    mut bombs: Query<(Entity, &mut Transform, &mut Bomb), (Without<Enemy>, Without<TerrainBlock>)>,
    enemies: Query<(Entity, &Transform), (With<Enemy>, Without<Bomb>)>,
    terrain: Query<(&Transform, &TerrainBlock), (Without<Bomb>, Without<Enemy>)>,
    active: Res<ActiveEnemies>,
    mut hits: MessageWriter<SpellHitEvent>,
    mut shakes: MessageWriter<ShakeEvent>,
    mut sounds: MessageWriter<SoundEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut bomb) in bombs.iter_mut() {
        let position = transform.translation.truncate();

        if bomb.is_armed() {
            for (enemy, enemy_transform) in enemies.iter() {
                if active.contains(enemy)
                    && Bomb::in_blast(position, enemy_transform.translation.truncate())
                {
                    hits.write(SpellHitEvent::new(enemy, bomb.damage, bomb.element));
                }
            }
            sounds.write(SoundEvent(Sound::BombExplosion));
            shakes.write(ShakeEvent::new(BOMB_SHAKE_DURATION, BOMB_SHAKE_MAGNITUDE));
            spawn_blast_visual(
                &mut commands,
                position,
                bomb.element.color(),
                BOMB_DAMAGE_RANGE * 2.0,
            );
            spawn_particle_burst(&mut commands, position, bomb.element.color());
            commands.entity(entity).try_despawn();
            continue;
        }

        let step = bomb.roll(dt);
        if step != Vec2::ZERO {
            let next = position + step;
            if overlaps_terrain(terrain.iter(), next, BOMB_RADIUS) {
                bomb.halt();
            } else {
                transform.translation.x = next.x;
                transform.translation.y = next.y;
            }
        }
        bomb.detonation.tick(time.delta());
    }
}
