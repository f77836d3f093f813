use bevy::prelude::*;

use crate::audio::{Sound, SoundEvent};
use crate::combat::components::Health;
use crate::combat::events::{EnemyDeathEvent, PlayerHitEvent};
use crate::combat::resources::ActiveEnemies;
use crate::effects::{spawn_blast_visual, spawn_dust};
use crate::element::Element;
use crate::enemies::components::{
    Enemy, EnemyBrain, EnemyCue, EnemyState, EnemyStats, ENEMY_HEALTH, ENEMY_RADIUS,
};
use crate::game::components::GameplayEntity;
use crate::game::resources::PlayerPosition;
use crate::movement::components::{BodyRadius, FacesVelocity, Velocity};

/// Z layer for enemies
pub const ENEMY_Z: f32 = 1.0;

/// Spawns an enemy of `element` at `position`, initially facing `target`.
/// The caller registers it in `ActiveEnemies`.
pub fn spawn_enemy(
    commands: &mut Commands,
    position: Vec2,
    element: Element,
    target: Vec2,
) -> Entity {
    commands
        .spawn((
            Enemy,
            element,
            Health::new(ENEMY_HEALTH),
            EnemyBrain::new(position, target, EnemyStats::default()),
            Velocity::default(),
            BodyRadius(ENEMY_RADIUS),
            FacesVelocity,
            Sprite::from_color(element.color(), Vec2::splat(ENEMY_RADIUS * 2.0)),
            Transform::from_translation(position.extend(ENEMY_Z)),
            GameplayEntity,
        ))
        .id()
}

/// Runs every enemy brain for one fixed step and applies the resulting cues.
///
/// A detonation damages the player when in range, takes the enemy out of
/// the active set with `killed: false` and hides it behind its blast until
/// the brain reports it finished.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn enemy_ai_system(
    mut commands: Commands,
    time: Res<Time>,
    player_position: Res<PlayerPosition>,
    mut active: ResMut<ActiveEnemies>,
    mut enemies: Query<
        (
            Entity,
            &Transform,
            &mut EnemyBrain,
            &mut Velocity,
            &Element,
            &mut Visibility,
        ),
        With<Enemy>,
    >,
    mut player_hits: MessageWriter<PlayerHitEvent>,
    mut deaths: MessageWriter<EnemyDeathEvent>,
    mut sounds: MessageWriter<SoundEvent>,
) {
    let dt = time.delta_secs();
    let target = player_position.0;

    for (entity, transform, mut brain, mut velocity, element, mut visibility) in enemies.iter_mut() {
        let position = transform.translation.truncate();

        match brain.tick(dt, position, target) {
            EnemyCue::None | EnemyCue::StartedCharge => {}
            EnemyCue::Landed => spawn_dust(&mut commands, position),
            EnemyCue::Hopped => {
                sounds.write(SoundEvent(Sound::EnemyJump));
            }
            EnemyCue::Detonated => {
                if brain.in_damage_range(position, target) {
                    player_hits.write(PlayerHitEvent {
                        damage: brain.stats.damage,
                        source: position,
                    });
                }
                active.remove(entity);
                deaths.write(EnemyDeathEvent {
                    entity,
                    element: *element,
                    position,
                    killed: false,
                });
                *visibility = Visibility::Hidden;
                spawn_blast_visual(
                    &mut commands,
                    position,
                    element.color(),
                    brain.stats.damage_range * 2.0,
                );
                sounds.write(SoundEvent(Sound::EnemyExplosion));
            }
            EnemyCue::Finished => {
                commands.entity(entity).try_despawn();
            }
        }

        velocity.0 = brain.velocity();
    }
}

/// Charging enemies throb before they explode
pub fn enemy_charge_pulse_system(
    time: Res<Time>,
    mut enemies: Query<(&EnemyBrain, &mut Transform), With<Enemy>>,
) {
    let pulse = 1.0 + 0.2 * (time.elapsed_secs() * 24.0).sin().abs();
    for (brain, mut transform) in enemies.iter_mut() {
        let scale = if brain.state == EnemyState::Attacking {
            pulse
        } else {
            1.0
        };
        transform.scale = Vec3::new(scale, scale, 1.0);
    }
}
