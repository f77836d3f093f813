use bevy::prelude::*;

use super::components::{Health, HitFlash, Invulnerable};
use super::events::{EnemyDeathEvent, HitOutcome, SpellHitEvent};
use super::resources::ActiveEnemies;
use crate::audio::{Sound, SoundEvent};
use crate::element::Element;
use crate::enemies::components::Enemy;

/// Applies an elemental hit to an enemy's health.
///
/// Health only changes when `incoming` is the enemy's vulnerability; any
/// other element is a no-op.
pub fn resolve_hit(
    health: &mut Health,
    enemy_element: Element,
    damage: i32,
    incoming: Element,
) -> HitOutcome {
    if !enemy_element.is_vulnerable_to(incoming) {
        return HitOutcome::Resisted;
    }
    health.damage(damage);
    if health.is_dead() {
        HitOutcome::Killed
    } else {
        HitOutcome::Damaged
    }
}

/// Resolves spell hits against enemies still in the active set.
///
/// Kills despawn the enemy, remove it from the active set and report
/// `EnemyDeathEvent { killed: true }`.
pub fn resolve_spell_hits_system(
    mut commands: Commands,
    mut hits: MessageReader<SpellHitEvent>,
    mut enemies: Query<(&mut Health, &Element, &Transform), With<Enemy>>,
    mut active: ResMut<ActiveEnemies>,
    mut deaths: MessageWriter<EnemyDeathEvent>,
    mut sounds: MessageWriter<SoundEvent>,
) {
    for hit in hits.read() {
        if !active.contains(hit.target) {
            continue;
        }
        let Ok((mut health, element, transform)) = enemies.get_mut(hit.target) else {
            continue;
        };

        match resolve_hit(&mut health, *element, hit.damage, hit.element) {
            HitOutcome::Resisted => {}
            HitOutcome::Damaged => {
                sounds.write(SoundEvent(Sound::EnemyHit));
                commands.entity(hit.target).insert(HitFlash::default());
            }
            HitOutcome::Killed => {
                sounds.write(SoundEvent(Sound::EnemyHit));
                active.remove(hit.target);
                deaths.write(EnemyDeathEvent {
                    entity: hit.target,
                    element: *element,
                    position: transform.translation.truncate(),
                    killed: true,
                });
                commands.entity(hit.target).try_despawn();
            }
        }
    }
}

/// System to tick invulnerability timers and remove expired ones
pub fn tick_invulnerability_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Invulnerable)>,
) {
    for (entity, mut invulnerable) in query.iter_mut() {
        invulnerable.tick(time.delta());
        if invulnerable.is_expired() {
            commands.entity(entity).remove::<Invulnerable>();
        }
    }
}

/// Whitens flashing sprites and restores their element color afterwards
pub fn hit_flash_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitFlash, &mut Sprite, &Element)>,
) {
    for (entity, mut flash, mut sprite, element) in query.iter_mut() {
        flash.timer.tick(time.delta());
        if flash.is_finished() {
            sprite.color = element.color();
            commands.entity(entity).remove::<HitFlash>();
        } else {
            sprite.color = Color::WHITE;
        }
    }
}
