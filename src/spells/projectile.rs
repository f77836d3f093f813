use bevy::prelude::*;

use crate::arena::components::{overlaps_terrain, TerrainBlock};
use crate::combat::events::SpellHitEvent;
use crate::combat::resources::ActiveEnemies;
use crate::effects::spawn_particle_burst;
use crate::element::Element;
use crate::enemies::components::Enemy;
use crate::movement::components::BodyRadius;
use crate::spells::{SpellEffect, SpellEffectKind, SPELL_Z};

pub const PROJECTILE_SPEED: f32 = 400.0;
pub const PROJECTILE_LIFETIME: f32 = 2.0;
pub const PROJECTILE_RADIUS: f32 = 8.0;

/// Level 1 spell: flies straight until it hits an enemy, terrain or times out
#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub direction: Vec2,
    pub speed: f32,
    pub damage: i32,
    pub element: Element,
    pub lifetime: Timer,
}

impl Projectile {
    pub fn displacement(&self, dt: f32) -> Vec2 {
        self.direction * self.speed * dt
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime.is_finished()
    }
}

impl SpellEffect for Projectile {
    const KIND: SpellEffectKind = SpellEffectKind::Projectile;

    fn init(_origin: Vec2, direction: Vec2, damage: i32, element: Element) -> Self {
        Self {
            direction,
            speed: PROJECTILE_SPEED,
            damage,
            element,
            lifetime: Timer::from_seconds(PROJECTILE_LIFETIME, TimerMode::Once),
        }
    }

    fn transform(&self, origin: Vec2) -> Transform {
        Transform::from_translation(origin.extend(SPELL_Z))
            .with_rotation(Quat::from_rotation_z(self.direction.to_angle()))
    }

    fn sprite(&self) -> Sprite {
        Sprite::from_color(
            self.element.color(),
            Vec2::new(PROJECTILE_RADIUS * 3.0, PROJECTILE_RADIUS * 1.5),
        )
    }
}

/// Moves projectiles along their direction and ages them
pub fn projectile_movement_system(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut Projectile)>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut projectile) in query.iter_mut() {
        let step = projectile.displacement(dt);
        transform.translation += step.extend(0.0);
        projectile.lifetime.tick(time.delta());
    }
}

/// Resolves what each projectile touched this tick.
///
/// An enemy hit sends one `SpellHitEvent` and consumes the projectile even if
/// the enemy resists the element. Terrain consumes it with a burst of
/// particles. Otherwise it is removed once its lifetime runs out.
pub fn projectile_collision_system(
    mut commands: Commands,
    projectiles: Query<(Entity, &Transform, &Projectile)>,
    enemies: Query<(Entity, &Transform, &BodyRadius), With<Enemy>>,
    terrain: Query<(&Transform, &TerrainBlock)>,
    active: Res<ActiveEnemies>,
    mut hits: MessageWriter<SpellHitEvent>,
) {
    for (entity, transform, projectile) in projectiles.iter() {
        let position = transform.translation.truncate();

        let target = enemies
            .iter()
            .filter(|(enemy, _, _)| active.contains(*enemy))
            .find(|(_, enemy_transform, radius)| {
                enemy_transform.translation.truncate().distance(position)
                    < PROJECTILE_RADIUS + radius.0
            });

        if let Some((enemy, _, _)) = target {
            hits.write(SpellHitEvent::new(enemy, projectile.damage, projectile.element));
            commands.entity(entity).try_despawn();
        } else if overlaps_terrain(terrain.iter(), position, PROJECTILE_RADIUS) {
            spawn_particle_burst(&mut commands, position, projectile.element.color());
            commands.entity(entity).try_despawn();
        } else if projectile.is_expired() {
            commands.entity(entity).try_despawn();
        }
    }
}
