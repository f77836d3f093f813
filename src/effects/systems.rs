use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::camera::ShakeEvent;
use crate::combat::events::EnemyDeathEvent;
use crate::effects::components::{BlastVisual, ParticleBurst};
use crate::game::components::GameplayEntity;

/// Z layer for visual effects, above spells
pub const EFFECT_Z: f32 = 5.0;

const BURST_PARTICLES: usize = 8;
const BURST_SPEED: f32 = 140.0;
const BURST_LIFETIME: f32 = 0.4;
const BURST_SIZE: f32 = 6.0;

const DUST_PARTICLES: usize = 4;
const DUST_SPEED: f32 = 40.0;
const DUST_LIFETIME: f32 = 0.3;
const DUST_COLOR: Color = Color::srgba(0.75, 0.7, 0.6, 0.7);

const PLAYER_BURST_PARTICLES: usize = 16;
const PLAYER_BURST_COLOR: Color = Color::srgb(0.95, 0.95, 1.0);

/// Camera shake for an enemy blowing itself up
pub const SELF_DETONATION_SHAKE_DURATION: f32 = 0.2;
pub const SELF_DETONATION_SHAKE_MAGNITUDE: f32 = 4.0;

fn spawn_ring(
    commands: &mut Commands,
    position: Vec2,
    color: Color,
    count: usize,
    speed: f32,
    lifetime: f32,
    size: f32,
) {
    for i in 0..count {
        let angle = TAU * i as f32 / count as f32;
        commands.spawn((
            ParticleBurst::new(Vec2::from_angle(angle) * speed, lifetime, color),
            Sprite::from_color(color, Vec2::splat(size)),
            Transform::from_translation(position.extend(EFFECT_Z)),
            GameplayEntity,
        ));
    }
}

/// Death particles in `color`, used for enemies and spent spells
pub fn spawn_particle_burst(commands: &mut Commands, position: Vec2, color: Color) {
    spawn_ring(
        commands,
        position,
        color,
        BURST_PARTICLES,
        BURST_SPEED,
        BURST_LIFETIME,
        BURST_SIZE,
    );
}

/// Small puff kicked up when an enemy lands
pub fn spawn_dust(commands: &mut Commands, position: Vec2) {
    spawn_ring(
        commands,
        position,
        DUST_COLOR,
        DUST_PARTICLES,
        DUST_SPEED,
        DUST_LIFETIME,
        BURST_SIZE * 0.6,
    );
}

pub fn spawn_player_death_burst(commands: &mut Commands, position: Vec2) {
    spawn_ring(
        commands,
        position,
        PLAYER_BURST_COLOR,
        PLAYER_BURST_PARTICLES,
        BURST_SPEED * 1.5,
        BURST_LIFETIME * 2.0,
        BURST_SIZE * 1.5,
    );
}

/// Spawns an expanding blast reaching `max_size` in diameter
pub fn spawn_blast_visual(
    commands: &mut Commands,
    position: Vec2,
    color: Color,
    max_size: f32,
) -> Entity {
    let blast = BlastVisual::new(max_size, color.with_alpha(0.6));
    let size = blast.size();
    let sprite_color = blast.color();
    commands
        .spawn((
            blast,
            Sprite::from_color(sprite_color, Vec2::ONE),
            Transform::from_translation(position.extend(EFFECT_Z)).with_scale(Vec3::splat(size)),
            GameplayEntity,
        ))
        .id()
}

pub fn blast_visual_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut BlastVisual, &mut Transform, &mut Sprite)>,
) {
    for (entity, mut blast, mut transform, mut sprite) in query.iter_mut() {
        blast.timer.tick(time.delta());
        if blast.is_finished() {
            commands.entity(entity).try_despawn();
            continue;
        }
        transform.scale = Vec3::splat(blast.size());
        sprite.color = blast.color();
    }
}

pub fn particle_burst_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ParticleBurst, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut transform, mut sprite) in query.iter_mut() {
        particle.timer.tick(time.delta());
        if particle.timer.is_finished() {
            commands.entity(entity).try_despawn();
            continue;
        }
        transform.translation += (particle.velocity * dt).extend(0.0);
        sprite.color = particle.color();
    }
}

/// Death particles for every enemy that leaves the wave. Only
/// self-detonations shake the camera.
pub fn enemy_death_effects_system(
    mut commands: Commands,
    mut deaths: MessageReader<EnemyDeathEvent>,
    mut shakes: MessageWriter<ShakeEvent>,
) {
    for death in deaths.read() {
        spawn_particle_burst(&mut commands, death.position, death.element.color());
        if !death.killed {
            shakes.write(ShakeEvent::new(
                SELF_DETONATION_SHAKE_DURATION,
                SELF_DETONATION_SHAKE_MAGNITUDE,
            ));
        }
    }
}
