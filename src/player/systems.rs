use bevy::prelude::*;

use crate::audio::{Sound, SoundEvent};
use crate::combat::components::{Health, Invulnerable};
use crate::combat::events::{PlayerHealthChanged, PlayerHitEvent};
use crate::effects::spawn_dust;
use crate::game::components::GameplayEntity;
use crate::game::resources::PlayerPosition;
use crate::movement::components::{BodyRadius, FacesVelocity, Velocity};
use crate::player::components::{
    DirectionIndicator, Player, PlayerState, PlayerStats, INDICATOR_DISTANCE, PLAYER_RADIUS,
};
use crate::spell::components::ComboSymbol;
use crate::spell::events::{CastRequest, SpellBufferChanged};
use crate::spell::resources::SpellBuffer;

pub const PLAYER_Z: f32 = 2.0;
pub const DUST_INTERVAL: f32 = 0.2;

const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.95);
const INDICATOR_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);
const INDICATOR_CASTING: Color = Color::srgb(1.0, 0.85, 0.2);

/// Puffs of dust behind a walking player
#[derive(Component, Debug, Clone)]
pub struct DustTrail {
    pub timer: Timer,
}

impl Default for DustTrail {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(DUST_INTERVAL, TimerMode::Repeating),
        }
    }
}

/// WASD or arrow keys as a raw (unnormalized) direction
pub fn movement_input(keys: &ButtonInput<KeyCode>) -> Vec2 {
    let mut input = Vec2::ZERO;
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        input.x -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        input.x += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        input.y -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        input.y += 1.0;
    }
    input
}

pub fn spawn_player(
    mut commands: Commands,
    stats: Res<PlayerStats>,
    mut position: ResMut<PlayerPosition>,
    mut health_changed: MessageWriter<PlayerHealthChanged>,
) {
    let health = Health::new(stats.max_health);
    position.0 = Vec2::ZERO;

    commands
        .spawn((
            Player::default(),
            health,
            Velocity::default(),
            BodyRadius(PLAYER_RADIUS),
            FacesVelocity,
            DustTrail::default(),
            Sprite::from_color(PLAYER_COLOR, Vec2::splat(PLAYER_RADIUS * 2.0)),
            Transform::from_translation(Vec3::new(0.0, 0.0, PLAYER_Z)),
            GameplayEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                DirectionIndicator,
                Sprite::from_color(INDICATOR_IDLE, Vec2::new(10.0, 4.0)),
                Transform::from_xyz(INDICATOR_DISTANCE, 0.0, 0.1),
            ));
        });

    health_changed.write(PlayerHealthChanged {
        current: health.current(),
        max: health.max(),
    });
}

/// Spell keys and the cast key.
///
/// J/K/L feed the buffer whatever the player is doing. Pressing the cast
/// key starts aiming; releasing it requests a cast along the aim.
pub fn player_spell_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut buffer: ResMut<SpellBuffer>,
    mut players: Query<(&mut Player, &Transform)>,
    mut buffer_changed: MessageWriter<SpellBufferChanged>,
    mut casts: MessageWriter<CastRequest>,
) {
    let mut pushed = false;
    for symbol in ComboSymbol::all() {
        if keys.just_pressed(symbol.key_code()) {
            buffer.push(*symbol);
            pushed = true;
        }
    }
    if pushed {
        buffer_changed.write(SpellBufferChanged {
            symbols: buffer.symbols(),
        });
    }

    let Ok((mut player, transform)) = players.single_mut() else {
        return;
    };

    if keys.just_pressed(KeyCode::Space) {
        player.begin_cast();
    }
    if keys.just_released(KeyCode::Space) {
        if let Some(direction) = player.release_cast() {
            casts.write(CastRequest {
                origin: transform.translation.truncate(),
                direction,
            });
        }
    }
}

/// Turns movement input and knockback into the player's velocity
pub fn player_control_system(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    stats: Res<PlayerStats>,
    mut players: Query<(&mut Player, &mut Velocity)>,
) {
    let input = movement_input(&keys);
    for (mut player, mut velocity) in players.iter_mut() {
        velocity.0 = player.step(input, time.delta_secs(), &stats);
    }
}

pub fn track_player_position_system(
    mut position: ResMut<PlayerPosition>,
    players: Query<&Transform, With<Player>>,
) {
    if let Ok(transform) = players.single() {
        position.0 = transform.translation.truncate();
    }
}

/// Applies enemy blasts to the player.
///
/// Only the first hit of a step lands; the others fall into the
/// invulnerability window it opens. A cast in progress is fired before the
/// knockback takes over.
#[allow(clippy::type_complexity)]
pub fn player_hit_system(
    mut commands: Commands,
    stats: Res<PlayerStats>,
    mut hits: MessageReader<PlayerHitEvent>,
    mut players: Query<(Entity, &mut Player, &mut Health, &Transform, Has<Invulnerable>)>,
    mut casts: MessageWriter<CastRequest>,
    mut health_changed: MessageWriter<PlayerHealthChanged>,
    mut sounds: MessageWriter<SoundEvent>,
) {
    let Ok((entity, mut player, mut health, transform, invulnerable)) = players.single_mut() else {
        hits.clear();
        return;
    };
    if invulnerable || health.is_dead() {
        hits.clear();
        return;
    }
    let Some(hit) = hits.read().next().copied() else {
        return;
    };
    hits.clear();

    let position = transform.translation.truncate();
    health.damage(hit.damage);
    debug!("Player hit for {}, {} left", hit.damage, health.current());

    if let Some(direction) = player.knock_back(position, hit.source, &stats) {
        casts.write(CastRequest {
            origin: position,
            direction,
        });
    }

    commands
        .entity(entity)
        .insert(Invulnerable::new(stats.invulnerability_time));
    sounds.write(SoundEvent(Sound::PlayerHit));
    health_changed.write(PlayerHealthChanged {
        current: health.current(),
        max: health.max(),
    });
}

pub fn player_dust_system(
    mut commands: Commands,
    time: Res<Time>,
    mut players: Query<(&Player, &Velocity, &Transform, &mut DustTrail)>,
) {
    for (player, velocity, transform, mut trail) in players.iter_mut() {
        if player.state != PlayerState::Normal || velocity.0 == Vec2::ZERO {
            continue;
        }
        trail.timer.tick(time.delta());
        if trail.timer.just_finished() {
            spawn_dust(&mut commands, transform.translation.truncate());
        }
    }
}

/// Points the aim arrow along the cast direction and lights it while casting
pub fn direction_indicator_system(
    players: Query<(&Player, &Children)>,
    mut indicators: Query<(&mut Transform, &mut Sprite), With<DirectionIndicator>>,
) {
    for (player, children) in players.iter() {
        let direction = player.last_move_direction;
        for child in children.iter() {
            let Ok((mut transform, mut sprite)) = indicators.get_mut(child) else {
                continue;
            };
            let offset = direction * INDICATOR_DISTANCE;
            transform.translation.x = offset.x;
            transform.translation.y = offset.y;
            transform.rotation = Quat::from_rotation_z(direction.to_angle());
            sprite.color = if player.state == PlayerState::Casting {
                INDICATOR_CASTING
            } else {
                INDICATOR_IDLE
            };
        }
    }
}

/// Blinks the player while invulnerable
pub fn invulnerability_blink_system(
    time: Res<Time>,
    mut players: Query<(&mut Sprite, Has<Invulnerable>), With<Player>>,
) {
    let blink_off = (time.elapsed_secs() * 16.0).sin() < 0.0;
    for (mut sprite, invulnerable) in players.iter_mut() {
        let alpha = if invulnerable && blink_off { 0.3 } else { 1.0 };
        sprite.color = sprite.color.with_alpha(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[derive(Resource, Default)]
    struct Collected {
        casts: Vec<CastRequest>,
        buffer_changes: Vec<SpellBufferChanged>,
        health: Vec<PlayerHealthChanged>,
        sounds: Vec<Sound>,
    }

    fn collect(
        mut casts: MessageReader<CastRequest>,
        mut buffer_changes: MessageReader<SpellBufferChanged>,
        mut health: MessageReader<PlayerHealthChanged>,
        mut sounds: MessageReader<SoundEvent>,
        mut collected: ResMut<Collected>,
    ) {
        collected.casts.extend(casts.read().copied());
        collected.buffer_changes.extend(buffer_changes.read().cloned());
        collected.health.extend(health.read().copied());
        collected.sounds.extend(sounds.read().map(|s| s.0));
    }

    fn setup_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<PlayerStats>();
        app.init_resource::<PlayerPosition>();
        app.init_resource::<SpellBuffer>();
        app.init_resource::<Collected>();
        app.add_message::<CastRequest>()
            .add_message::<SpellBufferChanged>()
            .add_message::<PlayerHitEvent>()
            .add_message::<PlayerHealthChanged>()
            .add_message::<SoundEvent>();
        app
    }

    fn spawn_test_player(app: &mut App, position: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                Player::default(),
                Health::new(5),
                Velocity::default(),
                Transform::from_translation(position.extend(PLAYER_Z)),
            ))
            .id()
    }

    fn keys(app: &mut App) -> Mut<'_, ButtonInput<KeyCode>> {
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
    }

    mod movement_input_tests {
        use super::*;

        #[test]
        fn wasd_and_arrows_combine() {
            let mut keys = ButtonInput::<KeyCode>::default();
            keys.press(KeyCode::KeyW);
            keys.press(KeyCode::ArrowRight);
            assert_eq!(movement_input(&keys), Vec2::new(1.0, 1.0));
        }

        #[test]
        fn opposite_keys_cancel() {
            let mut keys = ButtonInput::<KeyCode>::default();
            keys.press(KeyCode::KeyA);
            keys.press(KeyCode::KeyD);
            assert_eq!(movement_input(&keys), Vec2::ZERO);
        }
    }

    mod spawn_tests {
        use super::*;

        #[test]
        fn spawns_player_with_indicator_and_reports_health() {
            let mut app = setup_app();
            app.world_mut()
                .resource_mut::<PlayerPosition>()
                .0 = Vec2::new(40.0, 40.0);
            app.add_systems(Update, (spawn_player, collect).chain());
            app.update();

            let world = app.world_mut();
            let (health, children) = world
                .query_filtered::<(&Health, &Children), With<Player>>()
                .single(world)
                .unwrap();
            assert_eq!(health.current(), 5);
            assert_eq!(children.len(), 1);

            assert_eq!(world.resource::<PlayerPosition>().0, Vec2::ZERO);
            assert_eq!(
                world.resource::<Collected>().health,
                vec![PlayerHealthChanged { current: 5, max: 5 }]
            );
        }
    }

    mod spell_input_tests {
        use super::*;

        fn app_with_input() -> App {
            let mut app = setup_app();
            app.add_systems(Update, (player_spell_input_system, collect).chain());
            app
        }

        #[test]
        fn spell_keys_fill_buffer() {
            let mut app = app_with_input();
            spawn_test_player(&mut app, Vec2::ZERO);

            keys(&mut app).press(KeyCode::KeyJ);
            app.update();
            keys(&mut app).clear();
            keys(&mut app).press(KeyCode::KeyL);
            app.update();

            let buffer = app.world().resource::<SpellBuffer>();
            assert_eq!(buffer.symbols(), vec![ComboSymbol::J, ComboSymbol::L]);
            let changes = &app.world().resource::<Collected>().buffer_changes;
            assert_eq!(changes.len(), 2);
            assert_eq!(changes[1].text(), "JL");
        }

        #[test]
        fn spell_keys_work_during_hit_stun() {
            let mut app = app_with_input();
            let player = spawn_test_player(&mut app, Vec2::ZERO);
            app.world_mut().get_mut::<Player>(player).unwrap().state = PlayerState::HitStun;

            keys(&mut app).press(KeyCode::KeyK);
            app.update();

            assert_eq!(app.world().resource::<SpellBuffer>().len(), 1);
        }

        #[test]
        fn cast_key_release_requests_cast() {
            let mut app = app_with_input();
            let player = spawn_test_player(&mut app, Vec2::new(10.0, 20.0));
            app.world_mut()
                .get_mut::<Player>(player)
                .unwrap()
                .last_move_direction = Vec2::NEG_Y;

            keys(&mut app).press(KeyCode::Space);
            app.update();
            assert_eq!(
                app.world().get::<Player>(player).unwrap().state,
                PlayerState::Casting
            );
            assert!(app.world().resource::<Collected>().casts.is_empty());

            keys(&mut app).clear();
            keys(&mut app).release(KeyCode::Space);
            app.update();

            assert_eq!(
                app.world().get::<Player>(player).unwrap().state,
                PlayerState::Normal
            );
            assert_eq!(
                app.world().resource::<Collected>().casts,
                vec![CastRequest {
                    origin: Vec2::new(10.0, 20.0),
                    direction: Vec2::NEG_Y,
                }]
            );
        }

        #[test]
        fn release_without_casting_does_nothing() {
            let mut app = app_with_input();
            spawn_test_player(&mut app, Vec2::ZERO);

            keys(&mut app).press(KeyCode::Space);
            keys(&mut app).clear();
            keys(&mut app).release(KeyCode::Space);
            app.update();

            assert!(app.world().resource::<Collected>().casts.is_empty());
        }
    }

    mod control_tests {
        use super::*;

        #[test]
        fn held_keys_set_velocity() {
            let mut app = setup_app();
            app.add_systems(Update, player_control_system);
            let player = spawn_test_player(&mut app, Vec2::ZERO);

            keys(&mut app).press(KeyCode::KeyA);
            app.world_mut()
                .resource_mut::<Time>()
                .advance_by(Duration::from_secs_f32(1.0 / 64.0));
            app.update();

            let speed = app.world().resource::<PlayerStats>().speed;
            assert_eq!(
                app.world().get::<Velocity>(player).unwrap().0,
                Vec2::new(-speed, 0.0)
            );
        }

        #[test]
        fn tracks_player_position() {
            let mut world = World::new();
            world.init_resource::<PlayerPosition>();
            world.spawn((Player::default(), Transform::from_xyz(3.0, -4.0, PLAYER_Z)));

            world.run_system_once(track_player_position_system).unwrap();

            assert_eq!(world.resource::<PlayerPosition>().0, Vec2::new(3.0, -4.0));
        }
    }

    mod hit_tests {
        use super::*;

        fn app_with_hits() -> App {
            let mut app = setup_app();
            app.add_systems(Update, (player_hit_system, collect).chain());
            app
        }

        #[test]
        fn hit_damages_knocks_back_and_grants_invulnerability() {
            let mut app = app_with_hits();
            let player = spawn_test_player(&mut app, Vec2::ZERO);
            app.world_mut().write_message(PlayerHitEvent {
                damage: 1,
                source: Vec2::new(10.0, 0.0),
            });
            app.update();

            let world = app.world();
            assert_eq!(world.get::<Health>(player).unwrap().current(), 4);
            let state = world.get::<Player>(player).unwrap();
            assert_eq!(state.state, PlayerState::HitStun);
            assert_eq!(state.last_move_direction, Vec2::NEG_X);
            assert!(world.get::<Invulnerable>(player).is_some());

            let collected = world.resource::<Collected>();
            assert_eq!(collected.health, vec![PlayerHealthChanged { current: 4, max: 5 }]);
            assert_eq!(collected.sounds, vec![Sound::PlayerHit]);
            assert!(collected.casts.is_empty());
        }

        #[test]
        fn simultaneous_hits_land_once() {
            let mut app = app_with_hits();
            let player = spawn_test_player(&mut app, Vec2::ZERO);
            for _ in 0..3 {
                app.world_mut().write_message(PlayerHitEvent {
                    damage: 1,
                    source: Vec2::X,
                });
            }
            app.update();

            assert_eq!(app.world().get::<Health>(player).unwrap().current(), 4);
        }

        #[test]
        fn invulnerable_player_ignores_hits() {
            let mut app = app_with_hits();
            let player = spawn_test_player(&mut app, Vec2::ZERO);
            app.world_mut()
                .entity_mut(player)
                .insert(Invulnerable::new(1.0));
            app.world_mut().write_message(PlayerHitEvent {
                damage: 1,
                source: Vec2::X,
            });
            app.update();

            assert_eq!(app.world().get::<Health>(player).unwrap().current(), 5);
            assert!(app.world().resource::<Collected>().health.is_empty());
        }

        #[test]
        fn hit_while_casting_fires_buffered_spell() {
            let mut app = app_with_hits();
            let player = spawn_test_player(&mut app, Vec2::new(0.0, 5.0));
            {
                let mut state = app.world_mut().get_mut::<Player>(player).unwrap();
                state.last_move_direction = Vec2::NEG_X;
                state.state = PlayerState::Casting;
            }
            app.world_mut().write_message(PlayerHitEvent {
                damage: 1,
                source: Vec2::ZERO,
            });
            app.update();

            assert_eq!(
                app.world().resource::<Collected>().casts,
                vec![CastRequest {
                    origin: Vec2::new(0.0, 5.0),
                    direction: Vec2::NEG_X,
                }]
            );
            assert_eq!(
                app.world().get::<Player>(player).unwrap().last_move_direction,
                Vec2::Y
            );
        }

        #[test]
        fn lethal_hit_reports_zero_health() {
            let mut app = app_with_hits();
            let player = spawn_test_player(&mut app, Vec2::ZERO);
            app.world_mut().entity_mut(player).insert(Health::new(1));
            app.world_mut().write_message(PlayerHitEvent {
                damage: 1,
                source: Vec2::X,
            });
            app.update();

            let collected = app.world().resource::<Collected>();
            assert!(collected.health[0].is_dead());
        }
    }

    mod indicator_tests {
        use super::*;

        #[test]
        fn indicator_follows_aim_and_lights_while_casting() {
            let mut world = World::new();
            let player = world
                .spawn((
                    Player {
                        state: PlayerState::Casting,
                        last_move_direction: Vec2::Y,
                        knockback_speed: 0.0,
                    },
                    Transform::default(),
                ))
                .id();
            let indicator = world
                .spawn((
                    DirectionIndicator,
                    Sprite::from_color(INDICATOR_IDLE, Vec2::ONE),
                    Transform::default(),
                    ChildOf(player),
                ))
                .id();

            world.run_system_once(direction_indicator_system).unwrap();

            let transform = world.get::<Transform>(indicator).unwrap();
            assert!((transform.translation.y - INDICATOR_DISTANCE).abs() < 1e-4);
            assert!(transform.translation.x.abs() < 1e-4);
            assert_eq!(world.get::<Sprite>(indicator).unwrap().color, INDICATOR_CASTING);
        }
    }

    mod dust_tests {
        use super::*;
        use crate::effects::ParticleBurst;

        #[test]
        fn walking_leaves_dust() {
            let mut app = setup_app();
            app.add_systems(Update, player_dust_system);
            let player = spawn_test_player(&mut app, Vec2::ZERO);
            app.world_mut()
                .entity_mut(player)
                .insert((DustTrail::default(), Velocity(Vec2::X * 100.0)));

            for _ in 0..4 {
                app.world_mut()
                    .resource_mut::<Time>()
                    .advance_by(Duration::from_secs_f32(0.1));
                app.update();
            }

            let dust = app
                .world_mut()
                .query::<&ParticleBurst>()
                .iter(app.world())
                .count();
            assert!(dust > 0);
        }
    }
}
