use bevy::prelude::*;

use crate::audio::{Sound, SoundEvent};
use crate::camera::ShakeEvent;
use crate::combat::events::PlayerHealthChanged;
use crate::combat::resources::ActiveEnemies;
use crate::effects::spawn_player_death_burst;
use crate::game::components::GameplayEntity;
use crate::game::events::LevelChanged;
use crate::game::resources::{GameRng, GameSettings, LevelProgress};
use crate::movement::components::Velocity;
use crate::player::components::Player;
use crate::spell::events::{ComboChanged, UpgradeSpellRequest};
use crate::spell::resources::ComboRegistry;
use crate::states::GameState;
use crate::wave::events::{SpawnWaveRequest, WaveEndedEvent};
use crate::wave::resources::WaveSpawner;

pub const GAME_OVER_SHAKE_DURATION: f32 = 0.5;
pub const GAME_OVER_SHAKE_MAGNITUDE: f32 = 8.0;

fn confirm_pressed(keys: &ButtonInput<KeyCode>) -> bool {
    keys.any_just_pressed([KeyCode::Enter, KeyCode::NumpadEnter])
}

/// Despawns everything left over from the previous run
pub fn cleanup_gameplay_entities(
    mut commands: Commands,
    query: Query<Entity, With<GameplayEntity>>,
) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}

/// Puts every run resource back to its starting state
pub fn reset_run_resources(
    settings: Res<GameSettings>,
    mut rng: ResMut<GameRng>,
    mut progress: ResMut<LevelProgress>,
    mut active: ResMut<ActiveEnemies>,
    mut spawner: ResMut<WaveSpawner>,
) {
    *rng = GameRng::from_seed(settings.seed);
    *progress = LevelProgress::default();
    active.clear();
    *spawner = WaveSpawner::from_settings(&settings);
    info!("New run (seed: {:?})", settings.seed);
}

pub fn finish_setup(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Confirm starts the next level when allowed and asks the spawner for a wave
pub fn start_level_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut progress: ResMut<LevelProgress>,
    spawner: Res<WaveSpawner>,
    active: Res<ActiveEnemies>,
    mut level_changed: MessageWriter<LevelChanged>,
    mut spawn_requests: MessageWriter<SpawnWaveRequest>,
) {
    if !confirm_pressed(&keys) || !progress.can_start_level {
        return;
    }
    if let Some(level) = progress.try_start_level(spawner.can_spawn_wave(active.len())) {
        info!("Starting level {level}");
        level_changed.write(LevelChanged { level });
    }
    spawn_requests.write(SpawnWaveRequest);
}

/// Opens the upgrade menu a moment after a finished wave has been cleared
pub fn level_flow_system(
    time: Res<Time>,
    mut wave_ended: MessageReader<WaveEndedEvent>,
    mut progress: ResMut<LevelProgress>,
    spawner: Res<WaveSpawner>,
    active: Res<ActiveEnemies>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if wave_ended.read().count() > 0 {
        progress.on_wave_ended();
    }
    if progress.tick_post_wave(time.delta(), spawner.can_spawn_wave(active.len())) {
        next_state.set(GameState::Upgrading);
    }
}

/// Applies the upgrade menu choice. A failed upgrade keeps the menu open.
#[allow(clippy::too_many_arguments)]
pub fn handle_upgrade_request_system(
    mut requests: MessageReader<UpgradeSpellRequest>,
    mut registry: ResMut<ComboRegistry>,
    mut rng: ResMut<GameRng>,
    mut progress: ResMut<LevelProgress>,
    mut next_state: ResMut<NextState<GameState>>,
    mut combo_changed: MessageWriter<ComboChanged>,
    mut sounds: MessageWriter<SoundEvent>,
) {
    for request in requests.read() {
        if let Some(element) = request.element {
            match registry.upgrade(element, &mut rng.0) {
                Ok(upgrade) => {
                    info!("{} spell is now level {}", upgrade.element, upgrade.level);
                    combo_changed.write(ComboChanged {
                        element: upgrade.element,
                        combo: upgrade.combo,
                        level: upgrade.level,
                    });
                }
                Err(err) => {
                    warn!("Upgrade failed: {err}");
                    continue;
                }
            }
        }

        sounds.write(SoundEvent(Sound::UpgradeSpell));
        progress.finish_upgrade();
        next_state.set(GameState::InGame);
        break;
    }
}

/// Ends the run when the player's health hits zero
pub fn player_death_system(
    mut commands: Commands,
    mut health_changes: MessageReader<PlayerHealthChanged>,
    mut players: Query<(&Transform, &mut Visibility, &mut Velocity), With<Player>>,
    mut shakes: MessageWriter<ShakeEvent>,
    mut sounds: MessageWriter<SoundEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !health_changes.read().any(PlayerHealthChanged::is_dead) {
        return;
    }

    for (transform, mut visibility, mut velocity) in players.iter_mut() {
        spawn_player_death_burst(&mut commands, transform.translation.truncate());
        *visibility = Visibility::Hidden;
        velocity.0 = Vec2::ZERO;
    }
    shakes.write(ShakeEvent::new(
        GAME_OVER_SHAKE_DURATION,
        GAME_OVER_SHAKE_MAGNITUDE,
    ));
    sounds.write(SoundEvent(Sound::GameOver));
    info!("Game over");
    next_state.set(GameState::GameOver);
}

pub fn restart_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if confirm_pressed(&keys) {
        next_state.set(GameState::Setup);
    }
}
