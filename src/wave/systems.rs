use bevy::prelude::*;

use crate::arena::resources::ArenaBounds;
use crate::combat::resources::ActiveEnemies;
use crate::element::Element;
use crate::enemies::systems::spawn_enemy;
use crate::game::resources::{GameRng, PlayerPosition};
use crate::wave::events::{SpawnWaveRequest, WaveEndedEvent};
use crate::wave::resources::{WaveSpawner, WaveTick};

/// Starts a wave for every request, logging the reason when it cannot
pub fn handle_spawn_wave_request_system(
    mut requests: MessageReader<SpawnWaveRequest>,
    mut spawner: ResMut<WaveSpawner>,
    active: Res<ActiveEnemies>,
) {
    for _ in requests.read() {
        match spawner.start_wave(active.len()) {
            Ok(()) => info!("Wave started with {} enemies", spawner.quota()),
            Err(err) => warn!("Cannot spawn wave: {err}"),
        }
    }
}

/// Drives the spawner: each spawn picks a random spawn point and element
/// and registers the enemy as active.
pub fn wave_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    mut spawner: ResMut<WaveSpawner>,
    mut rng: ResMut<GameRng>,
    bounds: Res<ArenaBounds>,
    player_position: Res<PlayerPosition>,
    mut active: ResMut<ActiveEnemies>,
    mut wave_ended: MessageWriter<WaveEndedEvent>,
) {
    match spawner.tick(time.delta_secs()) {
        WaveTick::Idle => {}
        WaveTick::Spawn => {
            let position = bounds.random_spawn_point(&mut rng.0);
            let element = Element::random(&mut rng.0);
            let enemy = spawn_enemy(&mut commands, position, element, player_position.0);
            active.insert(enemy);
            debug!(
                "Spawned {element} enemy {}/{}",
                spawner.spawned(),
                spawner.quota()
            );
        }
        WaveTick::Ended { wave, next_quota } => {
            info!("Wave {wave} finished spawning, next wave has {next_quota} enemies");
            wave_ended.write(WaveEndedEvent { wave, next_quota });
        }
    }
}
