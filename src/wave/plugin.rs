use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::states::GameState;
use crate::wave::events::{SpawnWaveRequest, WaveEndedEvent};
use crate::wave::resources::WaveSpawner;
use crate::wave::systems::{handle_spawn_wave_request_system, wave_spawn_system};

/// Wave spawner. Requests are accepted on `Update`, spawning is timed on the
/// fixed step.
pub fn plugin(app: &mut App) {
    app.init_resource::<WaveSpawner>()
        .add_message::<SpawnWaveRequest>()
        .add_message::<WaveEndedEvent>()
        .add_systems(
            Update,
            handle_spawn_wave_request_system
                .in_set(GameSet::Spawning)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            wave_spawn_system
                .in_set(GameSet::Spawning)
                .run_if(in_state(GameState::InGame)),
        );
}
