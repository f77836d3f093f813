pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use events::{SpawnWaveRequest, WaveEndedEvent};
pub use plugin::plugin;
pub use resources::{WaveError, WavePhase, WaveSpawner, WaveTick};
pub use systems::{handle_spawn_wave_request_system, wave_spawn_system};
