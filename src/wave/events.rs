use bevy::prelude::*;

/// Ask the spawner to begin the next wave
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnWaveRequest;

/// The last enemy of a wave has been spawned and its spawn interval elapsed
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveEndedEvent {
    /// Waves finished this run, including this one
    pub wave: u32,
    /// Enemies the next wave will spawn
    pub next_quota: usize,
}
