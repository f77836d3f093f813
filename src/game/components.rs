use bevy::prelude::*;

/// Tag for every entity that belongs to a run. Everything carrying it is
/// despawned when the game re-enters `GameState::Setup`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct GameplayEntity;
