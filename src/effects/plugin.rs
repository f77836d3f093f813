use bevy::prelude::*;

use crate::effects::systems::{
    blast_visual_system, enemy_death_effects_system, particle_burst_system,
};
use crate::game::sets::GameSet;

/// Blasts, particles and death reactions. These keep animating outside
/// `InGame` so a game-over burst finishes playing.
pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            enemy_death_effects_system,
            blast_visual_system,
            particle_burst_system,
        )
            .in_set(GameSet::Effects),
    );
}
