use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::spells::area_of_effect::{area_of_effect_system, spawn_area_tiles_system};
use crate::spells::bomb::bomb_system;
use crate::spells::projectile::{projectile_collision_system, projectile_movement_system};
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (
            (projectile_movement_system, projectile_collision_system).chain(),
            bomb_system,
            area_of_effect_system,
        )
            .in_set(GameSet::Spells)
            .run_if(in_state(GameState::InGame)),
    )
    .add_systems(
        Update,
        spawn_area_tiles_system.in_set(GameSet::Effects),
    );
}
