use bevy::prelude::*;

use crate::enemies::systems::{enemy_ai_system, enemy_charge_pulse_system};
use crate::game::sets::GameSet;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        enemy_ai_system
            .in_set(GameSet::Ai)
            .run_if(in_state(GameState::InGame)),
    )
    .add_systems(
        Update,
        enemy_charge_pulse_system
            .in_set(GameSet::Effects)
            .run_if(in_state(GameState::InGame)),
    );
}
