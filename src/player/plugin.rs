use bevy::prelude::*;

use crate::game::sets::{GameSet, SetupSet};
use crate::player::components::PlayerStats;
use crate::player::systems::{
    direction_indicator_system, invulnerability_blink_system, player_control_system,
    player_dust_system, player_hit_system, player_spell_input_system, spawn_player,
    track_player_position_system,
};
use crate::spell::systems::spell_cast_system;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerStats>()
        .add_systems(
            OnEnter(GameState::Setup),
            spawn_player.in_set(SetupSet::Spawn),
        )
        .add_systems(
            Update,
            player_spell_input_system
                .in_set(GameSet::Input)
                .before(spell_cast_system)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            (
                player_control_system.in_set(GameSet::Input),
                (track_player_position_system, player_dust_system).in_set(GameSet::Ai),
                player_hit_system.in_set(GameSet::Combat),
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            (direction_indicator_system, invulnerability_blink_system)
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::InGame)),
        );
}
