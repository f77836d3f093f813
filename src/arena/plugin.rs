use bevy::prelude::*;

use crate::arena::resources::ArenaBounds;
use crate::arena::systems::spawn_arena;
use crate::game::sets::SetupSet;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<ArenaBounds>().add_systems(
        OnEnter(GameState::Setup),
        spawn_arena.in_set(SetupSet::Spawn),
    );
}
