use bevy::prelude::*;

use crate::game::sets::{GameSet, SetupSet};
use crate::spell::events::{
    CastRequest, ComboChanged, SpellBufferChanged, SpellCastEvent, UpgradeSpellRequest,
};
use crate::spell::resources::{ComboRegistry, SpellBuffer};
use crate::spell::systems::{reset_spells_system, spell_cast_system};
use crate::states::GameState;

/// Combo registry, spell buffer and cast resolution.
///
/// Casts are resolved in `Update` after input so requests written by the
/// player's hit handling on the fixed step are picked up the same frame.
pub fn plugin(app: &mut App) {
    app.init_resource::<ComboRegistry>()
        .init_resource::<SpellBuffer>()
        .add_message::<CastRequest>()
        .add_message::<SpellBufferChanged>()
        .add_message::<ComboChanged>()
        .add_message::<SpellCastEvent>()
        .add_message::<UpgradeSpellRequest>()
        .add_systems(
            OnEnter(GameState::Setup),
            reset_spells_system.in_set(SetupSet::Reset),
        )
        .add_systems(
            Update,
            spell_cast_system
                .in_set(GameSet::Input)
                .run_if(in_state(GameState::InGame)),
        );
}
