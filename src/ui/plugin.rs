use bevy::prelude::*;

use crate::game::sets::{GameSet, SetupSet};
use crate::states::GameState;
use crate::ui::systems::*;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Setup), spawn_hud.in_set(SetupSet::Spawn))
        .add_systems(
            Update,
            (
                update_level_text_system,
                update_health_text_system,
                update_spell_buffer_text_system,
                update_combo_texts_system,
                update_prompt_system,
            )
                .in_set(GameSet::Effects),
        )
        .add_systems(OnEnter(GameState::GameOver), show_game_over_banner)
        .add_systems(OnEnter(GameState::Upgrading), (hide_hud, spawn_upgrade_menu))
        .add_systems(
            Update,
            (
                upgrade_menu_input_system,
                refresh_upgrade_labels_system,
                upgrade_button_colors_system,
            )
                .run_if(in_state(GameState::Upgrading)),
        )
        .add_systems(OnExit(GameState::Upgrading), (despawn_upgrade_menu, show_hud));
}
