use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::movement::systems::{apply_velocity_system, update_facing_system};
use crate::states::GameState;

/// Body integration runs on the fixed step; sprite facing is presentation.
pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        apply_velocity_system
            .in_set(GameSet::Movement)
            .run_if(in_state(GameState::InGame)),
    )
    .add_systems(Update, update_facing_system.in_set(GameSet::Effects));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::resources::ArenaBounds;

    #[test]
    fn test_plugin_can_be_added_to_app() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.init_resource::<Time>();
        app.init_resource::<ArenaBounds>();
        plugin(&mut app);
        app.update();
    }
}
