use bevy::prelude::*;

use crate::camera::components::{CameraShake, ShakeEvent};
use crate::camera::systems::{
    camera_follow_system, reset_camera_system, shake_events_system, spawn_camera,
};
use crate::game::sets::{GameSet, SetupSet};
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<CameraShake>()
        .add_message::<ShakeEvent>()
        .add_systems(Startup, spawn_camera)
        .add_systems(
            OnEnter(GameState::Setup),
            reset_camera_system.in_set(SetupSet::Reset),
        )
        .add_systems(
            Update,
            (shake_events_system, camera_follow_system)
                .chain()
                .in_set(GameSet::Effects),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::components::MainCamera;
    use crate::game::resources::PlayerPosition;

    #[test]
    fn plugin_spawns_camera_on_startup() {
        let mut app = App::new();
        app.add_plugins((bevy::state::app::StatesPlugin, bevy::time::TimePlugin));
        app.init_state::<GameState>();
        app.init_resource::<PlayerPosition>();
        app.add_plugins(plugin);

        app.update();

        let cameras = app
            .world_mut()
            .query::<&MainCamera>()
            .iter(app.world())
            .count();
        assert_eq!(cameras, 1);
    }
}
