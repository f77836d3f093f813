use bevy::prelude::*;

use crate::game::events::LevelChanged;
use crate::game::resources::{GameRng, GameSettings, LevelProgress, PlayerPosition};
use crate::game::sets::{GameSet, SetupSet};
use crate::game::systems::*;
use crate::spell::systems::reset_spells_system;
use crate::states::GameState;

/// Game flow: run setup, level gating, upgrades, game over and restart.
///
/// Also owns the `GameSet` ordering for both the fixed step and the frame
/// schedule, and the `SetupSet` ordering for rebuilding a run.
pub fn plugin(app: &mut App) {
    app.configure_sets(Update, GameSet::ordered().chain())
        .configure_sets(FixedUpdate, GameSet::ordered().chain())
        .configure_sets(OnEnter(GameState::Setup), SetupSet::ordered().chain())
        .init_resource::<GameSettings>()
        .init_resource::<GameRng>()
        .init_resource::<LevelProgress>()
        .init_resource::<PlayerPosition>()
        .add_message::<LevelChanged>()
        .add_systems(
            OnEnter(GameState::Setup),
            (
                cleanup_gameplay_entities.in_set(SetupSet::Cleanup),
                reset_run_resources
                    .in_set(SetupSet::Reset)
                    .before(reset_spells_system),
                finish_setup.after(SetupSet::Spawn),
            ),
        )
        .add_systems(
            Update,
            (
                start_level_system.in_set(GameSet::Input),
                level_flow_system.in_set(GameSet::Spawning),
                player_death_system.in_set(GameSet::Combat),
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            handle_upgrade_request_system.run_if(in_state(GameState::Upgrading)),
        )
        .add_systems(
            Update,
            restart_system.run_if(in_state(GameState::GameOver)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEvent;
    use crate::element::Element;
    use crate::player::components::Player;
    use crate::spell::resources::ComboRegistry;

    fn headless_game() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.init_resource::<Time>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(GameSettings {
            seed: Some(5),
            ..default()
        });
        app.add_message::<SoundEvent>();
        app.add_plugins((
            plugin,
            crate::arena::plugin,
            crate::movement::plugin,
            crate::combat::plugin,
            crate::spell::plugin,
            crate::spells::plugin,
            crate::player::plugin,
            crate::enemies::plugin,
            crate::wave::plugin,
            crate::camera::plugin,
            crate::effects::plugin,
            crate::ui::plugin,
        ));
        app
    }

    fn state(app: &App) -> GameState {
        *app.world().resource::<State<GameState>>().get()
    }

    fn player_count(app: &mut App) -> usize {
        app.world_mut()
            .query::<&Player>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn setup_builds_a_run_and_enters_game() {
        let mut app = headless_game();
        app.update();
        app.update();

        assert_eq!(state(&app), GameState::InGame);
        assert_eq!(player_count(&mut app), 1);
        let registry = app.world().resource::<ComboRegistry>();
        for element in Element::all() {
            assert_eq!(registry.level_of(*element), 1);
        }
    }

    #[test]
    fn restart_rebuilds_without_duplicates() {
        let mut app = headless_game();
        app.update();
        app.update();

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Setup);
        app.update();
        app.update();

        assert_eq!(state(&app), GameState::InGame);
        assert_eq!(player_count(&mut app), 1);
        assert_eq!(app.world().resource::<LevelProgress>().level, 0);
    }
}
