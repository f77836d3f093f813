pub mod arena;
pub mod audio;
pub mod camera;
pub mod combat;
pub mod effects;
pub mod element;
pub mod enemies;
pub mod game;
pub mod movement;
pub mod player;
pub mod prelude;
pub mod spell;
pub mod spells;
pub mod states;
pub mod ui;
pub mod wave;

use bevy::prelude::*;

pub use game::plugin as game_plugin;
pub use ui::plugin as ui_plugin;

/// Every gameplay plugin. Audio also needs `bevy_kira_audio::AudioPlugin`.
pub fn plugin(app: &mut App) {
    app.add_plugins((
        game::plugin,
        arena::plugin,
        movement::plugin,
        combat::plugin,
        spell::plugin,
        spells::plugin,
        player::plugin,
        enemies::plugin,
        wave::plugin,
        audio::plugin,
        camera::plugin,
        effects::plugin,
        ui::plugin,
    ));
}
