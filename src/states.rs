use bevy::prelude::*;

#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    /// Builds (or rebuilds after a restart) the world, then moves to InGame
    #[default]
    Setup,
    InGame,
    /// Upgrade menu is open; all simulation is frozen
    Upgrading,
    GameOver,
}
