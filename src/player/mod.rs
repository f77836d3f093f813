pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{DirectionIndicator, Player, PlayerState, PlayerStats};
pub use plugin::plugin;
pub use systems::{movement_input, spawn_player, DustTrail};
