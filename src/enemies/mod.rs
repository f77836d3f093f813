pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Enemy, EnemyBrain, EnemyCue, EnemyState, EnemyStats};
pub use plugin::plugin;
pub use systems::{enemy_ai_system, enemy_charge_pulse_system, spawn_enemy};
