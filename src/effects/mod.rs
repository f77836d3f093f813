pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{BlastVisual, ParticleBurst};
pub use plugin::plugin;
pub use systems::{
    blast_visual_system, enemy_death_effects_system, particle_burst_system, spawn_blast_visual,
    spawn_dust, spawn_particle_burst, spawn_player_death_burst,
};
