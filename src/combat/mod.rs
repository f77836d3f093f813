pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::{Health, HitFlash, Invulnerable};
pub use events::{EnemyDeathEvent, HitOutcome, PlayerHealthChanged, PlayerHitEvent, SpellHitEvent};
pub use plugin::plugin;
pub use resources::ActiveEnemies;
pub use systems::{
    hit_flash_system, resolve_hit, resolve_spell_hits_system, tick_invulnerability_system,
};
