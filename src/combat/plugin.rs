use bevy::prelude::*;

use super::events::{EnemyDeathEvent, PlayerHealthChanged, PlayerHitEvent, SpellHitEvent};
use super::resources::ActiveEnemies;
use super::systems::{hit_flash_system, resolve_spell_hits_system, tick_invulnerability_system};
use crate::game::sets::GameSet;
use crate::states::GameState;

/// Elemental hit resolution, the active enemy set and damage feedback
pub fn plugin(app: &mut App) {
    app.init_resource::<ActiveEnemies>()
        .add_message::<SpellHitEvent>()
        .add_message::<EnemyDeathEvent>()
        .add_message::<PlayerHitEvent>()
        .add_message::<PlayerHealthChanged>()
        .add_systems(
            FixedUpdate,
            (
                resolve_spell_hits_system,
                tick_invulnerability_system,
            )
                .in_set(GameSet::Combat)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            hit_flash_system
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::InGame)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEvent;

    #[test]
    fn plugin_registers_messages() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.add_message::<SoundEvent>();
        app.add_plugins(plugin);

        let entity = app.world_mut().spawn_empty().id();
        app.world_mut().write_message(PlayerHitEvent {
            damage: 1,
            source: Vec2::ZERO,
        });
        app.world_mut().write_message(PlayerHealthChanged { current: 5, max: 5 });
        app.world_mut()
            .write_message(SpellHitEvent::new(entity, 1, crate::element::Element::Fire));
        app.update();

        assert!(app.world().resource::<ActiveEnemies>().is_empty());
    }
}
