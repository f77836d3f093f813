use bevy::prelude::*;

use crate::audio::{Sound, SoundEvent};
use crate::game::resources::GameRng;
use crate::spell::components::{ComboKey, SpellDefinition};
use crate::spell::events::{CastRequest, ComboChanged, SpellBufferChanged, SpellCastEvent};
use crate::spell::resources::{ComboRegistry, SpellBuffer};
use crate::spells::spawn_spell_effect;

/// What a cast attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastOutcome {
    Cast(SpellDefinition),
    /// The buffer matched no combo
    Fizzled(ComboKey),
}

/// Look the buffer up in the registry. The buffer is always cleared.
pub fn resolve_cast(buffer: &mut SpellBuffer, registry: &ComboRegistry) -> CastOutcome {
    let key = buffer.as_key();
    buffer.clear();
    match registry.lookup(&key) {
        Some(spell) => CastOutcome::Cast(spell),
        None => CastOutcome::Fizzled(key),
    }
}

/// Resolves every pending cast request against the registry and spawns the
/// matched spell effect.
pub fn spell_cast_system(
    mut commands: Commands,
    mut requests: MessageReader<CastRequest>,
    mut buffer: ResMut<SpellBuffer>,
    registry: Res<ComboRegistry>,
    mut buffer_changed: MessageWriter<SpellBufferChanged>,
    mut cast_events: MessageWriter<SpellCastEvent>,
    mut sounds: MessageWriter<SoundEvent>,
) {
    for request in requests.read() {
        match resolve_cast(&mut buffer, &registry) {
            CastOutcome::Cast(spell) => {
                info!("Cast {} spell (level {})", spell.element, spell.level);
                spawn_spell_effect(&mut commands, &spell, request.origin, request.direction);
                sounds.write(SoundEvent(Sound::ShootProjectile));
                cast_events.write(SpellCastEvent {
                    element: Some(spell.element),
                    success: true,
                });
            }
            CastOutcome::Fizzled(key) => {
                debug!("No spell bound to combo '{key}'");
                sounds.write(SoundEvent(Sound::FailedSpell));
                cast_events.write(SpellCastEvent {
                    element: None,
                    success: false,
                });
            }
        }
        buffer_changed.write(SpellBufferChanged::default());
    }
}

/// Rolls fresh level-1 combos for every element at the start of a run
pub fn reset_spells_system(
    mut registry: ResMut<ComboRegistry>,
    mut buffer: ResMut<SpellBuffer>,
    mut rng: ResMut<GameRng>,
    mut combo_changed: MessageWriter<ComboChanged>,
    mut buffer_changed: MessageWriter<SpellBufferChanged>,
) {
    match ComboRegistry::with_starting_spells(&mut rng.0) {
        Ok((fresh, upgrades)) => {
            *registry = fresh;
            for upgrade in upgrades {
                combo_changed.write(ComboChanged {
                    element: upgrade.element,
                    combo: upgrade.combo,
                    level: upgrade.level,
                });
            }
        }
        Err(err) => error!("Could not roll starting spells: {err}"),
    }

    buffer.clear();
    buffer_changed.write(SpellBufferChanged::default());
}
