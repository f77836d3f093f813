//! Spell effects spawned by successful casts.
//!
//! The effect variant depends only on the spell level:
//! level 1 fires a projectile, level 2 throws a bomb and level 3 lays down
//! a rectangular area in front of the caster.

pub mod area_of_effect;
pub mod bomb;
pub mod plugin;
pub mod projectile;

pub use area_of_effect::{AreaOfEffect, AreaTile, OrientedRect};
pub use bomb::Bomb;
pub use plugin::plugin;
pub use projectile::Projectile;

use bevy::prelude::*;

use crate::element::Element;
use crate::game::components::GameplayEntity;
use crate::spell::components::SpellDefinition;

/// Z layer for spell sprites, above bodies
pub const SPELL_Z: f32 = 3.0;

/// Which effect a spell level produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellEffectKind {
    Projectile,
    Bomb,
    AreaOfEffect,
}

impl SpellEffectKind {
    pub fn for_level(level: u8) -> SpellEffectKind {
        match level {
            0 | 1 => SpellEffectKind::Projectile,
            2 => SpellEffectKind::Bomb,
            _ => SpellEffectKind::AreaOfEffect,
        }
    }
}

/// Common construction for every spell effect component
pub trait SpellEffect: Component + Sized {
    const KIND: SpellEffectKind;

    /// Build the effect cast from `origin` towards the unit vector `direction`
    fn init(origin: Vec2, direction: Vec2, damage: i32, element: Element) -> Self;

    /// Where the effect entity starts
    fn transform(&self, origin: Vec2) -> Transform;

    fn sprite(&self) -> Sprite;
}

/// Spawns the effect matching `spell`'s level. A zero `direction` casts to the right.
pub fn spawn_spell_effect(
    commands: &mut Commands,
    spell: &SpellDefinition,
    origin: Vec2,
    direction: Vec2,
) -> Entity {
    let direction = direction.try_normalize().unwrap_or(Vec2::X);
    match spell.effect_kind() {
        SpellEffectKind::Projectile => spawn_effect(
            commands,
            Projectile::init(origin, direction, spell.damage, spell.element),
            origin,
        ),
        SpellEffectKind::Bomb => spawn_effect(
            commands,
            Bomb::init(origin, direction, spell.damage, spell.element),
            origin,
        ),
        SpellEffectKind::AreaOfEffect => spawn_effect(
            commands,
            AreaOfEffect::init(origin, direction, spell.damage, spell.element),
            origin,
        ),
    }
}

fn spawn_effect<E: SpellEffect>(commands: &mut Commands, effect: E, origin: Vec2) -> Entity {
    trace!("Spawning {:?} effect at {origin}", E::KIND);
    let transform = effect.transform(origin);
    let sprite = effect.sprite();
    commands.spawn((effect, sprite, transform, GameplayEntity)).id()
}
