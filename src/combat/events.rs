use bevy::prelude::*;

use crate::element::Element;

/// A spell effect touched an enemy. Resolved by `resolve_spell_hits_system`,
/// which applies the damage only if the enemy is vulnerable to `element`.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SpellHitEvent {
    pub target: Entity,
    pub damage: i32,
    pub element: Element,
}

impl SpellHitEvent {
    pub fn new(target: Entity, damage: i32, element: Element) -> Self {
        Self {
            target,
            damage,
            element,
        }
    }
}

/// Result of resolving one elemental hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Wrong element; health untouched
    Resisted,
    Damaged,
    Killed,
}

/// An enemy left the wave.
///
/// `killed` is true when a spell finished it and false when it blew itself
/// up. Listeners only shake the camera for the self-detonation case.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct EnemyDeathEvent {
    pub entity: Entity,
    pub element: Element,
    pub position: Vec2,
    pub killed: bool,
}

/// Damage dealt to the player by a detonating enemy
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PlayerHitEvent {
    pub damage: i32,
    /// World position of the damage source, used for knockback direction
    pub source: Vec2,
}

/// Player health changed (sent on setup and after every accepted hit)
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHealthChanged {
    pub current: i32,
    pub max: i32,
}

impl PlayerHealthChanged {
    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}
