use bevy::prelude::*;

use crate::element::Element;
use crate::spell::components::{ComboKey, ComboSymbol};

/// Resolve the spell buffer and fire the matching spell from `origin`
/// along `direction`.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CastRequest {
    pub origin: Vec2,
    pub direction: Vec2,
}

/// Spell buffer contents after any change
#[derive(Message, Debug, Clone, PartialEq, Eq, Default)]
pub struct SpellBufferChanged {
    pub symbols: Vec<ComboSymbol>,
}

impl SpellBufferChanged {
    pub fn text(&self) -> String {
        self.symbols.iter().map(|s| s.as_char()).collect()
    }
}

/// An element's combo was (re)generated
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct ComboChanged {
    pub element: Element,
    pub combo: ComboKey,
    pub level: u8,
}

/// Outcome of one cast attempt. `element` is None when the buffer matched nothing.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellCastEvent {
    pub element: Option<Element>,
    pub success: bool,
}

/// Upgrade menu choice. `None` skips the upgrade.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeSpellRequest {
    pub element: Option<Element>,
}
