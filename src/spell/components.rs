use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;

use crate::element::Element;
use crate::spells::SpellEffectKind;

/// Highest spell level; also the longest combo and the spell buffer capacity.
pub const MAX_SPELL_LEVEL: u8 = 3;

/// One of the three spell-buffer inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboSymbol {
    J,
    K,
    L,
}

impl ComboSymbol {
    pub fn all() -> &'static [ComboSymbol] {
        &[ComboSymbol::J, ComboSymbol::K, ComboSymbol::L]
    }

    pub fn key_code(&self) -> KeyCode {
        match self {
            ComboSymbol::J => KeyCode::KeyJ,
            ComboSymbol::K => KeyCode::KeyK,
            ComboSymbol::L => KeyCode::KeyL,
        }
    }

    pub fn from_key_code(key: KeyCode) -> Option<ComboSymbol> {
        match key {
            KeyCode::KeyJ => Some(ComboSymbol::J),
            KeyCode::KeyK => Some(ComboSymbol::K),
            KeyCode::KeyL => Some(ComboSymbol::L),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            ComboSymbol::J => 'J',
            ComboSymbol::K => 'K',
            ComboSymbol::L => 'L',
        }
    }

    pub fn from_char(c: char) -> Option<ComboSymbol> {
        match c.to_ascii_uppercase() {
            'J' => Some(ComboSymbol::J),
            'K' => Some(ComboSymbol::K),
            'L' => Some(ComboSymbol::L),
            _ => None,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ComboSymbol {
        let all = ComboSymbol::all();
        all[rng.gen_range(0..all.len())]
    }
}

impl fmt::Display for ComboSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered input sequence bound to a spell. Its length equals the spell level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ComboKey(Vec<ComboSymbol>);

impl ComboKey {
    pub fn new(symbols: Vec<ComboSymbol>) -> Self {
        Self(symbols)
    }

    /// A uniformly random key of `len` symbols
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self((0..len).map(|_| ComboSymbol::random(rng)).collect())
    }

    pub fn symbols(&self) -> &[ComboSymbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseComboError {
    #[error("invalid combo symbol '{0}' (expected J, K or L)")]
    InvalidSymbol(char),
}

impl FromStr for ComboKey {
    type Err = ParseComboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| ComboSymbol::from_char(c).ok_or(ParseComboError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(ComboKey)
    }
}

/// A castable spell: element, level and the damage that level deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellDefinition {
    pub element: Element,
    pub level: u8,
    pub damage: i32,
}

impl SpellDefinition {
    /// Returns None for levels outside `1..=MAX_SPELL_LEVEL`.
    pub fn new(element: Element, level: u8) -> Option<Self> {
        let damage = damage_for_level(level)?;
        Some(Self {
            element,
            level,
            damage,
        })
    }

    /// Shape of the effect this spell spawns
    pub fn effect_kind(&self) -> SpellEffectKind {
        SpellEffectKind::for_level(self.level)
    }
}

/// Level 1 hits hardest; the larger shapes trade damage for coverage.
pub fn damage_for_level(level: u8) -> Option<i32> {
    match level {
        1 => Some(2),
        2 => Some(1),
        3 => Some(1),
        _ => None,
    }
}
