use std::fmt;

use bevy::prelude::*;
use rand::Rng;

/// Elemental affinity shared by spells and enemies.
///
/// The three elements form a closed rock-paper-scissors cycle: each element
/// is only hurt by exactly one other element (see [`Element::vulnerability`]).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Element {
    #[default]
    Fire,
    Water,
    Grass,
}

impl Element {
    /// Returns the visual color associated with this element.
    pub fn color(&self) -> Color {
        match self {
            Element::Fire => Color::srgb_u8(255, 110, 40),  // Ember orange
            Element::Water => Color::srgb_u8(60, 140, 255), // Deep blue
            Element::Grass => Color::srgb_u8(80, 200, 70),  // Leaf green
        }
    }

    /// Returns the display name for this element.
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Grass => "Grass",
        }
    }

    /// The element whose spells damage an enemy of this element.
    ///
    /// Fire is doused by Water, Water is drunk by Grass, Grass is burnt by Fire.
    pub fn vulnerability(&self) -> Element {
        match self {
            Element::Fire => Element::Water,
            Element::Water => Element::Grass,
            Element::Grass => Element::Fire,
        }
    }

    /// True when a spell of `incoming` element can hurt this element.
    pub fn is_vulnerable_to(&self, incoming: Element) -> bool {
        self.vulnerability() == incoming
    }

    /// Returns all element variants for iteration.
    pub fn all() -> &'static [Element] {
        &[Element::Fire, Element::Water, Element::Grass]
    }

    /// Picks an element uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Element {
        let all = Element::all();
        all[rng.gen_range(0..all.len())]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
