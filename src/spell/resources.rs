use std::collections::{HashMap, VecDeque};
use std::fmt;

use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;

use crate::element::Element;
use crate::spell::components::{ComboKey, ComboSymbol, SpellDefinition, MAX_SPELL_LEVEL};

/// Spell buffer holds at most this many symbols
pub const SPELL_BUFFER_CAPACITY: usize = MAX_SPELL_LEVEL as usize;

/// Rejection-sampling budget for one new combo
pub const MAX_COMBO_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("{0} spell is already at max level")]
    MaxLevel(Element),
    #[error("no free combo of length {length} left for {element}")]
    ComboSpaceExhausted { element: Element, length: usize },
    #[error("combo {0} is already bound to another spell")]
    DuplicateCombo(ComboKey),
    #[error("combo length {0} is not a valid spell level")]
    InvalidLength(usize),
}

/// Result of a successful upgrade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboUpgrade {
    pub element: Element,
    pub combo: ComboKey,
    pub level: u8,
}

/// Mapping from combo to spell, at most one entry per element.
///
/// Keys are pairwise distinct at all times. Each upgrade replaces an
/// element's key with a fresh, longer one.
#[derive(Resource, Debug, Default, Clone)]
pub struct ComboRegistry {
    entries: HashMap<ComboKey, SpellDefinition>,
}

impl ComboRegistry {
    /// Registry with every element upgraded once, as at the start of a run
    pub fn with_starting_spells<R: Rng + ?Sized>(
        rng: &mut R,
    ) -> Result<(Self, Vec<ComboUpgrade>), UpgradeError> {
        let mut registry = Self::default();
        let upgrades = Element::all()
            .iter()
            .map(|element| registry.upgrade(*element, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((registry, upgrades))
    }

    fn entry_for(&self, element: Element) -> Option<(&ComboKey, &SpellDefinition)> {
        self.entries.iter().find(|(_, spell)| spell.element == element)
    }

    /// Current level of an element's spell, 0 when it has none
    pub fn level_of(&self, element: Element) -> u8 {
        self.entry_for(element).map_or(0, |(_, spell)| spell.level)
    }

    pub fn combo_for(&self, element: Element) -> Option<&ComboKey> {
        self.entry_for(element).map(|(key, _)| key)
    }

    pub fn can_upgrade(&self, element: Element) -> bool {
        self.level_of(element) < MAX_SPELL_LEVEL
    }

    /// Exact-match lookup of a completed input sequence
    pub fn lookup(&self, key: &ComboKey) -> Option<SpellDefinition> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComboKey, &SpellDefinition)> {
        self.entries.iter()
    }

    /// Raise an element's spell by one level under a freshly generated combo.
    ///
    /// Fails without touching the registry if the spell is maxed or no unused
    /// combo of the new length turns up within `MAX_COMBO_ATTEMPTS` samples.
    pub fn upgrade<R: Rng + ?Sized>(
        &mut self,
        element: Element,
        rng: &mut R,
    ) -> Result<ComboUpgrade, UpgradeError> {
        let level = self.level_of(element);
        if level >= MAX_SPELL_LEVEL {
            return Err(UpgradeError::MaxLevel(element));
        }

        let length = usize::from(level) + 1;
        let combo = (0..MAX_COMBO_ATTEMPTS)
            .map(|_| ComboKey::random(length, &mut *rng))
            .find(|candidate| !self.entries.contains_key(candidate))
            .ok_or(UpgradeError::ComboSpaceExhausted { element, length })?;

        self.assign(element, combo.clone())?;
        Ok(ComboUpgrade {
            element,
            level: level + 1,
            combo,
        })
    }

    /// Bind `key` to `element` at the level given by the key length,
    /// replacing the element's previous combo.
    pub fn assign(&mut self, element: Element, key: ComboKey) -> Result<(), UpgradeError> {
        let level = u8::try_from(key.len()).map_err(|_| UpgradeError::InvalidLength(key.len()))?;
        let spell =
            SpellDefinition::new(element, level).ok_or(UpgradeError::InvalidLength(key.len()))?;

        if let Some(existing) = self.entries.get(&key) {
            if existing.element != element {
                return Err(UpgradeError::DuplicateCombo(key));
            }
        }

        self.entries.retain(|_, spell| spell.element != element);
        self.entries.insert(key, spell);
        Ok(())
    }
}

/// Sliding window of the most recent spell inputs.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellBuffer {
    symbols: VecDeque<ComboSymbol>,
}

impl SpellBuffer {
    /// Append a symbol, dropping the oldest once over capacity
    pub fn push(&mut self, symbol: ComboSymbol) {
        self.symbols.push_back(symbol);
        while self.symbols.len() > SPELL_BUFFER_CAPACITY {
            self.symbols.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> Vec<ComboSymbol> {
        self.symbols.iter().copied().collect()
    }

    /// The buffer contents as a registry key
    pub fn as_key(&self) -> ComboKey {
        ComboKey::new(self.symbols())
    }
}

impl fmt::Display for SpellBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn key(s: &str) -> ComboKey {
        s.parse().unwrap()
    }

    fn assert_unique_keys(registry: &ComboRegistry) {
        let keys: HashSet<_> = registry.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys.len(), registry.len());
        let elements: HashSet<_> = registry.iter().map(|(_, s)| s.element).collect();
        assert_eq!(elements.len(), registry.len(), "one entry per element");
    }

    mod combo_registry_tests {
        use super::*;

        #[test]
        fn empty_registry_has_level_zero() {
            let registry = ComboRegistry::default();
            assert_eq!(registry.level_of(Element::Fire), 0);
            assert!(registry.can_upgrade(Element::Fire));
            assert!(registry.combo_for(Element::Fire).is_none());
        }

        #[test]
        fn starting_spells_cover_every_element_at_level_one() {
            let mut rng = StdRng::seed_from_u64(1);
            let (registry, upgrades) = ComboRegistry::with_starting_spells(&mut rng).unwrap();

            assert_eq!(registry.len(), 3);
            assert_eq!(upgrades.len(), 3);
            for element in Element::all() {
                assert_eq!(registry.level_of(*element), 1);
                assert_eq!(registry.combo_for(*element).unwrap().len(), 1);
            }
            assert_unique_keys(&registry);
        }

        #[test]
        fn upgrade_three_times_then_fails() {
            let mut rng = StdRng::seed_from_u64(2);
            let mut registry = ComboRegistry::default();

            for expected in 1..=3 {
                let upgrade = registry.upgrade(Element::Water, &mut rng).unwrap();
                assert_eq!(upgrade.level, expected);
                assert_eq!(upgrade.combo.len(), expected as usize);
            }

            let before = registry.clone();
            let result = registry.upgrade(Element::Water, &mut rng);
            assert_eq!(result, Err(UpgradeError::MaxLevel(Element::Water)));
            assert!(!registry.can_upgrade(Element::Water));
            assert_eq!(
                registry.combo_for(Element::Water),
                before.combo_for(Element::Water),
                "failed upgrade leaves state unchanged"
            );
        }

        #[test]
        fn upgrade_replaces_previous_combo() {
            let mut rng = StdRng::seed_from_u64(3);
            let (mut registry, _) = ComboRegistry::with_starting_spells(&mut rng).unwrap();
            let old = registry.combo_for(Element::Fire).cloned().unwrap();

            registry.upgrade(Element::Fire, &mut rng).unwrap();

            assert_eq!(registry.len(), 3, "capacity stays at one per element");
            assert!(registry.lookup(&old).is_none());
            assert_eq!(registry.level_of(Element::Fire), 2);
        }

        #[test]
        fn keys_stay_unique_across_many_upgrade_sequences() {
            for seed in 0..50 {
                let mut rng = StdRng::seed_from_u64(seed);
                let (mut registry, _) = ComboRegistry::with_starting_spells(&mut rng).unwrap();
                for step in 0..9 {
                    let element = Element::all()[(seed as usize + step) % 3];
                    let _ = registry.upgrade(element, &mut rng);
                    assert_unique_keys(&registry);
                    assert!(registry.len() <= 3);
                }
            }
        }

        #[test]
        fn level_one_combos_use_all_three_symbols() {
            let mut rng = StdRng::seed_from_u64(4);
            let (registry, _) = ComboRegistry::with_starting_spells(&mut rng).unwrap();
            let symbols: HashSet<_> = registry
                .iter()
                .map(|(k, _)| k.symbols()[0])
                .collect();
            assert_eq!(symbols.len(), 3);
        }

        #[test]
        fn lookup_matches_exact_key_only() {
            let mut registry = ComboRegistry::default();
            registry.assign(Element::Fire, key("J")).unwrap();
            registry.assign(Element::Water, key("K")).unwrap();
            registry.assign(Element::Grass, key("L")).unwrap();

            let fire = registry.lookup(&key("J")).unwrap();
            assert_eq!(fire.element, Element::Fire);
            assert_eq!(fire.level, 1);
            assert_eq!(fire.damage, 2);
            assert!(registry.lookup(&key("JJ")).is_none());
            assert!(registry.lookup(&key("")).is_none());
        }

        #[test]
        fn assign_rejects_key_owned_by_another_element() {
            let mut registry = ComboRegistry::default();
            registry.assign(Element::Fire, key("J")).unwrap();
            let result = registry.assign(Element::Water, key("J"));
            assert_eq!(result, Err(UpgradeError::DuplicateCombo(key("J"))));
            assert_eq!(registry.level_of(Element::Water), 0);
        }

        #[test]
        fn assign_rejects_invalid_lengths() {
            let mut registry = ComboRegistry::default();
            assert_eq!(
                registry.assign(Element::Fire, key("")),
                Err(UpgradeError::InvalidLength(0))
            );
            assert_eq!(
                registry.assign(Element::Fire, key("JJJJ")),
                Err(UpgradeError::InvalidLength(4))
            );
        }

        #[test]
        fn upgrade_finds_the_only_free_combo() {
            let mut registry = ComboRegistry::default();
            registry.assign(Element::Water, key("J")).unwrap();
            registry.assign(Element::Grass, key("L")).unwrap();

            let mut rng = StdRng::seed_from_u64(5);
            let upgrade = registry.upgrade(Element::Fire, &mut rng).unwrap();
            assert_eq!(upgrade.combo, key("K"));
            assert_unique_keys(&registry);
        }

        #[test]
        fn upgrade_fails_when_combo_space_is_full() {
            // Every length-1 combo is taken, so no new level-1 spell can be made
            let mut full = ComboRegistry::default();
            full.entries.insert(key("J"), SpellDefinition::new(Element::Fire, 1).unwrap());
            full.entries.insert(key("K"), SpellDefinition::new(Element::Water, 1).unwrap());
            full.entries.insert(key("L"), SpellDefinition::new(Element::Water, 1).unwrap());

            let mut rng = StdRng::seed_from_u64(6);
            let result = full.upgrade(Element::Grass, &mut rng);
            assert_eq!(
                result,
                Err(UpgradeError::ComboSpaceExhausted {
                    element: Element::Grass,
                    length: 1
                })
            );
            assert_eq!(full.len(), 3, "failed upgrade does not mutate");
        }

        #[test]
        fn upgrade_error_messages_are_readable() {
            assert_eq!(
                UpgradeError::MaxLevel(Element::Fire).to_string(),
                "Fire spell is already at max level"
            );
            assert_eq!(
                UpgradeError::DuplicateCombo(key("JK")).to_string(),
                "combo JK is already bound to another spell"
            );
        }
    }

    mod spell_buffer_tests {
        use super::*;

        #[test]
        fn push_keeps_order() {
            let mut buffer = SpellBuffer::default();
            buffer.push(ComboSymbol::K);
            buffer.push(ComboSymbol::J);
            assert_eq!(buffer.symbols(), vec![ComboSymbol::K, ComboSymbol::J]);
            assert_eq!(buffer.to_string(), "KJ");
        }

        #[test]
        fn four_pushes_keep_last_three() {
            let mut buffer = SpellBuffer::default();
            buffer.push(ComboSymbol::J);
            buffer.push(ComboSymbol::K);
            buffer.push(ComboSymbol::L);
            buffer.push(ComboSymbol::J);
            assert_eq!(
                buffer.symbols(),
                vec![ComboSymbol::K, ComboSymbol::L, ComboSymbol::J]
            );
            assert_eq!(buffer.len(), SPELL_BUFFER_CAPACITY);
        }

        #[test]
        fn clear_empties_buffer() {
            let mut buffer = SpellBuffer::default();
            buffer.push(ComboSymbol::L);
            buffer.clear();
            assert!(buffer.is_empty());
            assert!(buffer.as_key().is_empty());
        }
    }
}
