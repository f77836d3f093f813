use std::collections::HashSet;

use bevy::prelude::*;

/// The set of enemies still taking part in the current wave.
///
/// An enemy enters on spawn and leaves when it is killed by a spell or when
/// it detonates; a detonating enemy keeps its entity alive for the blast
/// visual but is no longer targetable. The wave spawner considers a wave
/// cleared once this set is empty.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActiveEnemies {
    entities: HashSet<Entity>,
}

impl ActiveEnemies {
    pub fn insert(&mut self, entity: Entity) -> bool {
        self.entities.insert(entity)
    }

    /// Returns true if the entity was active
    pub fn remove(&mut self, entity: Entity) -> bool {
        self.entities.remove(&entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_enemies_starts_empty() {
        let active = ActiveEnemies::default();
        assert!(active.is_empty());
        assert_eq!(active.len(), 0);
    }

    #[test]
    fn active_enemies_insert_and_remove() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut active = ActiveEnemies::default();
        assert!(active.insert(a));
        assert!(active.insert(b));
        assert!(!active.insert(a), "inserting twice should report no change");
        assert_eq!(active.len(), 2);

        assert!(active.remove(a));
        assert!(!active.remove(a), "second removal is a no-op");
        assert!(!active.contains(a));
        assert!(active.contains(b));
    }

    #[test]
    fn active_enemies_clear() {
        let mut world = World::new();
        let mut active = ActiveEnemies::default();
        active.insert(world.spawn_empty().id());
        active.clear();
        assert!(active.is_empty());
    }
}
