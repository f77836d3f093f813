use bevy::prelude::*;

/// System sets for explicit ordering of game systems.
///
/// The simulation (AI, spells, combat, spawning) is configured on `FixedUpdate`;
/// input and presentation on `Update`. Both schedules chain the sets in the
/// declaration order below.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Input handling and cast resolution
    Input,
    /// Velocity integration for player and enemies
    Movement,
    /// Enemy behavior and player hit-stun state machines
    Ai,
    /// Spell effect variants emit hits
    Spells,
    /// Hits, damage, deaths
    Combat,
    /// Wave spawner and level flow
    Spawning,
    /// Visual effects, audio, camera, HUD
    Effects,
}

impl GameSet {
    /// The chained ordering used by every schedule.
    pub fn ordered() -> (GameSet, GameSet, GameSet, GameSet, GameSet, GameSet, GameSet) {
        (
            GameSet::Input,
            GameSet::Movement,
            GameSet::Ai,
            GameSet::Spells,
            GameSet::Combat,
            GameSet::Spawning,
            GameSet::Effects,
        )
    }
}

/// Ordering for the systems that rebuild a run on `OnEnter(GameState::Setup)`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetupSet {
    /// Despawn everything left over from the previous run
    Cleanup,
    /// Reset resources (RNG, registry, spawner, progress)
    Reset,
    /// Spawn the arena, player, camera and HUD
    Spawn,
}

impl SetupSet {
    pub fn ordered() -> (SetupSet, SetupSet, SetupSet) {
        (SetupSet::Cleanup, SetupSet::Reset, SetupSet::Spawn)
    }
}
