pub use bevy::prelude::*;
pub use crate::states::*;

pub use crate::combat::{ActiveEnemies, Health};
pub use crate::element::Element;
pub use crate::enemies::{Enemy, EnemyBrain, EnemyState};
pub use crate::game::{GameRng, GameSet, GameSettings, GameplayEntity, LevelProgress, SetupSet};
pub use crate::player::{Player, PlayerState};
pub use crate::spell::{ComboKey, ComboRegistry, ComboSymbol, SpellBuffer, SpellDefinition};
pub use crate::wave::WaveSpawner;
