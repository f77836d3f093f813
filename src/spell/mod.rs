pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::{ComboKey, ComboSymbol, ParseComboError, SpellDefinition, MAX_SPELL_LEVEL};
pub use events::{CastRequest, ComboChanged, SpellBufferChanged, SpellCastEvent, UpgradeSpellRequest};
pub use plugin::plugin;
pub use resources::{ComboRegistry, ComboUpgrade, SpellBuffer, UpgradeError};
pub use systems::{resolve_cast, CastOutcome};
