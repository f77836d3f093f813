pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Sound, SoundEvent, SoundLimiter, SfxChannel};
pub use plugin::plugin;
pub use systems::play_sound_events_system;
