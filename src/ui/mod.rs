pub mod components;
pub mod plugin;
pub mod systems;

pub use components::*;
pub use plugin::plugin;
pub use systems::{prompt_text, upgrade_key_choice, upgrade_label_text, MAX_LEVEL_TEXT};
