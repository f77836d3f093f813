pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{CameraShake, MainCamera, ShakeEvent};
pub use plugin::plugin;
pub use systems::{camera_follow_system, reset_camera_system, shake_events_system, spawn_camera};
