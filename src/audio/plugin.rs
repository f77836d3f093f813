use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::components::{SfxChannel, SoundEvent, SoundLimiter};
use crate::audio::systems::play_sound_events_system;
use crate::game::sets::GameSet;

/// Sound effects. Requires `bevy_kira_audio::AudioPlugin` to be added first.
pub fn plugin(app: &mut App) {
    app.add_audio_channel::<SfxChannel>()
        .init_resource::<SoundLimiter>()
        .add_message::<SoundEvent>()
        .add_systems(Update, play_sound_events_system.in_set(GameSet::Effects));
}
