use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::components::{SfxChannel, SoundEvent, SoundLimiter};
use crate::game::resources::GameSettings;

/// Plays queued sound effects on the sfx channel.
///
/// Messages are always drained. Nothing plays when muted or when the asset
/// server or channel is missing (headless runs and tests).
pub fn play_sound_events_system(
    mut events: MessageReader<SoundEvent>,
    time: Res<Time>,
    settings: Option<Res<GameSettings>>,
    asset_server: Option<Res<AssetServer>>,
    channel: Option<Res<AudioChannel<SfxChannel>>>,
    mut limiter: ResMut<SoundLimiter>,
) {
    let muted = settings.is_some_and(|s| s.mute);
    let now = time.elapsed_secs();

    for SoundEvent(sound) in events.read() {
        if muted {
            continue;
        }
        let (Some(asset_server), Some(channel)) = (asset_server.as_ref(), channel.as_ref()) else {
            continue;
        };
        if !limiter.try_play(*sound, now) {
            continue;
        }
        channel
            .play(asset_server.load(sound.path()))
            .with_volume(sound.volume_db());
    }
}
