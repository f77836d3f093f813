use bevy::prelude::*;

use crate::camera::components::{CameraShake, MainCamera, ShakeEvent};
use crate::game::resources::PlayerPosition;

/// Higher is snappier
pub const CAMERA_FOLLOW_SPEED: f32 = 6.0;

pub fn spawn_camera(mut commands: Commands, cameras: Query<Entity, With<MainCamera>>) {
    if cameras.is_empty() {
        commands.spawn((Camera2d, MainCamera::default()));
    }
}

/// Snaps the camera back to the origin when a run is rebuilt
pub fn reset_camera_system(
    mut shake: ResMut<CameraShake>,
    mut cameras: Query<(&mut Transform, &mut MainCamera)>,
) {
    *shake = CameraShake::default();
    for (mut transform, mut camera) in cameras.iter_mut() {
        camera.anchor = Vec2::ZERO;
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
    }
}

pub fn shake_events_system(
    time: Res<Time>,
    mut events: MessageReader<ShakeEvent>,
    mut shake: ResMut<CameraShake>,
) {
    shake.tick(time.delta());
    for event in events.read() {
        shake.start(*event);
    }
}

/// Eases the camera towards the player and adds the current shake
pub fn camera_follow_system(
    time: Res<Time>,
    player_position: Res<PlayerPosition>,
    shake: Res<CameraShake>,
    mut cameras: Query<(&mut Transform, &mut MainCamera)>,
) {
    let blend = 1.0 - (-CAMERA_FOLLOW_SPEED * time.delta_secs()).exp();
    let jitter = shake.offset(time.elapsed_secs());

    for (mut transform, mut camera) in cameras.iter_mut() {
        camera.anchor = camera.anchor.lerp(player_position.0, blend);
        let position = camera.anchor + jitter;
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
