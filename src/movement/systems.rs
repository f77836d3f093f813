use bevy::prelude::*;

use crate::arena::components::TerrainBlock;
use crate::arena::resources::ArenaBounds;
use crate::movement::components::{BodyRadius, FacesVelocity, Velocity};

/// Move a circle by `delta`, resolving each axis separately so a body that
/// runs into terrain slides along it instead of stopping dead.
pub fn slide_move(
    position: Vec2,
    delta: Vec2,
    radius: f32,
    terrain: &[(Vec2, TerrainBlock)],
) -> Vec2 {
    let blocked = |p: Vec2| {
        terrain
            .iter()
            .any(|(center, block)| block.overlaps_circle(*center, p, radius))
    };

    let mut result = position;
    let step_x = Vec2::new(result.x + delta.x, result.y);
    if !blocked(step_x) {
        result = step_x;
    }
    let step_y = Vec2::new(result.x, result.y + delta.y);
    if !blocked(step_y) {
        result = step_y;
    }
    result
}

/// Integrates velocity for every body, keeping it out of terrain and inside
/// the arena.
pub fn apply_velocity_system(
    time: Res<Time>,
    bounds: Res<ArenaBounds>,
    terrain_query: Query<(&Transform, &TerrainBlock), Without<BodyRadius>>,
    mut bodies: Query<(&mut Transform, &Velocity, &BodyRadius)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let terrain: Vec<(Vec2, TerrainBlock)> = terrain_query
        .iter()
        .map(|(transform, block)| (transform.translation.truncate(), *block))
        .collect();

    for (mut transform, velocity, radius) in bodies.iter_mut() {
        if velocity.0 == Vec2::ZERO {
            continue;
        }
        let position = transform.translation.truncate();
        let moved = slide_move(position, velocity.0 * dt, radius.0, &terrain);
        let clamped = bounds.inner_bounds(radius.0).clamp(moved);
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;
    }
}

/// Flips sprites to face their horizontal direction of travel
pub fn update_facing_system(mut query: Query<(&Velocity, &mut Sprite), With<FacesVelocity>>) {
    for (velocity, mut sprite) in query.iter_mut() {
        if velocity.0.x < -f32::EPSILON {
            sprite.flip_x = true;
        } else if velocity.0.x > f32::EPSILON {
            sprite.flip_x = false;
        }
    }
}
