use bevy::prelude::*;

/// Axis-aligned solid obstacle. Bodies slide along it, projectiles die on it,
/// bombs stop on it and area tiles skip the cells it covers.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TerrainBlock {
    pub half_size: Vec2,
}

impl TerrainBlock {
    pub fn new(size: Vec2) -> Self {
        Self {
            half_size: size / 2.0,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.half_size * 2.0
    }

    /// Does a block centered at `center` contain `point`?
    pub fn contains_point(&self, center: Vec2, point: Vec2) -> bool {
        let d = (point - center).abs();
        d.x <= self.half_size.x && d.y <= self.half_size.y
    }

    /// Does a circle of `radius` at `point` overlap a block centered at `center`?
    pub fn overlaps_circle(&self, center: Vec2, point: Vec2, radius: f32) -> bool {
        let offset = point - center;
        let closest = offset.clamp(-self.half_size, self.half_size);
        offset.distance_squared(closest) < radius * radius
            || self.contains_point(center, point)
    }
}

/// Marker for the floor sprite
#[derive(Component)]
pub struct ArenaFloor;

/// True if a circle at `point` overlaps any block in `terrain`.
pub fn overlaps_terrain<'a>(
    terrain: impl IntoIterator<Item = (&'a Transform, &'a TerrainBlock)>,
    point: Vec2,
    radius: f32,
) -> bool {
    terrain
        .into_iter()
        .any(|(transform, block)| block.overlaps_circle(transform.translation.truncate(), point, radius))
}
