use bevy::prelude::*;
use rand::Rng;

/// Half the arena width in world units (pixels)
pub const ARENA_HALF_WIDTH: f32 = 480.0;

/// Half the arena height in world units (pixels)
pub const ARENA_HALF_HEIGHT: f32 = 320.0;

/// Distance between the arena edge and the enemy spawn points
pub const SPAWN_MARGIN: f32 = 48.0;

/// Resource defining the playable arena boundaries
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT)
    }
}

impl ArenaBounds {
    /// Creates bounds centered on the origin
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            min_x: -half_width,
            max_x: half_width,
            min_y: -half_height,
            max_y: half_height,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Checks if a position is within the arena bounds (edges inclusive)
    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.y >= self.min_y
            && position.y <= self.max_y
    }

    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y.clamp(self.min_y, self.max_y),
        )
    }

    /// Bounds shrunk by `margin` on every side, used to keep bodies of a
    /// given radius fully inside the arena
    pub fn inner_bounds(&self, margin: f32) -> ArenaBounds {
        ArenaBounds {
            min_x: self.min_x + margin,
            max_x: self.max_x - margin,
            min_y: self.min_y + margin,
            max_y: self.max_y - margin,
        }
    }

    /// Fixed enemy spawn points: the four corners and the four edge midpoints,
    /// inset by `SPAWN_MARGIN`.
    pub fn spawn_points(&self) -> [Vec2; 8] {
        let inner = self.inner_bounds(SPAWN_MARGIN);
        let mid_x = (inner.min_x + inner.max_x) / 2.0;
        let mid_y = (inner.min_y + inner.max_y) / 2.0;
        [
            Vec2::new(inner.min_x, inner.min_y),
            Vec2::new(mid_x, inner.min_y),
            Vec2::new(inner.max_x, inner.min_y),
            Vec2::new(inner.max_x, mid_y),
            Vec2::new(inner.max_x, inner.max_y),
            Vec2::new(mid_x, inner.max_y),
            Vec2::new(inner.min_x, inner.max_y),
            Vec2::new(inner.min_x, mid_y),
        ]
    }

    /// Picks one of the spawn points uniformly at random
    pub fn random_spawn_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let points = self.spawn_points();
        points[rng.gen_range(0..points.len())]
    }
}
