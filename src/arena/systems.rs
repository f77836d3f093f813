use bevy::prelude::*;

use crate::arena::components::{ArenaFloor, TerrainBlock};
use crate::arena::resources::ArenaBounds;
use crate::game::components::GameplayEntity;

pub const FLOOR_COLOR: Color = Color::srgb(0.16, 0.15, 0.18);
pub const TERRAIN_COLOR: Color = Color::srgb(0.38, 0.33, 0.30);

/// Obstacles placed in the arena as (center, size)
pub const TERRAIN_LAYOUT: [(Vec2, Vec2); 6] = [
    (Vec2::new(-224.0, 128.0), Vec2::new(64.0, 64.0)),
    (Vec2::new(224.0, 128.0), Vec2::new(64.0, 64.0)),
    (Vec2::new(-224.0, -128.0), Vec2::new(64.0, 64.0)),
    (Vec2::new(224.0, -128.0), Vec2::new(64.0, 64.0)),
    (Vec2::new(0.0, 224.0), Vec2::new(192.0, 32.0)),
    (Vec2::new(0.0, -224.0), Vec2::new(192.0, 32.0)),
];

/// Spawns the floor and terrain obstacles for a new run
pub fn spawn_arena(mut commands: Commands, bounds: Res<ArenaBounds>) {
    commands.spawn((
        ArenaFloor,
        GameplayEntity,
        Sprite::from_color(FLOOR_COLOR, Vec2::new(bounds.width(), bounds.height())),
        Transform::from_xyz(
            (bounds.min_x + bounds.max_x) / 2.0,
            (bounds.min_y + bounds.max_y) / 2.0,
            -10.0,
        ),
    ));

    for (center, size) in TERRAIN_LAYOUT {
        spawn_terrain_block(&mut commands, center, size);
    }
}

pub fn spawn_terrain_block(commands: &mut Commands, center: Vec2, size: Vec2) -> Entity {
    commands
        .spawn((
            TerrainBlock::new(size),
            GameplayEntity,
            Sprite::from_color(TERRAIN_COLOR, size),
            Transform::from_translation(center.extend(-1.0)),
        ))
        .id()
}
