use bevy::prelude::*;

use crate::arena::components::TerrainBlock;
use crate::combat::events::SpellHitEvent;
use crate::combat::resources::ActiveEnemies;
use crate::element::Element;
use crate::enemies::components::Enemy;
use crate::spells::{SpellEffect, SpellEffectKind, SPELL_Z};

/// Edge length of one decorative tile
pub const AOE_TILE_SIZE: f32 = 32.0;
/// Tiles across the cast direction
pub const AOE_WIDTH_TILES: usize = 3;
/// Tiles along the cast direction
pub const AOE_HEIGHT_TILES: usize = 5;
/// How far ahead of the caster the rectangle is centered
pub const AOE_DISTANCE: f32 = 96.0;
pub const AOE_TICK_INTERVAL: f32 = 0.5;
pub const AOE_LIFETIME: f32 = 3.0;

/// A rectangle rotated to an arbitrary direction.
///
/// `v1` is the half extent along the facing direction and `v2` the half
/// extent across it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub center: Vec2,
    pub v1: Vec2,
    pub v2: Vec2,
}

impl OrientedRect {
    /// `width` is measured across `direction`, `height` along it
    pub fn new(center: Vec2, direction: Vec2, width: f32, height: f32) -> Self {
        let axis = direction.try_normalize().unwrap_or(Vec2::X);
        Self {
            center,
            v1: axis * height / 2.0,
            v2: axis.perp() * width / 2.0,
        }
    }

    pub fn top_right(&self) -> Vec2 {
        self.center + self.v1 - self.v2
    }

    pub fn top_left(&self) -> Vec2 {
        self.center + self.v1 + self.v2
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.center - self.v1 - self.v2
    }

    pub fn bottom_left(&self) -> Vec2 {
        self.center - self.v1 + self.v2
    }

    /// Rotation of the facing axis, in radians
    pub fn angle(&self) -> f32 {
        self.v1.to_angle()
    }

    /// Strict point-in-rectangle test by projecting onto two edges
    pub fn contains(&self, point: Vec2) -> bool {
        let origin = self.top_left();
        let am = point - origin;
        let ab = self.top_right() - origin;
        let ad = self.bottom_left() - origin;

        let am_ab = am.dot(ab);
        let am_ad = am.dot(ad);
        0.0 < am_ab && am_ab < ab.dot(ab) && 0.0 < am_ad && am_ad < ad.dot(ad)
    }

    /// Centers of a `columns` x `rows` grid of `tile`-sized cells, starting
    /// at the bottom-right corner. Columns run across the facing direction.
    pub fn tile_centers(&self, tile: f32, columns: usize, rows: usize) -> Vec<Vec2> {
        let across = self.v2.normalize_or_zero();
        let along = self.v1.normalize_or_zero();
        let corner = self.bottom_right();

        (0..columns * rows)
            .map(|i| {
                let col = (i % columns) as f32;
                let row = (i / columns) as f32;
                corner + across * (col + 0.5) * tile + along * (row + 0.5) * tile
            })
            .collect()
    }
}

/// Level 3 spell: a stationary rectangle that damages whatever stands in it
#[derive(Component, Debug, Clone)]
pub struct AreaOfEffect {
    pub rect: OrientedRect,
    pub damage: i32,
    pub element: Element,
    /// Seconds until the next damage pulse; the first pulse is immediate
    pub damage_countdown: f32,
    pub lifetime: Timer,
}

impl AreaOfEffect {
    /// Advances the pulse countdown, returning true when damage is due
    pub fn tick_pulse(&mut self, dt: f32) -> bool {
        if self.damage_countdown <= 0.0 {
            self.damage_countdown = AOE_TICK_INTERVAL;
            true
        } else {
            self.damage_countdown -= dt;
            false
        }
    }
}

impl SpellEffect for AreaOfEffect {
    const KIND: SpellEffectKind = SpellEffectKind::AreaOfEffect;

    fn init(origin: Vec2, direction: Vec2, damage: i32, element: Element) -> Self {
        let center = origin + direction * AOE_DISTANCE;
        Self {
            rect: OrientedRect::new(
                center,
                direction,
                AOE_WIDTH_TILES as f32 * AOE_TILE_SIZE,
                AOE_HEIGHT_TILES as f32 * AOE_TILE_SIZE,
            ),
            damage,
            element,
            damage_countdown: 0.0,
            lifetime: Timer::from_seconds(AOE_LIFETIME, TimerMode::Once),
        }
    }

    fn transform(&self, _origin: Vec2) -> Transform {
        Transform::from_translation(self.rect.center.extend(SPELL_Z - 1.0))
            .with_rotation(Quat::from_rotation_z(self.rect.angle()))
    }

    fn sprite(&self) -> Sprite {
        // Local x runs along the facing axis
        Sprite::from_color(
            self.element.color().with_alpha(0.15),
            Vec2::new(self.rect.v1.length() * 2.0, self.rect.v2.length() * 2.0),
        )
    }
}

/// Decorative tile inside an area spell
#[derive(Component, Debug, Clone, Copy)]
pub struct AreaTile;

/// Lays decorative tiles over a freshly spawned area, skipping cells covered
/// by terrain. Tiles are children and vanish with the area.
pub fn spawn_area_tiles_system(
    mut commands: Commands,
    areas: Query<(Entity, &AreaOfEffect), Added<AreaOfEffect>>,
    terrain: Query<(&Transform, &TerrainBlock)>,
) {
    for (entity, area) in areas.iter() {
        let inverse = Quat::from_rotation_z(-area.rect.angle());
        let color = area.element.color().with_alpha(0.5);

        let tiles: Vec<Vec2> = area
            .rect
            .tile_centers(AOE_TILE_SIZE, AOE_WIDTH_TILES, AOE_HEIGHT_TILES)
            .into_iter()
            .filter(|center| {
                !terrain.iter().any(|(transform, block)| {
                    block.contains_point(transform.translation.truncate(), *center)
                })
            })
            .collect();

        commands.entity(entity).with_children(|parent| {
            for center in tiles {
                let local = inverse * (center - area.rect.center).extend(0.0);
                parent.spawn((
                    AreaTile,
                    Sprite::from_color(color, Vec2::splat(AOE_TILE_SIZE * 0.85)),
                    Transform::from_translation(local.with_z(0.1)),
                ));
            }
        });
    }
}

/// Pulses damage on every active enemy inside each area and removes
/// areas whose lifetime has run out.
pub fn area_of_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut areas: Query<(Entity, &mut AreaOfEffect)>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
    active: Res<ActiveEnemies>,
    mut hits: MessageWriter<SpellHitEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut area) in areas.iter_mut() {
        if area.lifetime.is_finished() {
            commands.entity(entity).try_despawn();
            continue;
        }

        if area.tick_pulse(dt) {
            for (enemy, transform) in enemies.iter() {
                if active.contains(enemy) && area.rect.contains(transform.translation.truncate()) {
                    hits.write(SpellHitEvent::new(enemy, area.damage, area.element));
                }
            }
        }
        area.lifetime.tick(time.delta());
    }
}
