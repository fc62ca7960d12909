//! Cleanup system: removes projectiles that have left the field.
//!
//! A projectile that misses everything would otherwise live forever;
//! despawning it once fully offscreen bounds memory without changing any
//! in-bounds behavior. Adversaries are deliberately not cleaned up: the
//! population cap bounds them.

use hecs::{Entity, World};

use quadrant_core::components::Projectile;
use quadrant_core::constants::PROJECTILE_DESPAWN_MARGIN;
use quadrant_core::geometry;
use quadrant_core::types::{FieldSize, Position};

/// Despawn projectiles fully outside the field plus margin.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, field: FieldSize) {
    despawn_buffer.clear();

    for (entity, (_proj, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        let hb = geometry::projectile_hitbox(*pos);
        if field.fully_outside(&hb, PROJECTILE_DESPAWN_MARGIN) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
