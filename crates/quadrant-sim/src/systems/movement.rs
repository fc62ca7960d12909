//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity.
//! Velocities are per-tick displacements fixed at spawn (projectiles move
//! 3 units/tick, adversaries 1 unit/tick). The turret carries no Velocity
//! component, so its position never changes.

use hecs::World;

use quadrant_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.dx;
        pos.y += vel.dy;
    }
}
