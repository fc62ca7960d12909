//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the turret and adversary entities with appropriate
//! component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use quadrant_core::components::{Adversary, Facing, Projectile, Turret, Weapon};
use quadrant_core::constants::*;
use quadrant_core::enums::Direction;
use quadrant_core::geometry;
use quadrant_core::types::{FieldSize, Position};

/// Set up the initial session world: the turret, centered in the field.
/// Adversaries are spawned by the cadence system.
pub fn setup_session(world: &mut World, field: FieldSize) {
    spawn_turret(world, field);
}

/// Spawn the turret at the field center, facing Up with a full magazine.
/// The initial facing computes the initial weapon geometry.
pub fn spawn_turret(world: &mut World, field: FieldSize) -> hecs::Entity {
    let position = field.centered(TURRET_SIZE);
    let facing = Facing::default();
    let weapon = Weapon {
        ammo: AMMO_CAPACITY,
        rect: geometry::weapon_rect(position, facing.direction),
    };

    world.spawn((Turret, position, facing, weapon))
}

/// Spawn a projectile leaving the given muzzle position in the given
/// direction. Velocity is fixed at creation; the heading never changes.
pub fn spawn_projectile(
    world: &mut World,
    seq: u64,
    muzzle: Position,
    direction: Direction,
) -> hecs::Entity {
    world.spawn((
        Projectile { seq },
        muzzle,
        Facing { direction },
        direction.velocity(PROJECTILE_SPEED),
    ))
}

/// Spawn a single adversary with a uniformly random heading, placed just
/// outside the field edge opposite its direction of travel.
pub fn spawn_adversary(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    seq: u64,
    field: FieldSize,
) -> (hecs::Entity, Direction) {
    let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
    let position = edge_position(rng, field, direction);
    let entity = spawn_adversary_entity(world, seq, position, direction);
    (entity, direction)
}

/// Spawn an adversary at an explicit position with a forced heading
/// (for tests that need precise placement).
#[cfg(test)]
pub fn spawn_adversary_at(
    world: &mut World,
    seq: u64,
    position: Position,
    direction: Direction,
) -> hecs::Entity {
    spawn_adversary_entity(world, seq, position, direction)
}

fn spawn_adversary_entity(
    world: &mut World,
    seq: u64,
    position: Position,
    direction: Direction,
) -> hecs::Entity {
    world.spawn((
        Adversary { seq },
        position,
        Facing { direction },
        direction.velocity(ADVERSARY_SPEED),
    ))
}

/// Edge placement table: an adversary travels toward its named direction,
/// so it enters from the opposite edge, at a random offset along the
/// perpendicular axis.
fn edge_position(rng: &mut ChaCha8Rng, field: FieldSize, direction: Direction) -> Position {
    match direction {
        Direction::Up => Position::new(
            rng.gen_range(0.0..field.width - ADVERSARY_SIZE),
            field.height,
        ),
        Direction::Down => Position::new(
            rng.gen_range(0.0..field.width - ADVERSARY_SIZE),
            -ADVERSARY_SIZE,
        ),
        Direction::Left => Position::new(
            field.width,
            rng.gen_range(0.0..field.height - ADVERSARY_SIZE),
        ),
        Direction::Right => Position::new(
            -ADVERSARY_SIZE,
            rng.gen_range(0.0..field.height - ADVERSARY_SIZE),
        ),
    }
}
