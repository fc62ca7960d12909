//! Direction-keyed geometry tables.
//!
//! Owners recompute fresh hitboxes from current position each tick rather
//! than mutating shared geometry, so the collision and snapshot passes
//! always see values consistent with what the renderer draws.

use crate::constants::*;
use crate::enums::Direction;
use crate::types::{Hitbox, Position};

/// The turret's body hitbox at its (fixed) spawn position.
pub fn body_hitbox(pos: Position) -> Hitbox {
    Hitbox::new(pos.x, pos.y, TURRET_SIZE, TURRET_SIZE)
}

/// The weapon bar for a given facing: a WEAPON_LENGTH x WEAPON_THICKNESS
/// rectangle flush with the facing side of the body, centered on the
/// perpendicular axis. Each direction produces a distinct geometry.
pub fn weapon_rect(body_pos: Position, direction: Direction) -> Hitbox {
    let centered = (TURRET_SIZE - WEAPON_THICKNESS) / 2.0;
    match direction {
        Direction::Up => Hitbox::new(
            body_pos.x + centered,
            body_pos.y - WEAPON_LENGTH,
            WEAPON_THICKNESS,
            WEAPON_LENGTH,
        ),
        Direction::Down => Hitbox::new(
            body_pos.x + centered,
            body_pos.y + TURRET_SIZE,
            WEAPON_THICKNESS,
            WEAPON_LENGTH,
        ),
        Direction::Left => Hitbox::new(
            body_pos.x - WEAPON_LENGTH,
            body_pos.y + centered,
            WEAPON_LENGTH,
            WEAPON_THICKNESS,
        ),
        Direction::Right => Hitbox::new(
            body_pos.x + TURRET_SIZE,
            body_pos.y + centered,
            WEAPON_LENGTH,
            WEAPON_THICKNESS,
        ),
    }
}

/// Where a newly fired projectile originates: the muzzle end of the weapon
/// bar, with the projectile centered on the bar's thickness.
pub fn muzzle_position(weapon: &Hitbox, direction: Direction) -> Position {
    let across = (WEAPON_THICKNESS - PROJECTILE_SIZE) / 2.0;
    match direction {
        Direction::Up => Position::new(weapon.x + across, weapon.y - PROJECTILE_SIZE),
        Direction::Down => Position::new(weapon.x + across, weapon.y + weapon.height),
        Direction::Left => Position::new(weapon.x - PROJECTILE_SIZE, weapon.y + across),
        Direction::Right => Position::new(weapon.x + weapon.width, weapon.y + across),
    }
}

/// A projectile's hitbox tracks its drawn circle: a PROJECTILE_SIZE square
/// at the current position.
pub fn projectile_hitbox(pos: Position) -> Hitbox {
    Hitbox::new(pos.x, pos.y, PROJECTILE_SIZE, PROJECTILE_SIZE)
}

/// An adversary's hitbox at its current position.
pub fn adversary_hitbox(pos: Position) -> Hitbox {
    Hitbox::new(pos.x, pos.y, ADVERSARY_SIZE, ADVERSARY_SIZE)
}
