//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;
use crate::types::Hitbox;

/// Marks the player's turret. Exactly one per session; its position is
/// fixed at spawn and never changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turret;

/// Current facing. On the turret this is the command-driven aim; on
/// projectiles and adversaries it is fixed for the entity's lifetime.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub direction: Direction,
}

/// The turret's weapon: magazine plus the direction-dependent bar geometry.
/// `rect` is recomputed whenever the facing changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Rounds remaining, 0..=AMMO_CAPACITY.
    pub ammo: u32,
    /// Current bar rectangle (also the weapon's collision geometry).
    pub rect: Hitbox,
}

/// Marks a fired projectile. `seq` is a monotonically increasing spawn
/// sequence so ordered collision passes are deterministic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub seq: u64,
}

/// Marks an adversary. Spawned at a field edge with a fixed random heading;
/// never turns. `seq` orders the population for cap eviction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Adversary {
    pub seq: u64,
}

// Position and Velocity from types.rs are used as ECS components too.
