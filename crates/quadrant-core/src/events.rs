//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, GameOverCause};

/// Per-tick events for the frontend sound/UI layer, carried in the
/// snapshot and drained each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile left the muzzle.
    ShotFired { remaining_ammo: u32 },
    /// The magazine was refilled from empty.
    WeaponReloaded,
    /// A new adversary entered the field.
    AdversarySpawned { seq: u64, direction: Direction },
    /// A projectile removed an adversary (both are consumed).
    AdversaryDestroyed { seq: u64, projectile_seq: u64 },
    /// The session ended.
    GameOver { cause: GameOverCause, tick: u64 },
}
