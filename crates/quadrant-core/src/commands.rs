//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Aim the turret: remap facing and recompute weapon geometry.
    Face { direction: Direction },
    /// Fire one projectile in the current facing. Silent no-op when the
    /// magazine is empty.
    Fire,
    /// Refill the magazine. Silent no-op unless the magazine is exactly
    /// empty.
    Reload,
    /// Begin the session (Idle only). GameOver is terminal; there is no
    /// restart.
    Start,
}
