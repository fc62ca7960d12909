//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Velocity;

/// One of the four cardinal facings. Every direction-dependent operation
/// (velocity, weapon geometry, muzzle offset, spawn edge) is a single
/// dispatch table keyed by this enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order for uniform random selection.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Per-tick displacement for an entity moving at `speed` units/tick.
    /// Canvas convention: Up decreases y, Down increases y.
    pub fn velocity(self, speed: f64) -> Velocity {
        match self {
            Direction::Up => Velocity::new(0.0, -speed),
            Direction::Left => Velocity::new(-speed, 0.0),
            Direction::Down => Velocity::new(0.0, speed),
            Direction::Right => Velocity::new(speed, 0.0),
        }
    }
}

/// Game phase (top-level state). GameOver is terminal: the engine never
/// leaves it and the loop runner stops rescheduling frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Idle,
    Running,
    GameOver,
}

/// Which collision pass ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// An adversary overlapped the turret body.
    BodyContact,
    /// An adversary overlapped the weapon bar.
    WeaponContact,
}
