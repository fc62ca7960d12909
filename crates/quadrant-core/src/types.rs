//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in scene units (canvas convention: x = right, y = down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D displacement per tick (scene units/tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

/// Axis-aligned rectangle used for overlap testing and as the basis of the
/// padded cosmetic outline. Invariant: width, height >= 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Play-field dimensions, injected at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Velocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Hitbox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Strict AABB overlap test: the rectangles must overlap on both axes.
    /// Boxes that merely share an edge do NOT overlap.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// The drawn overlay region: this rectangle inflated by the fixed draw
    /// padding on both dimensions. Cosmetic only, never used for collision.
    pub fn padded(&self) -> Hitbox {
        Hitbox {
            x: self.x,
            y: self.y,
            width: self.width + crate::constants::HITBOX_DRAW_PADDING,
            height: self.height + crate::constants::HITBOX_DRAW_PADDING,
        }
    }
}

impl FieldSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Top-left position that centers a square of the given size.
    pub fn centered(&self, size: f64) -> Position {
        Position::new((self.width - size) / 2.0, (self.height - size) / 2.0)
    }

    /// Whether a hitbox lies entirely outside the field, with a margin.
    pub fn fully_outside(&self, hb: &Hitbox, margin: f64) -> bool {
        hb.x + hb.width < -margin
            || hb.x > self.width + margin
            || hb.y + hb.height < -margin
            || hb.y > self.height + margin
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_FIELD_WIDTH,
            height: crate::constants::DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
