//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, GamePhase};
use crate::events::GameEvent;
use crate::types::{Hitbox, Position, SimTime};

/// Complete game state handed to the renderer after each tick. Everything
/// a frontend needs to draw a frame: positions, extents, padded outline
/// rectangles, ammo, and the tick's events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub turret: TurretView,
    pub weapon: WeaponView,
    pub projectiles: Vec<ProjectileView>,
    pub adversaries: Vec<AdversaryView>,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

/// The turret body for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurretView {
    pub position: Position,
    pub facing: Direction,
    pub hitbox: Hitbox,
    /// Padded cosmetic outline.
    pub draw_rect: Hitbox,
}

/// The weapon bar for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub rect: Hitbox,
    pub draw_rect: Hitbox,
    pub ammo: u32,
}

/// A live projectile for display, sorted by seq.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub seq: u64,
    pub position: Position,
    pub direction: Direction,
    pub hitbox: Hitbox,
    pub draw_rect: Hitbox,
}

/// A live adversary for display, sorted by seq.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdversaryView {
    pub seq: u64,
    pub position: Position,
    pub direction: Direction,
    pub hitbox: Hitbox,
    pub draw_rect: Hitbox,
}

/// Running session totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub adversaries_spawned: u64,
    pub adversaries_destroyed: u64,
    pub shots_fired: u64,
}
