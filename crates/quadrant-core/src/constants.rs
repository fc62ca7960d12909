//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick = one display frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play field ---

/// Default field width in scene units (overridable via SimConfig).
pub const DEFAULT_FIELD_WIDTH: f64 = 800.0;

/// Default field height in scene units.
pub const DEFAULT_FIELD_HEIGHT: f64 = 600.0;

// --- Turret ---

/// Turret body edge length (square).
pub const TURRET_SIZE: f64 = 60.0;

// --- Weapon ---

/// How far the weapon bar extends from the turret body.
pub const WEAPON_LENGTH: f64 = 30.0;

/// Weapon bar thickness (perpendicular to the facing axis).
pub const WEAPON_THICKNESS: f64 = 10.0;

/// Magazine capacity; reload is only allowed when fully empty.
pub const AMMO_CAPACITY: u32 = 3;

// --- Projectiles ---

/// Projectile edge length (square hitbox around the drawn circle).
pub const PROJECTILE_SIZE: f64 = 5.0;

/// Projectile speed in units/tick along the firing axis.
pub const PROJECTILE_SPEED: f64 = 3.0;

/// How far past the field edge a projectile may travel before despawn.
pub const PROJECTILE_DESPAWN_MARGIN: f64 = 20.0;

// --- Adversaries ---

/// Adversary edge length (square).
pub const ADVERSARY_SIZE: f64 = 25.0;

/// Adversary speed in units/tick along its fixed heading.
pub const ADVERSARY_SPEED: f64 = 1.0;

/// Population cap; the oldest adversary is evicted when a spawn would
/// exceed it.
pub const MAX_ADVERSARIES: usize = 20;

/// Ticks between adversary spawns (500 ms at the tick rate).
pub const SPAWN_INTERVAL_TICKS: u64 = TICK_RATE as u64 / 2;

// --- Display ---

/// Extra extent added to each hitbox dimension for the drawn outline.
pub const HITBOX_DRAW_PADDING: f64 = 5.0;
