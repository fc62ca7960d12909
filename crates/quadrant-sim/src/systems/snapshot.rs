//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world. Hitboxes and
//! padded draw rectangles are computed fresh from current positions, so
//! the renderer and the collision passes always agree.

use hecs::World;

use quadrant_core::components::{Adversary, Facing, Projectile, Turret, Weapon};
use quadrant_core::enums::GamePhase;
use quadrant_core::events::GameEvent;
use quadrant_core::geometry;
use quadrant_core::state::*;
use quadrant_core::types::{Position, SimTime};

use crate::engine::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let (turret, weapon) = build_turret(world);

    GameStateSnapshot {
        time: *time,
        phase,
        turret,
        weapon,
        projectiles: build_projectiles(world),
        adversaries: build_adversaries(world),
        score: ScoreView {
            adversaries_spawned: score.adversaries_spawned,
            adversaries_destroyed: score.adversaries_destroyed,
            shots_fired: score.shots_fired,
        },
        events,
    }
}

/// Build the turret and weapon views from the single turret entity.
fn build_turret(world: &World) -> (TurretView, WeaponView) {
    world
        .query::<(&Turret, &Position, &Facing, &Weapon)>()
        .iter()
        .next()
        .map(|(_, (_, pos, facing, weapon))| {
            let body_hb = geometry::body_hitbox(*pos);
            let turret = TurretView {
                position: *pos,
                facing: facing.direction,
                hitbox: body_hb,
                draw_rect: body_hb.padded(),
            };
            let weapon_view = WeaponView {
                rect: weapon.rect,
                draw_rect: weapon.rect.padded(),
                ammo: weapon.ammo,
            };
            (turret, weapon_view)
        })
        .unwrap_or_default()
}

/// Build ProjectileView list, sorted by seq for determinism.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Facing)>()
        .iter()
        .map(|(_, (proj, pos, facing))| {
            let hb = geometry::projectile_hitbox(*pos);
            ProjectileView {
                seq: proj.seq,
                position: *pos,
                direction: facing.direction,
                hitbox: hb,
                draw_rect: hb.padded(),
            }
        })
        .collect();

    views.sort_by_key(|v| v.seq);
    views
}

/// Build AdversaryView list, sorted by seq for determinism.
fn build_adversaries(world: &World) -> Vec<AdversaryView> {
    let mut views: Vec<AdversaryView> = world
        .query::<(&Adversary, &Position, &Facing)>()
        .iter()
        .map(|(_, (adv, pos, facing))| {
            let hb = geometry::adversary_hitbox(*pos);
            AdversaryView {
                seq: adv.seq,
                position: *pos,
                direction: facing.direction,
                hitbox: hb,
                draw_rect: hb.padded(),
            }
        })
        .collect();

    views.sort_by_key(|v| v.seq);
    views
}
