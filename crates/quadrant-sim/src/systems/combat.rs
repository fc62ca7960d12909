//! Collision resolution: three passes in a fixed order each tick.
//!
//! 1. projectile vs adversary: each overlap consumes one of each.
//! 2. turret body vs adversary: any overlap ends the session.
//! 3. weapon bar vs adversary: any overlap ends the session.
//!
//! Pass 1 despawns its victims before passes 2 and 3 run, so an adversary
//! shot down this tick can no longer end the game.

use hecs::{Entity, World};

use quadrant_core::components::{Adversary, Projectile, Turret, Weapon};
use quadrant_core::enums::GameOverCause;
use quadrant_core::events::GameEvent;
use quadrant_core::geometry;
use quadrant_core::types::{Hitbox, Position};

use crate::engine::ScoreState;

/// Run all three collision passes. Returns the cause if the session ended
/// this tick.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    current_tick: u64,
) -> Option<GameOverCause> {
    resolve_projectile_hits(world, despawn_buffer, events, score);

    let cause = check_turret_contact(world);
    if let Some(cause) = cause {
        events.push(GameEvent::GameOver {
            cause,
            tick: current_tick,
        });
    }
    cause
}

/// Pass 1: test every projectile against every adversary, newest first on
/// both sides. Each projectile consumes at most one adversary and vice
/// versa.
fn resolve_projectile_hits(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    let mut projectiles: Vec<(Entity, u64, Hitbox)> = world
        .query_mut::<(&Projectile, &Position)>()
        .into_iter()
        .map(|(entity, (proj, pos))| (entity, proj.seq, geometry::projectile_hitbox(*pos)))
        .collect();
    projectiles.sort_by_key(|&(_, seq, _)| std::cmp::Reverse(seq));

    let mut adversaries: Vec<(Entity, u64, Hitbox)> = world
        .query_mut::<(&Adversary, &Position)>()
        .into_iter()
        .map(|(entity, (adv, pos))| (entity, adv.seq, geometry::adversary_hitbox(*pos)))
        .collect();
    adversaries.sort_by_key(|&(_, seq, _)| std::cmp::Reverse(seq));

    let mut destroyed = vec![false; adversaries.len()];

    for &(proj_entity, proj_seq, proj_hb) in &projectiles {
        for (i, &(adv_entity, adv_seq, adv_hb)) in adversaries.iter().enumerate() {
            if destroyed[i] || !proj_hb.overlaps(&adv_hb) {
                continue;
            }
            destroyed[i] = true;
            despawn_buffer.push(proj_entity);
            despawn_buffer.push(adv_entity);
            score.adversaries_destroyed += 1;
            events.push(GameEvent::AdversaryDestroyed {
                seq: adv_seq,
                projectile_seq: proj_seq,
            });
            break;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Passes 2 and 3: any surviving adversary overlapping the turret body
/// (checked first) or the weapon bar ends the session.
fn check_turret_contact(world: &mut World) -> Option<GameOverCause> {
    let mut turret_geom: Option<(Hitbox, Hitbox)> = None;
    for (_entity, (_turret, pos, weapon)) in world.query_mut::<(&Turret, &Position, &Weapon)>() {
        turret_geom = Some((geometry::body_hitbox(*pos), weapon.rect));
    }
    let (body_hb, weapon_hb) = turret_geom?;

    let mut body_contact = false;
    let mut weapon_contact = false;
    for (_entity, (_adv, pos)) in world.query_mut::<(&Adversary, &Position)>() {
        let adv_hb = geometry::adversary_hitbox(*pos);
        body_contact |= adv_hb.overlaps(&body_hb);
        weapon_contact |= adv_hb.overlaps(&weapon_hb);
    }

    if body_contact {
        Some(GameOverCause::BodyContact)
    } else if weapon_contact {
        Some(GameOverCause::WeaponContact)
    } else {
        None
    }
}
