//! Spawn cadence system: adds one adversary per interval, evicting the
//! oldest when the population cap would be exceeded.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use quadrant_core::components::Adversary;
use quadrant_core::constants::{MAX_ADVERSARIES, SPAWN_INTERVAL_TICKS};
use quadrant_core::events::GameEvent;
use quadrant_core::types::FieldSize;

use crate::engine::ScoreState;
use crate::world_setup;

/// Spawn a new adversary every SPAWN_INTERVAL_TICKS. The cap is enforced
/// at insert time: if the population is already at MAX_ADVERSARIES, the
/// oldest (lowest seq) adversary is despawned first, so the population
/// never exceeds the cap.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_seq: &mut u64,
    field: FieldSize,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    if current_tick == 0 || !current_tick.is_multiple_of(SPAWN_INTERVAL_TICKS) {
        return;
    }

    let mut count = 0usize;
    let mut oldest: Option<(hecs::Entity, u64)> = None;
    for (entity, adversary) in world.query_mut::<&Adversary>() {
        count += 1;
        if oldest.is_none_or(|(_, seq)| adversary.seq < seq) {
            oldest = Some((entity, adversary.seq));
        }
    }

    if count >= MAX_ADVERSARIES {
        if let Some((entity, _)) = oldest {
            let _ = world.despawn(entity);
        }
    }

    let seq = *next_seq;
    *next_seq += 1;

    let (_entity, direction) = world_setup::spawn_adversary(world, rng, seq, field);
    score.adversaries_spawned += 1;
    events.push(GameEvent::AdversarySpawned { seq, direction });
}
