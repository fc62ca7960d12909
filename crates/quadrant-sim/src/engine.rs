//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands
//! at tick boundaries, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless (no renderer dependency), enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use quadrant_core::commands::PlayerCommand;
use quadrant_core::components::{Facing, Turret, Weapon};
use quadrant_core::constants::AMMO_CAPACITY;
use quadrant_core::enums::{Direction, GamePhase};
use quadrant_core::events::GameEvent;
use quadrant_core::geometry;
use quadrant_core::state::GameStateSnapshot;
use quadrant_core::types::{FieldSize, Position, SimTime};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Play-field dimensions (the external surface size, injected).
    pub field: FieldSize,
    /// Keep the spawn cadence running after GameOver instead of
    /// cancelling it with the session. Off by default.
    pub spawn_after_game_over: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: FieldSize::default(),
            spawn_after_game_over: false,
        }
    }
}

/// Running session totals tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub adversaries_spawned: u64,
    pub adversaries_destroyed: u64,
    pub shots_fired: u64,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    field: FieldSize,
    spawn_after_game_over: bool,
    rng: ChaCha8Rng,
    next_seq: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            field: config.field,
            spawn_after_game_over: config.spawn_after_game_over,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_seq: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Running => {
                self.run_systems();
                self.time.advance();
            }
            // Opt-in: the spawn cadence outlives the session, piling
            // adversaries into the dead world while everything else
            // stays frozen.
            GamePhase::GameOver if self.spawn_after_game_over => {
                systems::spawner::run(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.next_seq,
                    self.field,
                    self.time.tick,
                    &mut self.events,
                    &mut self.score,
                );
                self.time.advance();
            }
            _ => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.score, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the play-field dimensions.
    pub fn field(&self) -> FieldSize {
        self.field
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an adversary at an explicit position with a forced heading
    /// (for tests needing precise placement). Returns its seq.
    #[cfg(test)]
    pub fn spawn_adversary_at(&mut self, position: Position, direction: Direction) -> u64 {
        let seq = self.alloc_seq();
        world_setup::spawn_adversary_at(&mut self.world, seq, position, direction);
        seq
    }

    /// Current adversary population (for tests).
    #[cfg(test)]
    pub fn adversary_count(&self) -> usize {
        let mut query = self.world.query::<&quadrant_core::components::Adversary>();
        query.iter().count()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                if self.phase == GamePhase::Idle {
                    world_setup::setup_session(&mut self.world, self.field);
                    self.time = SimTime::default();
                    self.score = ScoreState::default();
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::Face { direction } => {
                if self.phase != GamePhase::Running {
                    return;
                }
                // Remap facing and recompute the weapon bar for it.
                for (_entity, (_turret, pos, facing, weapon)) in self
                    .world
                    .query_mut::<(&Turret, &Position, &mut Facing, &mut Weapon)>()
                {
                    facing.direction = direction;
                    weapon.rect = geometry::weapon_rect(*pos, direction);
                }
            }
            PlayerCommand::Fire => {
                if self.phase != GamePhase::Running {
                    return;
                }
                self.fire();
            }
            PlayerCommand::Reload => {
                if self.phase != GamePhase::Running {
                    return;
                }
                // Reload is only allowed when the magazine is exactly empty.
                let mut reloaded = false;
                for (_entity, (_turret, weapon)) in
                    self.world.query_mut::<(&Turret, &mut Weapon)>()
                {
                    if weapon.ammo == 0 {
                        weapon.ammo = AMMO_CAPACITY;
                        reloaded = true;
                    }
                }
                if reloaded {
                    self.events.push(GameEvent::WeaponReloaded);
                }
            }
        }
    }

    /// Fire one projectile from the muzzle in the current facing.
    /// Silent no-op when the magazine is empty.
    fn fire(&mut self) {
        let mut shot: Option<(Position, Direction, u32)> = None;
        for (_entity, (_turret, facing, weapon)) in
            self.world.query_mut::<(&Turret, &Facing, &mut Weapon)>()
        {
            if weapon.ammo > 0 {
                weapon.ammo -= 1;
                shot = Some((
                    geometry::muzzle_position(&weapon.rect, facing.direction),
                    facing.direction,
                    weapon.ammo,
                ));
            }
        }

        if let Some((muzzle, direction, remaining)) = shot {
            let seq = self.alloc_seq();
            world_setup::spawn_projectile(&mut self.world, seq, muzzle, direction);
            self.score.shots_fired += 1;
            self.events.push(GameEvent::ShotFired {
                remaining_ammo: remaining,
            });
        }
    }

    /// Allocate a spawn sequence number.
    fn alloc_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawn cadence
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_seq,
            self.field,
            self.time.tick,
            &mut self.events,
            &mut self.score,
        );
        // 2. Kinematic integration
        systems::movement::run(&mut self.world);
        // 3. Collision resolution (three fixed-order passes)
        if let Some(_cause) = systems::combat::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
            self.time.tick,
        ) {
            self.phase = GamePhase::GameOver;
        }
        // 4. Offscreen projectile despawn
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, self.field);
    }
}
