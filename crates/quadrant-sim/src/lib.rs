//! Simulation engine for QUADRANT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod runner;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use quadrant_core as core;
