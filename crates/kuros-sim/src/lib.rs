//! Simulation host for KUROS enemies.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, drives one
//! enemy state machine per enemy through a world-backed facade, and
//! produces `SimSnapshot`s.

pub mod brain;
pub mod engine;
pub mod error;
pub mod facade;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
pub use kuros_core as core;
