//! Per-enemy decision state.
//!
//! Stored in `SimulationEngine`'s brain map keyed by `ActorId`, NOT as ECS
//! components, so the world can be borrowed mutably while a machine runs.

use hecs::Entity;

use kuros_enemy_ai::StateMachine;

#[derive(Debug)]
pub struct EnemyBrain {
    /// The hecs entity this brain drives.
    pub entity: Entity,
    /// Name of the profile the machine was built from.
    pub profile: String,
    pub machine: StateMachine,
}
