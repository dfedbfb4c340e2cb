//! External commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::components::ActorId;
use crate::config::EnemyProfile;
use crate::effects::EffectConfig;
use crate::enums::EnemyArchetype;

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Spawning ---
    /// Spawn a built-in archetype at a position.
    SpawnEnemy {
        archetype: EnemyArchetype,
        x: f32,
        y: f32,
    },
    /// Spawn an enemy from a custom profile.
    SpawnProfile { profile: EnemyProfile, x: f32, y: f32 },

    // --- Enemy control ---
    /// Force a state transition from outside the decision logic.
    ForceState { actor: ActorId, state: String },
    /// Apply damage to an actor (enemy or player).
    DamageActor { actor: ActorId, amount: f32 },
    /// Attach an effect to an enemy.
    ApplyEffect { actor: ActorId, effect: EffectConfig },

    // --- Player control ---
    /// Set the player's velocity (pixels per second).
    SetPlayerVelocity { x: f32, y: f32 },
    /// Player swings at enemies in front of them.
    PlayerAttack,

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f32 },
    Pause,
    Resume,
}
