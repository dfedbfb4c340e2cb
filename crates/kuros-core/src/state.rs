//! Simulation snapshot: the complete visible state after each tick.

use serde::{Deserialize, Serialize};

use crate::components::ActorId;
use crate::enums::{Facing, SimPhase};
use crate::events::SimEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    /// Events emitted during this tick, oldest first.
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: ActorId,
    pub position: Position,
    pub velocity: Velocity,
    pub facing: Facing,
    pub health: f32,
    pub attack_timer: f32,
    pub hit_stun_timer: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: ActorId,
    pub profile: String,
    pub position: Position,
    pub velocity: Velocity,
    pub facing: Facing,
    /// Current movement speed, effects included.
    pub move_speed: f32,
    /// Name of the active state.
    pub state: String,
    /// Name of the running attack template, if any.
    pub active_template: Option<String>,
    pub health: f32,
    pub max_health: f32,
    pub attack_timer: f32,
    pub hit_stun_timer: f32,
    /// Last animation cue played.
    pub cue: Option<String>,
}

impl SimSnapshot {
    pub fn enemy(&self, id: ActorId) -> Option<&EnemyView> {
        self.enemies.iter().find(|e| e.id == id)
    }
}
