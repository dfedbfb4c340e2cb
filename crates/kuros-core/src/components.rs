//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems and in
//! the enemy state machine, not here.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Stable identifier used by commands, events and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// Per-actor countdown timers, decayed once per tick (floor 0).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CombatTimers {
    /// Actor-wide attack cooldown. An attack chain may begin only at 0.
    pub attack_timer: f32,
    /// Remaining hit-stun after taking damage.
    pub hit_stun_timer: f32,
}

/// Animation cues available on the actor's rig and the last one played.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Animator {
    pub cues: Vec<String>,
    pub current: Option<String>,
    /// Number of cues played since spawn.
    pub plays: u32,
}

/// Last known target, refreshed by range queries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetCache {
    pub position: Option<Position>,
}

/// Marks an entity as an enemy driven by the state machine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks the player entity, the target enemies pursue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Set on an actor whose health reached zero; removed by cleanup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Defeated;

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Subtract `amount` (floor 0). Returns the health left.
    pub fn take(&mut self, amount: f32) -> f32 {
        self.current = (self.current - amount.max(0.0)).max(0.0);
        self.current
    }
}

impl CombatTimers {
    /// Count both timers down by `dt`, flooring at zero.
    pub fn decay(&mut self, dt: f32) {
        self.attack_timer = (self.attack_timer - dt).max(0.0);
        self.hit_stun_timer = (self.hit_stun_timer - dt).max(0.0);
    }
}

impl Animator {
    pub fn with_cues(cues: Vec<String>) -> Self {
        Self {
            cues,
            current: None,
            plays: 0,
        }
    }

    pub fn has(&self, cue: &str) -> bool {
        self.cues.iter().any(|c| c == cue)
    }

    /// Record `cue` as playing. Unknown cues are ignored.
    pub fn play(&mut self, cue: &str) -> bool {
        if !self.has(cue) {
            return false;
        }
        self.current = Some(cue.to_string());
        self.plays += 1;
        true
    }
}
