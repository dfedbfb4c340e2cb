//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which sensing radius a range query checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeKind {
    /// Radius within which the actor notices and pursues a target.
    Detection,
    /// Radius within which an attack may start. Implies detection.
    Attack,
}

/// Built-in enemy archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Single quick strike, average stats.
    Grunt,
    /// Slow, heavy strike with a long recovery.
    Brute,
    /// Lunges in from range, falls back on a jab.
    Skirmisher,
}

/// Horizontal facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Progress of an attack template run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPhase {
    /// Not running.
    #[default]
    Ready,
    /// Telegraph before the hit.
    Windup,
    /// Hit frames (strike) or dash (lunge).
    Active,
    /// Vulnerable tail after the hit.
    Recovery,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

impl Facing {
    /// Facing for a horizontal direction; zero keeps `self`.
    pub fn toward(self, dx: f32) -> Self {
        if dx > 0.0 {
            Facing::Right
        } else if dx < 0.0 {
            Facing::Left
        } else {
            self
        }
    }

    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}
