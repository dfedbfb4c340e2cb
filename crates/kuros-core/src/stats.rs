//! Actor stat block and the modifiers applied to it at spawn time.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Base combat stats for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorStats {
    /// Movement speed (pixels per second).
    pub move_speed: f32,
    /// Damage of a basic strike.
    pub attack_damage: f32,
    /// Attack radius (pixels).
    pub attack_range: f32,
    /// Detection radius (pixels).
    pub detection_range: f32,
    /// Actor-wide delay between attack chains (seconds).
    pub attack_cooldown: f32,
    pub max_health: f32,
}

/// Stat a modifier targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatId {
    MoveSpeed,
    AttackDamage,
    AttackRange,
    DetectionRange,
    AttackCooldown,
    MaxHealth,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatOperation {
    #[default]
    Add,
    Multiply,
}

/// A single arithmetic adjustment to one stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: StatId,
    pub value: f32,
    #[serde(default)]
    pub operation: StatOperation,
}

impl Default for ActorStats {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            attack_damage: DEFAULT_ATTACK_DAMAGE,
            attack_range: DEFAULT_ATTACK_RANGE,
            detection_range: DEFAULT_DETECTION_RANGE,
            attack_cooldown: DEFAULT_ATTACK_COOLDOWN,
            max_health: DEFAULT_MAX_HEALTH,
        }
    }
}

impl StatModifier {
    pub fn add(stat: StatId, value: f32) -> Self {
        Self {
            stat,
            value,
            operation: StatOperation::Add,
        }
    }

    pub fn multiply(stat: StatId, value: f32) -> Self {
        Self {
            stat,
            value,
            operation: StatOperation::Multiply,
        }
    }

    fn apply_to(&self, base: f32) -> f32 {
        match self.operation {
            StatOperation::Add => base + self.value,
            StatOperation::Multiply => base * self.value,
        }
    }
}

impl ActorStats {
    /// Mutable access to a single stat by id.
    pub fn stat_mut(&mut self, stat: StatId) -> &mut f32 {
        match stat {
            StatId::MoveSpeed => &mut self.move_speed,
            StatId::AttackDamage => &mut self.attack_damage,
            StatId::AttackRange => &mut self.attack_range,
            StatId::DetectionRange => &mut self.detection_range,
            StatId::AttackCooldown => &mut self.attack_cooldown,
            StatId::MaxHealth => &mut self.max_health,
        }
    }

    /// Apply modifiers in order and return the adjusted stats.
    ///
    /// Every stat is floored at zero and the attack radius never exceeds
    /// the detection radius.
    pub fn with_modifiers(mut self, modifiers: &[StatModifier]) -> Self {
        for modifier in modifiers {
            let value = self.stat_mut(modifier.stat);
            *value = modifier.apply_to(*value).max(0.0);
        }
        self.attack_range = self.attack_range.min(self.detection_range);
        self
    }
}
