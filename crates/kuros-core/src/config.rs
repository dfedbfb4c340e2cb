//! Enemy profile configuration.
//!
//! A profile is the fixed, ordered description of one enemy kind: its
//! stats, the attack templates it may run (in selection priority order),
//! and its recovery behavior. Profiles are loaded from JSON and validated
//! once; states and templates are built from them at actor setup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::effects::EffectConfig;
use crate::error::ConfigError;
use crate::stats::{ActorStats, StatModifier};

/// Complete description of one enemy kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub name: String,
    #[serde(default)]
    pub stats: ActorStats,
    /// Applied to `stats` in order when an actor is spawned.
    #[serde(default)]
    pub modifiers: Vec<StatModifier>,
    /// Attack templates in selection priority order.
    pub templates: Vec<AttackTemplateConfig>,
    #[serde(default)]
    pub frozen: FrozenConfig,
    /// Animation cues the actor's rig provides.
    #[serde(default = "default_cues")]
    pub animation_cues: Vec<String>,
    /// Effects attached when the actor is spawned.
    #[serde(default)]
    pub effects: Vec<EffectConfig>,
}

/// One attack template definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AttackTemplateConfig {
    /// Windup, a single hit, then recovery. The actor stays in place.
    Strike {
        name: String,
        windup: f32,
        active: f32,
        recovery: f32,
        cooldown: f32,
        damage: f32,
        #[serde(default)]
        knockback: f32,
        #[serde(default = "default_attack_cue")]
        cue: String,
    },
    /// Windup, a dash toward the target that hits on contact, then recovery.
    Lunge {
        name: String,
        windup: f32,
        dash_duration: f32,
        dash_speed: f32,
        recovery: f32,
        cooldown: f32,
        damage: f32,
        #[serde(default)]
        knockback: f32,
        #[serde(default = "default_attack_cue")]
        cue: String,
    },
}

/// Recovery state settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrozenConfig {
    /// Countdown length (seconds).
    pub duration: f32,
    /// Cue played on entry when the rig has it.
    pub cue: String,
}

impl Default for FrozenConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_FROZEN_DURATION,
            cue: CUE_FROZEN.to_string(),
        }
    }
}

/// Cues of the standard enemy rig.
pub fn default_cues() -> Vec<String> {
    [CUE_IDLE, CUE_WALK, CUE_ATTACK, CUE_HIT, CUE_FROZEN]
        .iter()
        .map(|cue| cue.to_string())
        .collect()
}

fn default_attack_cue() -> String {
    CUE_ATTACK.to_string()
}

impl AttackTemplateConfig {
    pub fn name(&self) -> &str {
        match self {
            AttackTemplateConfig::Strike { name, .. } | AttackTemplateConfig::Lunge { name, .. } => {
                name
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let prefix = self.name();
        match self {
            AttackTemplateConfig::Strike {
                windup,
                active,
                recovery,
                cooldown,
                damage,
                knockback,
                ..
            } => {
                check_non_negative(prefix, "windup", *windup)?;
                check_non_negative(prefix, "active", *active)?;
                check_non_negative(prefix, "recovery", *recovery)?;
                check_non_negative(prefix, "cooldown", *cooldown)?;
                check_non_negative(prefix, "damage", *damage)?;
                check_non_negative(prefix, "knockback", *knockback)?;
            }
            AttackTemplateConfig::Lunge {
                windup,
                dash_duration,
                dash_speed,
                recovery,
                cooldown,
                damage,
                knockback,
                ..
            } => {
                check_non_negative(prefix, "windup", *windup)?;
                check_positive(prefix, "dash_duration", *dash_duration)?;
                check_positive(prefix, "dash_speed", *dash_speed)?;
                check_non_negative(prefix, "recovery", *recovery)?;
                check_non_negative(prefix, "cooldown", *cooldown)?;
                check_non_negative(prefix, "damage", *damage)?;
                check_non_negative(prefix, "knockback", *knockback)?;
            }
        }
        Ok(())
    }
}

impl EnemyProfile {
    /// Parse and validate a profile from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let profile: EnemyProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Stats after applying this profile's modifiers.
    pub fn effective_stats(&self) -> ActorStats {
        self.stats.with_modifiers(&self.modifiers)
    }

    /// Whether the rig provides `cue`.
    pub fn has_cue(&self, cue: &str) -> bool {
        self.animation_cues.iter().any(|c| c == cue)
    }

    /// Check every invariant the state machine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let stats = &self.stats;
        check_positive("stats", "move_speed", stats.move_speed)?;
        check_non_negative("stats", "attack_damage", stats.attack_damage)?;
        check_non_negative("stats", "attack_range", stats.attack_range)?;
        check_non_negative("stats", "detection_range", stats.detection_range)?;
        check_non_negative("stats", "attack_cooldown", stats.attack_cooldown)?;
        check_positive("stats", "max_health", stats.max_health)?;
        if stats.attack_range > stats.detection_range {
            return Err(ConfigError::AttackRangeExceedsDetection {
                attack: stats.attack_range,
                detection: stats.detection_range,
            });
        }

        check_non_negative("frozen", "duration", self.frozen.duration)?;

        if self.templates.is_empty() {
            return Err(ConfigError::NoTemplates(self.name.clone()));
        }
        let mut seen = HashSet::new();
        for template in &self.templates {
            if !seen.insert(template.name()) {
                return Err(ConfigError::DuplicateTemplate(template.name().to_string()));
            }
            template.validate()?;
        }
        for effect in &self.effects {
            effect.validate()?;
        }
        Ok(())
    }
}

pub(crate) fn check_finite(scope: &str, field: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite {
            field: format!("{scope}.{field}"),
            value,
        });
    }
    Ok(())
}

pub(crate) fn check_non_negative(scope: &str, field: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field: format!("{scope}.{field}"),
            value,
        });
    }
    Ok(())
}

fn check_positive(scope: &str, field: &str, value: f32) -> Result<(), ConfigError> {
    check_non_negative(scope, field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive {
            field: format!("{scope}.{field}"),
            value,
        });
    }
    Ok(())
}
