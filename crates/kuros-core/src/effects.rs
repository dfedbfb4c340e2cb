//! Runtime effects attached to an actor.
//!
//! Effects adjust a stat for as long as they stay attached. The stat value
//! in place when the effect list was created is kept as the base; every
//! tick the adjusted value is recomputed from that base, so removing an
//! effect restores the stat exactly.

use serde::{Deserialize, Serialize};

use crate::config::{check_finite, check_non_negative};
use crate::error::ConfigError;
use crate::stats::ActorStats;

/// Effect definition, listed in a profile or sent with a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EffectConfig {
    /// Movement speed becomes `base * multiplier + offset`.
    Speed {
        name: String,
        #[serde(default = "unit_multiplier")]
        multiplier: f32,
        #[serde(default)]
        offset: f32,
        /// Lifetime in seconds. `None` stays until the actor is removed.
        #[serde(default)]
        duration: Option<f32>,
    },
}

/// One attached effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorEffect {
    pub config: EffectConfig,
    /// Seconds left, `None` for permanent effects.
    pub remaining: Option<f32>,
}

/// Effects attached to an actor and the base values they apply over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorEffects {
    pub base_move_speed: f32,
    pub active: Vec<ActorEffect>,
}

fn unit_multiplier() -> f32 {
    1.0
}

impl EffectConfig {
    pub fn name(&self) -> &str {
        match self {
            EffectConfig::Speed { name, .. } => name,
        }
    }

    fn duration(&self) -> Option<f32> {
        match self {
            EffectConfig::Speed { duration, .. } => *duration,
        }
    }

    fn adjust_move_speed(&self, speed: f32) -> f32 {
        match self {
            EffectConfig::Speed {
                multiplier, offset, ..
            } => speed * multiplier + offset,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            EffectConfig::Speed {
                name,
                multiplier,
                offset,
                duration,
            } => {
                check_non_negative(name, "multiplier", *multiplier)?;
                check_finite(name, "offset", *offset)?;
                if let Some(duration) = duration {
                    check_non_negative(name, "duration", *duration)?;
                }
            }
        }
        Ok(())
    }
}

impl ActorEffects {
    /// Empty effect list over `stats`.
    pub fn new(stats: &ActorStats) -> Self {
        Self {
            base_move_speed: stats.move_speed,
            active: Vec::new(),
        }
    }

    pub fn attach(&mut self, config: EffectConfig) {
        let remaining = config.duration();
        self.active.push(ActorEffect { config, remaining });
    }

    /// Count lifetimes down by `dt` and detach the effects that ran out.
    /// Returns the detached effects' names in attach order.
    pub fn tick(&mut self, dt: f32) -> Vec<String> {
        let mut expired = Vec::new();
        self.active.retain_mut(|effect| match effect.remaining.as_mut() {
            Some(remaining) => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    expired.push(effect.config.name().to_string());
                    false
                } else {
                    true
                }
            }
            None => true,
        });
        expired
    }

    /// Movement speed with every attached effect applied in order (floor 0).
    pub fn move_speed(&self) -> f32 {
        self.active
            .iter()
            .fold(self.base_move_speed, |speed, effect| {
                effect.config.adjust_move_speed(speed)
            })
            .max(0.0)
    }

    /// Write the adjusted values into `stats`.
    pub fn apply_to(&self, stats: &mut ActorStats) {
        stats.move_speed = self.move_speed();
    }
}
