//! CooldownFrozen: the recovery lock entered after taking a hit.

use glam::Vec2;

use kuros_core::config::FrozenConfig;
use kuros_core::constants::{STATE_COOLDOWN_FROZEN, STATE_IDLE, STATE_WALK};
use kuros_core::enums::RangeKind;

use super::{EnemyState, Transition};
use crate::facade::ActorFacade;

#[derive(Debug, Clone)]
pub struct CooldownFrozenState {
    duration: f32,
    cue: String,
    remaining: f32,
    /// Set once the expiry transition has been requested for this entry.
    fired: bool,
}

impl CooldownFrozenState {
    pub fn new(duration: f32, cue: impl Into<String>) -> Self {
        Self {
            duration,
            cue: cue.into(),
            remaining: duration,
            fired: false,
        }
    }

    pub fn from_config(config: &FrozenConfig) -> Self {
        Self::new(config.duration, config.cue.as_str())
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

impl EnemyState for CooldownFrozenState {
    fn name(&self) -> &str {
        STATE_COOLDOWN_FROZEN
    }

    fn enter(&mut self, actor: &mut dyn ActorFacade) {
        self.remaining = self.duration;
        self.fired = false;
        actor.set_velocity(Vec2::ZERO);
        if actor.has_animation_cue(&self.cue) {
            actor.play_animation_cue(&self.cue);
        }
    }

    fn exit(&mut self, _actor: &mut dyn ActorFacade) {}

    fn physics_update(&mut self, actor: &mut dyn ActorFacade, delta: f32) -> Transition {
        if !actor.is_valid() {
            return Transition::Stay;
        }

        actor.set_velocity(Vec2::ZERO);
        actor.apply_movement();

        self.remaining -= delta;
        if self.fired || self.remaining > 0.0 {
            return Transition::Stay;
        }

        self.fired = true;
        actor.refresh_target();
        if actor.is_in_range(RangeKind::Detection) {
            Transition::ChangeTo(STATE_WALK)
        } else {
            Transition::ChangeTo(STATE_IDLE)
        }
    }
}
