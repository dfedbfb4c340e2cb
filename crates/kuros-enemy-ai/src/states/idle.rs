//! Idle: settle in place until a target shows up.

use glam::Vec2;

use kuros_core::constants::{CUE_IDLE, IDLE_DAMPING_FACTOR, STATE_ATTACK, STATE_IDLE, STATE_WALK};
use kuros_core::enums::RangeKind;
use kuros_core::types::move_toward;

use super::{EnemyState, Transition};
use crate::facade::ActorFacade;

#[derive(Debug, Clone)]
pub struct IdleState {
    cue: String,
}

impl IdleState {
    pub fn new() -> Self {
        Self {
            cue: CUE_IDLE.to_string(),
        }
    }
}

impl Default for IdleState {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyState for IdleState {
    fn name(&self) -> &str {
        STATE_IDLE
    }

    fn enter(&mut self, actor: &mut dyn ActorFacade) {
        actor.set_velocity(Vec2::ZERO);
        actor.play_animation_cue(&self.cue);
    }

    fn exit(&mut self, _actor: &mut dyn ActorFacade) {}

    fn physics_update(&mut self, actor: &mut dyn ActorFacade, delta: f32) -> Transition {
        actor.refresh_target();

        let max_delta = actor.move_speed() * IDLE_DAMPING_FACTOR * delta;
        actor.set_velocity(move_toward(actor.velocity(), Vec2::ZERO, max_delta));
        actor.apply_movement();

        // Attack range implies detection range; checking it first skips a
        // hop through Walk when the target is already close.
        if actor.is_in_range(RangeKind::Attack) && actor.attack_cooldown_timer() <= 0.0 {
            return Transition::ChangeTo(STATE_ATTACK);
        }
        if actor.is_in_range(RangeKind::Detection) {
            return Transition::ChangeTo(STATE_WALK);
        }
        Transition::Stay
    }
}
