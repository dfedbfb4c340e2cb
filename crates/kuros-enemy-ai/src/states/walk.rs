//! Walk: pursue the target until it is in reach or lost.

use glam::Vec2;

use kuros_core::constants::{CUE_WALK, STATE_ATTACK, STATE_IDLE, STATE_WALK};
use kuros_core::enums::RangeKind;

use super::{EnemyState, Transition};
use crate::facade::ActorFacade;

#[derive(Debug, Clone)]
pub struct WalkState {
    cue: String,
}

impl WalkState {
    pub fn new() -> Self {
        Self {
            cue: CUE_WALK.to_string(),
        }
    }
}

impl Default for WalkState {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyState for WalkState {
    fn name(&self) -> &str {
        STATE_WALK
    }

    fn enter(&mut self, actor: &mut dyn ActorFacade) {
        actor.play_animation_cue(&self.cue);
    }

    fn exit(&mut self, _actor: &mut dyn ActorFacade) {}

    fn physics_update(&mut self, actor: &mut dyn ActorFacade, _delta: f32) -> Transition {
        actor.refresh_target();

        // Close the distance, but stop at the edge of attack range and
        // wait there while the attack cooldown runs.
        let chase = actor.is_in_range(RangeKind::Detection) && !actor.is_in_range(RangeKind::Attack);
        let velocity = match actor.target_direction() {
            Some(direction) if chase => direction * actor.move_speed(),
            _ => Vec2::ZERO,
        };
        actor.set_velocity(velocity);
        actor.apply_movement();
        actor.clamp_to_bounds();

        if actor.is_in_range(RangeKind::Attack) && actor.attack_cooldown_timer() <= 0.0 {
            return Transition::ChangeTo(STATE_ATTACK);
        }
        if !actor.is_in_range(RangeKind::Detection) {
            return Transition::ChangeTo(STATE_IDLE);
        }
        Transition::Stay
    }
}
