//! Lunge: wind up in place, dash along a locked-in direction, recover.
//!
//! The dash direction is captured when the windup ends, so a target that
//! sidesteps during the dash can be missed. The lunge hits at most once
//! per run, on the first dash tick the target is within attack range, and
//! the dash stops there.

use glam::Vec2;

use kuros_core::enums::{AttackPhase, RangeKind};

use super::{AttackTemplate, PhaseClock, PhaseDurations};
use crate::facade::ActorFacade;

#[derive(Debug, Clone)]
pub struct LungeTemplate {
    name: String,
    durations: PhaseDurations,
    dash_speed: f32,
    cooldown: f32,
    damage: f32,
    knockback: f32,
    cue: String,
    clock: PhaseClock,
    cooldown_remaining: f32,
    direction: Vec2,
    connected: bool,
}

impl LungeTemplate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        windup: f32,
        dash_duration: f32,
        dash_speed: f32,
        recovery: f32,
        cooldown: f32,
        damage: f32,
        knockback: f32,
        cue: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            durations: PhaseDurations {
                windup,
                active: dash_duration,
                recovery,
            },
            dash_speed,
            cooldown,
            damage,
            knockback,
            cue: cue.into(),
            clock: PhaseClock::default(),
            cooldown_remaining: 0.0,
            direction: Vec2::ZERO,
            connected: false,
        }
    }

    pub fn connected(&self) -> bool {
        self.connected
    }
}

impl AttackTemplate for LungeTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn phase(&self) -> AttackPhase {
        self.clock.phase
    }

    fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    fn try_start(&mut self, actor: &mut dyn ActorFacade) -> bool {
        if !self.can_start() || actor.hit_stun_timer() > 0.0 {
            return false;
        }
        let Some(direction) = actor.target_direction() else {
            return false;
        };
        self.clock.begin(&self.durations);
        self.direction = direction;
        self.connected = false;
        actor.set_velocity(Vec2::ZERO);
        actor.play_animation_cue(&self.cue);
        true
    }

    fn tick(&mut self, actor: &mut dyn ActorFacade, delta: f32) {
        let step = self.clock.advance(delta, &self.durations);

        if step.entered_active {
            if let Some(direction) = actor.target_direction() {
                self.direction = direction;
            }
        }

        let dashing = self.clock.phase == AttackPhase::Active;
        if (step.entered_active || dashing) && !self.connected && actor.is_in_range(RangeKind::Attack) {
            self.connected = actor.strike_target(self.damage, self.knockback);
        }

        if dashing && !self.connected {
            actor.set_velocity(self.direction * self.dash_speed);
        } else {
            actor.set_velocity(Vec2::ZERO);
        }

        if step.finished {
            self.cooldown_remaining = self.cooldown;
            actor.set_attack_cooldown_timer(actor.attack_cooldown());
        }
    }

    fn cancel(&mut self, clear_cooldown: bool) {
        self.clock.reset();
        self.direction = Vec2::ZERO;
        if clear_cooldown {
            self.cooldown_remaining = 0.0;
        }
    }

    fn cool_down(&mut self, elapsed: f32) {
        if !self.is_running() {
            self.cooldown_remaining = (self.cooldown_remaining - elapsed).max(0.0);
        }
    }
}
