//! Strike: plant, swing once, recover.

use glam::Vec2;

use kuros_core::enums::{AttackPhase, RangeKind};

use super::{AttackTemplate, PhaseClock, PhaseDurations};
use crate::facade::ActorFacade;

#[derive(Debug, Clone)]
pub struct StrikeTemplate {
    name: String,
    durations: PhaseDurations,
    cooldown: f32,
    damage: f32,
    knockback: f32,
    cue: String,
    clock: PhaseClock,
    cooldown_remaining: f32,
    /// Whether the swing connected during the current run.
    connected: bool,
}

impl StrikeTemplate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        windup: f32,
        active: f32,
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
                active,
                recovery,
            },
            cooldown,
            damage,
            knockback,
            cue: cue.into(),
            clock: PhaseClock::default(),
            cooldown_remaining: 0.0,
            connected: false,
        }
    }

    pub fn connected(&self) -> bool {
        self.connected
    }
}

impl AttackTemplate for StrikeTemplate {
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
        if !self.can_start() || actor.hit_stun_timer() > 0.0 || actor.target_direction().is_none() {
            return false;
        }
        self.clock.begin(&self.durations);
        self.connected = false;
        actor.set_velocity(Vec2::ZERO);
        actor.play_animation_cue(&self.cue);
        true
    }

    fn tick(&mut self, actor: &mut dyn ActorFacade, delta: f32) {
        let step = self.clock.advance(delta, &self.durations);

        if step.entered_active && actor.is_in_range(RangeKind::Attack) {
            self.connected = actor.strike_target(self.damage, self.knockback);
        }

        if step.finished {
            self.cooldown_remaining = self.cooldown;
            actor.set_attack_cooldown_timer(actor.attack_cooldown());
        }
    }

    fn cancel(&mut self, clear_cooldown: bool) {
        self.clock.reset();
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
