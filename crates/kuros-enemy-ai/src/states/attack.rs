//! Attack: run attack templates while the target stays close.
//!
//! The state owns the actor's templates in priority order and at most one
//! active run. When a run ends it immediately tries to chain another; if
//! nothing can start and the actor cooldown is ticking it holds position
//! for that tick. A tick that begins with no run falls through to the
//! priority table.

use glam::Vec2;

use kuros_core::constants::{STATE_ATTACK, STATE_IDLE, STATE_WALK};
use kuros_core::enums::RangeKind;

use super::{EnemyState, Transition};
use crate::facade::{ActorFacade, Notice};
use crate::templates::{select_template, AttackTemplate};

pub struct AttackState {
    templates: Vec<Box<dyn AttackTemplate>>,
    active: Option<usize>,
    /// Clock reading at the last cooldown catch-up.
    last_cooldown_update: Option<f64>,
}

impl AttackState {
    pub fn new(templates: Vec<Box<dyn AttackTemplate>>) -> Self {
        Self {
            templates,
            active: None,
            last_cooldown_update: None,
        }
    }

    /// Elapse idle template cooldowns by the time passed since the last
    /// catch-up, including time spent in other states.
    fn catch_up_cooldowns(&mut self, actor: &dyn ActorFacade) {
        let now = actor.now();
        if let Some(last) = self.last_cooldown_update {
            let elapsed = (now - last) as f32;
            if elapsed > 0.0 {
                for (i, template) in self.templates.iter_mut().enumerate() {
                    if self.active != Some(i) {
                        template.cool_down(elapsed);
                    }
                }
            }
        }
        self.last_cooldown_update = Some(now);
    }

    fn start_next(&mut self, actor: &mut dyn ActorFacade) -> bool {
        match select_template(&mut self.templates, actor) {
            Some(index) => {
                self.active = Some(index);
                let template = self.templates[index].name();
                tracing::debug!(template, "attack template started");
                actor.notify(Notice::TemplateStarted { template });
                true
            }
            None => false,
        }
    }
}

/// Where to go once no template is running and nothing new started.
pub fn next_state(cooldown_active: bool, detected: bool, in_attack_range: bool) -> &'static str {
    match (cooldown_active, detected, in_attack_range) {
        (true, true, _) => STATE_WALK,
        (true, false, _) => STATE_IDLE,
        (false, false, _) => STATE_IDLE,
        (false, true, true) => STATE_ATTACK,
        (false, true, false) => STATE_WALK,
    }
}

impl EnemyState for AttackState {
    fn name(&self) -> &str {
        STATE_ATTACK
    }

    fn enter(&mut self, actor: &mut dyn ActorFacade) {
        actor.set_velocity(Vec2::ZERO);
        self.catch_up_cooldowns(actor);
        self.start_next(actor);
    }

    fn exit(&mut self, _actor: &mut dyn ActorFacade) {
        if let Some(index) = self.active.take() {
            let template = &mut self.templates[index];
            template.cancel(true);
            tracing::debug!(template = template.name(), "attack template cancelled");
        }
    }

    fn physics_update(&mut self, actor: &mut dyn ActorFacade, delta: f32) -> Transition {
        actor.refresh_target();
        if !actor.is_in_range(RangeKind::Detection) && !actor.is_in_range(RangeKind::Attack) {
            return Transition::ChangeTo(STATE_IDLE);
        }

        actor.apply_movement();
        actor.clamp_to_bounds();
        self.catch_up_cooldowns(actor);

        if let Some(index) = self.active {
            self.templates[index].tick(actor, delta);
            if self.templates[index].is_running() {
                return Transition::Stay;
            }

            self.active = None;
            let template = self.templates[index].name();
            tracing::debug!(template, "attack template finished");
            actor.notify(Notice::TemplateFinished { template });

            if self.start_next(actor) {
                return Transition::Stay;
            }
            if actor.attack_cooldown_timer() > 0.0 {
                actor.set_velocity(Vec2::ZERO);
                actor.apply_movement();
                return Transition::Stay;
            }
        }

        let next = next_state(
            actor.attack_cooldown_timer() > 0.0,
            actor.is_in_range(RangeKind::Detection),
            actor.is_in_range(RangeKind::Attack),
        );
        Transition::ChangeTo(next)
    }

    fn active_template(&self) -> Option<&str> {
        self.active.map(|index| self.templates[index].name())
    }
}

impl std::fmt::Debug for AttackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttackState")
            .field("templates", &self.templates)
            .field("active", &self.active_template())
            .finish()
    }
}
