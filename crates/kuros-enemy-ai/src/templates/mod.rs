//! Attack templates: self-contained attack routines the Attack state runs.
//!
//! A template is started by `try_start`, advanced by `tick` until it stops
//! running, and may be cancelled at any point. Each template keeps its own
//! cooldown, which elapses through `cool_down` while the template is idle.

pub mod lunge;
pub mod strike;

pub use lunge::LungeTemplate;
pub use strike::StrikeTemplate;

use kuros_core::config::AttackTemplateConfig;
use kuros_core::enums::AttackPhase;

use crate::facade::ActorFacade;

pub trait AttackTemplate: Send + std::fmt::Debug {
    fn name(&self) -> &str;

    fn phase(&self) -> AttackPhase;

    /// Seconds until the template may start again.
    fn cooldown_remaining(&self) -> f32;

    /// Pure readiness check: not running and off cooldown.
    fn can_start(&self) -> bool {
        self.phase() == AttackPhase::Ready && self.cooldown_remaining() <= 0.0
    }

    /// Begin a run. May still fail on actor conditions `can_start` cannot
    /// see (no target, hit-stunned); a failed start changes nothing.
    fn try_start(&mut self, actor: &mut dyn ActorFacade) -> bool;

    fn tick(&mut self, actor: &mut dyn ActorFacade, delta: f32);

    fn is_running(&self) -> bool {
        self.phase() != AttackPhase::Ready
    }

    /// Stop the run. The cooldown is zeroed only when `clear_cooldown`.
    fn cancel(&mut self, clear_cooldown: bool);

    /// Elapse the cooldown while idle. Ignored while running.
    fn cool_down(&mut self, elapsed: f32);
}

/// Pick the first template that can start, in registration order, and
/// start it. A refused start ends selection for this tick.
pub fn select_template(
    templates: &mut [Box<dyn AttackTemplate>],
    actor: &mut dyn ActorFacade,
) -> Option<usize> {
    let index = templates.iter().position(|t| t.can_start())?;
    if templates[index].try_start(actor) {
        Some(index)
    } else {
        tracing::debug!(template = templates[index].name(), "template refused to start");
        None
    }
}

/// Instantiate the configured templates in order.
pub fn build_templates(configs: &[AttackTemplateConfig]) -> Vec<Box<dyn AttackTemplate>> {
    configs
        .iter()
        .map(|config| -> Box<dyn AttackTemplate> {
            match config {
                AttackTemplateConfig::Strike {
                    name,
                    windup,
                    active,
                    recovery,
                    cooldown,
                    damage,
                    knockback,
                    cue,
                } => Box::new(StrikeTemplate::new(
                    name.as_str(),
                    *windup,
                    *active,
                    *recovery,
                    *cooldown,
                    *damage,
                    *knockback,
                    cue.as_str(),
                )),
                AttackTemplateConfig::Lunge {
                    name,
                    windup,
                    dash_duration,
                    dash_speed,
                    recovery,
                    cooldown,
                    damage,
                    knockback,
                    cue,
                } => Box::new(LungeTemplate::new(
                    name.as_str(),
                    *windup,
                    *dash_duration,
                    *dash_speed,
                    *recovery,
                    *cooldown,
                    *damage,
                    *knockback,
                    cue.as_str(),
                )),
            }
        })
        .collect()
}

/// Windup, active and recovery lengths in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PhaseDurations {
    pub windup: f32,
    pub active: f32,
    pub recovery: f32,
}

impl PhaseDurations {
    fn of(&self, phase: AttackPhase) -> f32 {
        match phase {
            AttackPhase::Windup => self.windup,
            AttackPhase::Active => self.active,
            AttackPhase::Recovery => self.recovery,
            AttackPhase::Ready => 0.0,
        }
    }
}

/// Phase transitions crossed by one `PhaseClock::advance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PhaseStep {
    pub entered_active: bool,
    pub entered_recovery: bool,
    pub finished: bool,
}

/// Countdown through windup, active and recovery. Leftover time carries
/// into the next phase, so zero-length phases pass within one tick.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PhaseClock {
    pub phase: AttackPhase,
    remaining: f32,
}

impl PhaseClock {
    pub fn begin(&mut self, durations: &PhaseDurations) {
        self.phase = AttackPhase::Windup;
        self.remaining = durations.windup;
    }

    pub fn reset(&mut self) {
        self.phase = AttackPhase::Ready;
        self.remaining = 0.0;
    }

    pub fn advance(&mut self, delta: f32, durations: &PhaseDurations) -> PhaseStep {
        let mut step = PhaseStep::default();
        if self.phase == AttackPhase::Ready {
            return step;
        }

        self.remaining -= delta;
        while self.phase != AttackPhase::Ready && self.remaining <= 0.0 {
            self.phase = match self.phase {
                AttackPhase::Windup => {
                    step.entered_active = true;
                    AttackPhase::Active
                }
                AttackPhase::Active => {
                    step.entered_recovery = true;
                    AttackPhase::Recovery
                }
                AttackPhase::Recovery | AttackPhase::Ready => {
                    step.finished = true;
                    AttackPhase::Ready
                }
            };
            self.remaining += durations.of(self.phase);
        }
        if self.phase == AttackPhase::Ready {
            self.remaining = 0.0;
        }
        step
    }
}
