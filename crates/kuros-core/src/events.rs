//! Events emitted by the simulation for presentation and tests.

use serde::{Deserialize, Serialize};

use crate::components::ActorId;

/// Something observable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An enemy's active state changed.
    StateChanged {
        actor: ActorId,
        from: String,
        to: String,
    },
    /// A transition to an unregistered state name was ignored.
    TransitionRejected { actor: ActorId, state: String },
    /// An attack template began running.
    TemplateStarted { actor: ActorId, template: String },
    /// An attack template ran to completion.
    TemplateFinished { actor: ActorId, template: String },
    /// An actor lost health.
    ActorDamaged {
        actor: ActorId,
        source: Option<ActorId>,
        amount: f32,
        remaining: f32,
    },
    /// An actor's health reached zero.
    ActorDefeated { actor: ActorId },
    /// An effect was attached to an actor at runtime.
    EffectApplied { actor: ActorId, effect: String },
    /// A timed effect ran out and was detached.
    EffectExpired { actor: ActorId, effect: String },
}

impl SimEvent {
    /// The actor this event concerns.
    pub fn actor(&self) -> ActorId {
        match self {
            SimEvent::StateChanged { actor, .. }
            | SimEvent::TransitionRejected { actor, .. }
            | SimEvent::TemplateStarted { actor, .. }
            | SimEvent::TemplateFinished { actor, .. }
            | SimEvent::ActorDamaged { actor, .. }
            | SimEvent::ActorDefeated { actor }
            | SimEvent::EffectApplied { actor, .. }
            | SimEvent::EffectExpired { actor, .. } => *actor,
        }
    }
}
