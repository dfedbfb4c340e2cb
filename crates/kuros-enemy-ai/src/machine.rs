//! Enemy finite state machine.
//!
//! Owns a fixed registry of states (built once from a profile) and the
//! index of the single active state. `change_state` is the only way the
//! active state changes: exit the outgoing state, reseat, enter the
//! incoming one. Ticks are delivered only to an entered state.

use std::collections::HashMap;

use kuros_core::ConfigError;

use crate::facade::{ActorFacade, Notice};
use crate::states::{EnemyState, Transition};

/// Errors raised while assembling a state machine.
#[derive(Debug, thiserror::Error)]
pub enum FsmError {
    #[error("state machine has no states")]
    Empty,

    #[error("state '{0}' registered twice")]
    DuplicateState(String),

    #[error("initial state '{0}' is not registered")]
    UnknownInitial(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct StateMachine {
    states: Vec<Box<dyn EnemyState>>,
    index: HashMap<String, usize>,
    current: usize,
    /// Whether the current state has had `enter` called.
    entered: bool,
}

impl StateMachine {
    /// Build a machine over `states` with `initial` as the first active
    /// state. `enter` runs on the first tick or the first `start` call.
    pub fn new(states: Vec<Box<dyn EnemyState>>, initial: &str) -> Result<Self, FsmError> {
        if states.is_empty() {
            return Err(FsmError::Empty);
        }

        let mut index = HashMap::with_capacity(states.len());
        for (i, state) in states.iter().enumerate() {
            if index.insert(state.name().to_string(), i).is_some() {
                return Err(FsmError::DuplicateState(state.name().to_string()));
            }
        }

        let current = *index
            .get(initial)
            .ok_or_else(|| FsmError::UnknownInitial(initial.to_string()))?;

        Ok(Self {
            states,
            index,
            current,
            entered: false,
        })
    }

    /// Name of the active state.
    pub fn current_name(&self) -> &str {
        self.states[self.current].name()
    }

    /// Registered state names in registration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|s| s.name())
    }

    pub fn is_started(&self) -> bool {
        self.entered
    }

    /// Name of the attack template the active state is running, if any.
    pub fn active_template(&self) -> Option<&str> {
        self.states[self.current].active_template()
    }

    /// Enter the initial state. No-op once started.
    pub fn start(&mut self, actor: &mut dyn ActorFacade) {
        if !self.entered {
            self.entered = true;
            self.states[self.current].enter(actor);
        }
    }

    /// Transition to `name`. Unknown names are logged and ignored, leaving
    /// the current state active. Returns whether the transition happened.
    ///
    /// Changing to the active state re-enters it (exit, then enter).
    pub fn change_state(&mut self, name: &str, actor: &mut dyn ActorFacade) -> bool {
        let Some(&next) = self.index.get(name) else {
            tracing::warn!(
                state = name,
                current = self.current_name(),
                "ignoring transition to unregistered state"
            );
            actor.notify(Notice::TransitionRejected { state: name });
            return false;
        };

        let previous = self.current;
        if self.entered {
            self.states[previous].exit(actor);
        }
        self.current = next;
        self.entered = true;

        let (from, to) = (self.states[previous].name(), self.states[next].name());
        tracing::debug!(from, to, "state changed");
        actor.notify(Notice::StateChanged { from, to });

        self.states[next].enter(actor);
        true
    }

    /// Deliver one fixed-step tick to the active state and perform the
    /// transition it requests. Invalid actors are skipped silently.
    pub fn physics_update(&mut self, actor: &mut dyn ActorFacade, delta: f32) {
        if !actor.is_valid() {
            return;
        }
        self.start(actor);

        if let Transition::ChangeTo(name) = self.states[self.current].physics_update(actor, delta) {
            self.change_state(name, actor);
        }
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.state_names().collect::<Vec<_>>())
            .field("current", &self.current_name())
            .field("entered", &self.entered)
            .finish()
    }
}
