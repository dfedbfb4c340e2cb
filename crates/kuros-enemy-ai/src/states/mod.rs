//! Enemy behavior states.
//!
//! Every state shares one contract: `enter` once on becoming active,
//! `physics_update` once per fixed step while active, `exit` once on
//! leaving. A state asks for a transition by returning it; the machine
//! performs it before the next tick.

pub mod attack;
pub mod cooldown_frozen;
pub mod idle;
pub mod walk;

pub use attack::AttackState;
pub use cooldown_frozen::CooldownFrozenState;
pub use idle::IdleState;
pub use walk::WalkState;

use crate::facade::ActorFacade;

/// What a state wants after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    ChangeTo(&'static str),
}

pub trait EnemyState: Send {
    /// Registry name, unique within one machine.
    fn name(&self) -> &str;

    /// Called once when the state becomes active.
    fn enter(&mut self, actor: &mut dyn ActorFacade);

    /// Called once when the state stops being active.
    fn exit(&mut self, actor: &mut dyn ActorFacade);

    /// One fixed simulation step: sense, move, then decide.
    fn physics_update(&mut self, actor: &mut dyn ActorFacade, delta: f32) -> Transition;

    /// Attack template currently running under this state.
    fn active_template(&self) -> Option<&str> {
        None
    }
}
