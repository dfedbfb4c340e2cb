//! Enemy behavior for KUROS.
//!
//! A per-actor finite state machine (Idle, Walk, Attack, CooldownFrozen)
//! driven once per fixed step through the [`ActorFacade`] capability
//! trait, plus the attack templates the Attack state runs and the
//! archetype profiles machines are built from.

pub mod facade;
pub mod machine;
pub mod profiles;
pub mod states;
pub mod templates;

pub use facade::{ActorFacade, Notice};
pub use machine::{FsmError, StateMachine};
pub use profiles::{build_state_machine, get_profile};
