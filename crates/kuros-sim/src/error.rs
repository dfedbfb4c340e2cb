//! Simulation errors.

use kuros_core::components::ActorId;
use kuros_core::ConfigError;
use kuros_enemy_ai::FsmError;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("no actor with id {0:?}")]
    UnknownActor(ActorId),

    #[error("enemy profile '{name}' rejected: {source}")]
    InvalidProfile {
        name: String,
        #[source]
        source: FsmError,
    },

    #[error("effect '{name}' rejected: {source}")]
    InvalidEffect {
        name: String,
        #[source]
        source: ConfigError,
    },
}
