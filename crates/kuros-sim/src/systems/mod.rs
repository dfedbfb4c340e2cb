//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only work). Anything that must outlive a tick lives in components
//! or in the engine's brain map.

pub mod cleanup;
pub mod damage;
pub mod effects;
pub mod enemy_ai;
pub mod movement;
pub mod player_attack;
pub mod snapshot;
pub mod timers;
