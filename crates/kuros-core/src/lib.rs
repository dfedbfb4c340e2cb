//! Core types and definitions for the KUROS enemy simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, enemy profiles, commands, snapshots, events,
//! and constants. It has no dependency on any ECS or runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod effects;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod stats;
pub mod types;

pub use error::ConfigError;

#[cfg(test)]
mod tests;
