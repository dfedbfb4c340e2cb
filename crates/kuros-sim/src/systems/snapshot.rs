//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only; it never modifies the world.

use std::collections::BTreeMap;

use hecs::World;

use kuros_core::components::*;
use kuros_core::enums::{Facing, SimPhase};
use kuros_core::events::SimEvent;
use kuros_core::state::*;
use kuros_core::stats::ActorStats;
use kuros_core::types::{Position, SimTime, Velocity};

use crate::brain::EnemyBrain;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    brains: &BTreeMap<ActorId, EnemyBrain>,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        phase,
        player: build_player(world),
        enemies: build_enemies(world, brains),
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &ActorId, &Position, &Velocity, &Facing, &Health, &CombatTimers)>()
        .iter()
        .next()
        .map(|(_, (_, id, pos, vel, facing, health, timers))| PlayerView {
            id: *id,
            position: *pos,
            velocity: *vel,
            facing: *facing,
            health: health.current,
            attack_timer: timers.attack_timer,
            hit_stun_timer: timers.hit_stun_timer,
        })
}

/// Enemy views in `ActorId` order.
fn build_enemies(world: &World, brains: &BTreeMap<ActorId, EnemyBrain>) -> Vec<EnemyView> {
    brains
        .iter()
        .filter_map(|(id, brain)| {
            let mut query = world
                .query_one::<(
                    &Position,
                    &Velocity,
                    &Facing,
                    &ActorStats,
                    &Health,
                    &CombatTimers,
                    &Animator,
                )>(brain.entity)
                .ok()?;
            let (pos, vel, facing, stats, health, timers, animator) = query.get()?;
            Some(EnemyView {
                id: *id,
                profile: brain.profile.clone(),
                position: *pos,
                velocity: *vel,
                facing: *facing,
                move_speed: stats.move_speed,
                state: brain.machine.current_name().to_string(),
                active_template: brain.machine.active_template().map(str::to_string),
                health: health.current,
                max_health: health.max,
                attack_timer: timers.attack_timer,
                hit_stun_timer: timers.hit_stun_timer,
                cue: animator.current.clone(),
            })
        })
        .collect()
}
