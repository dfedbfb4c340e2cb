//! Enemy AI system: one state machine tick per enemy, in `ActorId` order.

use std::collections::BTreeMap;

use hecs::World;

use kuros_core::components::{ActorId, Health, Player};
use kuros_core::events::SimEvent;
use kuros_core::types::Position;

use crate::brain::EnemyBrain;
use crate::facade::{with_world_actor, PendingStrike, TickContext};

pub fn run(
    world: &mut World,
    brains: &mut BTreeMap<ActorId, EnemyBrain>,
    ctx: &TickContext,
    strikes: &mut Vec<PendingStrike>,
    events: &mut Vec<SimEvent>,
) {
    for (id, brain) in brains.iter_mut() {
        let machine = &mut brain.machine;
        let ticked = with_world_actor(world, brain.entity, ctx, strikes, events, |actor| {
            machine.physics_update(actor, ctx.dt);
        });
        if ticked.is_none() {
            tracing::warn!(actor = id.0, "enemy brain lost its entity");
        }
    }
}

/// Position of the living player, the target every enemy senses.
pub fn player_target(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position, &Health)>()
        .iter()
        .find(|(_, (_, _, health))| health.is_alive())
        .map(|(_, (_, pos, _))| *pos)
}
