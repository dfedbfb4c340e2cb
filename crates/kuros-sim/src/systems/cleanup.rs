//! Cleanup system: removes defeated enemies and their brains.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use kuros_core::components::{ActorId, Defeated, Enemy};

use crate::brain::EnemyBrain;

/// Despawn defeated enemies. The player is never despawned.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    brains: &mut BTreeMap<ActorId, EnemyBrain>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (_enemy, _defeated)) in world.query_mut::<(&Enemy, &Defeated)>() {
        despawn_buffer.push(entity);
    }
    if despawn_buffer.is_empty() {
        return;
    }

    brains.retain(|_, brain| !despawn_buffer.contains(&brain.entity));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
