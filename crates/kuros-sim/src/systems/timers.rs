//! Combat timer decay.

use hecs::World;

use kuros_core::components::CombatTimers;

/// Count every actor's combat timers down by `dt` (floor 0).
pub fn run(world: &mut World, dt: f32) {
    for (_entity, timers) in world.query_mut::<&mut CombatTimers>() {
        timers.decay(dt);
    }
}
