//! Effect system: ages timed effects and rewrites the stats they adjust.

use hecs::World;

use kuros_core::components::ActorId;
use kuros_core::effects::ActorEffects;
use kuros_core::events::SimEvent;
use kuros_core::stats::ActorStats;

pub fn run(world: &mut World, dt: f32, events: &mut Vec<SimEvent>) {
    for (_entity, (id, effects, stats)) in
        world.query_mut::<(&ActorId, &mut ActorEffects, &mut ActorStats)>()
    {
        for effect in effects.tick(dt) {
            tracing::debug!(actor = id.0, effect = %effect, "effect expired");
            events.push(SimEvent::EffectExpired {
                actor: *id,
                effect,
            });
        }
        effects.apply_to(stats);
    }
}
