//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player and enemy entities with their component bundles.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use kuros_core::components::*;
use kuros_core::config::EnemyProfile;
use kuros_core::constants::*;
use kuros_core::effects::ActorEffects;
use kuros_core::enums::Facing;
use kuros_core::stats::ActorStats;
use kuros_core::types::{ArenaBounds, Position, Velocity};

/// Spawn the player at `position` with default stats and the full rig.
pub fn spawn_player(world: &mut World, id: ActorId, position: Position) -> hecs::Entity {
    let stats = ActorStats::default();
    world.spawn((
        Player,
        id,
        position,
        Velocity::default(),
        stats,
        Health::full(stats.max_health),
        CombatTimers::default(),
        Animator::with_cues(vec![
            CUE_IDLE.to_string(),
            CUE_WALK.to_string(),
            CUE_ATTACK.to_string(),
            CUE_HIT.to_string(),
        ]),
        Facing::default(),
    ))
}

/// Spawn an enemy from `profile`. Modifiers are folded into the stats here
/// and the profile's effects attached over them; the caller owns the
/// matching state machine.
pub fn spawn_enemy(
    world: &mut World,
    id: ActorId,
    profile: &EnemyProfile,
    position: Position,
) -> hecs::Entity {
    let mut stats = profile.effective_stats();
    let mut effects = ActorEffects::new(&stats);
    for effect in &profile.effects {
        effects.attach(effect.clone());
    }
    effects.apply_to(&mut stats);
    world.spawn((
        Enemy,
        id,
        position,
        Velocity::default(),
        stats,
        Health::full(stats.max_health),
        CombatTimers::default(),
        Animator::with_cues(profile.animation_cues.clone()),
        Facing::Left,
        TargetCache::default(),
        effects,
    ))
}

/// Random point on a ring around `center`, kept inside the arena.
pub fn random_spawn_point(rng: &mut ChaCha8Rng, center: Position, bounds: &ArenaBounds) -> Position {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let range: f32 = rng.gen_range(SPAWN_MIN_RANGE..SPAWN_MAX_RANGE);
    let offset = Vec2::new(angle.cos(), angle.sin()) * range;
    Position(bounds.clamp(center.0 + offset))
}
