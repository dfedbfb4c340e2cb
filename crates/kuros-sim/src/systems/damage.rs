//! Damage application and hit reactions.
//!
//! Hits on enemies are applied before the AI step so a struck enemy
//! reacts (hit-stun, hit cue, forced `CooldownFrozen`) in the same tick.
//! Hits on the player are applied after every enemy has acted.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use kuros_core::components::{ActorId, Animator, CombatTimers, Defeated, Health};
use kuros_core::constants::{CUE_HIT, HIT_STUN_DURATION, STATE_COOLDOWN_FROZEN};
use kuros_core::events::SimEvent;
use kuros_core::types::{ArenaBounds, Position};

use crate::brain::EnemyBrain;
use crate::facade::{with_world_actor, PendingStrike, TickContext};

/// Damage waiting to be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub target: ActorId,
    /// `None` for damage injected by command.
    pub source: Option<ActorId>,
    pub amount: f32,
}

/// Apply one hit to `entity`. Returns the health left, or `None` when the
/// entity is gone or already defeated.
pub fn apply_hit(world: &mut World, entity: Entity, hit: Hit, events: &mut Vec<SimEvent>) -> Option<f32> {
    let remaining = {
        let (health, timers, animator) = world
            .query_one_mut::<(&mut Health, &mut CombatTimers, &mut Animator)>(entity)
            .ok()?;
        if !health.is_alive() {
            return None;
        }
        let remaining = health.take(hit.amount);
        timers.hit_stun_timer = HIT_STUN_DURATION;
        animator.play(CUE_HIT);
        remaining
    };

    events.push(SimEvent::ActorDamaged {
        actor: hit.target,
        source: hit.source,
        amount: hit.amount,
        remaining,
    });

    if remaining <= 0.0 {
        let _ = world.insert_one(entity, Defeated);
        events.push(SimEvent::ActorDefeated { actor: hit.target });
        tracing::info!(actor = hit.target.0, "actor defeated");
    }
    Some(remaining)
}

/// Apply every queued hit that targets an enemy and force survivors into
/// `CooldownFrozen`. Hits on other actors stay queued.
pub fn react_enemies(
    world: &mut World,
    brains: &mut BTreeMap<ActorId, EnemyBrain>,
    hits: &mut Vec<Hit>,
    ctx: &TickContext,
    strikes: &mut Vec<PendingStrike>,
    events: &mut Vec<SimEvent>,
) {
    let mut deferred = Vec::new();
    for hit in hits.drain(..) {
        let Some(brain) = brains.get_mut(&hit.target) else {
            deferred.push(hit);
            continue;
        };
        let Some(remaining) = apply_hit(world, brain.entity, hit, events) else {
            continue;
        };
        if remaining > 0.0 {
            let machine = &mut brain.machine;
            with_world_actor(world, brain.entity, ctx, strikes, events, |actor| {
                machine.change_state(STATE_COOLDOWN_FROZEN, actor)
            });
        }
    }
    *hits = deferred;
}

/// Apply queued hits and enemy strikes to the player. Strikes with
/// knockback push the player along the strike direction.
pub fn resolve_player_hits(
    world: &mut World,
    player: Entity,
    hits: &mut Vec<Hit>,
    strikes: &mut Vec<PendingStrike>,
    bounds: &ArenaBounds,
    events: &mut Vec<SimEvent>,
) {
    for hit in hits.drain(..) {
        apply_hit(world, player, hit, events);
    }

    let Ok(player_id) = world.get::<&ActorId>(player).map(|id| *id) else {
        strikes.clear();
        return;
    };
    for strike in strikes.drain(..) {
        let hit = Hit {
            target: player_id,
            source: Some(strike.attacker),
            amount: strike.damage,
        };
        let Some(remaining) = apply_hit(world, player, hit, events) else {
            continue;
        };
        if remaining > 0.0 && strike.knockback > 0.0 {
            if let Ok(mut pos) = world.get::<&mut Position>(player) {
                pos.0 = bounds.clamp(pos.0 + strike.direction * strike.knockback);
            }
        }
    }
}
