//! Player strike.
//!
//! A swing needs the attack timer and hit-stun both at zero. It resets
//! the attack timer and hits every living enemy within attack range on
//! the side the player faces, within a vertical band.

use hecs::{Entity, World};

use kuros_core::components::{ActorId, Animator, CombatTimers, Enemy, Health};
use kuros_core::constants::{CUE_ATTACK, PLAYER_STRIKE_VERTICAL_RANGE};
use kuros_core::enums::Facing;
use kuros_core::stats::ActorStats;
use kuros_core::types::Position;

use super::damage::Hit;

/// Attempt a swing. Returns whether it happened; hits are queued.
pub fn run(world: &mut World, player: Entity, hits: &mut Vec<Hit>) -> bool {
    let (player_id, origin, facing, stats) = {
        let Ok((id, pos, stats, timers, animator, facing, health)) = world
            .query_one_mut::<(
                &ActorId,
                &Position,
                &ActorStats,
                &mut CombatTimers,
                &mut Animator,
                &Facing,
                &Health,
            )>(player)
        else {
            return false;
        };
        if !health.is_alive() || timers.attack_timer > 0.0 || timers.hit_stun_timer > 0.0 {
            return false;
        }
        timers.attack_timer = stats.attack_cooldown;
        animator.play(CUE_ATTACK);
        (*id, *pos, *facing, *stats)
    };

    let before = hits.len();
    for (_entity, (_enemy, id, pos, health)) in world
        .query::<(&Enemy, &ActorId, &Position, &Health)>()
        .iter()
    {
        if !health.is_alive() {
            continue;
        }
        let offset = pos.0 - origin.0;
        let in_front = offset.x * facing.sign() >= 0.0;
        if in_front
            && offset.y.abs() <= PLAYER_STRIKE_VERTICAL_RANGE
            && origin.range_to(pos) <= stats.attack_range
        {
            hits.push(Hit {
                target: *id,
                source: Some(player_id),
                amount: stats.attack_damage,
            });
        }
    }
    // Deterministic application order.
    hits[before..].sort_by_key(|hit| hit.target);

    tracing::debug!(
        actor = player_id.0,
        targets = hits.len() - before,
        "player swing"
    );
    true
}
