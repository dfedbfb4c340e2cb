//! World-backed `ActorFacade`.
//!
//! `WorldActor` borrows one enemy's components for the duration of a
//! machine call. Hits on the player are not applied here: they are queued
//! as `PendingStrike`s and resolved after every enemy has acted, so actor
//! order within a tick does not change what enemies see.

use glam::Vec2;
use hecs::{Entity, World};

use kuros_core::components::*;
use kuros_core::enums::{Facing, RangeKind};
use kuros_core::events::SimEvent;
use kuros_core::stats::ActorStats;
use kuros_core::types::{ArenaBounds, Position, Velocity};
use kuros_enemy_ai::{ActorFacade, Notice};

/// Per-tick values every enemy sees the same way.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Player position, `None` when there is no living player.
    pub player: Option<Position>,
    pub bounds: ArenaBounds,
    /// Scaled step length (seconds).
    pub dt: f32,
    /// Simulation clock at the start of the tick.
    pub now: f64,
}

/// An enemy hit on the player, applied after the AI step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingStrike {
    pub attacker: ActorId,
    pub damage: f32,
    pub knockback: f32,
    /// Unit vector from attacker to player at the time of the strike.
    pub direction: Vec2,
}

pub struct WorldActor<'a> {
    pub id: ActorId,
    position: &'a mut Position,
    velocity: &'a mut Velocity,
    stats: &'a ActorStats,
    health: &'a Health,
    timers: &'a mut CombatTimers,
    animator: &'a mut Animator,
    facing: &'a mut Facing,
    target: &'a mut TargetCache,
    ctx: &'a TickContext,
    strikes: &'a mut Vec<PendingStrike>,
    events: &'a mut Vec<SimEvent>,
}

/// Borrow `entity` as a facade and run `f` against it. Returns `None` when
/// the entity is gone or lacks an actor's components.
pub fn with_world_actor<R>(
    world: &mut World,
    entity: Entity,
    ctx: &TickContext,
    strikes: &mut Vec<PendingStrike>,
    events: &mut Vec<SimEvent>,
    f: impl FnOnce(&mut WorldActor<'_>) -> R,
) -> Option<R> {
    let (id, position, velocity, stats, health, timers, animator, facing, target) = world
        .query_one_mut::<(
            &ActorId,
            &mut Position,
            &mut Velocity,
            &ActorStats,
            &Health,
            &mut CombatTimers,
            &mut Animator,
            &mut Facing,
            &mut TargetCache,
        )>(entity)
        .ok()?;

    let mut actor = WorldActor {
        id: *id,
        position,
        velocity,
        stats,
        health,
        timers,
        animator,
        facing,
        target,
        ctx,
        strikes,
        events,
    };
    Some(f(&mut actor))
}

impl WorldActor<'_> {
    fn radius(&self, kind: RangeKind) -> f32 {
        match kind {
            RangeKind::Detection => self.stats.detection_range,
            RangeKind::Attack => self.stats.attack_range,
        }
    }
}

impl ActorFacade for WorldActor<'_> {
    fn is_valid(&self) -> bool {
        self.health.is_alive()
    }

    fn now(&self) -> f64 {
        self.ctx.now
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_movement(&mut self) {
        self.position.0 += self.velocity.0 * self.ctx.dt;
        *self.facing = self.facing.toward(self.velocity.0.x);
    }

    fn clamp_to_bounds(&mut self) {
        self.position.0 = self.ctx.bounds.clamp(self.position.0);
    }

    fn move_speed(&self) -> f32 {
        self.stats.move_speed
    }

    fn refresh_target(&mut self) {
        self.target.position = self.ctx.player;
    }

    fn is_in_range(&self, kind: RangeKind) -> bool {
        self.target
            .position
            .is_some_and(|target| self.position.range_to(&target) <= self.radius(kind))
    }

    /// Unit vector toward the cached target. An actor standing on its
    /// target aims the way it faces.
    fn target_direction(&self) -> Option<Vec2> {
        self.target.position.map(|target| {
            self.position
                .direction_to(&target)
                .unwrap_or(Vec2::X * self.facing.sign())
        })
    }

    fn attack_cooldown_timer(&self) -> f32 {
        self.timers.attack_timer
    }

    fn set_attack_cooldown_timer(&mut self, secs: f32) {
        self.timers.attack_timer = secs.max(0.0);
    }

    fn attack_cooldown(&self) -> f32 {
        self.stats.attack_cooldown
    }

    fn hit_stun_timer(&self) -> f32 {
        self.timers.hit_stun_timer
    }

    fn play_animation_cue(&mut self, cue: &str) {
        if !self.animator.play(cue) {
            tracing::debug!(actor = self.id.0, cue, "rig has no such animation cue");
        }
    }

    fn has_animation_cue(&self, cue: &str) -> bool {
        self.animator.has(cue)
    }

    fn strike_target(&mut self, damage: f32, knockback: f32) -> bool {
        let Some(direction) = self.target_direction() else {
            return false;
        };
        *self.facing = self.facing.toward(direction.x);
        self.strikes.push(PendingStrike {
            attacker: self.id,
            damage,
            knockback,
            direction,
        });
        true
    }

    fn notify(&mut self, notice: Notice<'_>) {
        let actor = self.id;
        let event = match notice {
            Notice::StateChanged { from, to } => SimEvent::StateChanged {
                actor,
                from: from.to_string(),
                to: to.to_string(),
            },
            Notice::TransitionRejected { state } => SimEvent::TransitionRejected {
                actor,
                state: state.to_string(),
            },
            Notice::TemplateStarted { template } => SimEvent::TemplateStarted {
                actor,
                template: template.to_string(),
            },
            Notice::TemplateFinished { template } => SimEvent::TemplateFinished {
                actor,
                template: template.to_string(),
            },
        };
        self.events.push(event);
    }
}
