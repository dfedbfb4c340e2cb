//! The capability surface states and templates drive.
//!
//! An `ActorFacade` is the enemy's body as seen by the decision logic:
//! velocity and movement, target sensing, combat timers and animation
//! cues. The host (the simulation, or a mock in tests) owns the actual
//! data; the state machine only reads and writes through this trait.
//!
//! Sensing is split in two steps. `refresh_target` updates the cached
//! "last known target"; `is_in_range` answers from that cache against the
//! actor's current position. Every state refreshes before it moves and
//! queries after, so decisions made in a tick (and the next state's
//! `enter`) see the most recent refresh.

use glam::Vec2;

use kuros_core::enums::RangeKind;

/// Something the decision logic reports back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    StateChanged { from: &'a str, to: &'a str },
    TransitionRejected { state: &'a str },
    TemplateStarted { template: &'a str },
    TemplateFinished { template: &'a str },
}

pub trait ActorFacade {
    /// False once the actor has been defeated or removed. A tick against
    /// an invalid actor must not mutate anything.
    fn is_valid(&self) -> bool;

    /// Simulation clock (seconds).
    fn now(&self) -> f64;

    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Resolve the current velocity against the world for one step.
    fn apply_movement(&mut self);
    /// Keep the actor inside the playable area.
    fn clamp_to_bounds(&mut self);
    fn move_speed(&self) -> f32;

    /// Update the cached target from the world.
    fn refresh_target(&mut self);
    /// Whether the cached target lies within the given radius.
    fn is_in_range(&self, kind: RangeKind) -> bool;
    /// Unit vector toward the cached target.
    fn target_direction(&self) -> Option<Vec2>;

    /// Actor-wide attack cooldown remaining (seconds).
    fn attack_cooldown_timer(&self) -> f32;
    fn set_attack_cooldown_timer(&mut self, secs: f32);
    /// Configured attack cooldown length (seconds).
    fn attack_cooldown(&self) -> f32;
    fn hit_stun_timer(&self) -> f32;

    fn play_animation_cue(&mut self, cue: &str);
    fn has_animation_cue(&self, cue: &str) -> bool;

    /// Hit the cached target. Returns whether the hit connected.
    fn strike_target(&mut self, damage: f32, knockback: f32) -> bool;

    fn notify(&mut self, _notice: Notice<'_>) {}

    /// Refresh the target, then check the detection radius.
    fn is_target_within_detection_range(&mut self) -> bool {
        self.refresh_target();
        self.is_in_range(RangeKind::Detection)
    }

    /// Refresh the target, then check the attack radius.
    fn is_target_within_attack_range(&mut self) -> bool {
        self.refresh_target();
        self.is_in_range(RangeKind::Attack)
    }
}
