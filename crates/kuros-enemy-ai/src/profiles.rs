//! Archetype profiles and profile-driven machine construction.
//!
//! Every enemy machine has the same four states; profiles decide what
//! goes into them (attack templates, recovery length and cue).
//!
//! Built-in template cooldowns stay below the actor's attack cooldown, so
//! some template is always ready by the time the actor may attack again.

use kuros_core::config::{default_cues, AttackTemplateConfig, EnemyProfile, FrozenConfig};
use kuros_core::constants::*;
use kuros_core::enums::EnemyArchetype;
use kuros_core::stats::{ActorStats, StatId, StatModifier};

use crate::machine::{FsmError, StateMachine};
use crate::states::{AttackState, CooldownFrozenState, EnemyState, IdleState, WalkState};
use crate::templates::build_templates;

/// Built-in profile for an archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyProfile {
    match archetype {
        EnemyArchetype::Grunt => EnemyProfile {
            name: "grunt".to_string(),
            stats: ActorStats::default(),
            modifiers: Vec::new(),
            templates: vec![strike("jab", 0.2, 0.1, 0.3, 0.4, DEFAULT_ATTACK_DAMAGE)],
            frozen: FrozenConfig::default(),
            animation_cues: default_cues(),
            effects: Vec::new(),
        },
        // Slow and hard-hitting; recovers slowly from hits.
        EnemyArchetype::Brute => EnemyProfile {
            name: "brute".to_string(),
            stats: ActorStats::default(),
            modifiers: vec![
                StatModifier::multiply(StatId::MoveSpeed, 0.6),
                StatModifier::multiply(StatId::MaxHealth, 2.5),
                StatModifier::multiply(StatId::AttackCooldown, 2.0),
                StatModifier::add(StatId::AttackRange, 20.0),
            ],
            templates: vec![
                strike("slam", 0.6, 0.15, 0.6, 0.9, DEFAULT_ATTACK_DAMAGE * 2.0),
                strike("swipe", 0.3, 0.1, 0.4, 0.6, DEFAULT_ATTACK_DAMAGE),
            ],
            frozen: FrozenConfig {
                duration: DEFAULT_FROZEN_DURATION * 1.5,
                cue: CUE_FROZEN.to_string(),
            },
            animation_cues: default_cues(),
            effects: Vec::new(),
        },
        // Fast and fragile; opens with a lunge, falls back to quick jabs.
        EnemyArchetype::Skirmisher => EnemyProfile {
            name: "skirmisher".to_string(),
            stats: ActorStats::default(),
            modifiers: vec![
                StatModifier::multiply(StatId::MoveSpeed, 1.3),
                StatModifier::multiply(StatId::MaxHealth, 0.6),
                StatModifier::add(StatId::DetectionRange, 100.0),
                StatModifier::add(StatId::AttackCooldown, 0.3),
            ],
            templates: vec![
                AttackTemplateConfig::Lunge {
                    name: "lunge".to_string(),
                    windup: 0.25,
                    dash_duration: 0.2,
                    dash_speed: 900.0,
                    recovery: 0.35,
                    cooldown: 0.7,
                    damage: DEFAULT_ATTACK_DAMAGE * 1.2,
                    knockback: 120.0,
                    cue: CUE_ATTACK.to_string(),
                },
                strike("jab", 0.15, 0.1, 0.2, 0.3, DEFAULT_ATTACK_DAMAGE * 0.6),
            ],
            frozen: FrozenConfig {
                duration: DEFAULT_FROZEN_DURATION * 0.6,
                cue: CUE_FROZEN.to_string(),
            },
            animation_cues: default_cues(),
            effects: Vec::new(),
        },
    }
}

fn strike(name: &str, windup: f32, active: f32, recovery: f32, cooldown: f32, damage: f32) -> AttackTemplateConfig {
    AttackTemplateConfig::Strike {
        name: name.to_string(),
        windup,
        active,
        recovery,
        cooldown,
        damage,
        knockback: 0.0,
        cue: CUE_ATTACK.to_string(),
    }
}

/// Validate `profile` and build its machine, starting in Idle.
pub fn build_state_machine(profile: &EnemyProfile) -> Result<StateMachine, FsmError> {
    profile.validate()?;

    let states: Vec<Box<dyn EnemyState>> = vec![
        Box::new(IdleState::new()),
        Box::new(WalkState::new()),
        Box::new(AttackState::new(build_templates(&profile.templates))),
        Box::new(CooldownFrozenState::from_config(&profile.frozen)),
    ];
    StateMachine::new(states, STATE_IDLE)
}
