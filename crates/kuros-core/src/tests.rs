#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::SimCommand;
    use crate::components::{ActorId, Animator, CombatTimers, Health};
    use crate::config::{AttackTemplateConfig, EnemyProfile, FrozenConfig};
    use crate::constants::*;
    use crate::effects::{ActorEffects, EffectConfig};
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::SimEvent;
    use crate::stats::{ActorStats, StatId, StatModifier};
    use crate::types::{move_toward, ArenaBounds, Position, SimTime};

    fn strike(name: &str) -> AttackTemplateConfig {
        AttackTemplateConfig::Strike {
            name: name.to_string(),
            windup: 0.2,
            active: 0.1,
            recovery: 0.3,
            cooldown: 1.0,
            damage: 10.0,
            knockback: 0.0,
            cue: CUE_ATTACK.to_string(),
        }
    }

    fn profile() -> EnemyProfile {
        EnemyProfile {
            name: "test".to_string(),
            stats: ActorStats::default(),
            modifiers: Vec::new(),
            templates: vec![strike("jab")],
            frozen: FrozenConfig::default(),
            animation_cues: vec![CUE_IDLE.to_string()],
            effects: Vec::new(),
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_arena_clamp() {
        let bounds = ArenaBounds::default();
        let clamped = bounds.clamp(Vec2::new(-100.0, 10_000.0));
        assert_eq!(clamped.x, ARENA_MARGIN);
        assert_eq!(clamped.y, ARENA_HEIGHT - ARENA_BOTTOM_OFFSET);

        let inside = Vec2::new(400.0, 300.0);
        assert_eq!(bounds.clamp(inside), inside);
    }

    #[test]
    fn test_move_toward_stops_at_target() {
        let v = move_toward(Vec2::new(10.0, 0.0), Vec2::ZERO, 4.0);
        assert!((v.x - 6.0).abs() < 1e-5);

        let v = move_toward(Vec2::new(3.0, 0.0), Vec2::ZERO, 4.0);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_direction_to_coincident_is_none() {
        let a = Position::new(5.0, 5.0);
        assert!(a.direction_to(&a).is_none());
        let dir = a.direction_to(&Position::new(5.0, 15.0)).unwrap();
        assert!((dir.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Components ----

    #[test]
    fn test_combat_timers_floor_at_zero() {
        let mut timers = CombatTimers {
            attack_timer: 0.05,
            hit_stun_timer: 1.0,
        };
        timers.decay(0.1);
        assert_eq!(timers.attack_timer, 0.0);
        assert!((timers.hit_stun_timer - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_health_take_floors() {
        let mut hp = Health::full(30.0);
        assert_eq!(hp.take(25.0), 5.0);
        assert_eq!(hp.take(25.0), 0.0);
        assert!(!hp.is_alive());
    }

    #[test]
    fn test_animator_ignores_unknown_cues() {
        let mut animator = Animator::with_cues(vec![CUE_IDLE.to_string()]);
        assert!(!animator.play(CUE_WALK));
        assert!(animator.current.is_none());
        assert!(animator.play(CUE_IDLE));
        assert_eq!(animator.current.as_deref(), Some(CUE_IDLE));
        assert_eq!(animator.plays, 1);
    }

    #[test]
    fn test_facing_toward() {
        assert_eq!(Facing::Right.toward(-1.0), Facing::Left);
        assert_eq!(Facing::Left.toward(0.0), Facing::Left);
        assert_eq!(Facing::Left.sign(), -1.0);
    }

    // ---- Stats ----

    #[test]
    fn test_stat_modifiers_apply_in_order() {
        let stats = ActorStats::default().with_modifiers(&[
            StatModifier::add(StatId::MoveSpeed, 100.0),
            StatModifier::multiply(StatId::MoveSpeed, 0.5),
        ]);
        assert_eq!(stats.move_speed, (DEFAULT_MOVE_SPEED + 100.0) * 0.5);
    }

    #[test]
    fn test_stat_modifiers_keep_attack_inside_detection() {
        let stats = ActorStats::default().with_modifiers(&[
            StatModifier::multiply(StatId::AttackRange, 10.0),
            StatModifier::add(StatId::MaxHealth, -1_000.0),
        ]);
        assert_eq!(stats.attack_range, stats.detection_range);
        assert_eq!(stats.max_health, 0.0);
    }

    // ---- Profiles ----

    #[test]
    fn test_profile_validates() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_profile_rejects_duplicate_templates() {
        let mut p = profile();
        p.templates.push(strike("jab"));
        assert!(matches!(
            p.validate(),
            Err(ConfigError::DuplicateTemplate(name)) if name == "jab"
        ));
    }

    #[test]
    fn test_profile_rejects_attack_beyond_detection() {
        let mut p = profile();
        p.stats.attack_range = p.stats.detection_range + 1.0;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::AttackRangeExceedsDetection { .. })
        ));
    }

    #[test]
    fn test_profile_rejects_empty_templates() {
        let mut p = profile();
        p.templates.clear();
        assert!(matches!(p.validate(), Err(ConfigError::NoTemplates(_))));
    }

    #[test]
    fn test_profile_rejects_nan_duration() {
        let mut p = profile();
        p.frozen.duration = f32::NAN;
        assert!(matches!(p.validate(), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_profile_from_json_fills_defaults() {
        let json = r#"{
            "name": "brawler",
            "stats": { "move_speed": 180.0 },
            "templates": [
                { "kind": "Strike", "name": "hook", "windup": 0.3, "active": 0.1,
                  "recovery": 0.4, "cooldown": 2.0, "damage": 15.0 },
                { "kind": "Lunge", "name": "rush", "windup": 0.2, "dash_duration": 0.3,
                  "dash_speed": 600.0, "recovery": 0.5, "cooldown": 4.0, "damage": 20.0 }
            ]
        }"#;
        let p = EnemyProfile::from_json_str(json).unwrap();
        assert_eq!(p.stats.move_speed, 180.0);
        assert_eq!(p.stats.attack_range, DEFAULT_ATTACK_RANGE);
        assert_eq!(p.templates.len(), 2);
        assert_eq!(p.templates[1].name(), "rush");
        assert_eq!(p.frozen.duration, DEFAULT_FROZEN_DURATION);
        assert!(p.has_cue(CUE_ATTACK));
    }

    #[test]
    fn test_profile_from_json_rejects_bad_lunge() {
        let json = r#"{
            "name": "broken",
            "templates": [
                { "kind": "Lunge", "name": "rush", "windup": 0.2, "dash_duration": 0.3,
                  "dash_speed": 0.0, "recovery": 0.5, "cooldown": 4.0, "damage": 20.0 }
            ]
        }"#;
        assert!(matches!(
            EnemyProfile::from_json_str(json),
            Err(ConfigError::NotPositive { .. })
        ));
        assert!(matches!(
            EnemyProfile::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    // ---- Effects ----

    fn haste(duration: Option<f32>) -> EffectConfig {
        EffectConfig::Speed {
            name: "haste".to_string(),
            multiplier: 1.5,
            offset: 10.0,
            duration,
        }
    }

    #[test]
    fn test_speed_effect_applies_over_base() {
        let mut stats = ActorStats::default();
        let mut effects = ActorEffects::new(&stats);
        effects.attach(haste(None));
        effects.apply_to(&mut stats);
        assert_eq!(stats.move_speed, DEFAULT_MOVE_SPEED * 1.5 + 10.0);

        // Recomputed from the base, not compounded.
        effects.apply_to(&mut stats);
        assert_eq!(stats.move_speed, DEFAULT_MOVE_SPEED * 1.5 + 10.0);
    }

    #[test]
    fn test_timed_effect_expires_and_restores_base() {
        let mut stats = ActorStats::default();
        let mut effects = ActorEffects::new(&stats);
        effects.attach(haste(Some(0.5)));
        effects.apply_to(&mut stats);

        assert!(effects.tick(0.25).is_empty());
        effects.apply_to(&mut stats);
        assert!(stats.move_speed > DEFAULT_MOVE_SPEED);

        assert_eq!(effects.tick(0.25), vec!["haste".to_string()]);
        effects.apply_to(&mut stats);
        assert!(effects.active.is_empty());
        assert_eq!(stats.move_speed, DEFAULT_MOVE_SPEED);
    }

    #[test]
    fn test_stacked_effects_restore_in_any_order() {
        let mut stats = ActorStats::default();
        let mut effects = ActorEffects::new(&stats);
        effects.attach(haste(None));
        effects.attach(EffectConfig::Speed {
            name: "snare".to_string(),
            multiplier: 0.0,
            offset: -50.0,
            duration: Some(0.125),
        });
        effects.apply_to(&mut stats);
        assert_eq!(stats.move_speed, 0.0);

        assert_eq!(effects.tick(0.125), vec!["snare".to_string()]);
        effects.apply_to(&mut stats);
        assert_eq!(stats.move_speed, DEFAULT_MOVE_SPEED * 1.5 + 10.0);
    }

    #[test]
    fn test_profile_rejects_bad_effect() {
        let mut p = profile();
        p.effects.push(EffectConfig::Speed {
            name: "broken".to_string(),
            multiplier: 1.0,
            offset: f32::INFINITY,
            duration: None,
        });
        assert!(matches!(p.validate(), Err(ConfigError::NotFinite { .. })));

        p.effects[0] = haste(Some(-1.0));
        assert!(matches!(p.validate(), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_profile_effects_from_json() {
        let json = r#"{
            "name": "sprinter",
            "templates": [
                { "kind": "Strike", "name": "hook", "windup": 0.3, "active": 0.1,
                  "recovery": 0.4, "cooldown": 0.4, "damage": 15.0 }
            ],
            "effects": [ { "kind": "Speed", "name": "tailwind", "offset": 40.0 } ]
        }"#;
        let p = EnemyProfile::from_json_str(json).unwrap();
        assert_eq!(
            p.effects,
            vec![EffectConfig::Speed {
                name: "tailwind".to_string(),
                multiplier: 1.0,
                offset: 40.0,
                duration: None,
            }]
        );
    }

    // ---- Wire shapes ----

    #[test]
    fn test_command_tagging() {
        let cmd = SimCommand::ForceState {
            actor: ActorId(3),
            state: STATE_COOLDOWN_FROZEN.to_string(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""type":"ForceState""#));
        let back: SimCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, SimCommand::ForceState { actor: ActorId(3), .. }));
    }

    #[test]
    fn test_event_actor() {
        let ev = SimEvent::TemplateStarted {
            actor: ActorId(7),
            template: "jab".to_string(),
        };
        assert_eq!(ev.actor(), ActorId(7));
        let json = serde_json::to_string(&ev).unwrap();
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}
