//! Simulation engine, the host the enemy state machines run in.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands,
//! runs all systems at a fixed step, and produces `SimSnapshot`s.
//! Completely headless, so runs are deterministic and testable.

use std::collections::{BTreeMap, VecDeque};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use kuros_core::commands::SimCommand;
use kuros_core::components::ActorId;
use kuros_core::config::EnemyProfile;
use kuros_core::constants::{DT, MAX_SNAPSHOT_EVENTS};
use kuros_core::effects::{ActorEffects, EffectConfig};
use kuros_core::enums::{EnemyArchetype, SimPhase};
use kuros_core::events::SimEvent;
use kuros_core::state::SimSnapshot;
use kuros_core::stats::ActorStats;
use kuros_core::types::{ArenaBounds, Position, SimTime, Velocity};
use kuros_enemy_ai::{build_state_machine, get_profile};

use crate::brain::EnemyBrain;
use crate::error::SimError;
use crate::facade::{with_world_actor, PendingStrike, TickContext};
use crate::systems;
use crate::systems::damage::Hit;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f32,
    pub bounds: ArenaBounds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            bounds: ArenaBounds::default(),
        }
    }
}

const PLAYER_ID: ActorId = ActorId(0);

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    time_scale: f32,
    bounds: ArenaBounds,
    rng: ChaCha8Rng,
    player: Entity,
    next_actor_id: u32,
    command_queue: VecDeque<SimCommand>,
    brains: BTreeMap<ActorId, EnemyBrain>,
    pending_hits: Vec<Hit>,
    player_attack_requested: bool,
    strikes: Vec<PendingStrike>,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create an engine with the player standing at the arena center.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let player = world_setup::spawn_player(
            &mut world,
            PLAYER_ID,
            Position(config.bounds.center()),
        );
        Self {
            world,
            time: SimTime::default(),
            phase: SimPhase::default(),
            time_scale: config.time_scale.clamp(0.0, 4.0),
            bounds: config.bounds,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player,
            next_actor_id: PLAYER_ID.0 + 1,
            command_queue: VecDeque::new(),
            brains: BTreeMap::new(),
            pending_hits: Vec::new(),
            player_attack_requested: false,
            strikes: Vec::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running && self.time_scale > 0.0 {
            let dt = DT * self.time_scale;
            self.run_systems(dt);
            self.time.advance_by(f64::from(dt));
        }

        let mut events = std::mem::take(&mut self.events);
        if events.len() > MAX_SNAPSHOT_EVENTS {
            tracing::warn!(
                dropped = events.len() - MAX_SNAPSHOT_EVENTS,
                "snapshot event buffer full"
            );
            events.truncate(MAX_SNAPSHOT_EVENTS);
        }
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.brains, events)
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player_id(&self) -> ActorId {
        PLAYER_ID
    }

    /// Live enemies in `ActorId` order.
    pub fn enemy_ids(&self) -> Vec<ActorId> {
        self.brains.keys().copied().collect()
    }

    /// Active state name of an enemy.
    pub fn state_of(&self, actor: ActorId) -> Option<&str> {
        self.brains.get(&actor).map(|b| b.machine.current_name())
    }

    /// Spawn an enemy from a profile. The profile is validated and its
    /// machine built before anything enters the world.
    pub fn spawn_enemy(&mut self, profile: &EnemyProfile, position: Position) -> Result<ActorId, SimError> {
        let machine = build_state_machine(profile).map_err(|source| SimError::InvalidProfile {
            name: profile.name.clone(),
            source,
        })?;

        let id = ActorId(self.next_actor_id);
        self.next_actor_id += 1;
        let position = Position(self.bounds.clamp(position.0));
        let entity = world_setup::spawn_enemy(&mut self.world, id, profile, position);
        self.brains.insert(
            id,
            EnemyBrain {
                entity,
                profile: profile.name.clone(),
                machine,
            },
        );

        tracing::info!(
            actor = id.0,
            profile = %profile.name,
            x = position.0.x,
            y = position.0.y,
            "enemy spawned"
        );
        Ok(id)
    }

    /// Spawn a built-in archetype.
    pub fn spawn_archetype(&mut self, archetype: EnemyArchetype, position: Position) -> Result<ActorId, SimError> {
        self.spawn_enemy(&get_profile(archetype), position)
    }

    /// Spawn `count` enemies from `profile` at seeded random points around
    /// the player.
    pub fn spawn_around_player(&mut self, profile: &EnemyProfile, count: usize) -> Result<Vec<ActorId>, SimError> {
        let center = self.player_position();
        (0..count)
            .map(|_| {
                let position = world_setup::random_spawn_point(&mut self.rng, center, &self.bounds);
                self.spawn_enemy(profile, position)
            })
            .collect()
    }

    /// Force an enemy into `state` from outside its decision logic.
    /// Returns whether the machine accepted the state name.
    pub fn force_state(&mut self, actor: ActorId, state: &str) -> Result<bool, SimError> {
        let brain = self
            .brains
            .get_mut(&actor)
            .ok_or(SimError::UnknownActor(actor))?;
        let ctx = TickContext {
            player: systems::enemy_ai::player_target(&self.world),
            bounds: self.bounds,
            dt: DT * self.time_scale,
            now: self.time.elapsed_secs,
        };
        let machine = &mut brain.machine;
        with_world_actor(
            &mut self.world,
            brain.entity,
            &ctx,
            &mut self.strikes,
            &mut self.events,
            |actor| machine.change_state(state, actor),
        )
        .ok_or(SimError::UnknownActor(actor))
    }

    /// Attach `effect` to an enemy. The adjusted stats take hold at once.
    pub fn apply_effect(&mut self, actor: ActorId, effect: EffectConfig) -> Result<(), SimError> {
        effect.validate().map_err(|source| SimError::InvalidEffect {
            name: effect.name().to_string(),
            source,
        })?;
        let entity = self
            .brains
            .get(&actor)
            .map(|brain| brain.entity)
            .ok_or(SimError::UnknownActor(actor))?;
        let (effects, stats) = self
            .world
            .query_one_mut::<(&mut ActorEffects, &mut ActorStats)>(entity)
            .map_err(|_| SimError::UnknownActor(actor))?;

        let name = effect.name().to_string();
        effects.attach(effect);
        effects.apply_to(stats);
        tracing::debug!(actor = actor.0, effect = %name, speed = stats.move_speed, "effect applied");
        self.events.push(SimEvent::EffectApplied { actor, effect: name });
        Ok(())
    }

    fn player_position(&self) -> Position {
        self.world
            .get::<&Position>(self.player)
            .map(|pos| *pos)
            .unwrap_or(Position(self.bounds.center()))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                tracing::warn!(error = %err, "command ignored");
            }
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) -> Result<(), SimError> {
        match command {
            SimCommand::SpawnEnemy { archetype, x, y } => {
                self.spawn_archetype(archetype, Position::new(x, y))?;
            }
            SimCommand::SpawnProfile { profile, x, y } => {
                self.spawn_enemy(&profile, Position::new(x, y))?;
            }
            SimCommand::ForceState { actor, state } => {
                self.force_state(actor, &state)?;
            }
            SimCommand::DamageActor { actor, amount } => {
                if actor != PLAYER_ID && !self.brains.contains_key(&actor) {
                    return Err(SimError::UnknownActor(actor));
                }
                self.pending_hits.push(Hit {
                    target: actor,
                    source: None,
                    amount: amount.max(0.0),
                });
            }
            SimCommand::ApplyEffect { actor, effect } => {
                self.apply_effect(actor, effect)?;
            }
            SimCommand::SetPlayerVelocity { x, y } => {
                if let Ok(mut vel) = self.world.get::<&mut Velocity>(self.player) {
                    *vel = Velocity::new(x, y);
                }
            }
            SimCommand::PlayerAttack => {
                self.player_attack_requested = true;
            }
            SimCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
        }
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Combat timers and effect lifetimes
        systems::timers::run(&mut self.world, dt);
        systems::effects::run(&mut self.world, dt, &mut self.events);
        // 2. Player movement
        systems::movement::run(&mut self.world, &self.bounds, dt);
        // 3. Player strike
        if std::mem::take(&mut self.player_attack_requested) {
            systems::player_attack::run(&mut self.world, self.player, &mut self.pending_hits);
        }

        let ctx = TickContext {
            player: systems::enemy_ai::player_target(&self.world),
            bounds: self.bounds,
            dt,
            now: self.time.elapsed_secs,
        };
        // 4. Enemy damage reactions
        systems::damage::react_enemies(
            &mut self.world,
            &mut self.brains,
            &mut self.pending_hits,
            &ctx,
            &mut self.strikes,
            &mut self.events,
        );
        // 5. Enemy AI
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.brains,
            &ctx,
            &mut self.strikes,
            &mut self.events,
        );
        // 6. Enemy strikes and other hits on the player
        systems::damage::resolve_player_hits(
            &mut self.world,
            self.player,
            &mut self.pending_hits,
            &mut self.strikes,
            &self.bounds,
            &mut self.events,
        );
        // 7. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.brains, &mut self.despawn_buffer);
    }
}
