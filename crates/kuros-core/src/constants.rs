//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f32 = 1280.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f32 = 720.0;

/// Inset from the left, right and top edges.
pub const ARENA_MARGIN: f32 = 50.0;

/// Inset from the bottom edge.
pub const ARENA_BOTTOM_OFFSET: f32 = 150.0;

// --- Actor defaults ---

/// Movement speed (pixels per second).
pub const DEFAULT_MOVE_SPEED: f32 = 300.0;

/// Damage dealt by a basic strike.
pub const DEFAULT_ATTACK_DAMAGE: f32 = 25.0;

/// Radius within which an attack may begin.
pub const DEFAULT_ATTACK_RANGE: f32 = 100.0;

/// Radius within which a target is noticed.
pub const DEFAULT_DETECTION_RANGE: f32 = 400.0;

/// Actor-wide delay between attack chains (seconds).
pub const DEFAULT_ATTACK_COOLDOWN: f32 = 0.5;

/// Starting and maximum health.
pub const DEFAULT_MAX_HEALTH: f32 = 100.0;

/// Hit-stun applied whenever an actor takes damage (seconds).
pub const HIT_STUN_DURATION: f32 = 0.6;

/// Idle damping multiplier applied to move speed.
pub const IDLE_DAMPING_FACTOR: f32 = 2.0;

/// Default recovery duration for the frozen state (seconds).
pub const DEFAULT_FROZEN_DURATION: f32 = 1.0;

/// Vertical tolerance for player strikes (pixels).
pub const PLAYER_STRIKE_VERTICAL_RANGE: f32 = 80.0;

// --- Spawning ---

/// Minimum spawn distance from the player.
pub const SPAWN_MIN_RANGE: f32 = 250.0;

/// Maximum spawn distance from the player.
pub const SPAWN_MAX_RANGE: f32 = 450.0;

// --- State names ---

pub const STATE_IDLE: &str = "Idle";
pub const STATE_WALK: &str = "Walk";
pub const STATE_ATTACK: &str = "Attack";
pub const STATE_COOLDOWN_FROZEN: &str = "CooldownFrozen";

// --- Animation cues ---

pub const CUE_IDLE: &str = "animations/Idle";
pub const CUE_WALK: &str = "animations/Walk";
pub const CUE_ATTACK: &str = "animations/attack";
pub const CUE_HIT: &str = "animations/hit";
pub const CUE_FROZEN: &str = "animations/idle";

/// Maximum number of events retained in one snapshot.
pub const MAX_SNAPSHOT_EVENTS: usize = 256;
