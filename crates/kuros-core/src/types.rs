//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels). x = right, y = down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in arena space (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Playable area. Actors are clamped to the inner rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
    /// Inset applied to the left, right and top edges.
    pub margin: f32,
    /// Inset applied to the bottom edge (floor line).
    pub bottom_offset: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Unit vector pointing at `other`, or `None` when the two coincide.
    pub fn direction_to(&self, other: &Position) -> Option<Vec2> {
        (other.0 - self.0).try_normalize()
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.advance_by(self.dt());
    }

    /// Advance by one tick covering `secs` of simulated time.
    pub fn advance_by(&mut self, secs: f64) {
        self.tick += 1;
        self.elapsed_secs += secs;
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            margin: ARENA_MARGIN,
            bottom_offset: ARENA_BOTTOM_OFFSET,
        }
    }
}

impl ArenaBounds {
    /// Clamp a point into the playable rectangle.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        let max_x = (self.width - self.margin).max(self.margin);
        let max_y = (self.height - self.bottom_offset).max(self.margin);
        Vec2::new(
            point.x.clamp(self.margin, max_x),
            point.y.clamp(self.margin, max_y),
        )
    }

    /// Center of the playable rectangle.
    pub fn center(&self) -> Vec2 {
        let min = Vec2::splat(self.margin);
        let max = self.clamp(Vec2::new(self.width, self.height));
        (min + max) * 0.5
    }
}

/// Move `current` toward `target` by at most `max_delta`.
pub fn move_toward(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        target
    } else {
        current + offset / distance * max_delta
    }
}
