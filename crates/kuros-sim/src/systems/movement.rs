//! Player kinematics.
//!
//! Integrates the player's position from its velocity each tick:
//! position += velocity * dt, clamped to the arena. Enemies move only
//! through their state machines.

use hecs::World;

use kuros_core::components::{Defeated, Player};
use kuros_core::enums::Facing;
use kuros_core::types::{ArenaBounds, Position, Velocity};

pub fn run(world: &mut World, bounds: &ArenaBounds, dt: f32) {
    for (_entity, (_player, pos, vel, facing, defeated)) in
        world.query_mut::<(&Player, &mut Position, &Velocity, &mut Facing, Option<&Defeated>)>()
    {
        if defeated.is_some() {
            continue;
        }
        pos.0 = bounds.clamp(pos.0 + vel.0 * dt);
        *facing = facing.toward(vel.0.x);
    }
}
