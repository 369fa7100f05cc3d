//! Kinematic integration system.
//!
//! Motion is in blocks per tick: position += velocity, then gravity pulls
//! airborne agents down and friction bleeds off horizontal motion.

use hecs::World;

use raid_core::components::Ground;
use raid_core::constants::{GRAVITY, GROUND_FRICTION};
use raid_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity + Ground.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, ground)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Ground)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        pos.z += vel.z;

        if pos.z <= ground.z {
            pos.z = ground.z;
            vel.z = vel.z.max(0.0);
        } else {
            vel.z -= GRAVITY;
        }

        vel.x *= GROUND_FRICTION;
        vel.y *= GROUND_FRICTION;
    }
}
