//! Cleanup system: removes agents that have died.

use hecs::{Entity, World};

use raid_core::components::{Agent, AgentBrain};
use raid_core::enums::AgentState;

/// Despawn dead agents.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (brain, _agent)) in world.query_mut::<(&AgentBrain, &Agent)>() {
        if brain.state == AgentState::Dead {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
