//! Entity spawn factories for combat agents.

use hecs::{Entity, World};

use raid_core::components::*;
use raid_core::definitions::ScaledMob;
use raid_core::types::{AgentId, Location, SessionId, Velocity};

/// Spawn one agent with the scaled stats of `mob` at `location`.
pub fn spawn_agent(
    world: &mut World,
    mob: &ScaledMob,
    location: &Location,
    owner: SessionId,
) -> Entity {
    world.spawn((
        Agent {
            mob_type: mob.mob_type.clone(),
            is_boss: mob.is_boss,
            world: location.world.clone(),
        },
        AgentStats {
            health: mob.health,
            max_health: mob.health,
            damage: mob.damage,
            speed: mob.speed,
        },
        AgentBrain::default(),
        location.position,
        Velocity::ZERO,
        Facing::default(),
        AgentOwner { session: owner },
        Ground {
            z: location.position.z,
        },
    ))
}

/// Stable external handle for an agent entity.
pub fn agent_id(entity: Entity) -> AgentId {
    AgentId(entity.to_bits().get())
}

/// Resolve an external handle. `None` for handles that were never valid.
pub fn agent_entity(id: AgentId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
