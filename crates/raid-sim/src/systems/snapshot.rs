//! Snapshot system: queries the world and sessions and builds a RaidSnapshot.
//!
//! This system is read-only; it never modifies the world.

use std::collections::BTreeMap;

use hecs::World;

use raid_agent_ai::display::{health_bar, name_tag};
use raid_agent_ai::profiles::get_profile;
use raid_core::components::{Agent, AgentBrain, AgentOwner, AgentStats};
use raid_core::events::RaidEvent;
use raid_core::state::{AgentView, RaidSnapshot};
use raid_core::types::{Position, SessionId, SimTime};

use crate::session::RaidSession;
use crate::world_setup::agent_id;

/// Build a complete RaidSnapshot from the current state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    sessions: &BTreeMap<SessionId, RaidSession>,
    events: Vec<RaidEvent>,
) -> RaidSnapshot {
    RaidSnapshot {
        time: *time,
        sessions: sessions.values().map(|s| s.status(time.tick)).collect(),
        agents: build_agents(world),
        events,
    }
}

fn build_agents(world: &World) -> Vec<AgentView> {
    let mut query = world.query::<(&Agent, &AgentStats, &AgentBrain, &Position, Option<&AgentOwner>)>();
    query
        .iter()
        .map(|(entity, (agent, stats, brain, pos, owner))| {
            let (_, band) = health_bar(stats.health, stats.max_health);
            AgentView {
                id: agent_id(entity),
                session: owner.map(|o| o.session),
                mob_type: agent.mob_type.clone(),
                is_boss: agent.is_boss,
                position: *pos,
                state: brain.state,
                target: brain.target,
                health: stats.health,
                max_health: stats.max_health,
                band,
                name_tag: name_tag(&get_profile(&agent.mob_type), stats.health, stats.max_health),
            }
        })
        .collect()
}
