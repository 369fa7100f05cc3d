//! Agent AI system: runs the behavior FSM for every live agent.
//!
//! Calls the FSM from raid-agent-ai, writes brain, facing and motion back,
//! and returns the attacks for the orchestrator to apply through the host.

use std::collections::HashMap;

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use raid_agent_ai::combat::AttackRoll;
use raid_agent_ai::fsm::{evaluate, AgentContext};
use raid_agent_ai::targeting::Candidate;
use raid_core::components::{Agent, AgentBrain, AgentStats, Facing};
use raid_core::constants::JUMP_IMPULSE;
use raid_core::enums::AgentState;
use raid_core::types::{PlayerId, Position, Velocity};

use crate::host::WorldHost;

/// An attack decided this tick, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentAttack {
    pub agent: Entity,
    pub target: PlayerId,
    pub roll: AttackRoll,
}

/// Step every live agent once.
pub fn run(
    world: &mut World,
    host: &impl WorldHost,
    rng: &mut ChaCha8Rng,
    current_tick: u64,
) -> Vec<AgentAttack> {
    let mut candidates_by_world: HashMap<String, Vec<Candidate>> = HashMap::new();
    let mut attacks = Vec::new();

    for (entity, (agent, stats, brain, pos, facing, vel)) in world.query_mut::<(
        &Agent,
        &AgentStats,
        &mut AgentBrain,
        &Position,
        &mut Facing,
        &mut Velocity,
    )>() {
        if brain.state == AgentState::Dead {
            continue;
        }

        let candidates = candidates_by_world
            .entry(agent.world.clone())
            .or_insert_with(|| {
                host.players_in_world(&agent.world)
                    .into_iter()
                    .map(|p| Candidate {
                        id: p.id,
                        position: p.location.position,
                        online: p.online,
                        alive: p.alive,
                        spectator: p.spectator,
                    })
                    .collect()
            });

        let ctx = AgentContext {
            mob_type: &agent.mob_type,
            is_boss: agent.is_boss,
            position: *pos,
            facing: *facing,
            health: stats.health,
            max_health: stats.max_health,
            damage: stats.damage,
            speed: stats.speed,
            now_tick: current_tick,
            brain: &*brain,
            candidates: candidates.as_slice(),
        };
        let update = evaluate(&ctx, rng);

        if let Some(new_facing) = update.facing {
            *facing = new_facing;
        }
        if let Some(motion) = update.motion {
            vel.x = motion.x;
            vel.y = motion.y;
        }
        if update.jump {
            vel.z = JUMP_IMPULSE;
        }
        if let Some(intent) = update.attack {
            attacks.push(AgentAttack {
                agent: entity,
                target: intent.target,
                roll: intent.roll,
            });
        }
        *brain = update.brain;
    }

    attacks
}
