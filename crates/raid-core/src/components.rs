//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::AgentState;
use crate::types::{PlayerId, SessionId};

/// Marks an entity as a hostile combat agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Type tag, keys the capability table.
    pub mob_type: String,
    pub is_boss: bool,
    /// World the agent was spawned into.
    pub world: String,
}

/// Scaled combat stats of an agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentStats {
    pub health: f64,
    pub max_health: f64,
    pub damage: f64,
    /// Wave speed multiplier applied on top of the type's base move speed.
    pub speed: f64,
}

/// Behavior memory of an agent's state machine.
///
/// Player references are identities only and are re-validated every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentBrain {
    pub state: AgentState,
    pub target: Option<PlayerId>,
    /// Most recent player to damage this agent; receives kill credit.
    pub last_damager: Option<PlayerId>,
    /// Ticks until the next attack is allowed.
    pub attack_cooldown: u32,
    /// Ticks until the next jump is allowed.
    pub jump_cooldown: u32,
    /// Consecutive successful hits inside the combo window.
    pub combo_hits: u32,
    /// Tick of the last successful hit.
    pub last_hit_tick: Option<u64>,
    /// Ticks left in the current retreat.
    pub retreat_ticks: u32,
    /// Lateral direction: -1, 0 or +1.
    pub strafe_direction: i8,
    /// Ticks the current strafe direction has been held.
    pub strafe_ticks: u32,
    pub sprinting: bool,
}

/// Look direction in radians (yaw: 0 = North, clockwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub yaw: f64,
    pub pitch: f64,
}

/// The session that spawned an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentOwner {
    pub session: SessionId,
}

/// Floor height under an agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ground {
    pub z: f64,
}
