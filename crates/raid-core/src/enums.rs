//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::{AgentId, PlayerId};

/// Behavior state of a combat agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentState {
    /// No target; occasionally wanders.
    #[default]
    Idle,
    /// Has a target and is chasing or fighting it.
    Tracking,
    /// Melee sub-mode of tracking with lateral movement.
    Strafing,
    /// Backing away from the target at reduced speed.
    Retreating,
    /// Terminal.
    Dead,
}

/// Why a raid session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every wave in the catalog was cleared.
    Victory,
    /// The session's time budget ran out.
    TimeExpired,
    /// The roster became empty.
    AllPlayersLeft,
    /// Ended by an administrator or an explicit end command.
    Admin,
    /// Ended because the orchestrator is shutting down.
    Shutdown,
}

/// Coarse phase of a session, derived for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Created, waiting for the first wave.
    #[default]
    Preparing,
    /// A wave is in progress.
    Fighting,
    /// Between waves.
    WaveBreak,
}

/// Color band of an agent's health bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    #[default]
    Healthy,
    Warning,
    Critical,
}

/// What caused a player to take damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageCause {
    /// Hit by another player.
    Player(PlayerId),
    /// Hit by a combat agent.
    Agent,
    /// Fell from a height.
    Fall,
    /// Fell out of the world.
    Void,
    /// Anything else (fire, drowning, ...).
    Other,
}

/// Who is hitting a combat agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSource {
    Player(PlayerId),
    Agent(AgentId),
    /// Fire, falling, lava and the like.
    Environment,
}

/// Decision on a damage event targeting a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageVerdict {
    Allow,
    Cancel,
    /// Cancel and return the player to the arena spawn point.
    CancelAndReturnToSpawn,
}

/// Who dealt the killing blow to a player, for death notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillerKind {
    Player(PlayerId),
    Mob,
    Unknown,
}

/// Result of applying damage to a combat agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// The hit was not allowed; nothing changed.
    Rejected,
    /// Damage applied, agent still alive.
    Applied,
    /// Damage applied and the agent died.
    Killed,
}

/// Short tips delivered to a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tip {
    NotInRaid,
    FriendlyFire,
    LeftArena,
    FellIntoVoid,
    NoBlockEditing,
    CriticalHit,
}
