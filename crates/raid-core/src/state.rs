//! Snapshots and records: the visible state handed out after each tick
//! and the record handed to the stats collaborator on session end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::RaidEvent;
use crate::types::{AgentId, PlayerId, Position, SessionId, SimTime};

/// Per-player counters inside a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub kills: u32,
    pub deaths: u32,
}

/// Summary of a session's progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub wave: u32,
    pub kills: u32,
    pub deaths: u32,
    pub score: u32,
    pub elapsed_secs: u64,
    /// Seconds since the current wave started.
    pub wave_elapsed_secs: u64,
    pub remaining_secs: u64,
    pub players: usize,
}

/// Record delivered to the stats collaborator when a session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session: SessionId,
    pub arena: String,
    /// Unix timestamp (seconds) of the session end.
    pub date: u64,
    pub reason: EndReason,
    pub final_wave: u32,
    pub kills: u32,
    pub deaths: u32,
    pub score: u32,
    pub elapsed_secs: u64,
    /// Everyone who took part, including players who left early.
    pub per_player: BTreeMap<PlayerId, PlayerTally>,
}

/// Display view of a live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub session: SessionId,
    pub arena: String,
    pub phase: SessionPhase,
    pub wave: u32,
    pub alive_mobs: u32,
    pub players: Vec<PlayerId>,
    pub stats: SessionStats,
}

/// Display view of a live agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub session: Option<SessionId>,
    pub mob_type: String,
    pub is_boss: bool,
    pub position: Position,
    pub state: AgentState,
    pub target: Option<PlayerId>,
    pub health: f64,
    pub max_health: f64,
    pub band: HealthBand,
    /// Name tag with the segmented health bar.
    pub name_tag: String,
}

/// Complete visible state after one host tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaidSnapshot {
    pub time: SimTime,
    pub sessions: Vec<SessionStatus>,
    pub agents: Vec<AgentView>,
    pub events: Vec<RaidEvent>,
}
