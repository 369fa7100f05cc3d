//! Events emitted by the orchestrator for announcements and UI feedback.
//!
//! Rendering (chat, titles, sounds, boss bars) is the host's business;
//! the core only reports what happened.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::state::SessionStats;
use crate::types::{AgentId, PlayerId, SessionId};

/// Everything observable that happened during a host tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RaidEvent {
    /// A session was created and its roster moved into the arena.
    RaidStarted {
        session: SessionId,
        arena: String,
        players: Vec<PlayerId>,
    },
    /// A new wave began.
    WaveStarted {
        session: SessionId,
        wave: u32,
        boss_wave: bool,
    },
    /// Units were created for a wave (one event per populate or group).
    MobsSpawned {
        session: SessionId,
        wave: u32,
        count: u32,
    },
    /// World-wide announcement that a boss entered an arena.
    BossSpawned {
        session: SessionId,
        agent: AgentId,
        mob_type: String,
        title: String,
    },
    /// All mobs of a wave are dead.
    WaveCompleted {
        session: SessionId,
        wave: u32,
        score: u32,
        last: bool,
    },
    /// A session ended; final stats for the roster.
    SessionEnded {
        session: SessionId,
        reason: EndReason,
        stats: SessionStats,
    },
    /// Periodic per-player status line.
    StatusBar {
        player: PlayerId,
        wave: u32,
        mobs_alive: u32,
        remaining_secs: u64,
    },
    /// A dead raider is still waiting to respawn.
    RespawnCountdown { player: PlayerId, remaining_secs: u64 },
    PlayerRespawned {
        session: SessionId,
        player: PlayerId,
    },
    /// An agent died and a raider got credit.
    KillCredited {
        session: SessionId,
        player: PlayerId,
        agent: AgentId,
        mob_type: String,
    },
    /// An agent landed a hit on a player.
    PlayerHit {
        player: PlayerId,
        agent: AgentId,
        damage: f64,
        critical: bool,
    },
    PlayerDied {
        session: SessionId,
        player: PlayerId,
        killer: KillerKind,
    },
    PlayerLeft {
        session: SessionId,
        player: PlayerId,
    },
    /// A short message for one player.
    Tip { player: PlayerId, tip: Tip },
    /// A queued command could not be carried out.
    CommandRejected { player: Option<PlayerId>, reason: String },
}
