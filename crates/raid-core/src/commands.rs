//! Commands sent by the command layer to the orchestrator.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::EndReason;
use crate::types::{PlayerId, SessionId};

/// All externally requested raid actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RaidCommand {
    /// Start a raid for the player in the first available arena.
    Join { player: PlayerId },
    /// Leave the current raid.
    Leave { player: PlayerId },
    /// End a specific session.
    EndSession {
        session: SessionId,
        reason: EndReason,
    },
    /// End every live session.
    EndAll,
}
