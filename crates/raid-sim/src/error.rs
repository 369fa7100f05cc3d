//! Error types surfaced to callers of the orchestrator and catalog loaders.

use thiserror::Error;

use raid_core::types::PlayerId;

/// Failures of raid lifecycle and arena administration calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RaidError {
    #[error("arena {0} is already in use")]
    ArenaUnavailable(String),
    #[error("no arena is available")]
    NoFreeArena,
    #[error("arena not found: {0}")]
    UnknownArena(String),
    #[error("arena {0} is leased by a running raid")]
    ArenaLeased(String),
    #[error("arena already exists: {0}")]
    ArenaExists(String),
    #[error("{0} is already in a raid")]
    PlayerAlreadyInRaid(PlayerId),
    #[error("{0} is not in a raid")]
    NotInRaid(PlayerId),
    #[error("a raid needs at least one player")]
    EmptyRoster,
}

/// Failures of definition catalog parsing.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no valid entries")]
    Empty,
}
