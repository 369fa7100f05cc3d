//! Orchestrator configuration.

use serde::{Deserialize, Serialize};

use raid_core::constants::*;

/// Configuration for a raid orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaidConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Time budget of every session, in seconds.
    pub total_time_secs: u32,
    /// Delay between session creation and the first wave, in host ticks.
    pub join_grace_ticks: u64,
    /// Break after a completed wave, in seconds.
    pub wave_break_secs: u32,
    /// Respawn cooldown after a raider dies, in seconds.
    pub respawn_cooldown_secs: u32,
    /// Spawn waves in delayed groups instead of all at once.
    pub progressive_spawning: bool,
    /// Delay between progressive spawn groups, in host ticks.
    pub spawn_group_delay_ticks: u64,
    /// Host ticks between session passes.
    pub session_tick_interval: u64,
}

impl Default for RaidConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            total_time_secs: DEFAULT_TOTAL_TIME_SECS,
            join_grace_ticks: JOIN_GRACE_TICKS,
            wave_break_secs: WAVE_BREAK_SECS,
            respawn_cooldown_secs: RESPAWN_COOLDOWN_SECS,
            progressive_spawning: false,
            spawn_group_delay_ticks: SPAWN_GROUP_DELAY_TICKS,
            session_tick_interval: SESSION_TICK_INTERVAL,
        }
    }
}
