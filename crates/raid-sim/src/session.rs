//! Per-raid session state: roster, wave cursor, timers, tallies, score and
//! the respawn queue.
//!
//! All times are host ticks. Durations are reported in whole seconds.

use std::collections::{BTreeMap, BTreeSet};

use raid_core::constants::*;
use raid_core::definitions::Arena;
use raid_core::enums::SessionPhase;
use raid_core::state::{PlayerTally, SessionStats, SessionStatus};
use raid_core::types::{secs_to_ticks, ticks_to_secs, PlayerId, SessionId};

use crate::arena::ArenaLease;

/// One timed, scored encounter inside a leased arena.
#[derive(Debug)]
pub struct RaidSession {
    id: SessionId,
    lease: ArenaLease,
    roster: BTreeSet<PlayerId>,
    /// Tallies of everyone who ever joined, kept after they leave.
    tallies: BTreeMap<PlayerId, PlayerTally>,
    current_wave: u32,
    start_tick: u64,
    wave_start_tick: u64,
    total_time_secs: u32,
    respawn_cooldown_secs: u32,
    active: bool,
    paused: bool,
    total_kills: u32,
    total_deaths: u32,
    alive_mobs: u32,
    /// Progressive spawn groups of the current wave still waiting to fire.
    pending_groups: u32,
    score: u32,
    /// Player -> tick at which they may respawn.
    respawn_queue: BTreeMap<PlayerId, u64>,
}

impl RaidSession {
    pub fn new(
        id: SessionId,
        lease: ArenaLease,
        players: impl IntoIterator<Item = PlayerId>,
        now: u64,
        total_time_secs: u32,
        respawn_cooldown_secs: u32,
    ) -> Self {
        let mut session = Self {
            id,
            lease,
            roster: BTreeSet::new(),
            tallies: BTreeMap::new(),
            current_wave: 0,
            start_tick: now,
            wave_start_tick: now,
            total_time_secs,
            respawn_cooldown_secs,
            active: false,
            paused: false,
            total_kills: 0,
            total_deaths: 0,
            alive_mobs: 0,
            pending_groups: 0,
            score: 0,
            respawn_queue: BTreeMap::new(),
        };
        for player in players {
            session.add_player(player);
        }
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn arena(&self) -> &Arena {
        self.lease.arena()
    }

    /// Give up the session, returning its arena lease.
    pub fn into_lease(self) -> ArenaLease {
        self.lease
    }

    // --- Roster ---

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.roster.iter().copied()
    }

    pub fn has_player(&self, player: PlayerId) -> bool {
        self.roster.contains(&player)
    }

    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Add a player. Returns `false` if they were already on the roster.
    pub fn add_player(&mut self, player: PlayerId) -> bool {
        self.tallies.entry(player).or_default();
        self.roster.insert(player)
    }

    /// Remove a player. Their tallies stay for the final record.
    pub fn remove_player(&mut self, player: PlayerId) -> bool {
        self.respawn_queue.remove(&player);
        self.roster.remove(&player)
    }

    // --- Waves and timers ---

    pub fn current_wave(&self) -> u32 {
        self.current_wave
    }

    /// Advance the wave cursor and reset the per-wave counters.
    pub fn next_wave(&mut self, now: u64) {
        self.current_wave += 1;
        self.wave_start_tick = now;
        self.alive_mobs = 0;
        self.pending_groups = 0;
    }

    pub fn wave_elapsed_secs(&self, now: u64) -> u64 {
        ticks_to_secs(now.saturating_sub(self.wave_start_tick))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn elapsed_secs(&self, now: u64) -> u64 {
        ticks_to_secs(now.saturating_sub(self.start_tick))
    }

    pub fn remaining_secs(&self, now: u64) -> u64 {
        (self.total_time_secs as u64).saturating_sub(self.elapsed_secs(now))
    }

    pub fn has_time_expired(&self, now: u64) -> bool {
        self.remaining_secs(now) == 0
    }

    pub fn phase(&self) -> SessionPhase {
        if self.current_wave == 0 {
            SessionPhase::Preparing
        } else if self.paused {
            SessionPhase::WaveBreak
        } else {
            SessionPhase::Fighting
        }
    }

    // --- Mobs ---

    pub fn alive_mobs(&self) -> u32 {
        self.alive_mobs
    }

    pub fn increment_alive_mobs(&mut self) {
        self.alive_mobs += 1;
    }

    /// Decrement, clamped at zero.
    pub fn decrement_alive_mobs(&mut self) {
        self.alive_mobs = self.alive_mobs.saturating_sub(1);
    }

    pub fn pending_groups(&self) -> u32 {
        self.pending_groups
    }

    pub fn add_pending_group(&mut self) {
        self.pending_groups += 1;
    }

    pub fn complete_pending_group(&mut self) {
        self.pending_groups = self.pending_groups.saturating_sub(1);
    }

    /// No mobs alive, none still scheduled, and a wave has started.
    pub fn is_wave_complete(&self) -> bool {
        self.alive_mobs == 0 && self.pending_groups == 0 && self.current_wave > 0
    }

    // --- Kills, deaths and respawns ---

    pub fn add_kill(&mut self, player: PlayerId) {
        self.total_kills += 1;
        if let Some(tally) = self.tallies.get_mut(&player) {
            tally.kills += 1;
        }
    }

    /// Record a death and queue the player's respawn.
    pub fn add_death(&mut self, player: PlayerId, now: u64) {
        self.total_deaths += 1;
        if let Some(tally) = self.tallies.get_mut(&player) {
            tally.deaths += 1;
        }
        self.respawn_queue
            .insert(player, now + secs_to_ticks(self.respawn_cooldown_secs));
    }

    pub fn total_kills(&self) -> u32 {
        self.total_kills
    }

    pub fn total_deaths(&self) -> u32 {
        self.total_deaths
    }

    pub fn tally(&self, player: PlayerId) -> PlayerTally {
        self.tallies.get(&player).copied().unwrap_or_default()
    }

    pub fn tallies(&self) -> &BTreeMap<PlayerId, PlayerTally> {
        &self.tallies
    }

    /// Players waiting to respawn with their ready tick.
    pub fn respawn_queue(&self) -> impl Iterator<Item = (PlayerId, u64)> + '_ {
        self.respawn_queue.iter().map(|(p, t)| (*p, *t))
    }

    pub fn can_respawn(&self, player: PlayerId, now: u64) -> bool {
        self.respawn_queue
            .get(&player)
            .map_or(true, |ready| now >= *ready)
    }

    /// Whole seconds until the player may respawn, rounded up.
    pub fn respawn_time_remaining(&self, player: PlayerId, now: u64) -> u64 {
        self.respawn_queue
            .get(&player)
            .map_or(0, |ready| ready.saturating_sub(now).div_ceil(TICK_RATE as u64))
    }

    /// Clear a player's queue entry. Returns `false` if they were not queued.
    pub fn respawn_player(&mut self, player: PlayerId) -> bool {
        self.respawn_queue.remove(&player).is_some()
    }

    // --- Score ---

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Recompute and store the score.
    pub fn calculate_score(&mut self, now: u64) -> u32 {
        self.score = compute_score(
            self.current_wave,
            self.total_kills,
            self.total_deaths,
            self.remaining_secs(now),
        );
        self.score
    }

    pub fn stats(&self, now: u64) -> SessionStats {
        SessionStats {
            wave: self.current_wave,
            kills: self.total_kills,
            deaths: self.total_deaths,
            score: self.score,
            elapsed_secs: self.elapsed_secs(now),
            wave_elapsed_secs: self.wave_elapsed_secs(now),
            remaining_secs: self.remaining_secs(now),
            players: self.roster.len(),
        }
    }

    pub fn status(&self, now: u64) -> SessionStatus {
        SessionStatus {
            session: self.id,
            arena: self.arena().name.clone(),
            phase: self.phase(),
            wave: self.current_wave,
            alive_mobs: self.alive_mobs,
            players: self.roster.iter().copied().collect(),
            stats: self.stats(now),
        }
    }
}

/// `wave*100 + kills*5 + remaining*2 - deaths*20`, floored at zero.
pub fn compute_score(wave: u32, kills: u32, deaths: u32, remaining_secs: u64) -> u32 {
    let raw = wave as i64 * SCORE_PER_WAVE + kills as i64 * SCORE_PER_KILL
        + remaining_secs as i64 * SCORE_PER_REMAINING_SEC
        - deaths as i64 * SCORE_PENALTY_PER_DEATH;
    raw.clamp(0, u32::MAX as i64) as u32
}
