//! Stats collaborator boundary and an in-memory score book.
//!
//! The orchestrator hands every finished session to a `StatsSink`. The
//! `ScoreBook` keeps long-term per-player totals, a score leaderboard and
//! an ELO-style rating. Persistence is left to the embedding host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use raid_core::constants::{BASE_ELO, ELO_PODIUM_AWARDS, LEADERBOARD_CAPACITY};
use raid_core::state::SessionRecord;
use raid_core::types::PlayerId;

/// Receives the record of every session that ends.
pub trait StatsSink {
    fn record_session(&mut self, record: &SessionRecord);
}

/// Long-term totals for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub total_raids: u32,
    pub best_wave: u32,
    pub best_score: u32,
    pub total_kills: u32,
    pub total_deaths: u32,
    pub elo: i32,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            total_raids: 0,
            best_wave: 0,
            best_score: 0,
            total_kills: 0,
            total_deaths: 0,
            elo: BASE_ELO,
        }
    }
}

/// One finished raid on the score leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u32,
    pub wave: u32,
    pub date: u64,
    pub players: Vec<PlayerId>,
}

/// In-memory reference implementation of `StatsSink`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBook {
    sessions: Vec<SessionRecord>,
    players: BTreeMap<PlayerId, PlayerRecord>,
    leaderboard: Vec<LeaderboardEntry>,
}

impl StatsSink for ScoreBook {
    fn record_session(&mut self, record: &SessionRecord) {
        for (player, tally) in &record.per_player {
            let entry = self.players.entry(*player).or_default();
            entry.total_raids += 1;
            entry.total_kills += tally.kills;
            entry.total_deaths += tally.deaths;
            entry.best_wave = entry.best_wave.max(record.final_wave);
            entry.best_score = entry.best_score.max(record.score);
        }
        self.sessions.push(record.clone());

        self.leaderboard.push(LeaderboardEntry {
            score: record.score,
            wave: record.final_wave,
            date: record.date,
            players: record.per_player.keys().copied().collect(),
        });
        // Stable sort keeps earlier entries ahead on ties.
        self.leaderboard
            .sort_by(|a, b| b.score.cmp(&a.score).then(b.wave.cmp(&a.wave)));
        self.leaderboard.truncate(LEADERBOARD_CAPACITY);

        for (entry, award) in self.leaderboard.iter().zip(ELO_PODIUM_AWARDS) {
            for player in &entry.players {
                self.players.entry(*player).or_default().elo += award;
            }
        }
    }
}

impl ScoreBook {
    /// Every session record received, oldest first.
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn player(&self, player: PlayerId) -> Option<&PlayerRecord> {
        self.players.get(&player)
    }

    pub fn elo(&self, player: PlayerId) -> i32 {
        self.players.get(&player).map_or(BASE_ELO, |p| p.elo)
    }

    /// Top `limit` raids by score, then wave.
    pub fn leaderboard(&self, limit: usize) -> &[LeaderboardEntry] {
        &self.leaderboard[..limit.min(self.leaderboard.len())]
    }

    /// Top `limit` players by rating.
    pub fn elo_leaderboard(&self, limit: usize) -> Vec<(PlayerId, i32)> {
        let mut ranked: Vec<(PlayerId, i32)> =
            self.players.iter().map(|(id, p)| (*id, p.elo)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }

    /// 1-based rating rank of a player with a record.
    pub fn rank(&self, player: PlayerId) -> Option<usize> {
        let elo = self.players.get(&player)?.elo;
        Some(1 + self.players.values().filter(|p| p.elo > elo).count())
    }

    /// Kills per death; kills alone when the player never died.
    pub fn kd_ratio(&self, player: PlayerId) -> f64 {
        match self.players.get(&player) {
            Some(p) if p.total_deaths > 0 => p.total_kills as f64 / p.total_deaths as f64,
            Some(p) => p.total_kills as f64,
            None => 0.0,
        }
    }
}
