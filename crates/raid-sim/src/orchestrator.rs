//! Raid orchestrator: the core of the engine.
//!
//! `RaidOrchestrator` owns every session, the player index, the agent world
//! and the deferred task queue. It processes commands, runs the agent
//! systems each host tick, drives the session pass at a fixed cadence and
//! produces `RaidSnapshot`s. Completely headless; the world it runs in is
//! reached only through a `WorldHost`.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::time::{SystemTime, UNIX_EPOCH};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use raid_agent_ai::combat;
use raid_core::commands::RaidCommand;
use raid_core::components::{Agent, AgentBrain, AgentOwner, AgentStats};
use raid_core::enums::*;
use raid_core::events::RaidEvent;
use raid_core::state::{RaidSnapshot, SessionRecord};
use raid_core::types::{secs_to_ticks, AgentId, Location, PlayerId, Position, SessionId, SimTime};

use crate::arena::ArenaRegistry;
use crate::config::RaidConfig;
use crate::error::RaidError;
use crate::host::WorldHost;
use crate::scheduler::{DeferredTask, Scheduler};
use crate::session::RaidSession;
use crate::spawner::{self, SpawnCoordinator};
use crate::stats::{ScoreBook, StatsSink};
use crate::systems;
use crate::systems::agent_ai::AgentAttack;
use crate::waves::WaveDefinitionTable;
use crate::world_setup;

/// Owns all raid sessions and drives them on the host's tick.
pub struct RaidOrchestrator<H: WorldHost, S: StatsSink = ScoreBook> {
    config: RaidConfig,
    host: H,
    stats: S,
    waves: WaveDefinitionTable,
    arenas: ArenaRegistry,
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    sessions: BTreeMap<SessionId, RaidSession>,
    player_sessions: HashMap<PlayerId, SessionId>,
    scheduler: Scheduler,
    command_queue: VecDeque<RaidCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<RaidEvent>,
    next_session_id: u32,
}

impl<H: WorldHost> RaidOrchestrator<H, ScoreBook> {
    /// Create an orchestrator that keeps stats in an in-memory `ScoreBook`.
    pub fn new(
        config: RaidConfig,
        host: H,
        waves: WaveDefinitionTable,
        arenas: ArenaRegistry,
    ) -> Self {
        Self::with_stats(config, host, waves, arenas, ScoreBook::default())
    }
}

impl<H: WorldHost, S: StatsSink> RaidOrchestrator<H, S> {
    pub fn with_stats(
        config: RaidConfig,
        host: H,
        waves: WaveDefinitionTable,
        arenas: ArenaRegistry,
        stats: S,
    ) -> Self {
        if waves.is_empty() {
            warn!("Wave catalog is empty; every raid will end in victory at once");
        }
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            host,
            stats,
            waves,
            arenas,
            world: World::new(),
            time: SimTime::default(),
            sessions: BTreeMap::new(),
            player_sessions: HashMap::new(),
            scheduler: Scheduler::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_session_id: 1,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: RaidCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = RaidCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one host tick and return the resulting snapshot.
    pub fn advance(&mut self) -> RaidSnapshot {
        self.process_commands();
        self.run_deferred();
        self.run_systems();

        let interval = self.config.session_tick_interval.max(1);
        if self.time.tick > 0 && self.time.tick % interval == 0 {
            self.tick();
        }
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.sessions, events)
    }

    /// One session pass. Sessions are independent of each other.
    pub fn tick(&mut self) {
        let now = self.time.tick;
        let ids: Vec<SessionId> = self.sessions.keys().copied().collect();
        for id in ids {
            let Some(session) = self.sessions.get(&id) else {
                continue;
            };
            if !session.is_active() || session.is_paused() {
                continue;
            }
            if session.has_time_expired(now) {
                self.end_session(id, EndReason::TimeExpired);
                continue;
            }
            if session.is_wave_complete() {
                self.handle_wave_complete(id);
            } else {
                self.process_respawns(id);
            }
            self.push_status(id);
        }
    }

    // --- Session lifecycle ---

    /// Lease `arena` for `players` and schedule the first wave after the
    /// grace delay. Nothing changes if this fails.
    pub fn create_session(
        &mut self,
        arena: &str,
        players: &[PlayerId],
    ) -> Result<SessionId, RaidError> {
        let roster: BTreeSet<PlayerId> = players.iter().copied().collect();
        if roster.is_empty() {
            return Err(RaidError::EmptyRoster);
        }
        if let Some(player) = roster.iter().find(|p| self.player_sessions.contains_key(*p)) {
            return Err(RaidError::PlayerAlreadyInRaid(*player));
        }
        let lease = self.arenas.lease(arena)?;

        let now = self.time.tick;
        let id = SessionId(self.next_session_id);
        self.next_session_id += 1;

        let spawn = lease.arena().spawn_location();
        let session = RaidSession::new(
            id,
            lease,
            roster.iter().copied(),
            now,
            self.config.total_time_secs,
            self.config.respawn_cooldown_secs,
        );
        for player in &roster {
            self.player_sessions.insert(*player, id);
            if !self.host.teleport(*player, &spawn) {
                warn!("Could not move {} into arena {}", player, arena);
            }
        }
        self.sessions.insert(id, session);

        self.events.push(RaidEvent::RaidStarted {
            session: id,
            arena: arena.to_string(),
            players: roster.into_iter().collect(),
        });
        self.scheduler.schedule(
            now + self.config.join_grace_ticks,
            DeferredTask::StartFirstWave { session: id },
        );
        info!("Created {} in arena {}", id, arena);
        Ok(id)
    }

    /// Start a solo raid in the first available arena.
    pub fn join(&mut self, player: PlayerId) -> Result<SessionId, RaidError> {
        if self.player_sessions.contains_key(&player) {
            return Err(RaidError::PlayerAlreadyInRaid(player));
        }
        let arena = self
            .arenas
            .first_available()
            .map(|a| a.name.clone())
            .ok_or(RaidError::NoFreeArena)?;
        self.create_session(&arena, &[player])
    }

    /// Take a player out of their raid. The raid ends when nobody is left.
    pub fn leave(&mut self, player: PlayerId) -> Result<(), RaidError> {
        let id = self
            .player_sessions
            .remove(&player)
            .ok_or(RaidError::NotInRaid(player))?;
        let remaining = match self.sessions.get_mut(&id) {
            Some(session) => {
                session.remove_player(player);
                session.player_count()
            }
            None => 0,
        };

        let neutral = self.host.neutral_location();
        if !self.host.teleport(player, &neutral) {
            debug!("Could not return {} to the neutral location", player);
        }
        self.events.push(RaidEvent::PlayerLeft { session: id, player });
        info!("{} left {}", player, id);

        if remaining == 0 {
            self.end_session(id, EndReason::AllPlayersLeft);
        }
        Ok(())
    }

    /// A player disconnected from the host.
    pub fn player_quit(&mut self, player: PlayerId) {
        if self.leave(player).is_err() {
            debug!("{} quit while not in a raid", player);
        }
    }

    /// Finalize a session. Does nothing if the session no longer exists.
    pub fn end_session(&mut self, id: SessionId, reason: EndReason) {
        let Some(mut session) = self.sessions.remove(&id) else {
            debug!("{} already ended", id);
            return;
        };
        let now = self.time.tick;
        session.set_active(false);
        session.calculate_score(now);
        let stats = session.stats(now);

        let record = SessionRecord {
            session: id,
            arena: session.arena().name.clone(),
            date: unix_now(),
            reason,
            final_wave: stats.wave,
            kills: stats.kills,
            deaths: stats.deaths,
            score: stats.score,
            elapsed_secs: stats.elapsed_secs,
            per_player: session.tallies().clone(),
        };
        self.stats.record_session(&record);

        let neutral = self.host.neutral_location();
        for player in session.players() {
            let online = self.host.player(player).is_some_and(|p| p.online);
            if online && !self.host.teleport(player, &neutral) {
                warn!("Could not return {} to the neutral location", player);
            }
        }
        self.player_sessions.retain(|_, session_id| *session_id != id);
        self.despawn_owned_agents(id);
        self.arenas.release(session.into_lease());

        info!(
            "{} ended ({:?}): wave {}, score {}",
            id, reason, stats.wave, stats.score
        );
        self.events.push(RaidEvent::SessionEnded {
            session: id,
            reason,
            stats,
        });
    }

    /// End every live session.
    pub fn end_all_sessions(&mut self, reason: EndReason) {
        let ids: Vec<SessionId> = self.sessions.keys().copied().collect();
        for id in ids {
            self.end_session(id, reason);
        }
    }

    /// Advance a session to its next wave and populate it. Past the last
    /// wave the session ends in victory.
    pub fn start_next_wave(&mut self, id: SessionId) {
        let now = self.time.tick;
        let wave = match self.sessions.get_mut(&id) {
            Some(session) => {
                session.next_wave(now);
                session.current_wave()
            }
            None => {
                debug!("Not starting a wave for ended {}", id);
                return;
            }
        };
        let Some(definition) = self.waves.get(wave) else {
            self.end_session(id, EndReason::Victory);
            return;
        };
        let boss_wave = definition.has_boss;
        let composition = definition.scaled_composition();

        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        session.set_active(true);
        self.events.push(RaidEvent::WaveStarted {
            session: id,
            wave,
            boss_wave,
        });
        info!("{} wave {} started", id, wave);

        let mut coordinator = SpawnCoordinator {
            world: &mut self.world,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        if !self.config.progressive_spawning {
            coordinator.populate_wave(&self.host, session, &composition);
            return;
        }

        let delay = self.config.spawn_group_delay_ticks;
        for (i, group) in spawner::plan_progressive(&composition).into_iter().enumerate() {
            if i == 0 {
                coordinator.spawn_group(&self.host, session, &group);
                continue;
            }
            session.add_pending_group();
            self.scheduler.schedule(
                now + i as u64 * delay,
                DeferredTask::SpawnGroup {
                    session: id,
                    wave,
                    group,
                },
            );
        }
    }

    /// Pause for the wave break and schedule what follows it.
    fn handle_wave_complete(&mut self, id: SessionId) {
        let now = self.time.tick;
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        session.set_paused(true);
        let score = session.calculate_score(now);
        let wave = session.current_wave();
        let last = self.waves.is_last(wave);

        self.events.push(RaidEvent::WaveCompleted {
            session: id,
            wave,
            score,
            last,
        });
        info!("{} cleared wave {}", id, wave);

        let due = now + secs_to_ticks(self.config.wave_break_secs);
        let task = if last {
            DeferredTask::FinishVictory { session: id }
        } else {
            DeferredTask::ResumeAfterBreak { session: id }
        };
        self.scheduler.schedule(due, task);
    }

    fn process_respawns(&mut self, id: SessionId) {
        let now = self.time.tick;
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        let spawn = session.arena().spawn_location();
        let queued: Vec<PlayerId> = session.respawn_queue().map(|(p, _)| p).collect();
        for player in queued {
            if session.can_respawn(player, now) {
                session.respawn_player(player);
                self.host.restore(player);
                if !self.host.teleport(player, &spawn) {
                    warn!("Could not respawn {} in the arena", player);
                }
                self.events.push(RaidEvent::PlayerRespawned { session: id, player });
            } else {
                self.events.push(RaidEvent::RespawnCountdown {
                    player,
                    remaining_secs: session.respawn_time_remaining(player, now),
                });
            }
        }
    }

    fn push_status(&mut self, id: SessionId) {
        let now = self.time.tick;
        let Some(session) = self.sessions.get(&id) else {
            return;
        };
        for player in session.players() {
            self.events.push(RaidEvent::StatusBar {
                player,
                wave: session.current_wave(),
                mobs_alive: session.alive_mobs(),
                remaining_secs: session.remaining_secs(now),
            });
        }
    }

    // --- Player hooks ---

    /// A player died. Raiders get a death on their tally and a respawn slot.
    pub fn player_died(&mut self, player: PlayerId, killer: KillerKind) {
        let now = self.time.tick;
        let Some(id) = self.player_sessions.get(&player).copied() else {
            return;
        };
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        session.add_death(player, now);
        self.events.push(RaidEvent::PlayerDied {
            session: id,
            player,
            killer,
        });
        debug!("{} died in {}", player, id);
    }

    /// Where a raider respawns. `None` for players outside raids.
    pub fn respawn_location(&self, player: PlayerId) -> Option<Location> {
        self.session_of(player).map(|s| s.arena().spawn_location())
    }

    /// Decide whether a raider takes damage.
    pub fn filter_player_damage(&mut self, victim: PlayerId, cause: DamageCause) -> DamageVerdict {
        let Some(id) = self.player_sessions.get(&victim).copied() else {
            return DamageVerdict::Allow;
        };
        let Some(session) = self.sessions.get(&id) else {
            return DamageVerdict::Allow;
        };
        match cause {
            DamageCause::Player(attacker) if session.has_player(attacker) => {
                self.events.push(RaidEvent::Tip {
                    player: attacker,
                    tip: Tip::FriendlyFire,
                });
                DamageVerdict::Cancel
            }
            DamageCause::Fall => DamageVerdict::Cancel,
            DamageCause::Void => {
                let spawn = session.arena().spawn_location();
                if !self.host.teleport(victim, &spawn) {
                    warn!("Could not rescue {} from the void", victim);
                }
                self.events.push(RaidEvent::Tip {
                    player: victim,
                    tip: Tip::FellIntoVoid,
                });
                DamageVerdict::CancelAndReturnToSpawn
            }
            _ => DamageVerdict::Allow,
        }
    }

    /// Check a raider's move. Moves that leave the arena are refused and the
    /// raider is sent back to the center. Returns whether the move stands.
    pub fn constrain_movement(&mut self, player: PlayerId, to: &Location) -> bool {
        let Some(session) = self.session_of(player) else {
            return true;
        };
        if session.arena().contains(to) {
            return true;
        }
        let center = session.arena().center_location();
        if !self.host.teleport(player, &center) {
            warn!("Could not return {} to the arena", player);
        }
        self.events.push(RaidEvent::Tip {
            player,
            tip: Tip::LeftArena,
        });
        false
    }

    /// Whether a player may break or place blocks at `at`. Raiders cannot
    /// edit their arena.
    pub fn may_edit_blocks(&mut self, player: PlayerId, at: &Location) -> bool {
        let inside = self
            .session_of(player)
            .is_some_and(|s| s.arena().contains(at));
        if inside {
            self.events.push(RaidEvent::Tip {
                player,
                tip: Tip::NoBlockEditing,
            });
        }
        !inside
    }

    // --- Agents ---

    /// Apply damage to an agent. Players outside raids, players hitting an
    /// agent outside their arena, and agents hitting agents are rejected.
    pub fn damage_agent(&mut self, agent: AgentId, source: DamageSource, amount: f64) -> HitOutcome {
        let Some(entity) = world_setup::agent_entity(agent) else {
            return HitOutcome::Rejected;
        };
        let location = match self.world.query_one_mut::<(&Agent, &Position, &AgentBrain)>(entity) {
            Ok((a, pos, brain)) if brain.state != AgentState::Dead => {
                Location::new(a.world.clone(), *pos)
            }
            _ => return HitOutcome::Rejected,
        };

        let attacker = match source {
            DamageSource::Agent(_) => return HitOutcome::Rejected,
            DamageSource::Environment => None,
            DamageSource::Player(player) => {
                match self.session_of(player).map(|s| s.arena().contains(&location)) {
                    Some(true) => Some(player),
                    Some(false) => return HitOutcome::Rejected,
                    None => {
                        self.events.push(RaidEvent::Tip {
                            player,
                            tip: Tip::NotInRaid,
                        });
                        return HitOutcome::Rejected;
                    }
                }
            }
        };

        let killed = match self
            .world
            .query_one_mut::<(&mut AgentStats, &mut AgentBrain)>(entity)
        {
            Ok((stats, brain)) => {
                stats.health = (stats.health - amount.max(0.0)).max(0.0);
                if let Some(player) = attacker {
                    brain.target = Some(player);
                    brain.last_damager = Some(player);
                }
                stats.health <= 0.0
            }
            Err(_) => return HitOutcome::Rejected,
        };

        if killed {
            self.on_agent_death(entity);
            HitOutcome::Killed
        } else {
            HitOutcome::Applied
        }
    }

    /// Remove an agent from the world. A still-living agent no longer counts
    /// toward its session's alive mobs.
    pub fn despawn_agent(&mut self, agent: AgentId) -> bool {
        let Some(entity) = world_setup::agent_entity(agent) else {
            return false;
        };
        let owner = match self.world.query_one_mut::<(&AgentBrain, &AgentOwner)>(entity) {
            Ok((brain, owner)) if brain.state != AgentState::Dead => Some(owner.session),
            Ok(_) => None,
            Err(_) => return false,
        };
        if let Some(session) = owner.and_then(|id| self.sessions.get_mut(&id)) {
            session.decrement_alive_mobs();
        }
        self.world.despawn(entity).is_ok()
    }

    /// Mark an agent dead and credit its last damager's session.
    fn on_agent_death(&mut self, entity: Entity) {
        let (mob_type, last_damager, owner) = match self
            .world
            .query_one_mut::<(&Agent, &mut AgentBrain, &AgentOwner)>(entity)
        {
            Ok((agent, brain, owner)) => {
                brain.state = AgentState::Dead;
                brain.target = None;
                (agent.mob_type.clone(), brain.last_damager, owner.session)
            }
            Err(_) => return,
        };

        let creditor = last_damager
            .filter(|p| self.host.player(*p).is_some_and(|s| s.online))
            .and_then(|p| self.player_sessions.get(&p).map(|id| (p, *id)));

        match creditor {
            Some((player, id)) => {
                if let Some(session) = self.sessions.get_mut(&id) {
                    session.add_kill(player);
                    session.decrement_alive_mobs();
                    self.events.push(RaidEvent::KillCredited {
                        session: id,
                        player,
                        agent: world_setup::agent_id(entity),
                        mob_type,
                    });
                }
            }
            None => {
                if let Some(session) = self.sessions.get_mut(&owner) {
                    session.decrement_alive_mobs();
                }
                debug!("{} agent died with nobody to credit", mob_type);
            }
        }
    }

    fn despawn_owned_agents(&mut self, id: SessionId) {
        self.despawn_buffer.clear();
        for (entity, owner) in self.world.query_mut::<&AgentOwner>() {
            if owner.session == id {
                self.despawn_buffer.push(entity);
            }
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    // --- Tick internals ---

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: RaidCommand) {
        match command {
            RaidCommand::Join { player } => {
                if let Err(e) = self.join(player) {
                    self.reject(Some(player), e);
                }
            }
            RaidCommand::Leave { player } => {
                if let Err(e) = self.leave(player) {
                    self.reject(Some(player), e);
                }
            }
            RaidCommand::EndSession { session, reason } => self.end_session(session, reason),
            RaidCommand::EndAll => self.end_all_sessions(EndReason::Admin),
        }
    }

    fn reject(&mut self, player: Option<PlayerId>, error: RaidError) {
        debug!("Command rejected: {}", error);
        self.events.push(RaidEvent::CommandRejected {
            player,
            reason: error.to_string(),
        });
    }

    /// Fire every deferred task that is due. Each re-resolves its session.
    fn run_deferred(&mut self) {
        for task in self.scheduler.take_due(self.time.tick) {
            let id = task.session();
            if !self.sessions.contains_key(&id) {
                debug!("Dropping deferred task for ended {}: {:?}", id, task);
                continue;
            }
            match task {
                DeferredTask::StartFirstWave { session } => self.start_next_wave(session),
                DeferredTask::ResumeAfterBreak { session } => {
                    if let Some(s) = self.sessions.get_mut(&session) {
                        s.set_paused(false);
                    }
                    self.start_next_wave(session);
                }
                DeferredTask::FinishVictory { session } => {
                    self.end_session(session, EndReason::Victory)
                }
                DeferredTask::SpawnGroup {
                    session,
                    wave,
                    group,
                } => self.spawn_deferred_group(session, wave, &group),
            }
        }
    }

    fn spawn_deferred_group(&mut self, id: SessionId, wave: u32, group: &spawner::SpawnGroup) {
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        if session.current_wave() != wave {
            debug!("Dropping spawn group of wave {} for {}", wave, id);
            return;
        }
        session.complete_pending_group();
        let mut coordinator = SpawnCoordinator {
            world: &mut self.world,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        coordinator.spawn_group(&self.host, session, group);
    }

    /// Run all agent systems in order.
    fn run_systems(&mut self) {
        // 1. Agent AI
        let attacks =
            systems::agent_ai::run(&mut self.world, &self.host, &mut self.rng, self.time.tick);
        // 2. Apply hits through the host
        self.resolve_attacks(attacks);
        // 3. Movement integration
        systems::movement::run(&mut self.world);
        // 4. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn resolve_attacks(&mut self, attacks: Vec<AgentAttack>) {
        let now = self.time.tick;
        for attack in attacks {
            let roll = attack.roll;
            if !self
                .host
                .apply_hit(attack.target, roll.damage, roll.knockback)
            {
                continue;
            }
            if let Ok(mut brain) = self.world.get::<&mut AgentBrain>(attack.agent) {
                combat::register_hit(&mut brain, now);
            }
            self.events.push(RaidEvent::PlayerHit {
                player: attack.target,
                agent: world_setup::agent_id(attack.agent),
                damage: roll.damage,
                critical: roll.critical,
            });
            if roll.critical {
                self.events.push(RaidEvent::Tip {
                    player: attack.target,
                    tip: Tip::CriticalHit,
                });
            }
            let died = self.host.player(attack.target).is_some_and(|p| !p.alive);
            if died {
                self.player_died(attack.target, KillerKind::Mob);
            }
        }
    }

    // --- Accessors ---

    pub fn session(&self, id: SessionId) -> Option<&RaidSession> {
        self.sessions.get(&id)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &RaidSession> {
        self.sessions.values()
    }

    pub fn active_session_count(&self) -> usize {
        self.sessions.len()
    }

    /// The session a player is in, via the player index.
    pub fn player_session(&self, player: PlayerId) -> Option<SessionId> {
        self.player_sessions.get(&player).copied()
    }

    pub fn is_in_raid(&self, player: PlayerId) -> bool {
        self.player_sessions.contains_key(&player)
    }

    fn session_of(&self, player: PlayerId) -> Option<&RaidSession> {
        self.player_sessions
            .get(&player)
            .and_then(|id| self.sessions.get(id))
    }

    /// Handles of the live agents a session spawned.
    pub fn agents_of(&self, id: SessionId) -> Vec<AgentId> {
        self.world
            .query::<(&AgentOwner, &AgentBrain)>()
            .iter()
            .filter(|(_, (owner, brain))| owner.session == id && brain.state != AgentState::Dead)
            .map(|(entity, _)| world_setup::agent_id(entity))
            .collect()
    }

    pub fn config(&self) -> &RaidConfig {
        &self.config
    }

    pub fn waves(&self) -> &WaveDefinitionTable {
        &self.waves
    }

    pub fn arenas(&self) -> &ArenaRegistry {
        &self.arenas
    }

    /// Arena administration. Leases are unaffected.
    pub fn arenas_mut(&mut self) -> &mut ArenaRegistry {
        &mut self.arenas
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn stats(&self) -> &S {
        &self.stats
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
