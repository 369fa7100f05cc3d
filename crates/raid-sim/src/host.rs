//! World/entity host boundary.
//!
//! The orchestrator never owns players. Everything it knows about them comes
//! from a `WorldHost`, and every effect it has on them goes through one.
//! Host failures degrade to a `false` return, never to a panic.

use std::collections::{BTreeMap, BTreeSet};

use raid_core::types::{Location, PlayerId, Position, Velocity};

/// Player health a sandbox player starts with.
const SANDBOX_MAX_HEALTH: f64 = 20.0;

/// What the host reports about a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub id: PlayerId,
    pub location: Location,
    pub health: f64,
    pub max_health: f64,
    pub alive: bool,
    pub online: bool,
    pub spectator: bool,
}

/// Services the raid engine needs from the world it runs in.
pub trait WorldHost {
    /// Whether entities can currently be placed in `world`.
    fn is_world_loaded(&self, world: &str) -> bool;

    fn player(&self, id: PlayerId) -> Option<PlayerState>;

    /// Online players currently in `world`, in a stable order.
    fn players_in_world(&self, world: &str) -> Vec<PlayerState>;

    /// Move a player. Returns `false` if the player could not be moved.
    fn teleport(&mut self, id: PlayerId, to: &Location) -> bool;

    /// Deal damage with knockback. Returns `false` if the hit was cancelled.
    fn apply_hit(&mut self, id: PlayerId, damage: f64, knockback: Velocity) -> bool;

    /// Bring a dead player back with full health.
    fn restore(&mut self, id: PlayerId);

    /// Where players go when they leave a raid.
    fn neutral_location(&self) -> Location;
}

/// A hit recorded by the sandbox host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedHit {
    pub player: PlayerId,
    pub damage: f64,
    pub knockback: Velocity,
}

/// In-memory host used for tests, tools and headless runs.
#[derive(Debug, Clone, Default)]
pub struct SandboxHost {
    players: BTreeMap<PlayerId, PlayerState>,
    unloaded_worlds: BTreeSet<String>,
    invulnerable: BTreeSet<PlayerId>,
    hits: Vec<RecordedHit>,
    neutral: Location,
}

impl SandboxHost {
    pub fn new(neutral: Location) -> Self {
        Self {
            neutral,
            ..Default::default()
        }
    }

    /// Connect a player at `location` with full health.
    pub fn add_player(&mut self, id: PlayerId, location: Location) {
        self.players.insert(
            id,
            PlayerState {
                id,
                location,
                health: SANDBOX_MAX_HEALTH,
                max_health: SANDBOX_MAX_HEALTH,
                alive: true,
                online: true,
                spectator: false,
            },
        );
    }

    pub fn set_position(&mut self, id: PlayerId, position: Position) {
        if let Some(p) = self.players.get_mut(&id) {
            p.location.position = position;
        }
    }

    pub fn set_health(&mut self, id: PlayerId, health: f64) {
        if let Some(p) = self.players.get_mut(&id) {
            p.health = health.clamp(0.0, p.max_health);
            p.alive = p.health > 0.0;
        }
    }

    pub fn set_spectator(&mut self, id: PlayerId, spectator: bool) {
        if let Some(p) = self.players.get_mut(&id) {
            p.spectator = spectator;
        }
    }

    pub fn set_invulnerable(&mut self, id: PlayerId, invulnerable: bool) {
        if invulnerable {
            self.invulnerable.insert(id);
        } else {
            self.invulnerable.remove(&id);
        }
    }

    pub fn disconnect(&mut self, id: PlayerId) {
        if let Some(p) = self.players.get_mut(&id) {
            p.online = false;
        }
    }

    pub fn unload_world(&mut self, world: &str) {
        self.unloaded_worlds.insert(world.to_string());
    }

    pub fn load_world(&mut self, world: &str) {
        self.unloaded_worlds.remove(world);
    }

    /// Every hit the host has applied so far.
    pub fn hits(&self) -> &[RecordedHit] {
        &self.hits
    }
}

impl WorldHost for SandboxHost {
    fn is_world_loaded(&self, world: &str) -> bool {
        !self.unloaded_worlds.contains(world)
    }

    fn player(&self, id: PlayerId) -> Option<PlayerState> {
        self.players.get(&id).cloned()
    }

    fn players_in_world(&self, world: &str) -> Vec<PlayerState> {
        self.players
            .values()
            .filter(|p| p.online && p.location.world == world)
            .cloned()
            .collect()
    }

    fn teleport(&mut self, id: PlayerId, to: &Location) -> bool {
        if !self.is_world_loaded(&to.world) {
            return false;
        }
        match self.players.get_mut(&id) {
            Some(p) if p.online => {
                p.location = to.clone();
                true
            }
            _ => false,
        }
    }

    fn apply_hit(&mut self, id: PlayerId, damage: f64, knockback: Velocity) -> bool {
        if self.invulnerable.contains(&id) {
            return false;
        }
        let Some(p) = self.players.get_mut(&id) else {
            return false;
        };
        if !p.online || !p.alive {
            return false;
        }
        p.health = (p.health - damage).max(0.0);
        p.alive = p.health > 0.0;
        self.hits.push(RecordedHit {
            player: id,
            damage,
            knockback,
        });
        true
    }

    fn restore(&mut self, id: PlayerId) {
        if let Some(p) = self.players.get_mut(&id) {
            p.health = p.max_health;
            p.alive = true;
        }
    }

    fn neutral_location(&self) -> Location {
        self.neutral.clone()
    }
}
