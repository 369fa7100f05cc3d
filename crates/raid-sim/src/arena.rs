//! Arena registry and exclusive arena leases.
//!
//! An `ArenaLease` is the only proof that a session occupies an arena. It
//! cannot be cloned, and handing it back to the registry is the only way to
//! make the arena available again.

use raid_core::constants::DEFAULT_ARENA_CAPACITY;
use raid_core::definitions::Arena;
use raid_core::types::Position;
use tracing::warn;

use crate::error::RaidError;

/// Exclusive occupancy of one arena by one session.
#[derive(Debug)]
pub struct ArenaLease {
    arena: Arena,
}

impl ArenaLease {
    /// The arena as it was when leased.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn name(&self) -> &str {
        &self.arena.name
    }
}

/// All configured arenas, in load order.
#[derive(Debug, Clone, Default)]
pub struct ArenaRegistry {
    arenas: Vec<Arena>,
}

impl ArenaRegistry {
    /// Build a registry. Later duplicates of a name are dropped.
    pub fn new(arenas: impl IntoIterator<Item = Arena>) -> Self {
        let mut registry = Self::default();
        for arena in arenas {
            if let Err(e) = registry.add(arena) {
                warn!("Skipping arena: {}", e);
            }
        }
        registry
    }

    /// A registry holding only the built-in example arena.
    pub fn with_default() -> Self {
        Self::new([Self::default_arena()])
    }

    /// The built-in example arena.
    pub fn default_arena() -> Arena {
        let at = |x, y| Position::new(x, y, 64.0);
        Arena {
            name: "example".to_string(),
            world: "world".to_string(),
            spawn: at(100.0, 100.0),
            center: at(100.0, 100.0),
            mob_spawns: vec![
                at(110.0, 100.0),
                at(90.0, 100.0),
                at(100.0, 110.0),
                at(100.0, 90.0),
                at(105.0, 105.0),
                at(95.0, 95.0),
            ],
            max_players: DEFAULT_ARENA_CAPACITY,
            available: true,
        }
    }

    pub fn add(&mut self, arena: Arena) -> Result<(), RaidError> {
        if self.get(&arena.name).is_some() {
            return Err(RaidError::ArenaExists(arena.name));
        }
        self.arenas.push(arena);
        Ok(())
    }

    /// Remove an arena that no session currently occupies.
    pub fn remove(&mut self, name: &str) -> Result<Arena, RaidError> {
        let index = self
            .arenas
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| RaidError::UnknownArena(name.to_string()))?;
        if !self.arenas[index].available {
            return Err(RaidError::ArenaLeased(name.to_string()));
        }
        Ok(self.arenas.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&Arena> {
        self.arenas.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arena> {
        self.arenas.iter()
    }

    pub fn first_available(&self) -> Option<&Arena> {
        self.arenas.iter().find(|a| a.available)
    }

    pub fn available_count(&self) -> usize {
        self.arenas.iter().filter(|a| a.available).count()
    }

    pub fn len(&self) -> usize {
        self.arenas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arenas.is_empty()
    }

    /// Take exclusive occupancy of an arena.
    pub fn lease(&mut self, name: &str) -> Result<ArenaLease, RaidError> {
        let arena = self
            .arenas
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| RaidError::UnknownArena(name.to_string()))?;
        if !arena.available {
            return Err(RaidError::ArenaUnavailable(name.to_string()));
        }
        arena.available = false;
        Ok(ArenaLease {
            arena: arena.clone(),
        })
    }

    /// Hand a lease back, making its arena available again.
    pub fn release(&mut self, lease: ArenaLease) {
        if let Some(arena) = self.arenas.iter_mut().find(|a| a.name == lease.arena.name) {
            arena.available = true;
        }
    }
}
