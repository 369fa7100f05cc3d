//! Definition catalog loading.
//!
//! Catalogs are JSON documents shaped like `{"waves": [...]}` and
//! `{"arenas": [...]}` (a bare array is accepted too). Entries that fail
//! validation are skipped with a warning; an empty or unreadable catalog
//! falls back to the built-in defaults.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use raid_core::definitions::{Arena, WaveDefinition};

use crate::arena::ArenaRegistry;
use crate::error::CatalogError;
use crate::waves::WaveDefinitionTable;

/// Parse and validate wave definitions.
pub fn parse_waves(json: &str) -> Result<Vec<WaveDefinition>, CatalogError> {
    let mut waves = parse_entries(json, "waves", validate_wave)?;
    for wave in &mut waves {
        wave.has_boss |= wave.mobs.iter().any(|m| m.is_boss);
    }
    Ok(waves)
}

/// Parse and validate arena definitions.
pub fn parse_arenas(json: &str) -> Result<Vec<Arena>, CatalogError> {
    parse_entries(json, "arenas", validate_arena)
}

/// Load the wave table, falling back to the default catalog.
pub fn load_wave_table(json: &str) -> WaveDefinitionTable {
    match parse_waves(json) {
        Ok(waves) => {
            info!("Loaded {} waves", waves.len());
            WaveDefinitionTable::new(waves)
        }
        Err(e) => {
            warn!("Using default wave catalog: {}", e);
            WaveDefinitionTable::default_catalog()
        }
    }
}

/// Load the arena registry, falling back to the example arena.
pub fn load_arena_registry(json: &str) -> ArenaRegistry {
    match parse_arenas(json) {
        Ok(arenas) => {
            info!("Loaded {} arenas", arenas.len());
            ArenaRegistry::new(arenas)
        }
        Err(e) => {
            warn!("Using default arena: {}", e);
            ArenaRegistry::with_default()
        }
    }
}

fn parse_entries<T: DeserializeOwned>(
    json: &str,
    key: &str,
    validate: fn(&T) -> Result<(), String>,
) -> Result<Vec<T>, CatalogError> {
    let root: Value = serde_json::from_str(json)?;
    let entries = match root {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let mut parsed = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let item = match serde_json::from_value::<T>(entry) {
            Ok(item) => item,
            Err(e) => {
                warn!("Skipping {} entry {}: {}", key, index, e);
                continue;
            }
        };
        if let Err(reason) = validate(&item) {
            warn!("Skipping {} entry {}: {}", key, index, reason);
            continue;
        }
        parsed.push(item);
    }

    if parsed.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(parsed)
}

fn validate_wave(wave: &WaveDefinition) -> Result<(), String> {
    if wave.id < 1 {
        return Err("wave id must be at least 1".to_string());
    }
    if wave.mobs.is_empty() {
        return Err(format!("wave {} has no mobs", wave.id));
    }
    if wave.mobs.iter().any(|m| m.amount == 0) {
        return Err(format!("wave {} has an empty mob entry", wave.id));
    }
    if wave
        .mobs
        .iter()
        .any(|m| m.health <= 0.0 || m.damage < 0.0 || m.speed <= 0.0)
    {
        return Err(format!("wave {} has non-positive mob stats", wave.id));
    }
    if wave.difficulty <= 0.0 {
        return Err(format!("wave {} has non-positive difficulty", wave.id));
    }
    Ok(())
}

fn validate_arena(arena: &Arena) -> Result<(), String> {
    if arena.name.is_empty() {
        return Err("arena has no name".to_string());
    }
    if arena.world.is_empty() {
        return Err(format!("arena {} has no world", arena.name));
    }
    if arena.mob_spawns.is_empty() {
        return Err(format!("arena {} has no mob spawn points", arena.name));
    }
    Ok(())
}
