//! Wave and arena definitions consumed from the definition catalog.
//!
//! Definitions are immutable once loaded. Wave scaling is a pure function
//! of the wave id and the wave's own difficulty.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::{Location, Position};

/// One entry of a wave composition, before scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobSpec {
    #[serde(rename = "type", default = "default_mob_type")]
    pub mob_type: String,
    #[serde(default = "default_amount")]
    pub amount: u32,
    #[serde(default = "default_health")]
    pub health: f64,
    #[serde(default = "default_damage")]
    pub damage: f64,
    #[serde(default = "default_multiplier")]
    pub speed: f64,
    #[serde(default, alias = "boss")]
    pub is_boss: bool,
}

/// A wave of the raid catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDefinition {
    pub id: u32,
    #[serde(default)]
    pub mobs: Vec<MobSpec>,
    #[serde(default, alias = "boss")]
    pub has_boss: bool,
    /// Soft duration hint in seconds, informational only.
    #[serde(default = "default_max_duration")]
    pub max_duration: u32,
    #[serde(default = "default_multiplier")]
    pub difficulty: f64,
}

/// A mob entry after wave scaling, ready to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledMob {
    pub mob_type: String,
    pub amount: u32,
    pub health: f64,
    pub damage: f64,
    pub speed: f64,
    pub is_boss: bool,
}

/// A combat arena: where raiders gather and where mobs appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub name: String,
    pub world: String,
    pub spawn: Position,
    pub center: Position,
    pub mob_spawns: Vec<Position>,
    #[serde(default = "default_capacity")]
    pub max_players: u32,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_mob_type() -> String {
    "zombie".to_string()
}

fn default_amount() -> u32 {
    10
}

fn default_health() -> f64 {
    20.0
}

fn default_damage() -> f64 {
    2.0
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_max_duration() -> u32 {
    90
}

fn default_capacity() -> u32 {
    DEFAULT_ARENA_CAPACITY
}

fn default_available() -> bool {
    true
}

/// Scaled health for wave `id`.
pub fn scale_health(id: u32, base: f64, difficulty: f64) -> f64 {
    base * (1.0 + HEALTH_SCALE_PER_WAVE * id as f64) * difficulty
}

/// Scaled damage for wave `id`.
pub fn scale_damage(id: u32, base: f64, difficulty: f64) -> f64 {
    base * (1.0 + DAMAGE_SCALE_PER_WAVE * id as f64) * difficulty
}

/// Speed bonus tier for wave `id`.
pub fn speed_bonus(id: u32) -> f64 {
    SPEED_BONUS_TIERS
        .iter()
        .find(|(min_wave, _)| id >= *min_wave)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0)
}

/// Scaled speed multiplier for wave `id`. Difficulty does not apply.
pub fn scale_speed(id: u32, base: f64) -> f64 {
    base * (1.0 + speed_bonus(id))
}

impl MobSpec {
    pub fn new(mob_type: impl Into<String>, amount: u32, health: f64, damage: f64) -> Self {
        Self {
            mob_type: mob_type.into(),
            amount,
            health,
            damage,
            speed: 1.0,
            is_boss: false,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn boss(mut self) -> Self {
        self.is_boss = true;
        self
    }
}

impl WaveDefinition {
    pub fn new(id: u32, mobs: Vec<MobSpec>, difficulty: f64) -> Self {
        let has_boss = mobs.iter().any(|m| m.is_boss);
        Self {
            id,
            mobs,
            has_boss,
            max_duration: default_max_duration(),
            difficulty,
        }
    }

    /// Total number of units across all entries.
    pub fn total_mobs(&self) -> u32 {
        self.mobs.iter().map(|m| m.amount).sum()
    }

    /// The composition scaled for this wave's id and difficulty.
    pub fn scaled_composition(&self) -> Vec<ScaledMob> {
        self.mobs
            .iter()
            .map(|m| ScaledMob {
                mob_type: m.mob_type.clone(),
                amount: m.amount,
                health: scale_health(self.id, m.health, self.difficulty),
                damage: scale_damage(self.id, m.damage, self.difficulty),
                speed: scale_speed(self.id, m.speed),
                is_boss: m.is_boss,
            })
            .collect()
    }
}

impl Arena {
    pub fn spawn_location(&self) -> Location {
        Location::new(self.world.clone(), self.spawn)
    }

    pub fn center_location(&self) -> Location {
        Location::new(self.world.clone(), self.center)
    }

    /// Whether a location lies in this arena's world within the arena radius.
    pub fn contains(&self, location: &Location) -> bool {
        location.world == self.world && location.position.range_to(&self.center) <= ARENA_RADIUS
    }
}
