//! Wave definition table: the loaded catalog plus its scaling law.

use std::collections::BTreeMap;

use raid_core::definitions::{MobSpec, ScaledMob, WaveDefinition};

/// Immutable catalog of waves keyed by id.
#[derive(Debug, Clone, Default)]
pub struct WaveDefinitionTable {
    waves: BTreeMap<u32, WaveDefinition>,
}

impl WaveDefinitionTable {
    /// Build a table. A later definition with the same id replaces an earlier one.
    pub fn new(definitions: impl IntoIterator<Item = WaveDefinition>) -> Self {
        Self {
            waves: definitions.into_iter().map(|w| (w.id, w)).collect(),
        }
    }

    /// The built-in ten-wave catalog with boss waves 5 and 10.
    pub fn default_catalog() -> Self {
        let wave = |id, difficulty, mobs| {
            let mut w = WaveDefinition::new(id, mobs, difficulty);
            w.max_duration = if w.has_boss { 120 } else { 90 };
            w
        };
        Self::new([
            wave(1, 1.0, vec![MobSpec::new("zombie", 10, 20.0, 2.0)]),
            wave(2, 1.0, vec![MobSpec::new("zombie", 15, 20.0, 2.0)]),
            wave(
                3,
                1.1,
                vec![
                    MobSpec::new("zombie", 12, 20.0, 2.0),
                    MobSpec::new("skeleton", 5, 15.0, 2.5),
                ],
            ),
            wave(
                4,
                1.2,
                vec![
                    MobSpec::new("zombie", 20, 20.0, 2.0),
                    MobSpec::new("spider", 3, 18.0, 2.0).with_speed(1.2),
                ],
            ),
            wave(
                5,
                1.5,
                vec![
                    MobSpec::new("zombie", 15, 25.0, 3.0),
                    MobSpec::new("zombie_boss", 1, 100.0, 5.0)
                        .with_speed(0.8)
                        .boss(),
                ],
            ),
            wave(
                6,
                1.3,
                vec![
                    MobSpec::new("zombie", 25, 22.0, 2.5),
                    MobSpec::new("skeleton", 8, 16.0, 3.0),
                ],
            ),
            wave(
                7,
                1.4,
                vec![
                    MobSpec::new("zombie", 20, 24.0, 3.0).with_speed(1.1),
                    MobSpec::new("spider", 6, 20.0, 2.5).with_speed(1.3),
                    MobSpec::new("creeper", 3, 15.0, 4.0),
                ],
            ),
            wave(
                8,
                1.5,
                vec![
                    MobSpec::new("skeleton", 15, 18.0, 3.5),
                    MobSpec::new("zombie", 15, 25.0, 3.0).with_speed(1.1),
                ],
            ),
            wave(
                9,
                1.6,
                vec![
                    MobSpec::new("zombie", 30, 26.0, 3.5).with_speed(1.2),
                    MobSpec::new("spider", 8, 22.0, 3.0).with_speed(1.4),
                ],
            ),
            wave(
                10,
                1.8,
                vec![
                    MobSpec::new("skeleton", 20, 20.0, 4.0),
                    MobSpec::new("skeleton_boss", 1, 150.0, 6.0)
                        .with_speed(0.9)
                        .boss(),
                ],
            ),
        ])
    }

    pub fn get(&self, id: u32) -> Option<&WaveDefinition> {
        self.waves.get(&id)
    }

    pub fn total_count(&self) -> u32 {
        self.waves.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    /// Whether `id` is the final wave of the catalog.
    pub fn is_last(&self, id: u32) -> bool {
        id >= self.total_count()
    }

    /// Scaled composition of wave `id`, or `None` past the end of the catalog.
    pub fn scaled_composition(&self, id: u32) -> Option<Vec<ScaledMob>> {
        self.get(id).map(WaveDefinition::scaled_composition)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WaveDefinition> {
        self.waves.values()
    }

    pub fn boss_waves(&self) -> impl Iterator<Item = &WaveDefinition> {
        self.waves.values().filter(|w| w.has_boss)
    }
}
