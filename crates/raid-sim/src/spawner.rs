//! Spawn coordination: where mobs appear and how fast.
//!
//! Units of a wave are placed round-robin over the arena's mob spawn points
//! with a small jitter. A unit is only counted alive once it exists, and a
//! unit is skipped when its world is not loaded.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use raid_agent_ai::profiles::boss_title;
use raid_core::constants::{SPAWN_GROUP_SIZE, SPAWN_JITTER};
use raid_core::definitions::{Arena, ScaledMob};
use raid_core::events::RaidEvent;
use raid_core::types::Location;

use crate::host::WorldHost;
use crate::session::RaidSession;
use crate::world_setup;

/// A batch of units spawned together by one deferred task.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnGroup {
    /// Scaled stats, `amount` being the size of this group.
    pub mob: ScaledMob,
    /// Running unit index of the group's first unit within its wave.
    pub start_index: u32,
}

/// Resolve the spawn location of the `index`th unit of a wave.
pub fn resolve_spawn_position(arena: &Arena, index: u32, rng: &mut impl Rng) -> Location {
    let point = match arena.mob_spawns.as_slice() {
        [] => arena.center,
        [only] => *only,
        points => {
            let base = points[index as usize % points.len()];
            let jitter_x = rng.gen_range(-1..=1) as f64 * SPAWN_JITTER;
            let jitter_y = rng.gen_range(-1..=1) as f64 * SPAWN_JITTER;
            base.offset(jitter_x, jitter_y, 0.0)
        }
    };
    Location::new(arena.world.clone(), point)
}

/// Split a composition into spawn groups: three regular mobs per group,
/// bosses always alone.
pub fn plan_progressive(composition: &[ScaledMob]) -> Vec<SpawnGroup> {
    let mut groups = Vec::new();
    let mut index = 0;
    for mob in composition {
        let size = if mob.is_boss { 1 } else { SPAWN_GROUP_SIZE };
        let mut remaining = mob.amount;
        while remaining > 0 {
            let amount = remaining.min(size);
            groups.push(SpawnGroup {
                mob: ScaledMob {
                    amount,
                    ..mob.clone()
                },
                start_index: index,
            });
            index += amount;
            remaining -= amount;
        }
    }
    groups
}

/// Places agents for a session. Borrows the orchestrator's world, RNG and
/// event buffer for the duration of one populate call.
pub struct SpawnCoordinator<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut ChaCha8Rng,
    pub events: &'a mut Vec<RaidEvent>,
}

impl SpawnCoordinator<'_> {
    /// Spawn a whole composition now. Returns the number of units created.
    pub fn populate_wave(
        &mut self,
        host: &impl WorldHost,
        session: &mut RaidSession,
        composition: &[ScaledMob],
    ) -> u32 {
        let mut index = 0;
        let mut spawned = 0;
        for mob in composition {
            for _ in 0..mob.amount {
                if self.spawn_unit(host, session, mob, index) {
                    spawned += 1;
                }
                index += 1;
            }
        }
        self.report(session, spawned);
        spawned
    }

    /// Spawn one progressive group. Returns the number of units created.
    pub fn spawn_group(
        &mut self,
        host: &impl WorldHost,
        session: &mut RaidSession,
        group: &SpawnGroup,
    ) -> u32 {
        let mut spawned = 0;
        for offset in 0..group.mob.amount {
            if self.spawn_unit(host, session, &group.mob, group.start_index + offset) {
                spawned += 1;
            }
        }
        self.report(session, spawned);
        spawned
    }

    fn spawn_unit(
        &mut self,
        host: &impl WorldHost,
        session: &mut RaidSession,
        mob: &ScaledMob,
        index: u32,
    ) -> bool {
        let arena = session.arena();
        if !host.is_world_loaded(&arena.world) {
            debug!(
                "Skipping {} spawn for {}: world {} not loaded",
                mob.mob_type,
                session.id(),
                arena.world
            );
            return false;
        }

        let location = resolve_spawn_position(arena, index, self.rng);
        let entity = world_setup::spawn_agent(self.world, mob, &location, session.id());
        session.increment_alive_mobs();

        if mob.is_boss {
            self.events.push(RaidEvent::BossSpawned {
                session: session.id(),
                agent: world_setup::agent_id(entity),
                mob_type: mob.mob_type.clone(),
                title: boss_title(&mob.mob_type).to_string(),
            });
        }
        true
    }

    fn report(&mut self, session: &RaidSession, count: u32) {
        self.events.push(RaidEvent::MobsSpawned {
            session: session.id(),
            wave: session.current_wave(),
            count,
        });
    }
}
