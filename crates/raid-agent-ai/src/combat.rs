//! Attack resolution and combo bookkeeping.

use glam::DVec3;
use rand::Rng;
use raid_core::components::AgentBrain;
use raid_core::constants::*;
use raid_core::types::{Position, Velocity};

use crate::profiles::MobProfile;

/// Outcome of one attack roll, before the host applies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackRoll {
    pub damage: f64,
    pub critical: bool,
    /// Impulse to apply to the victim.
    pub knockback: Velocity,
}

/// Roll damage for an attack from `attacker` on a victim at `victim`.
pub fn resolve_attack(
    profile: &MobProfile,
    base_damage: f64,
    combo_hits: u32,
    attacker: &Position,
    victim: &Position,
    rng: &mut impl Rng,
) -> AttackRoll {
    let mut damage = base_damage;
    let mut critical = false;
    if profile.can_crit && rng.gen_bool(CRIT_CHANCE) {
        damage *= CRIT_MULTIPLIER;
        critical = true;
    }
    if combo_hits > COMBO_THRESHOLD {
        damage *= COMBO_MULTIPLIER;
    }

    AttackRoll {
        damage,
        critical,
        knockback: knockback(attacker, victim),
    }
}

/// Knockback along the attacker-to-victim direction with a fixed lift.
pub fn knockback(attacker: &Position, victim: &Position) -> Velocity {
    let dir = (DVec3::from(*victim) - DVec3::from(*attacker)).normalize_or_zero();
    let mut impulse = dir * KNOCKBACK_HORIZONTAL;
    impulse.z = KNOCKBACK_VERTICAL;
    impulse.into()
}

/// Reset the combo once the window since the last hit has passed.
pub fn expire_combo(brain: &mut AgentBrain, now_tick: u64) {
    if let Some(last) = brain.last_hit_tick {
        if now_tick.saturating_sub(last) > COMBO_WINDOW_TICKS {
            brain.combo_hits = 0;
        }
    }
}

/// Record a hit that the host actually applied.
pub fn register_hit(brain: &mut AgentBrain, now_tick: u64) {
    brain.combo_hits += 1;
    brain.last_hit_tick = Some(now_tick);
}
