//! Mob-type capability table.
//!
//! Consolidates per-type parameters for the agent FSM. Unknown type tags
//! fall back to the zombie profile.

use raid_core::constants::{BOSS_MOVE_SPEED, MOB_MOVE_SPEED};

/// Capabilities of a mob type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobProfile {
    /// Name shown above the agent.
    pub display_name: &'static str,
    /// Skin identifier handed to the host for rendering.
    pub skin: &'static str,
    /// Ticks between attacks.
    pub attack_speed_ticks: u32,
    /// Whether the type circles its target in melee range.
    pub strafe: bool,
    pub can_crit: bool,
    /// Armor tier 0-3, used by the host to equip the entity.
    pub armor_tier: u8,
}

const ZOMBIE: MobProfile = MobProfile {
    display_name: "Zombie",
    skin: "zombie",
    attack_speed_ticks: 10,
    strafe: false,
    can_crit: true,
    armor_tier: 0,
};

/// Get the capability profile for a type tag.
pub fn get_profile(mob_type: &str) -> MobProfile {
    match mob_type {
        "zombie" => ZOMBIE,
        "skeleton" => MobProfile {
            display_name: "Skeleton",
            skin: "skeleton",
            attack_speed_ticks: 15,
            strafe: true,
            can_crit: true,
            armor_tier: 1,
        },
        "brute" => MobProfile {
            display_name: "Brute Zombie",
            skin: "zombie_brute",
            attack_speed_ticks: 8,
            strafe: false,
            can_crit: true,
            armor_tier: 2,
        },
        "spider" => MobProfile {
            display_name: "Spider Warrior",
            skin: "spider_warrior",
            attack_speed_ticks: 7,
            strafe: true,
            can_crit: true,
            armor_tier: 0,
        },
        "zombie_boss" => MobProfile {
            display_name: "ZOMBIE BOSS",
            skin: "zombie_boss",
            attack_speed_ticks: 8,
            strafe: true,
            can_crit: true,
            armor_tier: 3,
        },
        "skeleton_boss" => MobProfile {
            display_name: "SKELETON BOSS",
            skin: "skeleton_boss",
            attack_speed_ticks: 10,
            strafe: true,
            can_crit: true,
            armor_tier: 3,
        },
        _ => ZOMBIE,
    }
}

/// Announcement title used when a boss of this type spawns.
pub fn boss_title(mob_type: &str) -> &'static str {
    match mob_type {
        "zombie_boss" => "GIANT ZOMBIE",
        "skeleton_boss" => "SKELETON KING",
        "brute" => "SAVAGE BRUTE",
        _ => "UNKNOWN BOSS",
    }
}

/// Base movement speed before the wave's speed multiplier.
pub fn base_move_speed(is_boss: bool) -> f64 {
    if is_boss {
        BOSS_MOVE_SPEED
    } else {
        MOB_MOVE_SPEED
    }
}
