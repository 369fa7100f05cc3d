//! Health bar projection. Derived every tick, never stored.

use raid_core::constants::*;
use raid_core::enums::HealthBand;

use crate::profiles::MobProfile;

/// Filled segments (0..=10) and color band for a health fraction.
pub fn health_bar(health: f64, max_health: f64) -> (u8, HealthBand) {
    let fraction = if max_health > 0.0 {
        (health / max_health).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((fraction * 100.0) as u32 / 10).min(HEALTH_BAR_SEGMENTS as u32) as u8;
    let band = if fraction < HEALTH_CRITICAL_FRACTION {
        HealthBand::Critical
    } else if fraction < HEALTH_WARNING_FRACTION {
        HealthBand::Warning
    } else {
        HealthBand::Healthy
    };
    (filled, band)
}

/// Name tag: display name followed by the segmented bar.
pub fn name_tag(profile: &MobProfile, health: f64, max_health: f64) -> String {
    let (filled, _) = health_bar(health, max_health);
    let empty = HEALTH_BAR_SEGMENTS - filled;
    format!(
        "{} {}{}",
        profile.display_name,
        "█".repeat(filled as usize),
        "░".repeat(empty as usize)
    )
}
