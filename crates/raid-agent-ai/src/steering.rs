//! Horizontal steering helpers. Returned velocities carry no vertical
//! component; gravity and jumps are handled by the movement system.

use glam::DVec2;
use raid_core::components::Facing;
use raid_core::types::{Position, Velocity};

fn horizontal(from: &Position, to: &Position) -> DVec2 {
    DVec2::new(to.x - from.x, to.y - from.y)
}

/// Yaw and pitch that look from `from` at `to`.
pub fn face_toward(from: &Position, to: &Position) -> Facing {
    let flat = horizontal(from, to).length();
    Facing {
        yaw: from.bearing_to(to),
        pitch: -(to.z - from.z).atan2(flat),
    }
}

/// Straight toward the target at `speed`, or `None` when already on top of it.
pub fn move_toward(from: &Position, to: &Position, speed: f64) -> Option<Velocity> {
    let dir = horizontal(from, to).try_normalize()?;
    Some(Velocity::new(dir.x * speed, dir.y * speed, 0.0))
}

/// Straight away from the target at `speed`.
pub fn move_away(from: &Position, threat: &Position, speed: f64) -> Option<Velocity> {
    let dir = horizontal(threat, from).try_normalize()?;
    Some(Velocity::new(dir.x * speed, dir.y * speed, 0.0))
}

/// Lateral movement perpendicular to `yaw`. `direction` is -1 (left) or +1 (right).
pub fn strafe(yaw: f64, direction: i8, speed: f64) -> Option<Velocity> {
    if direction == 0 {
        return None;
    }
    Some(along_heading(
        yaw + f64::from(direction) * std::f64::consts::FRAC_PI_2,
        speed,
    ))
}

/// Velocity along a heading (0 = North, clockwise).
pub fn along_heading(heading: f64, speed: f64) -> Velocity {
    Velocity::new(heading.sin() * speed, heading.cos() * speed, 0.0)
}
