//! Target selection.
//!
//! Agents hold player identities only. The current target is re-validated
//! against fresh candidate data every tick.

use raid_core::constants::LEASH_RANGE;
use raid_core::types::{PlayerId, Position};

/// A player the agent could see this tick, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub id: PlayerId,
    pub position: Position,
    pub online: bool,
    pub alive: bool,
    pub spectator: bool,
}

impl Candidate {
    fn is_eligible(&self) -> bool {
        self.online && self.alive && !self.spectator
    }
}

/// Pick the target for this tick.
///
/// A still-valid current target inside the leash is kept. Otherwise the
/// strictly nearest eligible candidate inside the leash wins, ties going to
/// the first one encountered.
pub fn acquire_target<'a>(
    position: &Position,
    current: Option<PlayerId>,
    candidates: &'a [Candidate],
) -> Option<&'a Candidate> {
    if let Some(id) = current {
        let kept = candidates.iter().find(|c| {
            c.id == id && c.online && c.alive && position.range_to(&c.position) <= LEASH_RANGE
        });
        if kept.is_some() {
            return kept;
        }
    }

    let mut nearest = None;
    let mut best = LEASH_RANGE;
    for candidate in candidates.iter().filter(|c| c.is_eligible()) {
        let distance = position.range_to(&candidate.position);
        if distance < best {
            best = distance;
            nearest = Some(candidate);
        }
    }
    nearest
}
