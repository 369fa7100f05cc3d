//! Combat agent AI for the raid simulator.
//!
//! Implements the per-agent behavior state machine, target selection,
//! attack resolution and the mob-type capability table.

pub mod combat;
pub mod display;
pub mod fsm;
pub mod profiles;
pub mod steering;
pub mod targeting;

pub use raid_core as core;

#[cfg(test)]
mod tests;
