//! Raid engine.
//!
//! Owns the hecs ECS world of combat agents, leases arenas to raid sessions,
//! drives waves on the shared tick clock and produces RaidSnapshots for the
//! host.

pub mod arena;
pub mod catalog;
pub mod config;
pub mod error;
pub mod host;
pub mod orchestrator;
pub mod scheduler;
pub mod session;
pub mod spawner;
pub mod stats;
pub mod systems;
pub mod waves;
pub mod world_setup;

pub use raid_core as core;
pub use orchestrator::RaidOrchestrator;
