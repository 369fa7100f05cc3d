//! ECS systems that operate on the agent world each host tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod agent_ai;
pub mod cleanup;
pub mod movement;
pub mod snapshot;
