//! Core types and definitions for the raid simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! identifiers, components, commands, definitions, snapshots, events,
//! and constants. It has no dependency on the ECS or any runtime host.

pub mod commands;
pub mod components;
pub mod constants;
pub mod definitions;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
