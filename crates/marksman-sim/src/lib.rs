//! Simulation engine for MARKSMAN.
//!
//! Owns the hecs ECS world, runs the gameplay systems once per frame,
//! and produces FrameSnapshots for the host.

pub mod capabilities;
pub mod collision;
pub mod engine;
pub mod scoring;
pub mod systems;
pub mod targets;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use marksman_core as core;

#[cfg(test)]
mod tests;
