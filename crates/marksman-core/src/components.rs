//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World placement of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Visual scale; box colliders are derived from it at spawn.
    pub scale: Vec3,
}

/// Box collider centered on the entity's `Transform::position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxCollider {
    pub half_extents: Vec3,
}

/// A shootable target. Targets are relocated on hit, never destroyed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    /// Stable identity assigned at startup (0..target_count).
    pub id: u32,
    pub active: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit direction of travel, fixed at spawn.
    pub direction: Vec3,
    /// Travel speed in units per second.
    pub speed: f32,
    /// Tick on which the projectile was spawned. It is not advanced on that tick.
    pub spawn_tick: u64,
    /// Simulation time at spawn (seconds).
    pub spawn_time_secs: f64,
    /// Time in flight so far (seconds).
    pub age_secs: f32,
    /// Maximum time in flight before silent destruction (seconds).
    pub ttl_secs: f32,
    /// Sequence number of the shot (1-based), for event correlation.
    pub shot: u32,
}

/// Marks the static level floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Floor;

/// Marks the mirror of the externally controlled player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;
