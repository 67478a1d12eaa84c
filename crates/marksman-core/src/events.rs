//! Events emitted by the simulation for the HUD and rendering collaborators.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileOutcome;

/// Gameplay events produced during a single tick, in occurrence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A round left the weapon.
    ShotFired { shot: u32, origin: Vec3, direction: Vec3 },
    /// The magazine was refilled.
    Reloaded { count: u32 },
    /// A round struck a target.
    TargetHit {
        shot: u32,
        target_id: u32,
        points_awarded: u32,
        distance: f32,
    },
    /// A target moved; the renderer should move its visual.
    TargetRelocated { target_id: u32, position: Vec3 },
    /// A round ended its flight.
    ProjectileDestroyed { shot: u32, outcome: ProjectileOutcome },
    /// The player fell out of the arena and was teleported back.
    PlayerRecovered { from: Vec3, to: Vec3 },
    /// `quit` was asserted; the host should exit.
    Quit,
}

/// A HUD text line that changed (or was re-published) this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HudUpdate {
    Ammo { count: u32 },
    Points { points: u32 },
}

impl HudUpdate {
    /// The exact text the HUD collaborator displays.
    pub fn text(&self) -> String {
        match self {
            HudUpdate::Ammo { count } => ammo_text(*count),
            HudUpdate::Points { points } => points_text(*points),
        }
    }
}

pub fn ammo_text(count: u32) -> String {
    format!("Ammo:{count}")
}

pub fn points_text(points: u32) -> String {
    format!("Points:{points}")
}
