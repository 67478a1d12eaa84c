//! Frame snapshot: the complete visible state handed to the host each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{GameEvent, HudUpdate};
use crate::types::SimTime;

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ammo: AmmoView,
    pub score: ScoreView,
    pub hud: HudView,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
    pub hud_updates: Vec<HudUpdate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoView {
    pub count: u32,
    pub capacity: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub points: u32,
    pub hits: u32,
    pub shots_fired: u32,
}

/// Current HUD text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    pub ammo_text: String,
    pub points_text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
}

/// Cosmetic weapon state for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponView {
    pub recoil_active: bool,
    /// Weapon model offset relative to the camera.
    pub offset: Vec3,
}

/// A target on the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub position: Vec3,
    pub scale: Vec3,
    pub active: bool,
}

/// A round in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub shot: u32,
    pub position: Vec3,
    pub direction: Vec3,
    pub age_secs: f32,
    pub ttl_secs: f32,
}
