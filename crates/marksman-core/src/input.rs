//! Per-tick input sampled by the host from the device layer and the
//! movement controller.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::PLAYER_SPAWN_POINT;

/// World pose of the weapon model at sampling time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponPose {
    pub position: Vec3,
    /// Forward axis of the weapon. Normalized at spawn.
    pub forward: Vec3,
}

impl Default for WeaponPose {
    fn default() -> Self {
        Self {
            position: PLAYER_SPAWN_POINT,
            forward: Vec3::Z,
        }
    }
}

/// One frame of raw input. Digital signals are levels; the engine derives
/// edges itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSample {
    pub quit: bool,
    pub reload: bool,
    pub fire: bool,
    pub player_position: Vec3,
    pub weapon: WeaponPose,
}

impl Default for InputSample {
    fn default() -> Self {
        Self {
            quit: false,
            reload: false,
            fire: false,
            player_position: PLAYER_SPAWN_POINT,
            weapon: WeaponPose::default(),
        }
    }
}

impl InputSample {
    /// No buttons held, player standing at `player_position`.
    pub fn idle(player_position: Vec3) -> Self {
        Self {
            player_position,
            ..Default::default()
        }
    }

    pub fn firing(mut self) -> Self {
        self.fire = true;
        self
    }

    pub fn reloading(mut self) -> Self {
        self.reload = true;
        self
    }

    pub fn quitting(mut self) -> Self {
        self.quit = true;
        self
    }

    pub fn aimed(mut self, position: Vec3, forward: Vec3) -> Self {
        self.weapon = WeaponPose { position, forward };
        self
    }
}
