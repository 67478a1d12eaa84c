//! Trigger handling and cosmetic recoil.
//!
//! The raw `fire` level is sampled once per tick and handed to two
//! independent consumers: the gameplay edge detector (one shot per press)
//! and the recoil pose (weapon pulled back while held).

use glam::Vec3;

use marksman_core::constants::{WEAPON_IDLE_OFFSET, WEAPON_RECOIL_OFFSET};

/// Weapon model placement relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoilPose {
    pub active: bool,
    pub offset: Vec3,
}

/// Result of sampling the trigger for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerSample {
    /// `fire` went from released to held this tick.
    pub fire_edge: bool,
    pub recoil: RecoilPose,
}

/// Map "fire held" to the near/far weapon offset. No gameplay effect.
pub fn recoil_state(fire_held: bool, recoil_offset: Vec3) -> RecoilPose {
    RecoilPose {
        active: fire_held,
        offset: if fire_held {
            recoil_offset
        } else {
            WEAPON_IDLE_OFFSET
        },
    }
}

/// Semi-automatic trigger: remembers whether `fire` was held last tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponController {
    was_held: bool,
    recoil_offset: Vec3,
    pose: RecoilPose,
}

impl WeaponController {
    pub fn new(recoil_offset: Vec3) -> Self {
        Self {
            was_held: false,
            recoil_offset,
            pose: recoil_state(false, recoil_offset),
        }
    }

    /// Feed this tick's `fire` level.
    pub fn sample(&mut self, fire_held: bool) -> TriggerSample {
        let fire_edge = fire_held && !self.was_held;
        self.was_held = fire_held;
        self.pose = recoil_state(fire_held, self.recoil_offset);
        TriggerSample {
            fire_edge,
            recoil: self.pose,
        }
    }

    /// Pose from the most recent sample.
    pub fn pose(&self) -> RecoilPose {
        self.pose
    }
}

impl Default for WeaponController {
    fn default() -> Self {
        Self::new(WEAPON_RECOIL_OFFSET)
    }
}
