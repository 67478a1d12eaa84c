//! Weapon logic for MARKSMAN.
//!
//! Implements the ammunition magazine, semi-automatic trigger edge
//! detection and the cosmetic recoil pose. Pure data, no ECS dependency.

pub mod controller;
pub mod magazine;

pub use controller::{RecoilPose, TriggerSample, WeaponController};
pub use magazine::AmmoMagazine;
pub use marksman_core as core;
