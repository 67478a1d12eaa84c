//! Simulation constants and tuning parameters.

use glam::Vec3;

use crate::types::SpawnBounds;

/// Nominal frame rate of the host scheduler (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame at the nominal frame rate.
pub const DT: f32 = 1.0 / FRAME_RATE as f32;

// --- Player ---

/// Where a fallen player is teleported back to.
pub const PLAYER_SPAWN_POINT: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Players below this height are considered out of bounds.
pub const FALL_THRESHOLD_Y: f32 = -5.0;

// --- Weapon ---

/// Rounds in a full magazine (stereotypical pistol clip).
pub const MAGAZINE_CAPACITY: u32 = 9;

/// Weapon model offset from the camera when idle.
pub const WEAPON_IDLE_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 2.0);

/// Weapon model offset while the trigger is held (distance preset).
pub const WEAPON_RECOIL_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 1.8);

/// Weapon model offset while the trigger is held (arcade preset).
pub const WEAPON_RECOIL_OFFSET_ARCADE: Vec3 = Vec3::new(0.0, -1.0, 1.5);

/// Projectile spawn point relative to the weapon origin. Keeps the round
/// clear of the weapon model.
pub const MUZZLE_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.0);

// --- Projectiles ---

/// Projectile speed under the distance preset (units/s).
pub const PROJECTILE_SPEED: f32 = 100_000.0;

/// Projectile time-to-live under the distance preset (seconds).
pub const PROJECTILE_TTL_SECS: f32 = 5.0;

/// Projectile speed under the arcade preset (units/s).
pub const PROJECTILE_SPEED_ARCADE: f32 = 25_000.0;

/// Projectile time-to-live under the arcade preset (seconds).
pub const PROJECTILE_TTL_SECS_ARCADE: f32 = 3.0;

/// Projectile box size.
pub const PROJECTILE_SCALE: Vec3 = Vec3::new(0.1, 0.1, 0.2);

// --- Targets ---

/// Number of targets on the range.
pub const TARGET_COUNT: usize = 5;

/// Target box size.
pub const TARGET_SCALE: Vec3 = Vec3::new(2.0, 1.0, 2.0);

/// Volume that targets spawn and respawn in.
pub const TARGET_BOUNDS: SpawnBounds = SpawnBounds {
    x: (-50.0, 50.0),
    y: (0.0, 5.0),
    z: (25.0, 100.0),
};

// --- Scoring ---

/// Points per hit under flat-rate scoring.
pub const FLAT_RATE_POINTS: u32 = 10;

// --- Level ---

/// Floor box center.
pub const FLOOR_POSITION: Vec3 = Vec3::new(0.0, -0.5, 0.0);

/// Floor box size.
pub const FLOOR_SCALE: Vec3 = Vec3::new(25.0, 1.0, 25.0);

/// Floor box size under the arcade preset.
pub const FLOOR_SCALE_ARCADE: Vec3 = Vec3::new(50.0, 1.0, 50.0);

// --- Defaults ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
