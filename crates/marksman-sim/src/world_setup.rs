//! Entity spawn factories for setting up the range.
//!
//! Creates the level floor, the player mirror and the initial targets with
//! appropriate component bundles.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use marksman_core::components::*;
use marksman_core::constants::*;

use crate::targets::TargetRegistry;

/// Set up the range: floor, player, and `target_count` targets.
/// Returns the player entity.
pub fn setup_range(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    targets: &mut TargetRegistry,
    target_count: usize,
    floor_scale: Vec3,
) -> hecs::Entity {
    spawn_floor(world, floor_scale);
    let player = spawn_player(world);
    targets.spawn_initial(world, rng, target_count);
    player
}

/// Spawn the static floor. It carries a collider so the renderer and
/// physics collaborators see it, but projectile queries ignore it.
pub fn spawn_floor(world: &mut World, scale: Vec3) -> hecs::Entity {
    world.spawn((
        Floor,
        Transform {
            position: FLOOR_POSITION,
            scale,
        },
        BoxCollider {
            half_extents: scale * 0.5,
        },
    ))
}

/// Spawn the mirror of the externally controlled player at the spawn point.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Transform {
            position: PLAYER_SPAWN_POINT,
            scale: Vec3::ONE,
        },
    ))
}
